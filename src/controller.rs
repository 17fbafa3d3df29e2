//! Display event controller.
//!
//! The windowing layer reports two kinds of events: the window needs drawing
//! (`Expose`) or the user asked to quit (`Terminate`). Each expose starts one
//! full animator run; terminate stops everything for good.

use bevy::prelude::*;

use crate::animator::{Animator, Pacer};
use crate::surface::DrawSurface;

/// Discrete signal from the windowing layer.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayEvent {
    /// Window contents are stale and must be redrawn.
    Expose,
    /// Key or pointer press: quit.
    Terminate,
}

/// What the caller should do in response to an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerAction {
    StartRun,
    Exit,
}

/// Owns the animator and turns display events into runs.
#[derive(Resource, Debug)]
pub struct Controller {
    animator: Animator,
    terminated: bool,
    completed_runs: u32,
}

impl Controller {
    pub fn new(animator: Animator) -> Self {
        Self {
            animator,
            terminated: false,
            completed_runs: 0,
        }
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Runs that reached the last tick.
    pub fn completed_runs(&self) -> u32 {
        self.completed_runs
    }

    /// React to one event. After a terminate every event maps to `Exit`.
    pub fn handle(&mut self, event: DisplayEvent) -> ControllerAction {
        if self.terminated {
            return ControllerAction::Exit;
        }
        match event {
            DisplayEvent::Expose => {
                if self.animator.is_running() {
                    info!("Expose during run, restarting animation");
                } else {
                    info!("Expose: starting animation run");
                }
                self.animator.start();
                ControllerAction::StartRun
            }
            DisplayEvent::Terminate => {
                info!("Terminate requested after {} completed runs", self.completed_runs);
                self.terminated = true;
                self.animator.reset();
                ControllerAction::Exit
            }
        }
    }

    /// Draw up to `max_ticks` ticks of the current run without pacing.
    ///
    /// Does nothing unless a run has been started by an expose. Returns the
    /// number of ticks drawn.
    pub fn advance<S: DrawSurface>(&mut self, surface: &mut S, max_ticks: u32) -> u32 {
        let mut drawn = 0;
        while drawn < max_ticks && self.animator.is_running() {
            self.animator.tick(surface);
            drawn += 1;
        }
        if drawn > 0 && self.animator.is_done() {
            self.complete_run();
        }
        drawn
    }

    /// Consume events until a terminate or the end of the source, doing one
    /// full blocking run per expose. Returns the number of runs performed.
    pub fn run_blocking<I, S, P>(&mut self, events: I, surface: &mut S, pacer: &mut P) -> u32
    where
        I: IntoIterator<Item = DisplayEvent>,
        S: DrawSurface,
        P: Pacer,
    {
        let mut runs = 0;
        for event in events {
            match self.handle(event) {
                ControllerAction::StartRun => {
                    self.animator.run(surface, pacer);
                    self.complete_run();
                    runs += 1;
                }
                ControllerAction::Exit => break,
            }
        }
        runs
    }

    fn complete_run(&mut self) {
        self.completed_runs += 1;
        info!("Animation run {} complete", self.completed_runs);
    }
}
