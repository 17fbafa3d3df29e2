//! Incremental draw/erase animation loop.
//!
//! One tick draws the planets at a single step index. In erase mode the
//! previous tick's markers are painted over in the background color first, so
//! only the current frame's marks stay on screen; otherwise every frame is
//! left behind as a trace.

use bevy::log::debug;
use std::time::Duration;

use crate::config::AnimationConfig;
use crate::orbit::{BodyId, OrbitSampler};
use crate::surface::{ColorKey, DrawSurface};
use crate::types::{FULL_CIRCLE, Sample};

/// Blocks between ticks.
pub trait Pacer {
    fn pace(&mut self, delay: Duration);
}

/// Pacer that sleeps the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pace(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Lifecycle of one animation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimatorState {
    Idle,
    Running {
        next_step: u32,
        previous: Option<Sample>,
    },
    Done,
}

/// Drives the orbit sampler across one run and draws each tick.
#[derive(Clone, Debug)]
pub struct Animator {
    config: AnimationConfig,
    sampler: OrbitSampler,
    state: AnimatorState,
}

impl Animator {
    pub fn new(config: AnimationConfig) -> Self {
        let sampler = OrbitSampler::new(&config);
        Self {
            config,
            sampler,
            state: AnimatorState::Idle,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn sampler(&self) -> &OrbitSampler {
        &self.sampler
    }

    pub fn state(&self) -> &AnimatorState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimatorState::Running { .. })
    }

    pub fn is_done(&self) -> bool {
        self.state == AnimatorState::Done
    }

    /// Ticks left before the current run is done.
    pub fn remaining_ticks(&self) -> u32 {
        let total = self.config.total_ticks();
        match self.state {
            AnimatorState::Idle => total,
            AnimatorState::Running { next_step, .. } => total - next_step,
            AnimatorState::Done => 0,
        }
    }

    /// Back to `Idle`, forgetting any previous sample.
    pub fn reset(&mut self) {
        self.state = AnimatorState::Idle;
    }

    /// Begin a fresh run at step 0, abandoning any run in progress.
    pub fn start(&mut self) {
        self.state = AnimatorState::Running {
            next_step: 0,
            previous: None,
        };
    }

    /// Run one tick without pacing.
    ///
    /// Starts a run when idle. Returns the sample that was drawn, or `None`
    /// once the run is done.
    pub fn tick<S: DrawSurface>(&mut self, surface: &mut S) -> Option<Sample> {
        if self.state == AnimatorState::Idle {
            self.start();
        }
        let AnimatorState::Running { next_step, previous } = self.state else {
            return None;
        };

        let current = self.sampler.sample(next_step);

        if current.redraw_sun {
            draw_sun(surface, self.config.scale_radius() as i32);
        }

        if self.config.erase_trails() {
            if let Some(prev) = previous {
                erase_frame(surface, &prev);
            }
        }

        draw_frame(surface, &current);
        surface.flush();

        let step = next_step + 1;
        self.state = if step >= self.config.total_ticks() {
            AnimatorState::Done
        } else {
            AnimatorState::Running {
                next_step: step,
                previous: Some(current),
            }
        };

        Some(current)
    }

    /// Run a complete animation from step 0, blocking for the frame delay
    /// after every tick. Returns the number of ticks drawn.
    pub fn run<S: DrawSurface, P: Pacer>(&mut self, surface: &mut S, pacer: &mut P) -> u32 {
        let delay = self.config.frame_delay();
        debug!(
            "Animation run: {} ticks, {:?} per tick, erase trails: {}",
            self.config.total_ticks(),
            delay,
            self.config.erase_trails()
        );

        self.start();
        let mut ticks = 0;
        while self.tick(surface).is_some() {
            pacer.pace(delay);
            ticks += 1;
        }

        debug!("Animation run complete after {} ticks", ticks);
        ticks
    }
}

/// Outlined disc with a center dot, the shape shared by every body marker.
fn draw_marker<S: DrawSurface>(surface: &mut S, (x, y): (i32, i32)) {
    surface.draw_arc(x - 1, y - 2, 4, 4, 0, FULL_CIRCLE);
    surface.draw_arc(x - 1, y - 1, 2, 2, 0, FULL_CIRCLE);
    surface.draw_point(x, y);
}

fn draw_connector<S: DrawSurface>(surface: &mut S, sample: &Sample) {
    let (ex, ey) = sample.earth_pixel();
    let (mx, my) = sample.mars_pixel();
    surface.draw_line(ex, ey, mx, my);
}

/// Sun marker centered on the canvas for a Mars orbit of radius `scale`.
fn draw_sun<S: DrawSurface>(surface: &mut S, scale: i32) {
    surface.set_color(ColorKey::Sun);
    surface.draw_arc(scale - 1, scale - 1, 4, 4, 0, FULL_CIRCLE);
    surface.draw_arc(scale, scale, 2, 2, 0, FULL_CIRCLE);
    surface.draw_point(scale + 1, scale + 1);
}

/// Paint the previous frame out, then put its connector back.
fn erase_frame<S: DrawSurface>(surface: &mut S, prev: &Sample) {
    surface.set_color(ColorKey::Background);
    for &id in BodyId::ALL {
        draw_marker(surface, prev.pixel(id));
    }
    draw_connector(surface, prev);

    surface.set_color(ColorKey::Line);
    draw_connector(surface, prev);
}

fn draw_frame<S: DrawSurface>(surface: &mut S, current: &Sample) {
    surface.set_color(ColorKey::Line);
    draw_connector(surface, current);

    for &id in BodyId::ALL {
        surface.set_color(id.body().color);
        draw_marker(surface, current.pixel(id));
    }
}
