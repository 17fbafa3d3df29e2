//! Tick pacing for the windowed front-end.
//!
//! The render loop cannot block between ticks, so elapsed wall-clock time is
//! accumulated instead and converted into whole frame delays.

use bevy::prelude::*;
use bevy::time::Real;
use std::time::Duration;

use crate::controller::Controller;
use crate::surface::Canvas;
use crate::types::DiagramSystemSet;

/// Plugin providing tick pacing from Bevy's real-time clock.
pub struct AnimationClockPlugin;

impl Plugin for AnimationClockPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, advance_animation.in_set(DiagramSystemSet::Tick));
    }
}

/// Accumulates wall-clock time and reports how many ticks are due.
#[derive(Resource, Clone, Debug)]
pub struct FrameClock {
    delay: Duration,
    accumulated: Duration,
}

impl FrameClock {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            accumulated: Duration::ZERO,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Prepare for a new run: the first tick is due immediately.
    pub fn restart(&mut self) {
        self.accumulated = self.delay;
    }

    /// Add `delta` of elapsed time and take the ticks now due, at most `max_ticks`.
    ///
    /// Time beyond the cap is dropped rather than carried into the next run.
    pub fn advance(&mut self, delta: Duration, max_ticks: u32) -> u32 {
        if max_ticks == 0 {
            return 0;
        }
        if self.delay.is_zero() {
            self.accumulated = Duration::ZERO;
            return max_ticks;
        }

        self.accumulated += delta;
        let due = (self.accumulated.as_nanos() / self.delay.as_nanos()).min(max_ticks as u128) as u32;
        if due == max_ticks {
            self.accumulated = Duration::ZERO;
        } else {
            self.accumulated -= self.delay * due;
        }
        due
    }
}

/// Draw the ticks that came due since the last frame.
pub fn advance_animation(
    time: Res<Time<Real>>,
    mut clock: ResMut<FrameClock>,
    mut controller: ResMut<Controller>,
    mut canvas: ResMut<Canvas>,
) {
    if !controller.animator().is_running() {
        return;
    }
    let remaining = controller.animator().remaining_ticks();
    let due = clock.advance(time.delta(), remaining);
    if due > 0 {
        controller.advance(&mut *canvas, due);
    }
}
