//! Core constants and the per-tick sample type shared by the sampler and animator.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::orbit::BodyId;

/// System sets for ordering the diagram's per-frame work.
///
/// Display events are applied before ticks are drawn, so a terminate takes
/// effect before the next tick and an expose restarts from step 0.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiagramSystemSet {
    /// Windowing input mapped onto display events
    Input,
    /// Display events handed to the controller
    Dispatch,
    /// Animator ticks drawn into the canvas
    Tick,
    /// Canvas pixels copied into the on-screen texture
    Upload,
}

// Physical constants

/// Earth's orbital period in days
pub const EARTH_YEAR_DAYS: f64 = 365.25;

/// Mars's orbital period in days
pub const MARS_YEAR_DAYS: f64 = 687.0;

/// Mean Earth-Sun distance in kilometers
pub const EARTH_TO_SUN_KM: f64 = 149_598_023.0;

/// Mean Mars-Sun distance in kilometers
pub const MARS_TO_SUN_KM: f64 = 227_939_366.0;

/// Arc angles are expressed in 1/64 of a degree.
pub const ARC_UNITS_PER_DEGREE: i32 = 64;

/// Sweep of a full circle in arc units.
pub const FULL_CIRCLE: i32 = 360 * ARC_UNITS_PER_DEGREE;

/// One animation tick's worth of planet positions.
///
/// Positions are in screen space: origin top-left, Y increasing downward,
/// Sun at the canvas center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Discrete time index this sample was computed for
    pub step_index: u32,
    /// Earth position in screen units
    pub earth_pos: DVec2,
    /// Mars position in screen units
    pub mars_pos: DVec2,
    /// Earth's angle in radians (unwrapped)
    pub earth_theta: f64,
    /// Mars's angle in radians (unwrapped)
    pub mars_theta: f64,
    /// Set on every step that starts a new Earth revolution.
    pub redraw_sun: bool,
}

impl Sample {
    /// Earth position truncated to integer pixel coordinates.
    pub fn earth_pixel(&self) -> (i32, i32) {
        to_pixel(self.earth_pos)
    }

    /// Mars position truncated to integer pixel coordinates.
    pub fn mars_pixel(&self) -> (i32, i32) {
        to_pixel(self.mars_pos)
    }

    pub fn pixel(&self, body: BodyId) -> (i32, i32) {
        match body {
            BodyId::Earth => self.earth_pixel(),
            BodyId::Mars => self.mars_pixel(),
        }
    }
}

/// Truncate a screen position toward zero, matching how the markers are placed.
pub fn to_pixel(pos: DVec2) -> (i32, i32) {
    (pos.x as i32, pos.y as i32)
}
