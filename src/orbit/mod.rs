//! Orbit sampler: planet positions as a pure function of a discrete step index.
//!
//! Earth is the reference body and turns through one full revolution every
//! `samples_per_orbit` steps. Mars turns slower by the ratio of the two
//! orbital periods. Both orbits are circles centered on the Sun.
//!
//! Coordinate frame:
//! - Screen space, origin top-left, Y increasing downward.
//! - Sun at `(scale_radius + 1, scale_radius + 1)`, the center of a square
//!   canvas of side `2 * scale_radius + 2`.
//! - Mars's orbit has radius `scale_radius`; Earth's keeps the real
//!   Earth/Mars distance ratio.

pub mod bodies;

#[cfg(test)]
mod proptest_orbit;

pub use bodies::{Body, BodyId, EARTH, MARS};

use bevy::math::DVec2;
use std::f64::consts::PI;

use crate::config::AnimationConfig;
use crate::types::Sample;

/// Samples Earth and Mars positions for a fixed animation configuration.
#[derive(Clone, Debug)]
pub struct OrbitSampler {
    samples_per_orbit: u32,
    last_step: u32,
    /// Earth's orbit radius in screen units
    earth_radius: f64,
    /// Mars's orbit radius in screen units (equals the scale radius)
    mars_radius: f64,
    /// Mars angle per unit of Earth angle
    mars_rate: f64,
    center: DVec2,
}

impl OrbitSampler {
    pub fn new(config: &AnimationConfig) -> Self {
        let scale = config.scale_radius();
        Self {
            samples_per_orbit: config.samples_per_orbit(),
            last_step: config.total_ticks(),
            earth_radius: EARTH.distance_ratio(&MARS) * scale,
            mars_radius: scale,
            mars_rate: 1.0 / MARS.period_ratio(&EARTH),
            center: DVec2::splat(scale + 1.0),
        }
    }

    /// Earth's orbit radius in screen units.
    pub fn earth_radius(&self) -> f64 {
        self.earth_radius
    }

    /// Mars's orbit radius in screen units.
    pub fn mars_radius(&self) -> f64 {
        self.mars_radius
    }

    /// Screen position of the Sun.
    pub fn sun_center(&self) -> DVec2 {
        self.center
    }

    /// Largest valid step index (inclusive).
    pub fn last_step(&self) -> u32 {
        self.last_step
    }

    /// Earth's angle at `step`, in radians. Not wrapped to `[0, 2π)`.
    pub fn earth_theta(&self, step: u32) -> f64 {
        2.0 * PI / self.samples_per_orbit as f64 * step as f64
    }

    /// Mars's angle at `step`, in radians. Not wrapped to `[0, 2π)`.
    pub fn mars_theta(&self, step: u32) -> f64 {
        self.earth_theta(step) * self.mars_rate
    }

    /// Whether the sun marker should be redrawn on this step.
    pub fn redraws_sun(&self, step: u32) -> bool {
        step % self.samples_per_orbit == 0
    }

    /// Compute the sample for `step`.
    ///
    /// `step` must lie in `[0, last_step()]`.
    pub fn sample(&self, step: u32) -> Sample {
        debug_assert!(
            step <= self.last_step,
            "step {step} outside sampler domain [0, {}]",
            self.last_step
        );

        let earth_theta = self.earth_theta(step);
        let mars_theta = self.mars_theta(step);

        Sample {
            step_index: step,
            earth_pos: self.to_screen(earth_theta, self.earth_radius),
            mars_pos: self.to_screen(mars_theta, self.mars_radius),
            earth_theta,
            mars_theta,
            redraw_sun: self.redraws_sun(step),
        }
    }

    /// Unit-circle position scaled by `radius`, Y flipped, moved to the Sun.
    fn to_screen(&self, theta: f64, radius: f64) -> DVec2 {
        let unit = DVec2::new(theta.cos(), theta.sin());
        DVec2::new(unit.x * radius, -unit.y * radius) + self.center
    }
}
