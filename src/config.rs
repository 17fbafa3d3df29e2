//! Animation configuration.
//!
//! The frame delay is derived from a fixed total time budget, so one full run
//! takes the same wall-clock time whatever the sampling resolution.

use bevy::prelude::*;
use std::time::Duration;

/// Samples per Earth revolution.
pub const DEFAULT_SAMPLES_PER_ORBIT: u32 = 60;

/// Number of Earth revolutions in one run.
pub const DEFAULT_ORBIT_COUNT: u32 = 15;

/// Mars orbit radius in pixels.
pub const DEFAULT_SCALE_RADIUS: f64 = 512.0;

/// Wall-clock time for one full run.
pub const DEFAULT_TOTAL_BUDGET: Duration = Duration::from_secs(50);

/// Largest scale radius whose canvas side `2 * r + 2` still fits a `u32`.
pub const MAX_SCALE_RADIUS: f64 = (u32::MAX as f64 - 2.0) / 2.0;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("samples per orbit must be at least 1")]
    ZeroSamples,

    #[error("orbit count must be at least 1")]
    ZeroOrbits,

    #[error("invalid scale radius: {0} (must be finite and positive)")]
    InvalidScaleRadius(f64),

    #[error("scale radius {0} is too large for a canvas")]
    CanvasTooLarge(f64),

    #[error("{samples_per_orbit} samples x {orbit_count} orbits overflows the tick counter")]
    TooManyTicks { samples_per_orbit: u32, orbit_count: u32 },
}

/// Resolution, size, trail mode and pacing for one animation run.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct AnimationConfig {
    samples_per_orbit: u32,
    orbit_count: u32,
    scale_radius: f64,
    erase_trails: bool,
    total_budget: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            samples_per_orbit: DEFAULT_SAMPLES_PER_ORBIT,
            orbit_count: DEFAULT_ORBIT_COUNT,
            scale_radius: DEFAULT_SCALE_RADIUS,
            erase_trails: true,
            total_budget: DEFAULT_TOTAL_BUDGET,
        }
    }
}

impl AnimationConfig {
    pub fn new(
        samples_per_orbit: u32,
        orbit_count: u32,
        scale_radius: f64,
        erase_trails: bool,
        total_budget: Duration,
    ) -> Result<Self, ConfigError> {
        if samples_per_orbit == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if orbit_count == 0 {
            return Err(ConfigError::ZeroOrbits);
        }
        if samples_per_orbit.checked_mul(orbit_count).is_none() {
            return Err(ConfigError::TooManyTicks {
                samples_per_orbit,
                orbit_count,
            });
        }
        if !scale_radius.is_finite() || scale_radius <= 0.0 {
            return Err(ConfigError::InvalidScaleRadius(scale_radius));
        }
        if scale_radius > MAX_SCALE_RADIUS {
            return Err(ConfigError::CanvasTooLarge(scale_radius));
        }
        Ok(Self {
            samples_per_orbit,
            orbit_count,
            scale_radius,
            erase_trails,
            total_budget,
        })
    }

    /// Same configuration with a different sampling resolution.
    pub fn with_resolution(self, samples_per_orbit: u32, orbit_count: u32) -> Result<Self, ConfigError> {
        Self::new(
            samples_per_orbit,
            orbit_count,
            self.scale_radius,
            self.erase_trails,
            self.total_budget,
        )
    }

    /// Same configuration with a different Mars orbit radius.
    pub fn with_scale_radius(self, scale_radius: f64) -> Result<Self, ConfigError> {
        Self::new(
            self.samples_per_orbit,
            self.orbit_count,
            scale_radius,
            self.erase_trails,
            self.total_budget,
        )
    }

    pub fn with_erase_trails(mut self, erase_trails: bool) -> Self {
        self.erase_trails = erase_trails;
        self
    }

    pub fn with_total_budget(mut self, total_budget: Duration) -> Self {
        self.total_budget = total_budget;
        self
    }

    pub fn samples_per_orbit(&self) -> u32 {
        self.samples_per_orbit
    }

    pub fn orbit_count(&self) -> u32 {
        self.orbit_count
    }

    pub fn scale_radius(&self) -> f64 {
        self.scale_radius
    }

    pub fn erase_trails(&self) -> bool {
        self.erase_trails
    }

    pub fn total_budget(&self) -> Duration {
        self.total_budget
    }

    /// Number of ticks in one run.
    pub fn total_ticks(&self) -> u32 {
        self.samples_per_orbit * self.orbit_count
    }

    /// Delay between ticks, in microseconds.
    pub fn frame_delay_micros(&self) -> f64 {
        self.total_budget.as_micros() as f64 / self.total_ticks() as f64
    }

    /// Delay between ticks.
    pub fn frame_delay(&self) -> Duration {
        self.total_budget / self.total_ticks()
    }

    /// Side length of the square canvas in pixels: `2 * scale_radius + 2`.
    pub fn canvas_side(&self) -> u32 {
        (2.0 * self.scale_radius + 2.0) as u32
    }
}
