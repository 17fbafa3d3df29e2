//! Property-based tests for the orbit sampler using proptest.
//!
//! These tests check the sampler's geometric invariants across resolutions,
//! canvas sizes and step indices.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::{EARTH, MARS, OrbitSampler};
use crate::config::AnimationConfig;
use crate::types::{EARTH_YEAR_DAYS, MARS_YEAR_DAYS};

fn sampler(samples: u32, orbits: u32, scale: f64) -> OrbitSampler {
    let config = AnimationConfig::default()
        .with_resolution(samples, orbits)
        .and_then(|c| c.with_scale_radius(scale))
        .expect("generated config should be valid");
    OrbitSampler::new(&config)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Earth's angle advances uniformly: 2π·i/samples_per_orbit.
    #[test]
    fn prop_earth_theta_uniform(
        samples in 1u32..500,
        orbits in 1u32..20,
        frac in 0.0f64..=1.0,
    ) {
        let s = sampler(samples, orbits, 512.0);
        let step = (frac * s.last_step() as f64) as u32;
        let expected = TAU * step as f64 / samples as f64;
        let theta = s.earth_theta(step);
        prop_assert!(
            (theta - expected).abs() <= 1e-9 * expected.max(1.0),
            "theta {} vs expected {}", theta, expected
        );
    }

    /// Mars's angle is Earth's scaled by the period ratio.
    #[test]
    fn prop_mars_theta_from_period_ratio(
        samples in 1u32..500,
        step in 0u32..500,
    ) {
        let s = sampler(samples, 1000, 512.0);
        let expected = s.earth_theta(step) * EARTH_YEAR_DAYS / MARS_YEAR_DAYS;
        let theta = s.mars_theta(step);
        prop_assert!(
            (theta - expected).abs() <= 1e-9 * expected.max(1.0),
            "mars theta {} vs expected {}", theta, expected
        );
        prop_assert!(theta <= s.earth_theta(step));
    }

    /// Both bodies stay on their circles around the Sun.
    #[test]
    fn prop_bodies_on_scaled_circles(
        scale in 1.0f64..4096.0,
        step in 0u32..=900,
    ) {
        let s = sampler(60, 15, scale);
        let sample = s.sample(step);
        let sun = s.sun_center();

        let expected_earth = scale * EARTH.distance_from_sun_km / MARS.distance_from_sun_km;
        let r_earth = (sample.earth_pos - sun).length();
        let r_mars = (sample.mars_pos - sun).length();

        prop_assert!((r_earth - expected_earth).abs() < 1e-9 * scale.max(1.0));
        prop_assert!((r_mars - scale).abs() < 1e-9 * scale.max(1.0));
    }

    /// One full Earth revolution returns Earth to the same position.
    #[test]
    fn prop_earth_periodic(
        samples in 1u32..360,
        step in 0u32..360,
    ) {
        let s = sampler(samples, 720, 512.0);
        let a = s.sample(step);
        let b = s.sample(step + samples);
        prop_assert!((a.earth_pos - b.earth_pos).length() < 1e-6);
    }
}
