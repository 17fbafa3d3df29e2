//! Body table for the two orbiting planets.
//! Periods and mean distances only; orbits are treated as circles around the Sun.

use crate::surface::ColorKey;
use crate::types::{EARTH_TO_SUN_KM, EARTH_YEAR_DAYS, MARS_TO_SUN_KM, MARS_YEAR_DAYS};

/// Identifier for the bodies drawn on the diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
    Earth,
    Mars,
}

impl BodyId {
    /// Both orbiting bodies, inner first
    pub const ALL: &'static [BodyId] = &[BodyId::Earth, BodyId::Mars];

    /// Static data for this body
    pub fn body(&self) -> &'static Body {
        match self {
            BodyId::Earth => &EARTH,
            BodyId::Mars => &MARS,
        }
    }
}

/// Static data for an orbiting body.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub orbital_period_days: f64,
    pub distance_from_sun_km: f64,
    pub color: ColorKey,
}

impl Body {
    /// How many of this body's years fit in one of `reference`'s years.
    ///
    /// `MARS.period_ratio(&EARTH)` is 687 / 365.25.
    pub fn period_ratio(&self, reference: &Body) -> f64 {
        self.orbital_period_days / reference.orbital_period_days
    }

    /// Orbit radius relative to `outer`'s orbit (1.0 for `outer` itself).
    pub fn distance_ratio(&self, outer: &Body) -> f64 {
        self.distance_from_sun_km / outer.distance_from_sun_km
    }
}

pub const EARTH: Body = Body {
    id: BodyId::Earth,
    orbital_period_days: EARTH_YEAR_DAYS,
    distance_from_sun_km: EARTH_TO_SUN_KM,
    color: ColorKey::Earth,
};

pub const MARS: Body = Body {
    id: BodyId::Mars,
    orbital_period_days: MARS_YEAR_DAYS,
    distance_from_sun_km: MARS_TO_SUN_KM,
    color: ColorKey::Mars,
};
