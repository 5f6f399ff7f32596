//! Unit system for the simulation
//!
//! Converts the configured (time, length, mass) unit triple into a
//! gravitational constant expressed in simulation units:
//!
//! `G = G_SI * M_sun_SI * t^2 / l^3`
//!
//! where `t` is the chosen time unit in seconds and `l` the chosen length
//! unit in meters. Pure functions of the enum choices, safe to call every
//! tick.

use serde::Deserialize;

// SI constants
pub const NEWTON_G_SI: f64 = 6.6743e-11; // m^3 / kg / s^2
pub const AU_SI: f64 = 1.495978707e11; // m
pub const R_SUN_SI: f64 = 6.9634e8; // m
pub const M_SUN_SI: f64 = 1.98847e30; // kg
pub const YEAR_SI: f64 = 31_556_952.0; // s
pub const MONTH_SI: f64 = YEAR_SI / 12.0; // s
pub const DAY_SI: f64 = 86_400.0; // s

/// Time unit of the simulation
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitTime {
    #[serde(rename = "year")]
    Year,
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "day")]
    Day,
}

impl UnitTime {
    /// Length of this time unit in seconds
    pub fn seconds(self) -> f64 {
        match self {
            UnitTime::Year => YEAR_SI,
            UnitTime::Month => MONTH_SI,
            UnitTime::Day => DAY_SI,
        }
    }
}

/// Length unit of the simulation
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitLength {
    #[serde(rename = "au")]
    Au,
    #[serde(rename = "solar_radius")]
    SolarRadius,
}

impl UnitLength {
    /// Length of this unit in meters
    pub fn meters(self) -> f64 {
        match self {
            UnitLength::Au => AU_SI,
            UnitLength::SolarRadius => R_SUN_SI,
        }
    }
}

/// Mass unit of the simulation (fixed to one solar mass)
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitMass {
    #[serde(rename = "solar_mass")]
    SolarMass,
}

impl UnitMass {
    /// Mass of this unit in kilograms
    pub fn kilograms(self) -> f64 {
        match self {
            UnitMass::SolarMass => M_SUN_SI,
        }
    }
}

/// Gravitational constant in simulation units for the given unit choices
///
/// With (Year, Au) this evaluates to ~4π², the natural-unit value that makes
/// Kepler's third law read `T^2 = a^3` for a one-solar-mass star.
pub fn newton_g(time: UnitTime, length: UnitLength) -> f64 {
    let t = time.seconds();
    let l = length.meters();
    NEWTON_G_SI * M_SUN_SI * t * t / (l * l * l)
}
