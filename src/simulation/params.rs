//! Validated runtime parameters for the simulation
//!
//! `Parameters` is the runtime mirror of the YAML-facing config structs:
//! - unit triple and the derived gravitational constant,
//! - tick subdivision, timescale, and drift-correction switch,
//! - star state (mass, visual radius, position, focus side),
//! - planet state and orbit shape (perihelion, eccentricity, direction),
//! - deterministic seed for the randomizer
//!
//! `validate` enforces the configuration invariants (positive finite
//! perihelion and star mass, `0 <= e < 1`, at least one substep) so the
//! engine never observes a degenerate orbit.

use crate::configuration::config::{Focus, OrbitDirection};
use crate::simulation::body::NVec3;
use crate::simulation::error::KeplerError;
use crate::simulation::units::{self, UnitLength, UnitMass, UnitTime};

#[derive(Debug, Clone)]
pub struct Parameters {
    pub unit_time: UnitTime, // simulation time unit
    pub unit_length: UnitLength, // simulation length unit
    pub unit_mass: UnitMass, // simulation mass unit
    pub num_substeps: u32, // substeps per fixed tick
    pub time_scale: f64, // multiplier on simulated time
    pub reset_after_one_period: bool, // period-boundary drift correction
    pub seed: u64, // deterministic seed
    pub star_mass: f64, // star mass
    pub star_radius: f64, // star visual radius
    pub star_position: NVec3, // configured star position
    pub focus: Focus, // side of the orbit the star sits on
    pub planet_radius: f64, // planet visual radius
    pub perihelion_distance: f64, // closest approach distance
    pub eccentricity: f64, // orbit shape, in [0, 1)
    pub start_at_perihelion: bool, // false starts at aphelion
    pub direction: OrbitDirection, // travel direction along the orbit
}

impl Parameters {
    /// Check the configuration invariants; `Err` means nothing may be
    /// derived from these parameters
    pub fn validate(&self) -> Result<(), KeplerError> {
        if !(self.perihelion_distance > 0.0) || !self.perihelion_distance.is_finite() {
            return Err(KeplerError::InvalidPerihelion(self.perihelion_distance));
        }
        if !(self.eccentricity >= 0.0 && self.eccentricity < 1.0) {
            return Err(KeplerError::InvalidEccentricity(self.eccentricity));
        }
        if !(self.star_mass > 0.0) || !self.star_mass.is_finite() {
            return Err(KeplerError::InvalidStarMass(self.star_mass));
        }
        if self.num_substeps == 0 {
            return Err(KeplerError::InvalidSubstepCount);
        }
        if !self.time_scale.is_finite() {
            return Err(KeplerError::InvalidTimeScale(self.time_scale));
        }
        Ok(())
    }

    /// Gravitational constant in simulation units for the configured units
    pub fn newton_g(&self) -> f64 {
        units::newton_g(self.unit_time, self.unit_length)
    }
}

impl Default for Parameters {
    /// Pluto-like defaults: perihelion 21.48 AU, e = 0.016, one solar mass,
    /// (Year, AU) units
    fn default() -> Self {
        Self {
            unit_time: UnitTime::Year,
            unit_length: UnitLength::Au,
            unit_mass: UnitMass::SolarMass,
            num_substeps: 10,
            time_scale: 1.0,
            reset_after_one_period: true,
            seed: 42,
            star_mass: 1.0,
            star_radius: 10.0,
            star_position: NVec3::zeros(),
            focus: Focus::Left,
            planet_radius: 1.0,
            perihelion_distance: 21.48,
            eccentricity: 0.016,
            start_at_perihelion: true,
            direction: OrbitDirection::Counterclockwise,
        }
    }
}
