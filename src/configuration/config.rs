//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! two-body scenario. A scenario consists of:
//!
//! - [`UnitsConfig`]       – unit triple (time, length, mass)
//! - [`IntegrationConfig`] – tick subdivision, timescale, drift correction, seed
//! - [`StarConfig`]        – star mass, visual radius, position, focus side
//! - [`PlanetConfig`]      – planet visual radius and orbit shape
//! - [`ScenarioConfig`]    – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! units:
//!   time: "year"            # or "month", "day"
//!   length: "au"            # or "solar_radius"
//!   mass: "solar_mass"
//!
//! integration:
//!   num_substeps: 10        # substeps per fixed tick
//!   time_scale: 1.0         # multiplier on simulated time
//!   reset_after_one_period: true
//!   seed: 42                # deterministic seed for the randomizer
//!
//! star:
//!   mass: 1.0
//!   radius: 10.0            # visual radius, not used by the dynamics
//!   position: [ 0.0, 0.0 ]
//!   focus: "left"           # side of the orbit the star sits on
//!
//! planet:
//!   radius: 1.0
//!   perihelion_distance: 21.48
//!   eccentricity: 0.016
//!   start_at_perihelion: true
//!   direction: "counterclockwise"
//! ```
//!
//! The engine maps this configuration into validated runtime `Parameters`;
//! validation happens there, not here.

use crate::simulation::units::{UnitLength, UnitMass, UnitTime};
use serde::Deserialize;

/// Direction the planet travels along its orbit
/// Determines the sign of the specific angular momentum `L`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitDirection {
    #[serde(rename = "clockwise")] // theta decreases over time
    Clockwise,

    #[serde(rename = "counterclockwise")] // theta increases over time
    Counterclockwise,
}

/// Which side of the orbit the star (the occupied focus) sits on
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    #[serde(rename = "left")]
    Left,

    #[serde(rename = "right")]
    Right,
}

/// Unit triple for the simulation
#[derive(Deserialize, Debug, Clone)]
pub struct UnitsConfig {
    pub time: UnitTime, // simulation time unit
    pub length: UnitLength, // simulation length unit
    pub mass: UnitMass, // simulation mass unit (fixed to solar mass)
}

/// Tick subdivision and drift-correction settings
#[derive(Deserialize, Debug, Clone)]
pub struct IntegrationConfig {
    pub num_substeps: u32, // integrator resolution per fixed tick
    pub time_scale: f64, // external multiplier on simulated time
    pub reset_after_one_period: bool, // snap back to the anchor each period
    pub seed: u64, // deterministic seed for the randomizer
}

/// Configuration of the star (the dominant, immovable mass)
#[derive(Deserialize, Debug, Clone)]
pub struct StarConfig {
    pub mass: f64, // star mass in simulation mass units
    pub radius: f64, // visual radius, display only
    pub position: Vec<f64>, // [x, y] position in simulation length units
    pub focus: Focus, // side of the orbit the star sits on
}

/// Configuration of the planet and its orbit shape
#[derive(Deserialize, Debug, Clone)]
pub struct PlanetConfig {
    pub radius: f64, // visual radius, display only
    pub perihelion_distance: f64, // closest approach distance
    pub eccentricity: f64, // orbit shape, in [0, 1)
    pub start_at_perihelion: bool, // false starts the planet at aphelion
    pub direction: OrbitDirection, // travel direction along the orbit
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub units: UnitsConfig, // unit triple
    pub integration: IntegrationConfig, // tick and drift-correction settings
    pub star: StarConfig, // star state
    pub planet: PlanetConfig, // planet state and orbit shape
}
