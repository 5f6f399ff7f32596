//! Build a fully-initialized simulation from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a ready
//! [`KeplerEngine`]: the config structs are mapped field by field into
//! runtime [`Parameters`], validated, and handed to the engine, which runs
//! its initial reset. Invalid configurations are rejected here before any
//! engine state exists.

use crate::configuration::config::ScenarioConfig;
use crate::simulation::body::NVec3;
use crate::simulation::engine::KeplerEngine;
use crate::simulation::error::KeplerError;
use crate::simulation::params::Parameters;

/// Map a loaded scenario configuration into a running engine
pub fn build_scenario(cfg: ScenarioConfig) -> Result<KeplerEngine, KeplerError> {
    // Star position: [x, y] in the YAML, z fixed to 0
    let sp = &cfg.star.position;
    let star_position = NVec3::new(
        sp.first().copied().unwrap_or(0.0),
        sp.get(1).copied().unwrap_or(0.0),
        0.0,
    );

    // Parameters (runtime) from the config structs
    let parameters = Parameters {
        unit_time: cfg.units.time,
        unit_length: cfg.units.length,
        unit_mass: cfg.units.mass,
        num_substeps: cfg.integration.num_substeps,
        time_scale: cfg.integration.time_scale,
        reset_after_one_period: cfg.integration.reset_after_one_period,
        seed: cfg.integration.seed,
        star_mass: cfg.star.mass,
        star_radius: cfg.star.radius,
        star_position,
        focus: cfg.star.focus,
        planet_radius: cfg.planet.radius,
        perihelion_distance: cfg.planet.perihelion_distance,
        eccentricity: cfg.planet.eccentricity,
        start_at_perihelion: cfg.planet.start_at_perihelion,
        direction: cfg.planet.direction,
    };

    KeplerEngine::new(parameters)
}
