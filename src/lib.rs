pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::body::{Body, NVec3};
pub use simulation::elements::OrbitalElements;
pub use simulation::engine::KeplerEngine;
pub use simulation::error::KeplerError;
pub use simulation::integrator::{polar_step, radius_at};
pub use simulation::params::Parameters;
pub use simulation::scenario::build_scenario;
pub use simulation::units::{newton_g, UnitLength, UnitMass, UnitTime};

pub use configuration::config::{
    Focus, IntegrationConfig, OrbitDirection, PlanetConfig, ScenarioConfig, StarConfig,
    UnitsConfig,
};

pub use benchmark::benchmark::bench_substep_curve;
