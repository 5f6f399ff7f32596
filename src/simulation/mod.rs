pub mod body;
pub mod elements;
pub mod engine;
pub mod error;
pub mod integrator;
pub mod params;
pub mod scenario;
pub mod units;
