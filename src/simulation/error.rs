//! Configuration error taxonomy
//!
//! All configuration errors are reported synchronously to the caller before
//! any state mutation; the previous valid state is always retained. Pause
//! and the period-boundary snap are expected transitions, not errors, and
//! never surface here.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum KeplerError {
    /// Perihelion distance must be positive and finite, otherwise the
    /// derived elements degenerate (a -> 0, division by near-zero)
    #[error("perihelion distance must be positive and finite, got {0}")]
    InvalidPerihelion(f64),

    /// Eccentricity must lie in [0, 1); unbound orbits are rejected at
    /// configuration time
    #[error("eccentricity must lie in [0, 1) for a bound orbit, got {0}")]
    InvalidEccentricity(f64),

    /// Star mass must be positive and finite
    #[error("star mass must be positive and finite, got {0}")]
    InvalidStarMass(f64),

    /// At least one substep per tick is required
    #[error("substep count must be at least 1")]
    InvalidSubstepCount,

    /// Time scale must be finite
    #[error("time scale must be finite, got {0}")]
    InvalidTimeScale(f64),
}
