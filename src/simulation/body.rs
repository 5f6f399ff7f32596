//! Core state type for a celestial body
//!
//! `Body` carries the quantities the dynamics and its consumers need:
//! - position `x` (`NVec3`; z is carried for consumers but unused by the
//!   dynamics)
//! - mass `m`
//! - a visual radius, clamped to `[MIN_RADIUS, max_radius]`, which never
//!   feeds the dynamics
//!
//! The star is immovable during a tick; the planet's position is the sole
//! dynamic quantity.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// Lower clamp bound for the visual radius
pub const MIN_RADIUS: f64 = 0.01;
/// Default upper clamp bound for the visual radius
pub const DEFAULT_MAX_RADIUS: f64 = 20.0;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // position
    pub m: f64, // mass
    radius: f64, // visual radius, clamped, display only
    max_radius: f64, // upper clamp bound
}

impl Body {
    /// Create a body; the radius is clamped into `[MIN_RADIUS, max_radius]`
    pub fn new(x: NVec3, m: f64, radius: f64, max_radius: f64) -> Self {
        let mut body = Self {
            x,
            m,
            radius: MIN_RADIUS,
            max_radius,
        };
        body.set_radius(radius);
        body
    }

    /// Visual radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Set the visual radius, clamped into `[MIN_RADIUS, max_radius]`
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.clamp(MIN_RADIUS, self.max_radius);
    }
}
