//! Derived classical orbital elements
//!
//! `OrbitalElements` is the cached, atomically-replaced element set for the
//! current configuration. It is derived in one shot from (perihelion
//! distance, eccentricity, star mass, G, orbit direction) and immutable
//! within a tick; a configuration change replaces the whole struct, never a
//! single field.

use crate::configuration::config::OrbitDirection;
use std::f64::consts::PI;

/// Classical orbital elements of the bound two-body orbit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub a: f64, // semi-major axis
    pub e: f64, // eccentricity
    pub p: f64, // semi-latus rectum
    pub l: f64, // angular momentum (specific, signed by direction)
    pub energy: f64, // energy (specific)
    pub period: f64, // orbital period (INFINITY if e >= 1)
}

impl OrbitalElements {
    /// Derive the full element set as one atomic unit
    ///
    /// - `a = perihelion / (1 - e)`
    /// - `p = perihelion * (1 + e)`
    /// - `l = sign(direction) * sqrt(G * M * p)` (negative for clockwise)
    /// - `energy = -0.5 * G * M / a`
    /// - `period = 2π * sqrt(a³ / (G * M))`, or `INFINITY` for `e >= 1`
    ///
    /// Inputs are validated at the configuration boundary (`Parameters`);
    /// the `e >= 1` infinite period is kept as a defensive terminal value
    /// so a bypassed guard can never wedge the period-reset check.
    pub fn derive(
        perihelion: f64,
        e: f64,
        star_mass: f64,
        g: f64,
        direction: OrbitDirection,
    ) -> Self {
        let a = perihelion / (1.0 - e);
        let p = perihelion * (1.0 + e);

        let sign = match direction {
            OrbitDirection::Clockwise => -1.0,
            OrbitDirection::Counterclockwise => 1.0,
        };
        let l = sign * (g * star_mass * p).sqrt();

        let energy = -0.5 * g * star_mass / a;

        let period = if e >= 1.0 {
            // Unbound orbit, deliberate terminal value
            f64::INFINITY
        } else {
            2.0 * PI * (a * a * a / (g * star_mass)).sqrt()
        };

        Self {
            a,
            e,
            p,
            l,
            energy,
            period,
        }
    }

    /// Aphelion distance `(1 + e) * a`, the far turning point of the orbit
    pub fn aphelion_distance(&self) -> f64 {
        (1.0 + self.e) * self.a
    }

    /// Kepler-III ratio `T² / a³` (eccentricity-independent, `4π²/(G·M)`)
    pub fn kepler_ratio(&self) -> f64 {
        self.period * self.period / (self.a * self.a * self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn derive_circular() {
        // e=0: a = p = perihelion, period from Kepler III directly
        let el = OrbitalElements::derive(2.0, 0.0, 1.0, 1.0, OrbitDirection::Counterclockwise);

        assert!((el.a - 2.0).abs() < 1e-15);
        assert!((el.p - 2.0).abs() < 1e-15);
        assert!((el.period - 2.0 * PI * 8.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn derive_clockwise_flips_l_sign() {
        let ccw = OrbitalElements::derive(1.0, 0.5, 1.0, 1.0, OrbitDirection::Counterclockwise);
        let cw = OrbitalElements::derive(1.0, 0.5, 1.0, 1.0, OrbitDirection::Clockwise);

        assert!(ccw.l > 0.0);
        assert!(cw.l < 0.0);
        assert!((ccw.l + cw.l).abs() < 1e-15, "magnitudes differ");
    }

    #[test]
    fn derive_unbound_period_is_infinite() {
        let el = OrbitalElements::derive(1.0, 1.0, 1.0, 1.0, OrbitDirection::Counterclockwise);
        assert!(el.period.is_infinite());
    }

    #[test]
    fn aphelion_matches_radius_extreme() {
        let el = OrbitalElements::derive(0.6, 0.4, 1.0, 39.47, OrbitDirection::Counterclockwise);
        // r_max = p / (1 - e) = a (1 + e)
        let r_max = el.p / (1.0 - el.e);
        assert!((el.aphelion_distance() - r_max).abs() < 1e-12);
    }
}
