//! Fixed-step polar-coordinate integrator for the two-body orbit
//!
//! Advances the planet's angular position with the conserved specific
//! angular momentum, then places the planet with the closed-form radius
//! equation. Called once per substep by the engine.

use crate::simulation::body::NVec3;
use crate::simulation::elements::OrbitalElements;

/// Minimum value of the radius denominator `1 + s e cos(theta)`
/// Only approachable as e -> 1; the clamp keeps the position finite
pub const MIN_RADIUS_DENOMINATOR: f64 = 1e-9;

/// Closed-form star-to-planet distance at angle `theta`
///
/// `r(theta) = p / (1 + orbit_sign * e * cos(theta))`, with the denominator
/// clamped from below. Theta is always measured against the positive x-axis
/// (positive is CCW). Exact for every `theta`, so integration error
/// accumulates only in the phase, never in the orbit's shape.
pub fn radius_at(elements: &OrbitalElements, orbit_sign: f64, theta: f64) -> f64 {
    let denom = (1.0 + orbit_sign * elements.e * theta.cos()).max(MIN_RADIUS_DENOMINATOR);
    elements.p / denom
}

/// Advance the planet by one substep of length `dt`
///
/// Solves the equation of motion in polar coordinates:
/// 1. `theta += L * dt / r²` with `r²` taken from the *current* relative
///    position (Euler on the angle; the polar form of conservation of
///    angular momentum, `dθ/dt = L / r²`)
/// 2. `r_new = p / (1 + s e cos(theta))` (closed form, exact)
/// 3. reassemble the Cartesian position about the star
///
/// Returns the new position and the new (unwrapped) theta. Always succeeds
/// for a valid orbit; the direction of travel is given by the sign of `L`.
pub fn polar_step(
    planet_position: NVec3,
    star_position: NVec3,
    theta: f64,
    elements: &OrbitalElements,
    orbit_sign: f64,
    dt: f64,
) -> (NVec3, f64) {
    // r² from the current relative position, not from the radius equation
    let vector_r = planet_position - star_position;
    let r2 = vector_r.norm_squared();

    let new_theta = theta + elements.l * dt / r2;
    let r = radius_at(elements, orbit_sign, new_theta);

    let position = star_position + NVec3::new(r * new_theta.cos(), r * new_theta.sin(), 0.0);
    (position, new_theta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::config::OrbitDirection;

    #[test]
    fn step_conserves_angular_momentum_exactly() {
        let el = OrbitalElements::derive(1.0, 0.3, 1.0, 39.47, OrbitDirection::Counterclockwise);
        let star = NVec3::zeros();
        let planet = NVec3::new(1.0, 0.0, 0.0);
        let dt = 1e-4;

        let r2 = (planet - star).norm_squared();
        let (_, new_theta) = polar_step(planet, star, 0.0, &el, 1.0, dt);

        // The angle step is L dt / r² by construction
        let l_implied = (new_theta - 0.0) * r2 / dt;
        assert!(
            (l_implied - el.l).abs() / el.l.abs() < 1e-12,
            "implied L {} != {}",
            l_implied,
            el.l
        );
    }

    #[test]
    fn radius_denominator_is_clamped() {
        // e = 1 exactly at theta = pi with orbit_sign = +1 would divide by 0
        let el = OrbitalElements::derive(1.0, 1.0, 1.0, 1.0, OrbitDirection::Counterclockwise);
        let r = radius_at(&el, 1.0, std::f64::consts::PI);
        assert!(r.is_finite(), "clamp failed, r = {}", r);
    }
}
