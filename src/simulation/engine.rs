//! Two-body simulation engine
//!
//! `KeplerEngine` owns the star/planet pair, the cached `OrbitalElements`,
//! and the integrator state (`theta`, the anchor position, the period reset
//! timer). It is ticked by an externally owned fixed-rate loop through
//! [`KeplerEngine::advance`] and mutated only through the explicit entry
//! points (`reset`, `randomize`, the parameter setters); a tick never
//! observes a half-updated configuration.
//!
//! State exposed to renderers/UI is read-only: positions, theta, the
//! element set, and the per-tick force readout.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

use crate::configuration::config::{Focus, OrbitDirection};
use crate::simulation::body::{Body, NVec3, DEFAULT_MAX_RADIUS};
use crate::simulation::elements::OrbitalElements;
use crate::simulation::error::KeplerError;
use crate::simulation::integrator::polar_step;
use crate::simulation::params::Parameters;
use crate::simulation::units::{UnitLength, UnitTime};

/// Perihelion range drawn by [`KeplerEngine::randomize`], in length units
pub const RANDOM_PERIHELION_RANGE: (f64, f64) = (0.5, 0.75);
/// Eccentricity range drawn by [`KeplerEngine::randomize`]
pub const RANDOM_ECCENTRICITY_RANGE: (f64, f64) = (0.3, 0.7);

pub struct KeplerEngine {
    params: Parameters,
    star: Body,
    planet: Body,
    elements: OrbitalElements,
    orbit_sign: f64, // +1 star at right focus, -1 at left focus
    theta: f64, // polar angle, unwrapped (monotone per direction)
    init_theta: f64, // theta at the anchor position
    init_planet_position: NVec3, // Cartesian anchor for drift correction
    reset_timer: f64, // simulated time since the last period snap
    paused: bool,
    current_force: NVec3, // force readout, updated once per tick
    rng: StdRng,
}

impl KeplerEngine {
    /// Build an engine from validated parameters and run the initial reset
    pub fn new(params: Parameters) -> Result<Self, KeplerError> {
        params.validate()?;

        let star = Body::new(
            params.star_position,
            params.star_mass,
            params.star_radius,
            DEFAULT_MAX_RADIUS,
        );
        // Planet mass is negligible by assumption and never enters the dynamics
        let planet = Body::new(
            params.star_position,
            1.0,
            params.planet_radius,
            DEFAULT_MAX_RADIUS,
        );
        let g = params.newton_g();
        let elements = OrbitalElements::derive(
            params.perihelion_distance,
            params.eccentricity,
            params.star_mass,
            g,
            params.direction,
        );
        let rng = StdRng::seed_from_u64(params.seed);

        let mut engine = Self {
            params,
            star,
            planet,
            elements,
            orbit_sign: 1.0,
            theta: 0.0,
            init_theta: 0.0,
            init_planet_position: NVec3::zeros(),
            reset_timer: 0.0,
            paused: false,
            current_force: NVec3::zeros(),
            rng,
        };
        engine.reset();
        Ok(engine)
    }

    /// Reinitialize state from the current configuration
    ///
    /// Replaces star state, planet anchor, theta, and the whole element set
    /// atomically; calling it twice with an unchanged configuration yields
    /// identical elements and an identical anchor.
    pub fn reset(&mut self) {
        self.reset_timer = 0.0;

        // Star
        self.star.x = self.params.star_position;
        self.star.m = self.params.star_mass;
        self.star.set_radius(self.params.star_radius);

        // Element set, derived in one shot
        let g = self.params.newton_g();
        self.elements = OrbitalElements::derive(
            self.params.perihelion_distance,
            self.params.eccentricity,
            self.star.m,
            g,
            self.params.direction,
        );

        // Planet anchor: perihelion sits on the focus side, aphelion opposite
        if self.params.start_at_perihelion {
            let direction = focus_direction(self.params.focus);
            self.init_planet_position =
                self.star.x + self.params.perihelion_distance * direction;
        } else {
            let aphelion = self.elements.aphelion_distance();
            let direction = -focus_direction(self.params.focus);
            self.init_planet_position = self.star.x + aphelion * direction;
        }
        self.planet.x = self.init_planet_position;
        self.planet.set_radius(self.params.planet_radius);

        self.orbit_sign = match self.params.focus {
            Focus::Left => -1.0,
            Focus::Right => 1.0,
        };

        let position1 = self.init_planet_position - self.star.x;
        self.theta = position1.y.atan2(position1.x);
        self.init_theta = self.theta;

        self.current_force = self.force_on_planet();

        log::debug!(
            "reset: a = {:.6}, T = {:.6}, G = {:.6}",
            self.elements.a,
            self.elements.period,
            g
        );
    }

    /// Regenerate a random valid orbit and re-derive all state
    ///
    /// Draws perihelion from [0.5, 0.75), eccentricity from [0.3, 0.7), and
    /// the focus side uniformly; deterministic for a fixed seed. With
    /// `recenter_orbit` the star is repositioned so the ellipse's geometric
    /// center (not the focus) sits at the coordinate origin.
    pub fn randomize(&mut self, recenter_orbit: bool) {
        self.reset_timer = 0.0;

        let focus = if self.rng.gen_range(0..2) == 0 {
            Focus::Left
        } else {
            Focus::Right
        };
        let perihelion = self
            .rng
            .gen_range(RANDOM_PERIHELION_RANGE.0..RANDOM_PERIHELION_RANGE.1);
        let eccentricity = self
            .rng
            .gen_range(RANDOM_ECCENTRICITY_RANGE.0..RANDOM_ECCENTRICITY_RANGE.1);

        self.params.focus = focus;
        self.params.perihelion_distance = perihelion;
        self.params.eccentricity = eccentricity;

        let g = self.params.newton_g();
        self.elements = OrbitalElements::derive(
            perihelion,
            eccentricity,
            self.star.m,
            g,
            self.params.direction,
        );

        let direction = focus_direction(focus);

        // Shift the system so the center of the orbital ellipse is at the origin
        if recenter_orbit {
            self.star.x = eccentricity * self.elements.a * direction;
        }

        // The randomized orbit always starts at perihelion
        self.init_planet_position = self.star.x + perihelion * direction;
        self.planet.x = self.init_planet_position;

        let position1 = self.init_planet_position - self.star.x;
        self.theta = position1.y.atan2(position1.x);
        self.init_theta = self.theta;

        self.orbit_sign = match focus {
            Focus::Left => -1.0,
            Focus::Right => 1.0,
        };

        self.current_force = self.force_on_planet();

        log::info!(
            "randomize: perihelion = {:.4}, e = {:.4}, focus = {:?}",
            perihelion,
            eccentricity,
            focus
        );
    }

    /// Advance the simulation by one fixed tick
    ///
    /// Performs, in order: the pause gate, the period-boundary drift
    /// correction, `num_substeps` integrator substeps, and the force
    /// readout update.
    pub fn advance(&mut self, fixed_dt: f64) {
        if self.paused {
            return;
        }

        if self.params.reset_after_one_period {
            // Re-establish the exact initial position after one period to
            // bound the phase drift of the angle stepping. A non-finite
            // period (unbound orbit, only reachable if validation was
            // bypassed) never fires.
            if self.elements.period.is_finite() && self.reset_timer >= self.elements.period {
                self.reset_timer = 0.0;
                self.planet.x = self.init_planet_position;
                let position1 = self.init_planet_position - self.star.x;
                self.theta = position1.y.atan2(position1.x);
                log::debug!("period boundary: snapped to anchor");
            }

            self.reset_timer += self.params.time_scale * fixed_dt;
        }

        // Substep loop; each substep depends on the previous position/theta
        let substep = self.params.time_scale * fixed_dt / self.params.num_substeps as f64;
        for _ in 0..self.params.num_substeps {
            let (position, theta) = polar_step(
                self.planet.x,
                self.star.x,
                self.theta,
                &self.elements,
                self.orbit_sign,
                substep,
            );
            self.planet.x = position;
            self.theta = theta;
        }

        self.current_force = self.force_on_planet();
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    pub fn planet_position(&self) -> NVec3 {
        self.planet.x
    }

    pub fn star_position(&self) -> NVec3 {
        self.star.x
    }

    /// Unwrapped polar angle; callers measuring sweep should prefer
    /// [`KeplerEngine::swept_angle`]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Angle swept since the last reset/randomize/period snap, normalized
    /// to [0, 2π) with the travel direction folded in
    pub fn swept_angle(&self) -> f64 {
        ((self.theta - self.init_theta) * self.elements.l.signum()).rem_euclid(TAU)
    }

    /// The cached element set for the current configuration
    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    pub fn period(&self) -> f64 {
        self.elements.period
    }

    pub fn eccentricity(&self) -> f64 {
        self.elements.e
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.elements.a
    }

    /// Kepler-III ratio `T² / a³`
    pub fn kepler_ratio(&self) -> f64 {
        self.elements.kepler_ratio()
    }

    /// Force on the planet, `F = -G M / r² * r̂`, from the last tick
    pub fn current_force(&self) -> NVec3 {
        self.current_force
    }

    pub fn newton_g(&self) -> f64 {
        self.params.newton_g()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn reset_timer(&self) -> f64 {
        self.reset_timer
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn anchor_position(&self) -> NVec3 {
        self.init_planet_position
    }

    // ------------------------------------------------------------------
    // Mutating entry points
    // ------------------------------------------------------------------

    /// Pause gate: while set, `advance` is a no-op and state is frozen
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn set_time_scale(&mut self, time_scale: f64) -> Result<(), KeplerError> {
        if !time_scale.is_finite() {
            return Err(KeplerError::InvalidTimeScale(time_scale));
        }
        self.params.time_scale = time_scale;
        Ok(())
    }

    pub fn set_perihelion_distance(&mut self, perihelion: f64) -> Result<(), KeplerError> {
        self.update_params(|p| p.perihelion_distance = perihelion)
    }

    pub fn set_eccentricity(&mut self, eccentricity: f64) -> Result<(), KeplerError> {
        self.update_params(|p| p.eccentricity = eccentricity)
    }

    pub fn set_star_mass(&mut self, mass: f64) -> Result<(), KeplerError> {
        self.update_params(|p| p.star_mass = mass)
    }

    pub fn set_units(&mut self, time: UnitTime, length: UnitLength) -> Result<(), KeplerError> {
        self.update_params(|p| {
            p.unit_time = time;
            p.unit_length = length;
        })
    }

    pub fn set_orbit_direction(&mut self, direction: OrbitDirection) -> Result<(), KeplerError> {
        self.update_params(|p| p.direction = direction)
    }

    pub fn set_focus(&mut self, focus: Focus) -> Result<(), KeplerError> {
        self.update_params(|p| p.focus = focus)
    }

    pub fn set_start_at_perihelion(&mut self, at_perihelion: bool) -> Result<(), KeplerError> {
        self.update_params(|p| p.start_at_perihelion = at_perihelion)
    }

    /// Validate-then-commit for parameter changes: the mutation is applied
    /// to a candidate copy, validated, and only then committed together
    /// with a full reset, so a failed change leaves the previous valid
    /// state untouched and a tick never sees a partial update
    fn update_params<F>(&mut self, mutate: F) -> Result<(), KeplerError>
    where
        F: FnOnce(&mut Parameters),
    {
        let mut candidate = self.params.clone();
        mutate(&mut candidate);
        candidate.validate()?;
        self.params = candidate;
        self.reset();
        Ok(())
    }

    fn force_on_planet(&self) -> NVec3 {
        let vector_r = self.planet.x - self.star.x;
        let r2 = vector_r.norm_squared();
        if r2 == 0.0 {
            return NVec3::zeros();
        }
        -(self.params.newton_g() * self.star.m / r2) * vector_r.normalize()
    }
}

/// Unit vector from the star toward the planet's starting perihelion for
/// the given focus side
fn focus_direction(focus: Focus) -> NVec3 {
    match focus {
        Focus::Left => NVec3::new(-1.0, 0.0, 0.0),
        Focus::Right => NVec3::new(1.0, 0.0, 0.0),
    }
}
