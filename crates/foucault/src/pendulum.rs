//! The pendulum state and its integrator.
//!
//! The bob moves in a plane under a linear restoring force plus a
//! velocity coupling that stands in for the Coriolis force of a rotating
//! reference frame:
//!
//! ```text
//! ax = -(g/l) x + 2 w sin(lat) vy
//! ay = -(g/l) y - 2 w sin(lat) vx
//! ```
//!
//! The coupling turns the swing plane slowly clockwise, which is the
//! precession a Foucault pendulum shows.
//!
//! Integration is semi-implicit (symplectic) Euler with a fixed step.
//! [`Pendulum::advance`] slices an arbitrary frame delta into whole fixed
//! steps plus one partial step so that simulated time always moves by exactly
//! `elapsed * time_scale`.

use alloc::string::{String, ToString};

use crate::config::{ConfigError, PendulumConfig};
use crate::math;
use crate::stats::{RenderSnapshot, Stats};
use crate::trail::Trail;
use crate::vector::{Point, Vector};

/// Multiplier applied by a "speed up" command.
pub const SPEED_UP_FACTOR: f64 = 1.5;
/// Multiplier applied by a "slow down" command.
pub const SLOW_DOWN_FACTOR: f64 = 1.0 / 1.5;

/// A Foucault pendulum.
///
/// # Example
///
/// ```rust
/// use foucault::Pendulum;
///
/// let mut pendulum = Pendulum::default();
///
/// // One second of real time at normal speed
/// let steps = pendulum.advance(1.0);
///
/// assert_eq!(steps, pendulum.trail().len() - 1);
/// assert!((pendulum.time() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Pendulum {
    config: PendulumConfig,
    stiffness: f64,
    coriolis: f64,
    pos: Point,
    vel: Vector,
    acc: Vector,
    time: f64,
    time_scale: f64,
    trail: Trail,
}

impl Default for Pendulum {
    fn default() -> Self {
        Self::from_valid(PendulumConfig::default())
    }
}

impl Pendulum {
    /// Creates a pendulum at rest at the configured initial position.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails
    /// [`PendulumConfig::validate`].
    pub fn new(config: PendulumConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: PendulumConfig) -> Self {
        let stiffness = config.stiffness();
        let coriolis = config.coriolis();
        let pos = config.initial_position;
        let vel = Vector::zero();

        let mut trail = Trail::new(config.trail_limit);
        trail.push(pos);

        let mut pendulum = Self {
            config,
            stiffness,
            coriolis,
            pos,
            vel,
            acc: Vector::zero(),
            time: 0.0,
            time_scale: config.clamp_time_scale(1.0),
            trail,
        };
        pendulum.acc = pendulum.acceleration_at(pos, vel);
        pendulum
    }

    /// Acceleration prescribed by the equations of motion for a given state.
    #[inline]
    pub fn acceleration_at(&self, pos: Point, vel: Vector) -> Vector {
        Vector::new(
            -self.stiffness * pos.x + self.coriolis * vel.y,
            -self.stiffness * pos.y - self.coriolis * vel.x,
        )
    }

    /// Advances the simulation by `elapsed` real seconds.
    ///
    /// The elapsed time is multiplied by the current time scale, then
    /// integrated as whole fixed steps followed by a single partial step for
    /// the remainder. Returns the number of integration steps taken, which is
    /// also the number of points appended to the trail.
    ///
    /// Values that are not finite and positive are ignored.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "step count is a non-negative floor"
    )]
    pub fn advance(&mut self, elapsed: f64) -> usize {
        if !elapsed.is_finite() || elapsed <= 0.0 {
            return 0;
        }

        let scaled = elapsed * self.time_scale;
        let dt = self.config.step;
        let whole = math::floor(scaled / dt);
        let steps = whole as usize;
        let remainder = scaled - whole * dt;

        for _ in 0..steps {
            self.step(dt);
        }

        let mut taken = steps;
        if remainder > 0.0 {
            self.step(remainder);
            taken += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(elapsed, scaled, steps, remainder, "advanced pendulum");

        taken
    }

    /// Integrates a single step of `delta` simulated seconds.
    ///
    /// The order matters: velocity from the previous acceleration, position
    /// from the new velocity, then acceleration from the new state. The time
    /// scale is not applied here.
    pub fn step(&mut self, delta: f64) {
        self.vel.x += self.acc.x * delta;
        self.vel.y += self.acc.y * delta;

        self.pos.x += self.vel.x * delta;
        self.pos.y += self.vel.y * delta;

        self.time += delta;

        self.acc = self.acceleration_at(self.pos, self.vel);

        self.trail.push(self.pos);
    }

    /// Multiplies the time scale by `factor` and clamps it to the configured
    /// bounds. Returns the new time scale.
    ///
    /// A NaN factor leaves the time scale unchanged.
    ///
    /// ```rust
    /// use foucault::{Pendulum, SPEED_UP_FACTOR};
    ///
    /// let mut pendulum = Pendulum::default();
    /// for _ in 0..20 {
    ///     pendulum.adjust_time_scale(SPEED_UP_FACTOR);
    /// }
    /// assert_eq!(pendulum.time_scale(), 200.0);
    /// ```
    pub fn adjust_time_scale(&mut self, factor: f64) -> f64 {
        if factor.is_nan() {
            return self.time_scale;
        }
        self.time_scale = self.config.clamp_time_scale(self.time_scale * factor);

        #[cfg(feature = "tracing")]
        tracing::debug!(factor, time_scale = self.time_scale, "time scale adjusted");

        self.time_scale
    }

    /// Returns every dynamic field to its construction value, time scale
    /// included, and re-seeds the trail with the initial position.
    pub fn reset(&mut self) {
        *self = Self::from_valid(self.config);

        #[cfg(feature = "tracing")]
        tracing::debug!("pendulum reset");
    }

    /// Configuration the pendulum was built with.
    #[inline]
    pub const fn config(&self) -> &PendulumConfig {
        &self.config
    }

    /// Current bob position.
    #[inline]
    pub const fn position(&self) -> Point {
        self.pos
    }

    /// Current bob velocity.
    #[inline]
    pub const fn velocity(&self) -> Vector {
        self.vel
    }

    /// Acceleration for the current position and velocity.
    #[inline]
    pub const fn acceleration(&self) -> Vector {
        self.acc
    }

    /// Simulated seconds since construction or the last reset.
    #[inline]
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// Simulated seconds per real second.
    #[inline]
    pub const fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Recorded positions, oldest first.
    #[inline]
    pub const fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Everything a renderer needs, borrowed from the live state.
    #[inline]
    pub fn render_snapshot(&self) -> RenderSnapshot<'_> {
        RenderSnapshot {
            pivot: Point::origin(),
            bob: self.pos,
            trail: &self.trail,
        }
    }

    /// Current readings for the statistics panel.
    pub fn stats(&self) -> Stats {
        Stats {
            time: self.time,
            time_scale: self.time_scale,
            position: self.pos,
            velocity: self.vel,
            acceleration: self.acc,
            trail_len: self.trail.len(),
        }
    }

    /// Statistics formatted as multi-line text.
    pub fn stats_text(&self) -> String {
        self.stats().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-10;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    /// A step that divides one second exactly keeps the arithmetic exact.
    fn quarter_step() -> Pendulum {
        Pendulum::new(PendulumConfig {
            step: 0.25,
            ..PendulumConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let p = Pendulum::default();

        assert_eq!(p.position(), Point::new(150.0, 150.0));
        assert_eq!(p.velocity(), Vector::zero());
        assert!(approx_eq(p.acceleration().x, -9.8 * 150.0 / 2.0));
        assert!(approx_eq(p.acceleration().y, -9.8 * 150.0 / 2.0));
        assert_eq!(p.time(), 0.0);
        assert_eq!(p.time_scale(), 1.0);
        assert_eq!(p.trail().len(), 1);
        assert_eq!(
            p.trail().last().map(|t| t.position),
            Some(Point::new(150.0, 150.0))
        );
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = Pendulum::new(PendulumConfig {
            length: 0.0,
            ..PendulumConfig::default()
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::InvalidLength(0.0));
    }

    #[test]
    fn test_step_order_is_semi_implicit() {
        let mut p = Pendulum::default();
        let a0 = p.acceleration();
        let h = 0.01;

        p.step(h);

        // Velocity uses the old acceleration
        let v1 = Vector::new(a0.x * h, a0.y * h);
        assert_eq!(p.velocity(), v1);

        // Position uses the new velocity
        let x1 = Point::new(150.0 + v1.x * h, 150.0 + v1.y * h);
        assert_eq!(p.position(), x1);

        // Acceleration comes from the new state
        assert_eq!(p.acceleration(), p.acceleration_at(x1, v1));
        assert!(approx_eq(p.time(), h));
        assert_eq!(p.trail().len(), 2);
    }

    #[test]
    fn test_coupling_signs() {
        let p = Pendulum::default();
        let c = p.config().coriolis();

        let acc = p.acceleration_at(Point::origin(), Vector::new(1.0, 0.0));
        assert!(approx_eq(acc.x, 0.0));
        assert!(approx_eq(acc.y, -c));

        let acc = p.acceleration_at(Point::origin(), Vector::new(0.0, 1.0));
        assert!(approx_eq(acc.x, c));
        assert!(approx_eq(acc.y, 0.0));
    }

    #[test]
    fn test_advance_whole_steps() {
        let mut p = quarter_step();
        let taken = p.advance(1.0);

        assert_eq!(taken, 4);
        assert_eq!(p.trail().len(), 5);
        assert_eq!(p.time(), 1.0);
    }

    #[test]
    fn test_advance_with_remainder() {
        let mut p = quarter_step();
        let taken = p.advance(1.1);

        // Four whole steps plus the 0.1 s remainder
        assert_eq!(taken, 5);
        assert_eq!(p.trail().len(), 6);
        assert!(approx_eq(p.time(), 1.1));
    }

    #[test]
    fn test_advance_shorter_than_step() {
        let mut p = quarter_step();
        assert_eq!(p.advance(0.1), 1);
        assert!(approx_eq(p.time(), 0.1));
    }

    #[test]
    fn test_advance_applies_time_scale() {
        let mut p = quarter_step();
        p.adjust_time_scale(2.0);

        let taken = p.advance(1.0);

        assert_eq!(taken, 8);
        assert_eq!(p.time(), 2.0);
    }

    #[test]
    fn test_advance_matches_manual_steps() {
        let mut advanced = quarter_step();
        let mut stepped = quarter_step();

        advanced.advance(0.6);
        stepped.step(0.25);
        stepped.step(0.25);
        stepped.step(0.6 - 0.5);

        assert_eq!(advanced, stepped);
    }

    #[test]
    fn test_advance_ignores_bad_input() {
        let mut p = Pendulum::default();
        let before = p.clone();

        for elapsed in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(p.advance(elapsed), 0);
        }
        assert_eq!(p, before);
    }

    #[test]
    fn test_adjust_time_scale_clamps() {
        let mut p = Pendulum::default();

        assert!(approx_eq(p.adjust_time_scale(SPEED_UP_FACTOR), 1.5));
        assert!(approx_eq(p.adjust_time_scale(SLOW_DOWN_FACTOR), 1.0));

        for _ in 0..20 {
            p.adjust_time_scale(SPEED_UP_FACTOR);
        }
        assert_eq!(p.time_scale(), 200.0);

        for _ in 0..40 {
            p.adjust_time_scale(SLOW_DOWN_FACTOR);
        }
        assert_eq!(p.time_scale(), 0.1);
    }

    #[test]
    fn test_adjust_time_scale_odd_factors() {
        let mut p = Pendulum::default();

        assert_eq!(p.adjust_time_scale(f64::NAN), 1.0);
        assert_eq!(p.adjust_time_scale(-3.0), 0.1);
        assert_eq!(p.adjust_time_scale(f64::INFINITY), 200.0);
        assert_eq!(p.adjust_time_scale(0.0), 0.1);
    }

    #[test]
    fn test_reset_matches_fresh() {
        let mut p = Pendulum::default();
        p.adjust_time_scale(SPEED_UP_FACTOR);
        p.advance(3.7);
        p.reset();

        assert_eq!(p, Pendulum::default());
    }

    #[test]
    fn test_reset_keeps_config() {
        let config = PendulumConfig {
            initial_position: Point::new(-40.0, 10.0),
            trail_limit: Some(16),
            ..PendulumConfig::default()
        };
        let mut p = Pendulum::new(config).unwrap();
        p.advance(2.0);
        p.reset();

        assert_eq!(p.config(), &config);
        assert_eq!(p.position(), Point::new(-40.0, 10.0));
        assert_eq!(p.trail().len(), 1);
        assert_eq!(p.trail().limit(), Some(16));
    }

    #[test]
    fn test_time_scale_starts_inside_custom_bounds() {
        let p = Pendulum::new(PendulumConfig {
            min_time_scale: 2.0,
            max_time_scale: 4.0,
            ..PendulumConfig::default()
        })
        .unwrap();
        assert_eq!(p.time_scale(), 2.0);
    }

    #[test]
    fn test_trail_limit_caps_growth() {
        let mut p = Pendulum::new(PendulumConfig {
            trail_limit: Some(10),
            ..PendulumConfig::default()
        })
        .unwrap();

        p.advance(5.0);

        assert_eq!(p.trail().len(), 10);
        assert_eq!(p.trail().last().map(|t| t.position), Some(p.position()));
    }

    #[test]
    fn test_render_snapshot_borrows_live_state() {
        let mut p = Pendulum::default();
        p.advance(0.5);

        let snapshot = p.render_snapshot();
        assert_eq!(snapshot.pivot, Point::origin());
        assert_eq!(snapshot.bob, p.position());
        assert_eq!(snapshot.trail.len(), p.trail().len());
        assert!(core::ptr::eq(snapshot.trail, p.trail()));
    }

    #[test]
    fn test_stats_reflect_state() {
        let mut p = Pendulum::default();
        p.advance(0.25);

        let stats = p.stats();
        assert_eq!(stats.time, p.time());
        assert_eq!(stats.time_scale, p.time_scale());
        assert_eq!(stats.position, p.position());
        assert_eq!(stats.velocity, p.velocity());
        assert_eq!(stats.acceleration, p.acceleration());
        assert_eq!(stats.trail_len, p.trail().len());
    }

    #[test]
    fn test_stats_text_initial() {
        let p = Pendulum::default();
        assert_eq!(
            p.stats_text(),
            "Time: 00:00:00.0\n\
             Speed: x1.0\n\
             Position: (150.00, 150.00)\n\
             Velocity: (0.00, 0.00)\n\
             Acceleration: (-735.00, -735.00)\n\
             Trail points: 1"
        );
    }
}
