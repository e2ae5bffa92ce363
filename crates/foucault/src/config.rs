//! Physical constants and limits for a pendulum run.
//!
//! All fields are fixed for the lifetime of a [`Pendulum`](crate::Pendulum).
//! Defaults reproduce the classic demonstration: a 2 m rod, Earth gravity,
//! an exaggerated rotation rate so precession is visible within minutes,
//! and a latitude of 44 degrees.

use crate::vector::Point;

/// Default rod length.
pub const DEFAULT_LENGTH: f64 = 2.0;
/// Default gravitational acceleration.
pub const DEFAULT_GRAVITY: f64 = 9.80;
/// Default rotation rate of the reference frame.
pub const DEFAULT_ROTATION_RATE: f64 = 0.07;
/// Default latitude in degrees.
pub const DEFAULT_LATITUDE: f64 = 44.0;
/// Default fixed integration step: one 60 Hz frame.
pub const DEFAULT_STEP: f64 = 1.0 / 60.0;
/// Default lower bound for the time scale.
pub const MIN_TIME_SCALE: f64 = 0.1;
/// Default upper bound for the time scale.
pub const MAX_TIME_SCALE: f64 = 200.0;
/// Default bob starting position.
pub const DEFAULT_INITIAL_POSITION: Point = Point::new(150.0, 150.0);

/// Configuration for a [`Pendulum`](crate::Pendulum).
///
/// # Example
///
/// ```rust
/// use foucault::{Pendulum, PendulumConfig};
///
/// let config = PendulumConfig {
///     latitude: 90.0,
///     ..PendulumConfig::default()
/// };
/// let pendulum = Pendulum::new(config).expect("valid config");
/// assert_eq!(pendulum.time(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PendulumConfig {
    /// Rod length `l`. Must be finite and nonzero.
    pub length: f64,
    /// Gravitational acceleration `g`.
    pub gravity: f64,
    /// Rotation rate `w` of the reference frame (Earth-rotation analog).
    pub rotation_rate: f64,
    /// Latitude in degrees. Precession is fastest at the poles and vanishes
    /// at the equator.
    pub latitude: f64,
    /// Fixed integration step in seconds. Must be positive.
    pub step: f64,
    /// Position of the bob at construction and after every reset.
    pub initial_position: Point,
    /// Lower clamp for the time scale.
    pub min_time_scale: f64,
    /// Upper clamp for the time scale.
    pub max_time_scale: f64,
    /// Maximum number of trail points kept. `None` keeps every point.
    pub trail_limit: Option<usize>,
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            gravity: DEFAULT_GRAVITY,
            rotation_rate: DEFAULT_ROTATION_RATE,
            latitude: DEFAULT_LATITUDE,
            step: DEFAULT_STEP,
            initial_position: DEFAULT_INITIAL_POSITION,
            min_time_scale: MIN_TIME_SCALE,
            max_time_scale: MAX_TIME_SCALE,
            trail_limit: None,
        }
    }
}

impl PendulumConfig {
    /// Checks every field against the constraints documented on the struct.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.length.is_finite() || self.length == 0.0 {
            return Err(ConfigError::InvalidLength(self.length));
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::NonFinite("gravity"));
        }
        if !self.rotation_rate.is_finite() {
            return Err(ConfigError::NonFinite("rotation_rate"));
        }
        if !self.latitude.is_finite() {
            return Err(ConfigError::NonFinite("latitude"));
        }
        if !self.initial_position.is_finite() {
            return Err(ConfigError::NonFinite("initial_position"));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ConfigError::InvalidStep(self.step));
        }
        if !self.min_time_scale.is_finite()
            || !self.max_time_scale.is_finite()
            || self.min_time_scale <= 0.0
            || self.min_time_scale > self.max_time_scale
        {
            return Err(ConfigError::InvalidTimeScaleBounds {
                min: self.min_time_scale,
                max: self.max_time_scale,
            });
        }
        if self.trail_limit == Some(0) {
            return Err(ConfigError::ZeroTrailLimit);
        }
        Ok(())
    }

    /// Natural angular frequency squared, `g / l`.
    #[inline]
    pub fn stiffness(&self) -> f64 {
        self.gravity / self.length
    }

    /// Coefficient of the velocity coupling term, `2 w sin(latitude)`.
    #[inline]
    pub fn coriolis(&self) -> f64 {
        2.0 * self.rotation_rate * crate::math::sin(self.latitude.to_radians())
    }

    /// Angular rate at which the swing plane precesses, in radians per
    /// simulated second. Positive values turn the plane clockwise.
    #[inline]
    pub fn precession_rate(&self) -> f64 {
        self.coriolis() / 2.0
    }

    /// Clamps a time scale into the configured bounds.
    #[inline]
    pub fn clamp_time_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_time_scale, self.max_time_scale)
    }
}

/// Reasons a [`PendulumConfig`] can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The rod length is zero or not a finite number.
    #[error("rod length must be finite and nonzero, got {0}")]
    InvalidLength(f64),

    /// The integration step is not a positive finite number.
    #[error("integration step must be positive and finite, got {0}")]
    InvalidStep(f64),

    /// A physical constant is NaN or infinite.
    #[error("{0} must be finite")]
    NonFinite(&'static str),

    /// The time scale bounds are empty, negative or not finite.
    #[error("time scale bounds must satisfy 0 < min <= max, got [{min}, {max}]")]
    InvalidTimeScaleBounds {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },

    /// A trail limit of zero would leave the trail empty.
    #[error("trail limit must be at least 1")]
    ZeroTrailLimit,
}
