//! Read-only views of the pendulum for renderers and readouts.

use core::fmt;

use crate::trail::Trail;
use crate::vector::{Point, Vector};

/// What a renderer needs to draw one frame.
///
/// The trail is borrowed, not copied. Renderers apply their own display
/// offset and scale while iterating.
#[derive(Debug, Clone, Copy)]
pub struct RenderSnapshot<'a> {
    /// Fixed end of the rod.
    pub pivot: Point,
    /// Current bob position.
    pub bob: Point,
    /// Every recorded position, oldest first.
    pub trail: &'a Trail,
}

/// Point-in-time readings of the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// Simulated seconds.
    pub time: f64,
    /// Simulated seconds per real second.
    pub time_scale: f64,
    /// Bob position.
    pub position: Point,
    /// Bob velocity.
    pub velocity: Vector,
    /// Bob acceleration.
    pub acceleration: Vector,
    /// Number of points in the trail.
    pub trail_len: usize,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Time: {}", Elapsed(self.time))?;
        writeln!(f, "Speed: x{:.1}", self.time_scale)?;
        writeln!(
            f,
            "Position: ({:.2}, {:.2})",
            self.position.x, self.position.y
        )?;
        writeln!(
            f,
            "Velocity: ({:.2}, {:.2})",
            self.velocity.x, self.velocity.y
        )?;
        writeln!(
            f,
            "Acceleration: ({:.2}, {:.2})",
            self.acceleration.x, self.acceleration.y
        )?;
        write!(f, "Trail points: {}", self.trail_len)
    }
}

/// Displays a duration in seconds as `HH:MM:SS.s`.
///
/// Hours and minutes come from the whole seconds; the seconds field keeps
/// one decimal and is zero-padded to four characters.
///
/// ```rust
/// use foucault::Elapsed;
///
/// assert_eq!(Elapsed(0.0).to_string(), "00:00:00.0");
/// assert_eq!(Elapsed(3725.3).to_string(), "01:02:05.3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elapsed(pub f64);

impl fmt::Display for Elapsed {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "whole seconds of a non-negative clock"
    )]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.0.max(0.0);
        let whole = seconds as u64;
        let hours = whole / 3600;
        let minutes = (whole % 3600) / 60;
        let secs = seconds % 60.0;
        write!(f, "{hours:02}:{minutes:02}:{secs:04.1}")
    }
}
