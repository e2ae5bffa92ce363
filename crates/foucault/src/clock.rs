//! Wall-clock sampling, kept apart from the integrator.
//!
//! [`Pendulum::advance`](crate::Pendulum::advance) takes elapsed seconds
//! explicitly, which keeps the physics deterministic. [`FrameClock`] measures
//! those seconds from a monotonic clock, and [`Simulation`] pairs the two for
//! callers that just want an `update()` once per frame.

use std::time::Instant;

use alloc::string::String;

use crate::config::{ConfigError, PendulumConfig};
use crate::pendulum::Pendulum;
use crate::stats::RenderSnapshot;

/// Measures real time between consecutive frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Starts the clock now.
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Returns the seconds since the previous tick (or since construction)
    /// and moves the anchor to now.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        elapsed
    }

    /// Seconds since the previous tick, without moving the anchor.
    pub fn peek(&self) -> f64 {
        self.last.elapsed().as_secs_f64()
    }
}

/// A [`Pendulum`] driven by its own [`FrameClock`].
///
/// # Example
///
/// ```rust
/// use foucault::{PendulumConfig, Simulation};
///
/// let mut sim = Simulation::new(PendulumConfig::default()).unwrap();
/// sim.update();
/// assert!(sim.pendulum().time() >= 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    pendulum: Pendulum,
    clock: FrameClock,
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            pendulum: Pendulum::default(),
            clock: FrameClock::new(),
        }
    }
}

impl Simulation {
    /// Builds the pendulum and starts the clock.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn new(config: PendulumConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            pendulum: Pendulum::new(config)?,
            clock: FrameClock::new(),
        })
    }

    /// Advances the pendulum by the real time since the previous update.
    /// Returns the number of integration steps taken.
    pub fn update(&mut self) -> usize {
        let elapsed = self.clock.tick();
        self.pendulum.advance(elapsed)
    }

    /// See [`Pendulum::adjust_time_scale`].
    pub fn adjust_time_scale(&mut self, factor: f64) -> f64 {
        self.pendulum.adjust_time_scale(factor)
    }

    /// Resets the pendulum. The clock keeps running, so the next update
    /// still covers the real time of the frame in which the reset happened.
    pub fn reset(&mut self) {
        self.pendulum.reset();
    }

    /// See [`Pendulum::render_snapshot`].
    pub fn render_snapshot(&self) -> RenderSnapshot<'_> {
        self.pendulum.render_snapshot()
    }

    /// See [`Pendulum::stats_text`].
    pub fn stats_text(&self) -> String {
        self.pendulum.stats_text()
    }

    /// The underlying pendulum.
    pub const fn pendulum(&self) -> &Pendulum {
        &self.pendulum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_tick_is_monotonic() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(5));
        let first = clock.tick();
        let second = clock.tick();

        assert!(first >= 0.005);
        assert!(second >= 0.0);
        assert!(second < first);
    }

    #[test]
    fn test_peek_does_not_move_anchor() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(5));
        let peeked = clock.peek();
        let ticked = clock.tick();
        assert!(ticked >= peeked);
    }

    #[test]
    fn test_update_advances_by_real_time() {
        let mut sim = Simulation::default();
        thread::sleep(Duration::from_millis(20));
        let steps = sim.update();

        assert!(steps >= 1);
        assert!(sim.pendulum().time() >= 0.02);
        assert_eq!(sim.pendulum().trail().len(), steps + 1);
    }

    #[test]
    fn test_update_uses_time_scale() {
        let mut sim = Simulation::default();
        sim.adjust_time_scale(10.0);
        thread::sleep(Duration::from_millis(20));
        sim.update();

        assert!(sim.pendulum().time() >= 0.2);
    }

    #[test]
    fn test_reset_keeps_clock_running() {
        let mut sim = Simulation::default();
        thread::sleep(Duration::from_millis(20));
        sim.reset();
        sim.update();

        // The frame in which the reset happened is still simulated
        assert!(sim.pendulum().time() >= 0.02);
        assert_eq!(sim.pendulum().time_scale(), 1.0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = Simulation::new(PendulumConfig {
            step: 0.0,
            ..PendulumConfig::default()
        });
        assert!(result.is_err());
    }
}
