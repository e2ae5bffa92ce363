#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::float_cmp)]

//! # Foucault
//!
//! Simulation core for a Foucault pendulum: a planar harmonic oscillator
//! whose swing plane precesses under a Coriolis-like coupling.
//!
//! Foucault provides:
//! - **Pendulum**: state, a semi-implicit Euler integrator, and fixed-step
//!   sub-stepping of variable frame deltas
//! - **PendulumConfig**: validated physical constants with documented defaults
//! - **Trail**: the ordered history of bob positions for drawing
//! - **Stats**: readouts, including the `HH:MM:SS.s` clock format
//! - **Simulation** (std): a pendulum paired with a wall clock
//!
//! ## Example
//!
//! ```rust
//! use foucault::{Pendulum, SPEED_UP_FACTOR};
//!
//! let mut pendulum = Pendulum::default();
//! pendulum.adjust_time_scale(SPEED_UP_FACTOR);
//!
//! // A frame that took 1/60 s of real time
//! pendulum.advance(1.0 / 60.0);
//!
//! let snapshot = pendulum.render_snapshot();
//! assert_eq!(snapshot.bob, pendulum.position());
//! println!("{}", pendulum.stats_text());
//! ```
//!
//! ## Time decoupling
//!
//! Every call to [`Pendulum::advance`] multiplies the real elapsed time by
//! the time scale and integrates it as whole fixed steps plus one partial
//! step. The physics never depends on the frame rate, and the simulated
//! clock moves by exactly the scaled amount.

extern crate alloc;

#[cfg(feature = "std")]
mod clock;
mod config;
mod math;
mod pendulum;
mod stats;
mod trail;
mod vector;

#[cfg(feature = "std")]
pub use clock::{FrameClock, Simulation};
pub use config::{
    ConfigError, DEFAULT_GRAVITY, DEFAULT_INITIAL_POSITION, DEFAULT_LATITUDE, DEFAULT_LENGTH,
    DEFAULT_ROTATION_RATE, DEFAULT_STEP, MAX_TIME_SCALE, MIN_TIME_SCALE, PendulumConfig,
};
pub use pendulum::{Pendulum, SLOW_DOWN_FACTOR, SPEED_UP_FACTOR};
pub use stats::{Elapsed, RenderSnapshot, Stats};
pub use trail::{Rgba, TRAIL_COLOR, Trail, TrailPoint};
pub use vector::{Point, Vector};

/// Prelude module for convenient imports.
pub mod prelude {
    #[cfg(feature = "std")]
    pub use crate::clock::{FrameClock, Simulation};
    pub use crate::config::{ConfigError, PendulumConfig};
    pub use crate::pendulum::{Pendulum, SLOW_DOWN_FACTOR, SPEED_UP_FACTOR};
    pub use crate::stats::{Elapsed, RenderSnapshot, Stats};
    pub use crate::trail::{Rgba, TRAIL_COLOR, Trail, TrailPoint};
    pub use crate::vector::{Point, Vector};
}
