//! The interactive model.
//!
//! [`App`] follows the Elm shape: messages go into [`App::update`], which
//! may hand back a [`Cmd`] for the program loop, and [`App::view`] turns the
//! current state into a screen.

use foucault::{Pendulum, PendulumConfig};

use crate::canvas::{Frame, TrailLayer, Viewport};
use crate::keymap::{CONTROLS_HELP, Command};

/// Terminal size used until the first resize message arrives.
pub const DEFAULT_SIZE: (u16, u16) = (80, 24);

/// Frames longer than this many real seconds are logged as stalls.
const STALL_SECONDS: f64 = 0.25;

/// Input to [`App::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    /// A mapped key press.
    Command(Command),
    /// A frame boundary, carrying the real seconds since the previous one.
    Frame(f64),
    /// The terminal was resized to `(cols, rows)`.
    Resize(u16, u16),
}

/// Requests from the model to the program loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Stop the program.
    Quit,
}

/// Pendulum plus everything needed to draw it.
#[derive(Debug, Clone)]
pub struct App {
    pendulum: Pendulum,
    layer: TrailLayer,
    color: bool,
    frames: u64,
}

impl App {
    /// Creates an app for a validated configuration.
    pub fn new(config: PendulumConfig, color: bool) -> Result<Self, foucault::ConfigError> {
        let pendulum = Pendulum::new(config)?;
        Ok(Self::with_pendulum(pendulum, color))
    }

    /// Wraps an existing pendulum.
    pub fn with_pendulum(pendulum: Pendulum, color: bool) -> Self {
        let (cols, rows) = DEFAULT_SIZE;
        let viewport = Viewport::fit(cols, rows, fit_radius(&pendulum));
        let mut layer = TrailLayer::new(viewport);
        layer.sync(pendulum.trail());
        Self {
            pendulum,
            layer,
            color,
            frames: 0,
        }
    }

    /// Handles one message.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        match msg {
            Msg::Command(Command::Quit) => {
                tracing::info!(
                    frames = self.frames,
                    sim_time = self.pendulum.time(),
                    "quit requested"
                );
                return Some(Cmd::Quit);
            }
            Msg::Command(Command::Reset) => {
                self.pendulum.reset();
                self.layer.clear();
                self.layer.sync(self.pendulum.trail());
                tracing::info!("simulation reset");
            }
            Msg::Command(command @ (Command::SpeedUp | Command::SlowDown)) => {
                if let Some(factor) = command.time_factor() {
                    let scale = self.pendulum.adjust_time_scale(factor);
                    tracing::debug!(?command, scale, "time scale changed");
                }
            }
            Msg::Frame(elapsed) => {
                let steps = self.pendulum.advance(elapsed);
                self.layer.sync(self.pendulum.trail());
                self.frames += 1;
                if elapsed > STALL_SECONDS {
                    tracing::debug!(elapsed, steps, "frame stall absorbed");
                } else {
                    tracing::trace!(elapsed, steps, "frame");
                }
            }
            Msg::Resize(cols, rows) => {
                let viewport = Viewport::fit(cols, rows, fit_radius(&self.pendulum));
                self.layer.rebuild(viewport, self.pendulum.trail());
                tracing::debug!(cols, rows, scale = viewport.scale(), "resized");
            }
        }
        None
    }

    /// Renders the current state.
    pub fn view(&self) -> String {
        self.frame().render(self.color)
    }

    /// Composes the current screen without encoding it.
    pub fn frame(&self) -> Frame {
        let overlay = format!("{}\n\n{CONTROLS_HELP}", self.pendulum.stats_text());
        Frame::compose(&self.layer, &self.pendulum.render_snapshot(), &overlay)
    }

    /// The simulated pendulum.
    pub const fn pendulum(&self) -> &Pendulum {
        &self.pendulum
    }

    /// Number of frame messages handled.
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Current viewport.
    pub const fn viewport(&self) -> Viewport {
        self.layer.viewport()
    }
}

/// Radius to fit on screen: the initial amplitude, which bounds the swing.
fn fit_radius(pendulum: &Pendulum) -> f64 {
    pendulum
        .config()
        .initial_position
        .to_vector()
        .magnitude()
}
