#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]

//! # Foucault TUI
//!
//! Terminal front end for the [`foucault`] simulation core.
//!
//! - **keymap**: key presses to commands
//! - **canvas**: viewport transform, incremental trail raster, frame
//!   composition
//! - **app**: the Elm-style model (`update` / `view`)
//! - **program**: raw mode, alternate screen, and the frame-paced event loop
//! - **headless**: fixed-delta runs without a terminal
//! - **cli** / **config** / **logging**: the binary's ambient stack
//!
//! ## Example
//!
//! ```rust
//! use foucault::PendulumConfig;
//! use foucault_tui::{App, Command, Msg};
//!
//! let mut app = App::new(PendulumConfig::default(), false).unwrap();
//! app.update(Msg::Command(Command::SpeedUp));
//! app.update(Msg::Frame(1.0 / 60.0));
//! assert!(app.view().contains("Speed: x1.5"));
//! ```

pub mod app;
pub mod canvas;
pub mod cli;
pub mod config;
pub mod error;
pub mod headless;
pub mod keymap;
pub mod logging;
pub mod program;

pub use app::{App, Cmd, Msg};
pub use canvas::{Frame, TrailLayer, Viewport};
pub use cli::Cli;
pub use config::{ConfigError, FileConfig, Settings};
pub use error::{Error, Result};
pub use headless::{OutputFormat, Report};
pub use keymap::Command;
pub use program::{ProgramOptions, run};
