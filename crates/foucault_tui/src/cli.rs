//! Command-line interface for `foucault`.
//!
//! # Examples
//!
//! ```bash
//! # Interactive, default constants
//! foucault
//!
//! # Southern hemisphere, faster Earth
//! foucault --latitude -33.9 --rotation-rate 0.2
//!
//! # Ten simulated seconds without a terminal, as JSON
//! foucault --headless --frames 600 --format json
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::headless::OutputFormat;

/// Foucault pendulum in the terminal.
///
/// Simulates a pendulum whose swing plane slowly precesses, and draws the
/// bob, rod, and trail with a live statistics panel.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "foucault",
    author,
    version,
    about = "Foucault pendulum simulation in the terminal"
)]
pub struct Cli {
    /// TOML configuration file
    ///
    /// May hold a `[pendulum]` table and a top-level `fps`. Flags given on
    /// the command line take precedence.
    #[arg(long, short = 'c', env = "FOUCAULT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Pendulum length in meters
    #[arg(long, env = "FOUCAULT_LENGTH", allow_negative_numbers = true)]
    pub length: Option<f64>,

    /// Gravitational acceleration in m/s^2
    #[arg(long, env = "FOUCAULT_GRAVITY", allow_negative_numbers = true)]
    pub gravity: Option<f64>,

    /// Angular rate of the rotating frame in rad/s
    #[arg(long, env = "FOUCAULT_ROTATION_RATE", allow_negative_numbers = true)]
    pub rotation_rate: Option<f64>,

    /// Latitude in degrees; negative is south
    #[arg(long, env = "FOUCAULT_LATITUDE", allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    /// Fixed integration step in simulated seconds
    #[arg(long, env = "FOUCAULT_STEP")]
    pub step: Option<f64>,

    /// Keep at most this many trail points (unbounded by default)
    #[arg(long, env = "FOUCAULT_TRAIL_LIMIT")]
    pub trail_limit: Option<usize>,

    /// Target frames per second, clamped to 1..=120
    #[arg(long, env = "FOUCAULT_FPS")]
    pub fps: Option<u32>,

    /// Force color output off
    ///
    /// Respects the `NO_COLOR` environment variable
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Draw in the main terminal buffer instead of the alternate screen
    #[arg(long, env = "FOUCAULT_NO_ALT_SCREEN")]
    pub no_alt_screen: bool,

    /// Run without a terminal and print the final statistics
    #[arg(long)]
    pub headless: bool,

    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = 600, requires = "headless")]
    pub frames: u64,

    /// Headless report format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write logs to this file
    ///
    /// Interactive sessions only log when this is set.
    #[arg(long, env = "FOUCAULT_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }
}
