//! Runtime configuration.
//!
//! [`Settings`] is the single source of truth for a run, resolved in three
//! layers: built-in defaults, then an optional TOML file, then command-line
//! flags (which include their `FOUCAULT_*` environment fallbacks).
//!
//! ```toml
//! fps = 30
//!
//! [pendulum]
//! length = 2.5
//! latitude = -33.9
//! trail_limit = 20000
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use foucault::PendulumConfig;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::headless::OutputFormat;
use crate::logging::LogTarget;
use crate::program::{DEFAULT_FPS, ProgramOptions, clamp_fps};

/// Contents of a configuration file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Target frames per second.
    pub fps: Option<u32>,
    /// Physical constants; missing fields take their defaults.
    pub pendulum: Option<PendulumConfig>,
}

impl FileConfig {
    /// Parses TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads and parses a file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file can't be read and
    /// [`ConfigError::Parse`] if it isn't valid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }
}

/// Everything a run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Physical constants and integrator settings.
    pub pendulum: PendulumConfig,
    /// Target frames per second, already clamped.
    pub fps: u32,
    /// Emit truecolor escapes.
    pub color: bool,
    /// Draw on the alternate screen.
    pub alt_screen: bool,
    /// Run without a terminal.
    pub headless: bool,
    /// Frames to simulate in headless mode.
    pub frames: u64,
    /// Headless report format.
    pub format: OutputFormat,
    /// Log destination for interactive runs.
    pub log_file: Option<PathBuf>,
    /// Verbosity count from `-v`.
    pub verbose: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pendulum: PendulumConfig::default(),
            fps: DEFAULT_FPS,
            color: true,
            alt_screen: true,
            headless: false,
            frames: 600,
            format: OutputFormat::Text,
            log_file: None,
            verbose: 0,
        }
    }
}

impl Settings {
    /// Resolves settings from the command line, loading `--config` if given.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be loaded or the merged constants
    /// are invalid.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        let settings = Self::merge(&file, cli);
        settings.validate()?;
        Ok(settings)
    }

    /// Layers `file` over the defaults, then `cli` over the result.
    pub fn merge(file: &FileConfig, cli: &Cli) -> Self {
        let mut pendulum = file.pendulum.unwrap_or_default();

        if let Some(length) = cli.length {
            pendulum.length = length;
        }
        if let Some(gravity) = cli.gravity {
            pendulum.gravity = gravity;
        }
        if let Some(rotation_rate) = cli.rotation_rate {
            pendulum.rotation_rate = rotation_rate;
        }
        if let Some(latitude) = cli.latitude {
            pendulum.latitude = latitude;
        }
        if let Some(step) = cli.step {
            pendulum.step = step;
        }
        if cli.trail_limit.is_some() {
            pendulum.trail_limit = cli.trail_limit;
        }

        let fps = cli.fps.or(file.fps).unwrap_or(DEFAULT_FPS);

        Self {
            pendulum,
            fps: clamp_fps(fps),
            color: !cli.no_color,
            alt_screen: !cli.no_alt_screen,
            headless: cli.headless,
            frames: cli.frames,
            format: cli.format,
            log_file: cli.log_file.clone(),
            verbose: cli.verbose,
        }
    }

    /// Checks the physical constants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pendulum.validate()?;
        Ok(())
    }

    /// Options for the interactive program loop.
    pub fn program_options(&self) -> ProgramOptions {
        ProgramOptions {
            fps: self.fps,
            alt_screen: self.alt_screen,
        }
    }

    /// Where logs go: the log file when set, else stderr for headless runs.
    /// Interactive runs without a log file don't log.
    pub fn log_target(&self) -> LogTarget<'_> {
        match (&self.log_file, self.headless) {
            (Some(path), _) => LogTarget::File(path),
            (None, true) => LogTarget::Stderr,
            (None, false) => LogTarget::Off,
        }
    }

    /// One line per setting, for `-v` startup logs.
    pub fn to_diagnostic_string(&self) -> String {
        let p = &self.pendulum;
        let trail = p
            .trail_limit
            .map_or_else(|| "unbounded".to_string(), |n| n.to_string());
        format!(
            "length: {}\ngravity: {}\nrotation_rate: {}\nlatitude: {}\nstep: {}\n\
             trail_limit: {trail}\nfps: {}\ncolor: {}\nalt_screen: {}\nheadless: {}",
            p.length,
            p.gravity,
            p.rotation_rate,
            p.latitude,
            p.step,
            self.fps,
            self.color,
            self.alt_screen,
            self.headless,
        )
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file couldn't be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file isn't valid TOML for this program.
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        /// File that was parsed.
        path: PathBuf,
        /// The TOML error, with line and column.
        #[source]
        source: toml::de::Error,
    },

    /// A physical constant is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] foucault::ConfigError),
}
