//! Log setup.
//!
//! `RUST_LOG` wins when set. Otherwise the `-v` count picks the level:
//! none is `warn`, then `info`, `debug`, and `trace`.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context as _;
use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Standard error.
    Stderr,
    /// Append to a file.
    File(&'a Path),
    /// Nowhere. Interactive runs without `--log-file` use this so log lines
    /// don't tear the canvas.
    Off,
}

/// Level directive for a `-v` count.
pub const fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file can't be opened.
pub fn init(target: LogTarget<'_>, verbose: u8) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(filter(verbose));

    // try_init fails only if a subscriber is already installed.
    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
        LogTarget::File(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            let _ = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
    }
    Ok(())
}
