//! `foucault` binary entry point.

use std::io;

use anyhow::Context as _;
use foucault::Pendulum;
use foucault_tui::logging;
use foucault_tui::{App, Cli, Settings, headless, program};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let settings = Settings::from_cli(&cli).context("failed to load configuration")?;
    logging::init(settings.log_target(), settings.verbose)?;
    tracing::info!("configuration:\n{}", settings.to_diagnostic_string());

    if settings.headless {
        return run_headless(&settings);
    }

    let app = App::new(settings.pendulum, settings.color)
        .context("failed to create simulation")?;
    let app = program::run(app, settings.program_options(), io::stdout())
        .context("terminal session failed")?;
    tracing::info!(
        frames = app.frames(),
        sim_time = app.pendulum().time(),
        "exited"
    );
    Ok(())
}

fn run_headless(settings: &Settings) -> anyhow::Result<()> {
    let mut pendulum = Pendulum::new(settings.pendulum).context("failed to create simulation")?;
    let report = headless::simulate(&mut pendulum, settings.frames, settings.fps);
    headless::write_report(&report, settings.format, io::stdout().lock())
        .context("failed to write report")?;
    Ok(())
}
