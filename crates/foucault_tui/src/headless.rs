//! Terminal-free runs.
//!
//! Drives the pendulum for a fixed number of frames with a constant frame
//! delta of `1/fps` and reports the final readings. Output depends only on
//! the configuration, so it is stable across machines.

use std::io::{self, Write};

use foucault::{Pendulum, Stats};
use serde::Serialize;

use crate::program::clamp_fps;

/// Report encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The statistics panel text.
    #[default]
    Text,
    /// One JSON object.
    Json,
}

/// Final readings of a headless run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    /// Frames simulated.
    pub frames: u64,
    /// Frame rate the run was paced at.
    pub fps: u32,
    /// Fixed steps integrated over the whole run.
    pub steps: u64,
    /// Readings after the last frame.
    pub stats: Stats,
}

/// Advances `pendulum` by `frames` frames of `1/fps` seconds each.
pub fn simulate(pendulum: &mut Pendulum, frames: u64, fps: u32) -> Report {
    let fps = clamp_fps(fps);
    let delta = 1.0 / f64::from(fps);
    let mut steps = 0u64;

    for _ in 0..frames {
        steps += pendulum.advance(delta) as u64;
    }
    tracing::info!(
        frames,
        fps,
        steps,
        sim_time = pendulum.time(),
        "headless run finished"
    );

    Report {
        frames,
        fps,
        steps,
        stats: pendulum.stats(),
    }
}

/// Writes `report` in `format`, followed by a newline.
pub fn write_report<W: Write>(
    report: &Report,
    format: OutputFormat,
    mut out: W,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", report.stats)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, report)?;
            writeln!(out)?;
        }
    }
    out.flush()
}
