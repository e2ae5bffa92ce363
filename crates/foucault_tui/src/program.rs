//! Terminal event loop.

use std::io::Write;
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event},
    execute,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use foucault::FrameClock;

use crate::app::{App, Cmd, Msg};
use crate::error::{Error, Result};
use crate::keymap::command_for;

/// Default target frames per second.
pub const DEFAULT_FPS: u32 = 60;

/// Program options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramOptions {
    /// Target frames per second, 1 to 120.
    pub fps: u32,
    /// Draw on the alternate screen.
    pub alt_screen: bool,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            alt_screen: true,
        }
    }
}

impl ProgramOptions {
    /// Sets the frame rate, clamped to 1..=120.
    #[must_use]
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = clamp_fps(fps);
        self
    }

    /// Time budget of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(clamp_fps(self.fps)))
    }
}

/// Clamps a frame rate to the supported range.
pub const fn clamp_fps(fps: u32) -> u32 {
    if fps < 1 {
        1
    } else if fps > 120 {
        120
    } else {
        fps
    }
}

/// Runs `app` on the terminal until it asks to quit. The terminal is
/// restored on every exit path.
pub fn run<W: Write>(app: App, options: ProgramOptions, mut writer: W) -> Result<App> {
    enable_raw_mode().map_err(|source| Error::RawModeFailure {
        action: "enable",
        source,
    })?;

    let result = run_in_raw_mode(app, options, &mut writer);

    if let Err(source) = disable_raw_mode() {
        tracing::warn!(%source, "failed to disable raw mode");
    }
    result
}

fn run_in_raw_mode<W: Write>(app: App, options: ProgramOptions, writer: &mut W) -> Result<App> {
    if options.alt_screen {
        execute!(writer, EnterAlternateScreen).map_err(|source| Error::AltScreenFailure {
            action: "enter",
            source,
        })?;
    }
    execute!(writer, Hide)?;

    let result = event_loop(app, options, writer);

    let _ = execute!(writer, Show);
    if options.alt_screen {
        let _ = execute!(writer, LeaveAlternateScreen);
    }
    result
}

fn event_loop<W: Write>(mut app: App, options: ProgramOptions, writer: &mut W) -> Result<App> {
    if let Ok((cols, rows)) = terminal::size() {
        app.update(Msg::Resize(cols, rows));
    }

    let frame_duration = options.frame_duration();
    tracing::info!(fps = options.fps, alt_screen = options.alt_screen, "starting");

    let mut clock = FrameClock::new();
    let mut last_view = String::new();
    render(&app, writer, &mut last_view)?;

    loop {
        let waited = Duration::from_secs_f64(clock.peek());
        let timeout = frame_duration.saturating_sub(waited);

        if event::poll(timeout).map_err(Error::EventPoll)? {
            let msg = match event::read().map_err(Error::EventPoll)? {
                Event::Key(key) => command_for(&key).map(Msg::Command),
                Event::Resize(cols, rows) => Some(Msg::Resize(cols, rows)),
                _ => None,
            };
            if let Some(msg) = msg {
                if app.update(msg) == Some(Cmd::Quit) {
                    return Ok(app);
                }
                if matches!(msg, Msg::Resize(..)) {
                    last_view.clear();
                    execute!(writer, Clear(ClearType::All))?;
                }
            }
        }

        if clock.peek() >= frame_duration.as_secs_f64() {
            let elapsed = clock.tick();
            app.update(Msg::Frame(elapsed));
            render(&app, writer, &mut last_view)?;
        }
    }
}

fn render<W: Write>(app: &App, writer: &mut W, last_view: &mut String) -> Result<()> {
    let view = app.view();
    if view == *last_view {
        return Ok(());
    }

    // The view covers the whole screen, so no clear is needed between frames.
    execute!(writer, MoveTo(0, 0)).map_err(Error::Render)?;
    write!(writer, "{view}").map_err(Error::Render)?;
    writer.flush().map_err(Error::Render)?;

    *last_view = view;
    Ok(())
}
