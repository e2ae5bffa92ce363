//! Key bindings.
//!
//! | Key                 | Action                       |
//! |---------------------|------------------------------|
//! | `+` / `=`           | Speed up time (x1.5)         |
//! | `-` / `_`           | Slow down time (/1.5)        |
//! | `r` / `R`           | Reset the simulation         |
//! | `q` / `Esc`/`Ctrl+C`| Quit                         |
//!
//! The keypad `+` and `-` arrive as the same characters, so they are
//! covered by the rows above.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use foucault::{SLOW_DOWN_FACTOR, SPEED_UP_FACTOR};

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Multiply the time scale by [`SPEED_UP_FACTOR`].
    SpeedUp,
    /// Multiply the time scale by [`SLOW_DOWN_FACTOR`].
    SlowDown,
    /// Restore the initial state.
    Reset,
    /// Leave the program.
    Quit,
}

impl Command {
    /// Time scale multiplier for speed commands.
    pub const fn time_factor(self) -> Option<f64> {
        match self {
            Self::SpeedUp => Some(SPEED_UP_FACTOR),
            Self::SlowDown => Some(SLOW_DOWN_FACTOR),
            Self::Reset | Self::Quit => None,
        }
    }
}

/// Maps a key press to a command. Releases and repeats of unmapped keys
/// return `None`.
pub fn command_for(event: &KeyEvent) -> Option<Command> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    command_for_code(event.code, event.modifiers)
}

/// Maps a key code and modifiers to a command.
pub fn command_for_code(code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c' | 'C') => Some(Command::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('+' | '=') => Some(Command::SpeedUp),
        KeyCode::Char('-' | '_') => Some(Command::SlowDown),
        KeyCode::Char('r' | 'R') => Some(Command::Reset),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Help lines shown under the statistics.
pub const CONTROLS_HELP: &str = "Controls:\n\
    + : Speed up time (x1.5)\n\
    - : Slow down time (/1.5)\n\
    R : Reset simulation\n\
    Q : Quit";
