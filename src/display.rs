//! Display surfaces for submission results.
//!
//! The display region is the single output surface a submitter writes to.
//! It holds exactly one message at a time: nothing, a loading indicator,
//! the server's reply, or an error line. The submitter owns a handle to its
//! region; nothing else writes to it.

use colored::Colorize;
use std::sync::Mutex;

/// What the display region currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayState {
    /// Nothing submitted yet
    #[default]
    Empty,
    /// Request in flight
    Loading,
    /// Server reply, displayed verbatim
    Response(String),
    /// Formatted error line (`Error: ...`)
    Error(String),
}

impl DisplayState {
    /// Text rendering of the state.
    pub fn text(&self) -> &str {
        match self {
            DisplayState::Empty => "",
            DisplayState::Loading => "Loading...",
            DisplayState::Response(text) => text,
            DisplayState::Error(message) => message,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DisplayState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DisplayState::Error(_))
    }
}

/// A single mutable text surface.
///
/// Implementations receive each state transition of a submission flow:
/// `Loading`, then exactly one of `Response` or `Error`.
pub trait DisplayRegion: Send + Sync {
    fn show(&self, state: DisplayState);
}

/// In-memory display region.
///
/// Holds the current state behind a mutex so the TUI renderer (and tests)
/// can read it while a submission task writes to it.
#[derive(Debug, Default)]
pub struct BufferDisplay {
    current: Mutex<DisplayState>,
}

impl BufferDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> DisplayState {
        self.current.lock().unwrap().clone()
    }
}

impl DisplayRegion for BufferDisplay {
    fn show(&self, state: DisplayState) {
        *self.current.lock().unwrap() = state;
    }
}

/// Display region that prints each transition to stdout.
///
/// Used by the one-shot `ask` command, where the terminal itself is the
/// output surface.
#[derive(Debug, Default)]
pub struct StdoutDisplay;

impl DisplayRegion for StdoutDisplay {
    fn show(&self, state: DisplayState) {
        match &state {
            DisplayState::Empty => {}
            DisplayState::Loading => println!("{}", state.text().dimmed()),
            DisplayState::Response(text) => println!("{}", text),
            DisplayState::Error(message) => println!("{}", message.red()),
        }
    }
}
