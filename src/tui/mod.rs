//! Terminal User Interface for promptr.
//!
//! A single-screen interface: a response pane (the display region), an
//! input box, and a notice line for local validation messages. Enter
//! submits, Esc or Ctrl-C quits.

mod app;
mod events;
mod runner;
mod state;
mod views;

#[allow(unused_imports)]
pub use app::App;
#[allow(unused_imports)]
pub use events::{Event, EventHandler};
pub use runner::TuiRunner;
#[allow(unused_imports)]
pub use state::AppState;

use std::io::{stdout, Stdout};
use std::sync::Arc;

use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use eyre::Result;
use ratatui::prelude::*;

use crate::client::PromptClient;
use crate::config::Config;
use crate::display::BufferDisplay;
use crate::submitter::PromptSubmitter;

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode.
///
/// Enables raw mode and switches to the alternate screen.
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
///
/// Disables raw mode and leaves the alternate screen.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Run the interactive TUI against the given prompt client.
pub async fn run<C: PromptClient + 'static>(config: &Config, client: C) -> Result<()> {
    let display = Arc::new(BufferDisplay::new());
    let submitter = Arc::new(PromptSubmitter::new(Arc::new(client), Arc::clone(&display)));

    let terminal = init_terminal()?;
    let mut runner = TuiRunner::new(terminal, submitter, display, config.tui.tick_rate_ms);
    let result = runner.run().await;
    restore_terminal()?;
    result
}
