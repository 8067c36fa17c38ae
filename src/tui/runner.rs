//! TUI Runner - main event loop.
//!
//! The `TuiRunner` owns the terminal, app, and event handler. It runs the
//! main loop: render, handle events, process the pending submission,
//! repeat. Submissions run in a spawned task so the loop keeps rendering
//! while a request is in flight.

use std::sync::Arc;

use eyre::Result;
use log::{info, warn};

use super::app::App;
use super::events::{Event, EventHandler};
use super::views::render;
use super::Tui;
use crate::client::PromptClient;
use crate::display::BufferDisplay;
use crate::submitter::PromptSubmitter;

/// Notice shown when the prompt is empty after trimming
const NOTICE_EMPTY: &str = "Please enter a prompt";

/// Notice shown when a submission is already outstanding
const NOTICE_BUSY: &str = "A submission is already in flight";

/// Main TUI runner that owns the event loop.
pub struct TuiRunner<C: PromptClient + 'static> {
    terminal: Tui,
    app: App,
    event_handler: EventHandler,
    submitter: Arc<PromptSubmitter<C, BufferDisplay>>,
    display: Arc<BufferDisplay>,
}

impl<C: PromptClient + 'static> TuiRunner<C> {
    /// Create a new TUI runner.
    pub fn new(
        terminal: Tui,
        submitter: Arc<PromptSubmitter<C, BufferDisplay>>,
        display: Arc<BufferDisplay>,
        tick_rate_ms: u64,
    ) -> Self {
        Self {
            terminal,
            app: App::new(),
            event_handler: EventHandler::new(tick_rate_ms),
            submitter,
            display,
        }
    }

    /// Run the main TUI loop.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting TUI main loop");

        loop {
            // 1. Render current state
            let display_state = self.display.current();
            self.terminal.draw(|f| render(self.app.state(), &display_state, f))?;

            // 2. Handle events (keyboard, tick)
            let event = self.event_handler.next().await?;
            match event {
                Event::Key(key) => {
                    if self.app.handle_key(key) {
                        break;
                    }
                }
                Event::Tick => {
                    // Nothing to poll; the display refreshes on next draw
                }
                Event::Resize(_, _) => {
                    // Terminal will handle resize on next draw
                }
            }

            // 3. Process the pending submission
            self.process_pending_submit();

            // 4. Check for quit
            if self.app.state().should_quit {
                break;
            }
        }

        info!("TUI main loop ended");
        Ok(())
    }

    /// Take the queued submission, if any, and hand it to the submitter.
    ///
    /// Local rejections become a notice; valid prompts are spawned so the
    /// UI stays responsive. The submitter's own guard still holds if a
    /// second task slips past the `is_in_flight` check.
    fn process_pending_submit(&mut self) {
        let Some(raw) = self.app.state_mut().pending_submit.take() else {
            return;
        };

        if raw.trim().is_empty() {
            self.app.state_mut().notice = Some(NOTICE_EMPTY.to_string());
            return;
        }

        if self.submitter.is_in_flight() {
            self.app.state_mut().notice = Some(NOTICE_BUSY.to_string());
            return;
        }

        self.app.state_mut().input.clear();

        let submitter = Arc::clone(&self.submitter);
        tokio::spawn(async move {
            if let Err(err) = submitter.submit(&raw).await {
                warn!("submission rejected: {}", err);
            }
        });
    }

    /// Get a reference to the app.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the app.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}
