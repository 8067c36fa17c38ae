//! Prompt submission flow.
//!
//! `PromptSubmitter` ties a transport to a display region and runs the one
//! flow this crate exists for: validate, show loading, request, show the
//! outcome. The submitter receives both collaborators at construction and
//! owns the only write path to its display.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info};

use crate::client::PromptClient;
use crate::display::{DisplayRegion, DisplayState};
use crate::error::{PromptrError, Result};
use crate::prompt::Prompt;

/// Prefix for error messages written to the display region
const ERROR_PREFIX: &str = "Error: ";

/// Runs the submission flow against a client and a display region.
///
/// State machine per submission:
/// `idle -> validating -> (rejected | loading -> (displayed | errored))`.
/// Local rejections (`EmptyPrompt`, `Busy`) leave the display untouched;
/// everything after validation writes exactly twice: `Loading`, then the
/// final state.
pub struct PromptSubmitter<C, D> {
    client: Arc<C>,
    display: Arc<D>,
    in_flight: AtomicBool,
}

impl<C: PromptClient, D: DisplayRegion> PromptSubmitter<C, D> {
    /// Create a submitter owning handles to its transport and display.
    pub fn new(client: Arc<C>, display: Arc<D>) -> Self {
        Self {
            client,
            display,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a submission is currently outstanding.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Submit raw user input.
    ///
    /// Returns the final display state on completion, or a local error
    /// (`EmptyPrompt`, `Busy`) if the flow was rejected before any request
    /// went out. Request failures are not errors at this level: they end the
    /// flow in `DisplayState::Error`.
    pub async fn submit(&self, raw: &str) -> Result<DisplayState> {
        let prompt = Prompt::parse(raw)?;

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("submission rejected, request already in flight");
            return Err(PromptrError::Busy);
        }

        info!("submitting prompt ({} chars)", prompt.as_str().len());
        self.display.show(DisplayState::Loading);

        let state = match self.client.submit(&prompt).await {
            Ok(reply) => DisplayState::Response(reply.response),
            Err(err) => DisplayState::Error(format!("{}{}", ERROR_PREFIX, err)),
        };

        self.display.show(state.clone());
        self.in_flight.store(false, Ordering::SeqCst);

        Ok(state)
    }
}
