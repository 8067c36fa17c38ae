//! Application state for the TUI.

/// All mutable TUI state.
///
/// The response pane itself is not stored here: it renders straight from
/// the shared display region, which the submitter owns.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current input buffer
    pub input: String,
    /// Local notice (validation failure, busy), cleared on next keypress
    pub notice: Option<String>,
    /// Pending prompt to submit (processed by the runner)
    pub pending_submit: Option<String>,
    /// Whether the application should quit
    pub should_quit: bool,
}

impl AppState {
    /// Create a new default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the current input buffer for submission.
    pub fn queue_submit(&mut self) {
        self.pending_submit = Some(self.input.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::new();
        assert!(state.input.is_empty());
        assert!(state.notice.is_none());
        assert!(state.pending_submit.is_none());
        assert!(!state.should_quit);
    }

    #[test]
    fn test_queue_submit_copies_input() {
        let mut state = AppState::new();
        state.input = "hello".to_string();

        state.queue_submit();

        assert_eq!(state.pending_submit.as_deref(), Some("hello"));
        // Input stays until the runner accepts the submission
        assert_eq!(state.input, "hello");
    }
}
