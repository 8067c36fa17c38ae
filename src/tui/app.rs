//! TUI Application - input handling on top of `AppState`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::AppState;

/// Owns the application state and translates key events into state changes.
pub struct App {
    state: AppState,
}

impl App {
    /// Create a new application
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }

    /// Get a reference to the state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a mutable reference to the state.
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Handle a key press. Returns true if the application should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Any keypress dismisses a notice
        self.state.notice = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.state.should_quit = true;
            return true;
        }

        match key.code {
            KeyCode::Esc => {
                self.state.should_quit = true;
                return true;
            }
            KeyCode::Enter => {
                self.state.queue_submit();
            }
            KeyCode::Backspace => {
                self.state.input.pop();
            }
            KeyCode::Char(c) => {
                self.state.input.push(c);
            }
            _ => {}
        }

        false
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_builds_input() {
        let mut app = App::new();
        for c in "hi".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.state().input, "hi");
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let mut app = App::new();
        app.state_mut().input = "hey".to_string();

        app.handle_key(key(KeyCode::Backspace));

        assert_eq!(app.state().input, "he");
    }

    #[test]
    fn test_enter_queues_submission() {
        let mut app = App::new();
        app.state_mut().input = "hello".to_string();

        let quit = app.handle_key(key(KeyCode::Enter));

        assert!(!quit);
        assert_eq!(app.state().pending_submit.as_deref(), Some("hello"));
    }

    #[test]
    fn test_esc_quits() {
        let mut app = App::new();
        assert!(app.handle_key(key(KeyCode::Esc)));
        assert!(app.state().should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = App::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.handle_key(ctrl_c));
        assert!(app.state().should_quit);
    }

    #[test]
    fn test_keypress_dismisses_notice() {
        let mut app = App::new();
        app.state_mut().notice = Some("Please enter a prompt".to_string());

        app.handle_key(key(KeyCode::Char('a')));

        assert!(app.state().notice.is_none());
    }
}
