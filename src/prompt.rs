//! Prompt value type.
//!
//! A `Prompt` is the user's text after trimming. Construction is the only
//! place the non-empty invariant is enforced, so everything downstream can
//! rely on it.

use crate::error::{PromptrError, Result};

/// User-supplied text, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    /// Parse raw input into a prompt.
    ///
    /// Trims leading/trailing whitespace and rejects empty results with
    /// `EmptyPrompt`.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PromptrError::EmptyPrompt);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The trimmed prompt text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the prompt, yielding the trimmed text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
