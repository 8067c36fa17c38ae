//! Promptr - a terminal client for a prompt-answering HTTP service
//!
//! Promptr submits user prompts to a server's `/prompt` endpoint and shows
//! the reply in a display region: either stdout (one-shot `ask`) or an
//! interactive terminal UI.

pub mod cli;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod prompt;
pub mod submitter;
pub mod tui;

pub use error::{PromptrError, Result};
