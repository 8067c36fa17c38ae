//! CLI command definitions using clap.
//!
//! One subcommand: `ask` for a one-shot submission. No subcommand launches
//! the interactive TUI.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Promptr - a terminal client for a prompt-answering HTTP service
#[derive(Parser, Debug)]
#[command(name = "promptr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Server base URL, overrides the configured one
    #[arg(short, long, global = true)]
    pub server: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a single prompt and print the reply
    Ask {
        /// Prompt text to submit
        prompt: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        // No args should result in None command (TUI mode)
        let cli = Cli::try_parse_from(["promptr"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
        assert!(cli.server.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["promptr", "-v"]).unwrap();
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_cli_config_option() {
        let cli = Cli::try_parse_from(["promptr", "-c", "/path/to/config.yml"]).unwrap();
        assert_eq!(cli.config.as_ref(), Some(&PathBuf::from("/path/to/config.yml")));
    }

    #[test]
    fn test_cli_server_override() {
        let cli = Cli::try_parse_from(["promptr", "-s", "http://example.com:9000"]).unwrap();
        assert_eq!(cli.server.as_deref(), Some("http://example.com:9000"));
    }

    #[test]
    fn test_ask_command() {
        let cli = Cli::try_parse_from(["promptr", "ask", "how many generations for the word 'alpha'?"]).unwrap();
        match cli.command {
            Some(Commands::Ask { prompt }) => {
                assert_eq!(prompt, "how many generations for the word 'alpha'?");
            }
            _ => panic!("Expected ask command"),
        }
    }

    #[test]
    fn test_ask_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["promptr", "ask", "hello", "-s", "http://localhost:1234"]).unwrap();
        assert_eq!(cli.server.as_deref(), Some("http://localhost:1234"));
        match cli.command {
            Some(Commands::Ask { prompt }) => assert_eq!(prompt, "hello"),
            _ => panic!("Expected ask command"),
        }
    }

    #[test]
    fn test_help_works() {
        // Verify help doesn't panic
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["promptr", "--version"]);
        // Version flag causes early exit with error (expected)
        assert!(result.is_err());
    }
}
