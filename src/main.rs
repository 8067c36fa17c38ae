use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use promptr::cli::{Cli, Commands};
use promptr::client::{HttpClientConfig, HttpPromptClient};
use promptr::config::Config;
use promptr::display::StdoutDisplay;
use promptr::error::PromptrError;
use promptr::submitter::PromptSubmitter;
use promptr::tui;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("promptr")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("promptr.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn build_client(cli: &Cli, config: &Config) -> Result<HttpPromptClient> {
    let base_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.server.base_url.clone());

    let http_config = HttpClientConfig {
        base_url,
        timeout: Duration::from_millis(config.server.timeout_ms),
    };

    HttpPromptClient::new(http_config).context("Failed to create HTTP client")
}

async fn handle_ask(prompt: &str, client: HttpPromptClient) -> Result<()> {
    info!("Submitting one-shot prompt");

    let submitter = PromptSubmitter::new(Arc::new(client), Arc::new(StdoutDisplay));

    match submitter.submit(prompt).await {
        // Display already printed the outcome, success or error line
        Ok(_) => Ok(()),
        Err(PromptrError::EmptyPrompt) => {
            println!("{}", "Please enter a prompt".yellow());
            Ok(())
        }
        Err(err) => Err(eyre::eyre!(err)),
    }
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    let client = build_client(cli, config)?;

    if cli.is_verbose() {
        println!("{}", format!("Server: {}", config.server.base_url).yellow());
    }

    match &cli.command {
        Some(Commands::Ask { prompt }) => handle_ask(prompt, client).await,
        None => {
            // Default: launch TUI mode
            info!("Launching TUI mode");
            tui::run(config, client).await
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
