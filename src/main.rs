//! tictactui - two-player tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tictactui::{AppConfig, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    let theme = config.resolve_theme(cli.theme).theme();
    let log_path = config.resolve_log_file(cli.log_file.clone());

    // Logging goes to a file so it cannot interfere with the TUI.
    let log_file = std::fs::File::create(&log_path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(log_path = %log_path.display(), "Logging initialized");

    tictactui::run_app(theme).await
}
