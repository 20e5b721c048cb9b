//! Strictly Games - tic-tac-toe CLI
//!
//! Plays in the current terminal with `--standalone`, otherwise hosts
//! sessions for telnet clients.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use strictly_games::{GameConfig, run_standalone, serve};
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,strictly_games=debug";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(&cli.config)?.merge(cli.overrides())?;

    if cli.standalone {
        run_local(config).await
    } else {
        run_server(config).await
    }
}

/// Play one game in this terminal.
async fn run_local(config: GameConfig) -> Result<()> {
    // Log to a file; the terminal belongs to the game
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    run_standalone(&config).await
}

/// Host sessions for telnet clients until Ctrl-C.
#[instrument(skip_all, fields(listen = %config.listen(), port = config.port()))]
async fn run_server(config: GameConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let listener = TcpListener::bind((config.listen().as_str(), *config.port()))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.listen(), config.port()))?;
    info!(
        "Listening on {}:{} - connect with `telnet <host> {}`",
        config.listen(),
        config.port(),
        config.port()
    );

    serve(listener, config, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
        info!("Ctrl-C received");
    })
    .await
}
