//! Command-line interface for strictly_games.

use clap::Parser;
use std::path::PathBuf;
use strictly_games::ConfigOverrides;

/// Strictly Games - tic-tac-toe in your terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Play tic-tac-toe in your terminal, or host it for telnet players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Play in the current terminal instead of starting the server
    #[arg(short, long)]
    pub standalone: bool,

    /// Interface to listen on
    #[arg(short, long)]
    pub listen: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to the TOML config file (ignored if missing)
    #[arg(long, default_value = "strictly_games.toml")]
    pub config: PathBuf,

    /// Seed for reproducible starting players
    #[arg(long)]
    pub seed: Option<u64>,

    /// Cursor blink period in milliseconds
    #[arg(long)]
    pub blink_ms: Option<u64>,
}

impl Cli {
    /// Flags that replace values from the config file.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            listen: self.listen.clone(),
            port: self.port,
            blink_interval_ms: self.blink_ms,
            seed: self.seed,
        }
    }
}
