//! Game configuration: optional TOML file, overridden by CLI flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Runtime configuration for both standalone and server mode.
///
/// ```toml
/// listen = "0.0.0.0"
/// port = 23234
/// blink_interval_ms = 500
/// seed = 42
/// log_file = "strictly_games.log"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Interface the server listens on.
    listen: String,

    /// Port the server listens on.
    port: u16,

    /// Cursor blink period in milliseconds.
    blink_interval_ms: u64,

    /// Seed for deterministic starting players; entropy when absent.
    seed: Option<u64>,

    /// Log file used in standalone mode, where stderr belongs to the game.
    log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0".to_string(),
            port: 23234,
            blink_interval_ms: 500,
            seed: None,
            log_file: PathBuf::from("strictly_games.log"),
        }
    }
}

/// Values that replace file settings when present, usually from the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Replaces `listen`.
    pub listen: Option<String>,
    /// Replaces `port`.
    pub port: Option<u16>,
    /// Replaces `blink_interval_ms`.
    pub blink_interval_ms: Option<u64>,
    /// Replaces `seed`.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(listen = %config.listen, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies overrides and re-validates.
    #[instrument(skip(self))]
    pub fn merge(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(listen) = overrides.listen {
            self.listen = listen;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(blink) = overrides.blink_interval_ms {
            self.blink_interval_ms = blink;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.blink_interval_ms == 0 {
            return Err(ConfigError::new(
                "blink_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Blink period as a [`Duration`].
    pub fn blink_interval(&self) -> Duration {
        Duration::from_millis(self.blink_interval_ms)
    }

    /// Random source for the `session_id`-th session. With a seed, every
    /// session gets its own reproducible stream.
    pub fn session_rng(&self, session_id: u64) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(session_id)),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
