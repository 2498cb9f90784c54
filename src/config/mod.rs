//! Configuration module - environment variable parsing

use std::env;

/// Application configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Fixed simulation seed; a random one is drawn when unset
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let seed = match env::var("ARENA_SEED") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|_| ConfigError::InvalidSeed(raw))?),
            Err(_) => None,
        };

        Ok(Self {
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            seed,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid ARENA_SEED value: {0}")]
    InvalidSeed(String),
}
