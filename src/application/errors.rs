//! Application layer errors

use std::path::PathBuf;
use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Configuration errors, fatal at startup
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required secret: {0}")]
    MissingSecret(&'static str),

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Failure of one call to an external content provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Request timed out")]
    Timeout,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed payload: {0}")]
    Payload(String),

    #[error("Provider reported failure: {0}")]
    Unsuccessful(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout
        } else if e.is_decode() {
            ProviderError::Payload(e.to_string())
        } else {
            ProviderError::Transport(e.to_string())
        }
    }
}
