//! CLI error types

use thiserror::Error;

use crate::http_server::ConfigError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced to the terminal
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Refusing to clobber an existing config file
    #[error("Config file already exists: {0}")]
    ConfigExists(String),

    /// An argument or environment value was rejected
    #[error("{0}")]
    InvalidArgument(String),

    /// Serialization failure while writing the config
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Runtime or socket failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
