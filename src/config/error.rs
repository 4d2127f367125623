//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout (must be 1-300 seconds)")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid log filter: {0}")]
    InvalidLogLevel(String),

    #[error("Invalid {field} prefix {value:?}: must be non-empty ASCII alphanumeric")]
    InvalidPrefix { field: &'static str, value: String },

    #[error("Display and group prefixes must differ")]
    DuplicatePrefix,
}
