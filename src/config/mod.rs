//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `SIGNAGE` prefix and
//! `__` between nesting levels. Every field has a default, so an empty
//! environment yields a working configuration.
//!
//! # Example
//!
//! ```no_run
//! use signage_registry::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod registry;
mod server;

pub use error::{ConfigError, ValidationError};
pub use registry::RegistryConfig;
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, logging, timeouts)
    #[serde(default)]
    pub server: ServerConfig,

    /// Identifier allocation
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SIGNAGE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `SIGNAGE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SIGNAGE__REGISTRY__DISPLAY_PREFIX=screen` -> `registry.display_prefix = "screen"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its type.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SIGNAGE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.registry.validate()?;
        Ok(())
    }
}
