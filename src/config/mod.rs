//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SQUARE_CONNECT_` prefix and nested values use underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use square_connect::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod square;

pub use error::{ConfigError, ValidationError};
pub use square::SquareConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Square configuration (Connect API credential, webhook signature key)
    pub square: SquareConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SQUARE_CONNECT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SQUARE_CONNECT__SQUARE__ACCESS_TOKEN=...` -> `square.access_token`
    /// - `SQUARE_CONNECT__SQUARE__SIGNATURE_KEY=...` -> `square.signature_key`
    /// - `SQUARE_CONNECT__SQUARE__API_BASE_URL=...` -> `square.api_base_url`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required environment variables are missing
    /// or values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SQUARE_CONNECT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.square.validate()?;
        Ok(())
    }
}
