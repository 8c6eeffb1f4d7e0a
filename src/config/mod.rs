//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CONTINUUM_` prefix and nested values use underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use continuum::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod auth;
mod database;
mod error;
mod server;
mod validation;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use validation::ValidationConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the Continuum backend.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Authentication configuration (JWT session secret)
    pub auth: AuthConfig,

    /// Decision validation policy
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CONTINUUM` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CONTINUUM__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CONTINUUM__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONTINUUM")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Performs semantic validation of configuration:
    /// - URL formats
    /// - Pool size constraints
    /// - Production-specific requirements (e.g., secret length)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
