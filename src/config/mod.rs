//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `SUBSCRIPTION_BILLING`
//! prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use subscription_billing::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod server;
mod storage;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, LogFormat, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, logging, middleware)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Storage backend selection
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SUBSCRIPTION_BILLING` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// - `SUBSCRIPTION_BILLING__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SUBSCRIPTION_BILLING__STORAGE__BACKEND=memory` -> `storage.backend = memory`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SUBSCRIPTION_BILLING")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Database settings are checked only for the postgres backend.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if self.storage.uses_postgres() {
            self.database.validate()?;
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
