//! PostgreSQL settings, read only when `storage.backend = postgres`.
//!
//! Every field has a default except `url`; a postgres deployment must set
//! `SUBSCRIPTION_BILLING__DATABASE__URL`.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound on `max_connections`.
const POOL_CEILING: u32 = 100;

/// Pool sizing, connection timeouts and startup migrations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `postgres://` or `postgresql://` URL
    pub url: String,
    pub min_connections: u32,
    pub max_connections: u32,
    /// Seconds to wait for a free connection
    pub acquire_timeout_secs: u64,
    /// Seconds before an idle connection is closed
    pub idle_timeout_secs: u64,
    /// Seconds before any connection is recycled
    pub max_lifetime_secs: u64,
    /// Apply `migrations/` before serving
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            min_connections: 2,
            max_connections: 20,
            acquire_timeout_secs: 30,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
            run_migrations: true,
        }
    }
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }

    /// Checks the URL scheme and that the pool bounds are ordered and capped.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("SUBSCRIPTION_BILLING__DATABASE__URL"));
        }
        let scheme_ok = ["postgres://", "postgresql://"]
            .iter()
            .any(|scheme| self.url.starts_with(scheme));
        if !scheme_ok {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.min_connections > self.max_connections {
            return Err(ValidationError::InvalidPoolSize);
        }
        if self.max_connections > POOL_CEILING {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        Ok(())
    }
}
