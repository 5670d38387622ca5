//! Storage backend selection

use serde::Deserialize;

/// Which adapters back the repository ports.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// PostgreSQL via sqlx; requires `database.url`.
    #[default]
    Postgres,
    /// Process-local maps; data is lost on restart.
    Memory,
}

/// Storage configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
}

impl StorageConfig {
    pub fn uses_postgres(&self) -> bool {
        self.backend == StorageBackend::Postgres
    }
}
