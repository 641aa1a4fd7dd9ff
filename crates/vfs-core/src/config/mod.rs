//! Application configuration schema and loading.
//!
//! Configuration is read from a TOML file and can be overridden with
//! environment variables prefixed with `VFS` (nested keys separated by
//! `__`, e.g. `VFS__DATABASE__PATH`).

pub mod logging;

pub use logging::LoggingConfig;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::VfsError;
use crate::result::VfsResult;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the given file path plus `VFS`-prefixed
    /// environment variables. The file is optional; defaults apply when
    /// it is absent.
    pub fn load(path: &str) -> VfsResult<Self> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("VFS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| VfsError::configuration(format!("Failed to read configuration: {e}")))?;

        settings
            .try_deserialize()
            .map_err(|e| VfsError::configuration(format!("Invalid configuration: {e}")))
    }
}

/// Database connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub path: String,
    /// Maximum number of pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Seconds to wait when acquiring a connection.
    #[serde(default = "default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u64,
}

fn default_database_path() -> String {
    "vfs.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_connect_timeout_seconds() -> u64 {
    10
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
            connect_timeout_seconds: default_connect_timeout_seconds(),
        }
    }
}
