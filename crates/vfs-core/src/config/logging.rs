//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "warn", "info", "vfs=debug").
    #[serde(default = "default_level")]
    pub level: String,
    /// Output format: "text" or "json".
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}
