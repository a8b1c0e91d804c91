//! Environment-driven configuration for the demo binary.

use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "USERCRUD_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "USERCRUD_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "USERCRUD_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "users.db";

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Storage location handed to `open_db`.
    pub db_path: PathBuf,
    pub log_level: String,
    /// File logging is disabled when `None`.
    pub log_dir: Option<String>,
}

impl CliConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: read(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME)),
            log_level: read(LOG_LEVEL_ENV)
                .unwrap_or_else(|| usercrud_core::default_log_level().to_string()),
            log_dir: read(LOG_DIR_ENV),
        }
    }
}
