//! Store configuration
//!
//! The database location comes from `DB_NAME`, read from the process
//! environment or a dotenv file.

use crate::errors::{config_error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment key naming the SQLite database file
pub const DB_NAME_VAR: &str = "DB_NAME";

/// Environment key for the busy timeout in milliseconds
pub const DB_BUSY_TIMEOUT_VAR: &str = "DB_BUSY_TIMEOUT_MS";

pub const DEFAULT_DATABASE: &str = "database.db";
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub database_path: PathBuf,
    pub busy_timeout: Duration,
}

impl StoreConfig {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// Read configuration from the process environment
    ///
    /// Loads `.env` from the working directory first when one exists.
    pub fn from_env() -> Result<Self> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(config_error(format!("failed to load .env: {}", err)));
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration from a dotenv file without touching the process
    /// environment
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let entries = dotenvy::from_path_iter(path)
            .map_err(|e| config_error(format!("cannot read {}: {}", path.display(), e)))?
            .collect::<std::result::Result<HashMap<String, String>, _>>()
            .map_err(|e| config_error(format!("cannot parse {}: {}", path.display(), e)))?;
        Self::from_lookup(|key| entries.get(key).cloned())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_path = lookup(DB_NAME_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let busy_timeout = match lookup(DB_BUSY_TIMEOUT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| {
                    config_error(format!("{} must be milliseconds, got '{}'", DB_BUSY_TIMEOUT_VAR, raw))
                })?,
            None => DEFAULT_BUSY_TIMEOUT,
        };

        Ok(Self {
            database_path: PathBuf::from(database_path),
            busy_timeout,
        })
    }
}
