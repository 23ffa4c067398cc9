//! Repository operations with boundary logging.
//!
//! `HeroRepository` is the public surface. Each method is one unit of work
//! on its own connection; mutations run in a transaction that commits only
//! on success.
//!
//! ## Logging Ownership
//!
//! This layer owns lifecycle logging for every operation:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.

pub mod hero;
pub mod region;
pub mod roster;
pub mod team;

use herodex_core::{log_op_end, log_op_error, log_op_start};
use herodex_store::errors::Result;
use herodex_store::{Database, StoreConfig};
use std::time::Instant;

/// Persistence operations over heroes, teams and regions
///
/// Holds configuration only; no connection outlives a call.
#[derive(Debug, Clone)]
pub struct HeroRepository {
    db: Database,
}

impl HeroRepository {
    /// Create the schema if needed and return a repository over it
    ///
    /// ## Errors
    ///
    /// - `Persistence`: the database file cannot be opened or migrated
    /// - `ConstraintViolation`: an applied migration's checksum changed
    pub fn open(config: StoreConfig) -> Result<Self> {
        log_op_start!("repository_open");
        let db = Database::new(config);
        observe("repository_open", || db.initialize())?;
        Ok(Self { db })
    }

    pub fn config(&self) -> &StoreConfig {
        self.db.config()
    }

    pub(crate) fn db(&self) -> &Database {
        &self.db
    }
}

/// Run `work`, logging its end or its failure with the elapsed time
pub(crate) fn observe<T, F>(op: &'static str, work: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let start = Instant::now();
    let result = work().map_err(|e| {
        log_op_error!(op, e.clone(), duration_ms = start.elapsed().as_millis() as u64);
        e
    })?;
    log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64);
    Ok(result)
}

/// Like [`observe`], also logging how many rows came back
pub(crate) fn observe_rows<T, F>(op: &'static str, work: F) -> Result<Vec<T>>
where
    F: FnOnce() -> Result<Vec<T>>,
{
    let start = Instant::now();
    let rows = work().map_err(|e| {
        log_op_error!(op, e.clone(), duration_ms = start.elapsed().as_millis() as u64);
        e
    })?;
    log_op_end!(
        op,
        duration_ms = start.elapsed().as_millis() as u64,
        row_count = rows.len() as u64
    );
    Ok(rows)
}
