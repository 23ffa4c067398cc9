//! Database connection management
//!
//! `Database` is the storage handle. It holds configuration only; every
//! operation opens its own connection, and the connection (plus any
//! transaction) is dropped on every exit path.

use crate::config::StoreConfig;
use crate::errors::{from_rusqlite, Result};
use crate::migrations::apply_migrations;
use rusqlite::{Connection, Transaction};
use std::path::Path;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Configure a connection: foreign keys on, WAL journal
///
/// `ON DELETE SET NULL` and `ON DELETE CASCADE` only fire when foreign keys
/// are enabled, and SQLite enables them per connection.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", true)
        .map_err(from_rusqlite)?;

    // journal_mode answers with the mode in effect ("memory" for in-memory dbs)
    let mode: String = conn
        .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
        .map_err(from_rusqlite)?;
    tracing::debug!(journal_mode = %mode, "connection configured");

    Ok(())
}

/// Scoped access to the configured database file
#[derive(Debug, Clone)]
pub struct Database {
    config: StoreConfig,
}

impl Database {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Open and configure a fresh connection
    pub fn connect(&self) -> Result<Connection> {
        let conn = open(&self.config.database_path)?;
        conn.busy_timeout(self.config.busy_timeout)
            .map_err(from_rusqlite)?;
        configure(&conn)?;
        Ok(conn)
    }

    /// Create the schema if absent; safe to call on every start
    pub fn initialize(&self) -> Result<()> {
        let mut conn = self.connect()?;
        apply_migrations(&mut conn)
    }

    /// Run a read-only unit of work on its own connection
    pub fn read<T, F>(&self, work: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.connect()?;
        work(&conn)
    }

    /// Run a unit of work in a transaction on its own connection
    ///
    /// Commits only when `work` returns `Ok`. On error the transaction is
    /// dropped, which rolls it back, so nothing from the unit is persisted.
    pub fn write<T, F>(&self, work: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let mut conn = self.connect()?;
        let tx = conn.transaction().map_err(from_rusqlite)?;
        let value = work(&tx)?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(value)
    }
}
