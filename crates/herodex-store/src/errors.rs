//! Error handling for herodex-store
//!
//! Wraps herodex-core ExError with store-specific constructors

use herodex_core::errors::{ExError, ExErrorKind};
use rusqlite::ErrorCode;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error for an already-applied migration
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a configuration error
pub fn config_error(reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::Configuration)
        .with_op("config")
        .with_message(reason)
}

/// Create a database error from rusqlite::Error
///
/// Constraint failures (unique, primary key, foreign key, not null) become
/// `ConstraintViolation`; everything else is `Persistence`.
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    match &err {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation =>
        {
            ExError::new(ExErrorKind::ConstraintViolation)
                .with_op("sqlite")
                .with_message(format!(
                    "{} constraint failed: {}",
                    constraint_label(failure.extended_code),
                    err
                ))
        }
        rusqlite::Error::QueryReturnedNoRows => ExError::new(ExErrorKind::NotFound)
            .with_op("sqlite")
            .with_message(err.to_string()),
        _ => ExError::new(ExErrorKind::Persistence)
            .with_op("sqlite")
            .with_message(err.to_string()),
    }
}

fn constraint_label(extended_code: i32) -> &'static str {
    match extended_code {
        rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY => "foreign key",
        rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY => "primary key",
        rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE => "unique",
        rusqlite::ffi::SQLITE_CONSTRAINT_NOTNULL => "not null",
        _ => "integrity",
    }
}
