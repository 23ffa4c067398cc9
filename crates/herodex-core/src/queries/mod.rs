//! Named query statements
//!
//! Each function builds the `Select` behind one repository lookup. Keeping
//! them here, free of I/O, lets the SQL be asserted in unit tests.

pub mod hero_queries;
pub mod region_queries;
pub mod team_queries;

use crate::errors::{HerodexError, Result};

/// Rows fetched for an exactly-one lookup: callers fetch with `LIMIT 2`
pub const EXACTLY_ONE_PROBE: u64 = 2;

/// Reduce rows to exactly one, failing distinctly on zero or several
///
/// `key` describes the lookup for the error message, e.g. `name = 'Deadpond'`.
pub fn expect_one<T>(rows: Vec<T>, entity: &str, key: &str) -> Result<T> {
    let mut rows = rows.into_iter();
    match (rows.next(), rows.next()) {
        (Some(row), None) => Ok(row),
        (None, _) => Err(HerodexError::NoRowFound {
            entity: entity.to_string(),
            key: key.to_string(),
        }),
        (Some(_), Some(_)) => Err(HerodexError::MultipleRowsFound {
            entity: entity.to_string(),
            key: key.to_string(),
        }),
    }
}
