//! Execute built selects against a connection

use super::rows::{to_sql_value, FromRow};
use crate::errors::{from_rusqlite, Result};
use herodex_core::errors::HerodexError;
use herodex_core::queries::{expect_one, EXACTLY_ONE_PROBE};
use herodex_core::query_builder::Select;
use rusqlite::{params_from_iter, Connection, Row};

fn query_rows<T, F>(conn: &Connection, select: &Select, mut decode: F) -> Result<Vec<T>>
where
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let (sql, params) = select.to_sql();
    tracing::debug!(sql = %sql, params = params.len(), "select");

    let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map(params_from_iter(params.into_iter().map(to_sql_value)), |row| {
            decode(row)
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(rows)
}

/// Every matching row
pub fn fetch_all<T: FromRow>(conn: &Connection, select: &Select) -> Result<Vec<T>> {
    query_rows(conn, select, |row| T::from_row(row, 0))
}

/// The first matching row, or `None`
pub fn fetch_first<T: FromRow>(conn: &Connection, select: &Select) -> Result<Option<T>> {
    let rows = fetch_all(conn, &select.clone().limit(1))?;
    Ok(rows.into_iter().next())
}

/// Exactly one matching row
///
/// Fetches at most two rows so that "several" is distinguishable from "one"
/// without reading the whole result.
pub fn fetch_one<T: FromRow>(conn: &Connection, select: &Select, key: &str) -> Result<T> {
    let rows = fetch_all(conn, &select.clone().limit(EXACTLY_ONE_PROBE))?;
    Ok(expect_one(rows, T::TABLE, key)?)
}

/// Turn the row count of a delete on a row already looked up into a result
///
/// Zero means the store refused a delete the caller had grounds to expect,
/// so it is a consistency failure rather than a miss.
pub fn expect_deleted(changed: usize, entity: &str, key: &str) -> Result<()> {
    if changed == 0 {
        return Err(HerodexError::RowNotDeleted {
            entity: entity.to_string(),
            key: key.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Inner-join pairs: `A`'s columns followed by `B`'s
pub fn fetch_pairs<A: FromRow, B: FromRow>(
    conn: &Connection,
    select: &Select,
) -> Result<Vec<(A, B)>> {
    let split = A::COLUMNS.len();
    query_rows(conn, select, |row| {
        Ok((A::from_row(row, 0)?, B::from_row(row, split)?))
    })
}

/// Left-join pairs: `B` is `None` where the join found no match
pub fn fetch_left_pairs<A: FromRow, B: FromRow>(
    conn: &Connection,
    select: &Select,
) -> Result<Vec<(A, Option<B>)>> {
    let split = A::COLUMNS.len();
    query_rows(conn, select, |row| {
        Ok((A::from_row(row, 0)?, B::from_optional_row(row, split)?))
    })
}
