//! Row decoding and parameter binding
//!
//! A joined select projects each entity's columns back to back, so every
//! decoder reads from a starting `offset`.

use herodex_core::model::{Entity, Hero, HeroRegionLink, Region, Team};
use herodex_core::query_builder::Value;
use rusqlite::types::Value as SqlValue;
use rusqlite::Row;

/// Decode an entity from `Entity::COLUMNS.len()` columns starting at `offset`
pub trait FromRow: Entity {
    fn from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Self>;

    /// Decode, or `None` when the identity column is NULL (unmatched outer join)
    fn from_optional_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Option<Self>> {
        let id: Option<i64> = row.get(offset)?;
        match id {
            Some(_) => Self::from_row(row, offset).map(Some),
            None => Ok(None),
        }
    }
}

impl FromRow for Hero {
    fn from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Self> {
        Ok(Hero {
            id: row.get(offset)?,
            name: row.get(offset + 1)?,
            secret_name: row.get(offset + 2)?,
            age: row.get(offset + 3)?,
            team_id: row.get(offset + 4)?,
        })
    }
}

impl FromRow for Team {
    fn from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Self> {
        Ok(Team {
            id: row.get(offset)?,
            name: row.get(offset + 1)?,
            headquarters: row.get(offset + 2)?,
        })
    }
}

impl FromRow for Region {
    fn from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Self> {
        Ok(Region {
            id: row.get(offset)?,
            name: row.get(offset + 1)?,
        })
    }
}

impl FromRow for HeroRegionLink {
    fn from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Self> {
        Ok(HeroRegionLink {
            hero_id: row.get(offset)?,
            region_id: row.get(offset + 1)?,
            is_training: row.get(offset + 2)?,
        })
    }
}

/// Convert a builder literal into a bindable SQLite value
pub fn to_sql_value(value: Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Integer(v) => SqlValue::Integer(v),
        Value::Text(v) => SqlValue::Text(v),
        Value::Bool(v) => SqlValue::Integer(i64::from(v)),
    }
}
