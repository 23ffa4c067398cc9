//! Hero-region link rows

use super::exec::fetch_first;
use crate::errors::{from_rusqlite, Result};
use herodex_core::model::HeroRegionLink;
use herodex_core::queries::region_queries;
use rusqlite::Connection;

/// SQLite access for the `heroregionlink` table
///
/// Rows are keyed by `(hero_id, region_id)`; the pair is the identity.
pub struct LinkRepo;

impl LinkRepo {
    /// Insert a link row; a repeated pair or a missing hero/region is
    /// rejected by the schema as a constraint violation
    pub fn insert(conn: &Connection, link: &HeroRegionLink) -> Result<HeroRegionLink> {
        conn.execute(
            "INSERT INTO heroregionlink (hero_id, region_id, is_training) VALUES (?1, ?2, ?3)",
            rusqlite::params![link.hero_id, link.region_id, link.is_training],
        )
        .map_err(from_rusqlite)?;
        Ok(*link)
    }

    pub fn get(conn: &Connection, hero_id: i64, region_id: i64) -> Result<Option<HeroRegionLink>> {
        fetch_first(conn, &region_queries::link_for(hero_id, region_id))
    }

    /// Number of rows removed (0 or 1)
    pub fn delete(conn: &Connection, hero_id: i64, region_id: i64) -> Result<usize> {
        conn.execute(
            "DELETE FROM heroregionlink WHERE hero_id = ?1 AND region_id = ?2",
            [hero_id, region_id],
        )
        .map_err(from_rusqlite)
    }

    /// Number of rows updated (0 or 1)
    pub fn set_training(
        conn: &Connection,
        hero_id: i64,
        region_id: i64,
        is_training: bool,
    ) -> Result<usize> {
        conn.execute(
            "UPDATE heroregionlink SET is_training = ?1 WHERE hero_id = ?2 AND region_id = ?3",
            rusqlite::params![is_training, hero_id, region_id],
        )
        .map_err(from_rusqlite)
    }
}
