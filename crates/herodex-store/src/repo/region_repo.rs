//! Region rows

use super::exec::{fetch_all, fetch_first, fetch_one, fetch_pairs};
use super::hero_repo::reject_assigned_id;
use crate::errors::{from_rusqlite, Result};
use herodex_core::errors::HerodexError;
use herodex_core::model::{Entity, Hero, HeroRegionLink, Region, RegionMember};
use herodex_core::queries::{hero_queries, region_queries};
use rusqlite::Connection;

/// SQLite access for the `region` table
pub struct RegionRepo;

impl RegionRepo {
    pub fn insert(conn: &Connection, region: &Region) -> Result<Region> {
        region.validate()?;
        reject_assigned_id(Region::TABLE, region.id)?;

        conn.execute("INSERT INTO region (name) VALUES (?1)", [&region.name])
            .map_err(from_rusqlite)?;

        let mut stored = region.clone();
        stored.id = Some(conn.last_insert_rowid());
        tracing::debug!(region_id = stored.id, "region inserted");
        Ok(stored)
    }

    pub fn get(conn: &Connection, id: i64) -> Result<Option<Region>> {
        fetch_first(conn, &region_queries::regions_by_id(id))
    }

    pub fn require(conn: &Connection, id: i64) -> Result<Region> {
        Self::get(conn, id)?.ok_or_else(|| {
            HerodexError::IdentityNotFound {
                entity: Region::TABLE.to_string(),
                id,
            }
            .into()
        })
    }

    /// The single region with this name
    pub fn find_one_named(conn: &Connection, name: &str) -> Result<Region> {
        fetch_one(
            conn,
            &region_queries::regions_named(name),
            &format!("name = '{}'", name),
        )
    }

    /// Heroes linked to the region, ordered by hero identity
    pub fn heroes(conn: &Connection, id: i64) -> Result<Vec<Hero>> {
        fetch_all(conn, &hero_queries::heroes_in_region(id))
    }

    /// Heroes linked to the region with their training flag
    pub fn members(conn: &Connection, id: i64) -> Result<Vec<RegionMember>> {
        let pairs: Vec<(Hero, HeroRegionLink)> =
            fetch_pairs(conn, &hero_queries::heroes_in_region(id))?;
        Ok(pairs
            .into_iter()
            .map(|(hero, link)| RegionMember {
                hero,
                is_training: link.is_training,
            })
            .collect())
    }

    /// Regions a hero is linked to
    pub fn for_hero(conn: &Connection, hero_id: i64) -> Result<Vec<Region>> {
        fetch_all(conn, &region_queries::regions_for_hero(hero_id))
    }
}
