//! Hero rows

use super::exec::{fetch_first, fetch_one};
use crate::errors::{from_rusqlite, Result};
use herodex_core::errors::HerodexError;
use herodex_core::model::{Entity, Hero};
use herodex_core::queries::hero_queries;
use rusqlite::Connection;

/// SQLite access for the `hero` table
pub struct HeroRepo;

impl HeroRepo {
    /// Insert a transient hero and return it with its assigned identity
    pub fn insert(conn: &Connection, hero: &Hero) -> Result<Hero> {
        hero.validate()?;
        reject_assigned_id(Hero::TABLE, hero.id)?;

        conn.execute(
            "INSERT INTO hero (name, secret_name, age, team_id) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![hero.name, hero.secret_name, hero.age, hero.team_id],
        )
        .map_err(from_rusqlite)?;

        let mut stored = hero.clone();
        stored.id = Some(conn.last_insert_rowid());
        tracing::debug!(hero_id = stored.id, "hero inserted");
        Ok(stored)
    }

    /// Re-persist every column of an existing hero
    pub fn update(conn: &Connection, hero: &Hero) -> Result<Hero> {
        hero.validate()?;
        let id = hero.require_id()?;

        let changed = conn
            .execute(
                "UPDATE hero SET name = ?1, secret_name = ?2, age = ?3, team_id = ?4 WHERE id = ?5",
                rusqlite::params![hero.name, hero.secret_name, hero.age, hero.team_id, id],
            )
            .map_err(from_rusqlite)?;
        if changed == 0 {
            return Err(not_found(id).into());
        }

        Self::require(conn, id)
    }

    pub fn set_age(conn: &Connection, id: i64, age: Option<u32>) -> Result<Hero> {
        let changed = conn
            .execute(
                "UPDATE hero SET age = ?1 WHERE id = ?2",
                rusqlite::params![age, id],
            )
            .map_err(from_rusqlite)?;
        if changed == 0 {
            return Err(not_found(id).into());
        }
        Self::require(conn, id)
    }

    /// Point the hero at a team, or clear the reference with `None`
    pub fn set_team(conn: &Connection, id: i64, team_id: Option<i64>) -> Result<Hero> {
        let changed = conn
            .execute(
                "UPDATE hero SET team_id = ?1 WHERE id = ?2",
                rusqlite::params![team_id, id],
            )
            .map_err(from_rusqlite)?;
        if changed == 0 {
            return Err(not_found(id).into());
        }
        Self::require(conn, id)
    }

    /// Delete by identity; link rows go with it
    ///
    /// Returns the number of rows removed. Callers that looked the hero up
    /// first pass the count through [`expect_deleted`](super::exec::expect_deleted).
    pub fn delete(conn: &Connection, id: i64) -> Result<usize> {
        let changed = conn
            .execute("DELETE FROM hero WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        tracing::debug!(hero_id = id, changed, "hero delete");
        Ok(changed)
    }

    pub fn get(conn: &Connection, id: i64) -> Result<Option<Hero>> {
        fetch_first(conn, &hero_queries::heroes_by_id(id))
    }

    /// Like [`HeroRepo::get`] but a miss is `NotFound`
    pub fn require(conn: &Connection, id: i64) -> Result<Hero> {
        Self::get(conn, id)?.ok_or_else(|| not_found(id).into())
    }

    /// The single hero with this name
    pub fn find_one_named(conn: &Connection, name: &str) -> Result<Hero> {
        fetch_one(
            conn,
            &hero_queries::heroes_named(name),
            &format!("name = '{}'", name),
        )
    }
}

fn not_found(id: i64) -> HerodexError {
    HerodexError::IdentityNotFound {
        entity: Hero::TABLE.to_string(),
        id,
    }
}

/// Inserts take transient values only; the store assigns identities
pub(crate) fn reject_assigned_id(entity: &str, id: Option<i64>) -> Result<()> {
    match id {
        Some(id) => Err(HerodexError::InvalidField {
            entity: entity.to_string(),
            field: "id".to_string(),
            reason: format!("already assigned ({}); insert takes a transient value", id),
        }
        .into()),
        None => Ok(()),
    }
}
