//! Team rows

use super::exec::{fetch_all, fetch_first};
use super::hero_repo::reject_assigned_id;
use crate::errors::{from_rusqlite, Result};
use herodex_core::errors::HerodexError;
use herodex_core::model::{Entity, Hero, Team};
use herodex_core::queries::{hero_queries, team_queries};
use rusqlite::Connection;

/// SQLite access for the `team` table
pub struct TeamRepo;

impl TeamRepo {
    pub fn insert(conn: &Connection, team: &Team) -> Result<Team> {
        team.validate()?;
        reject_assigned_id(Team::TABLE, team.id)?;

        conn.execute(
            "INSERT INTO team (name, headquarters) VALUES (?1, ?2)",
            rusqlite::params![team.name, team.headquarters],
        )
        .map_err(from_rusqlite)?;

        let mut stored = team.clone();
        stored.id = Some(conn.last_insert_rowid());
        tracing::debug!(team_id = stored.id, "team inserted");
        Ok(stored)
    }

    pub fn update(conn: &Connection, team: &Team) -> Result<Team> {
        team.validate()?;
        let id = team.require_id()?;

        let changed = conn
            .execute(
                "UPDATE team SET name = ?1, headquarters = ?2 WHERE id = ?3",
                rusqlite::params![team.name, team.headquarters, id],
            )
            .map_err(from_rusqlite)?;
        if changed == 0 {
            return Err(not_found(id).into());
        }

        Self::require(conn, id)
    }

    /// Delete by identity, returning the number of rows removed
    ///
    /// Members are released by the schema's `ON DELETE SET NULL`; use the
    /// relationship resolver to have that verified.
    pub fn delete(conn: &Connection, id: i64) -> Result<usize> {
        let changed = conn
            .execute("DELETE FROM team WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        tracing::debug!(team_id = id, changed, "team delete");
        Ok(changed)
    }

    pub fn get(conn: &Connection, id: i64) -> Result<Option<Team>> {
        fetch_first(conn, &team_queries::teams_by_id(id))
    }

    pub fn require(conn: &Connection, id: i64) -> Result<Team> {
        Self::get(conn, id)?.ok_or_else(|| not_found(id).into())
    }

    /// Current members, ordered by hero identity
    pub fn members(conn: &Connection, id: i64) -> Result<Vec<Hero>> {
        fetch_all(conn, &hero_queries::heroes_on_team(id))
    }
}

fn not_found(id: i64) -> HerodexError {
    HerodexError::IdentityNotFound {
        entity: Team::TABLE.to_string(),
        id,
    }
}
