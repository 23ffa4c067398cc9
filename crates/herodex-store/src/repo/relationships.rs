//! Relationship resolver
//!
//! Maintains both sides of the Team → Hero and Hero ↔ Region associations.
//! Each function runs against the caller's connection or transaction and
//! leaves commit to the caller, so a multi-step change is one unit.
//!
//! Team deletion relies on the schema's `ON DELETE SET NULL`; the resolver
//! captures the roster first and verifies the effect before returning.

use super::exec::expect_deleted;
use super::hero_repo::HeroRepo;
use super::link_repo::LinkRepo;
use super::team_repo::TeamRepo;
use crate::errors::Result;
use herodex_core::errors::HerodexError;
use herodex_core::model::{Entity, Hero, HeroRegionLink, Team, TeamMembership, TeamWithHeroes};
use rusqlite::Connection;

pub struct RelationshipResolver;

impl RelationshipResolver {
    /// The team and its current members
    pub fn team_roster(conn: &Connection, team_id: i64) -> Result<TeamWithHeroes> {
        let team = TeamRepo::require(conn, team_id)?;
        let heroes = TeamRepo::members(conn, team_id)?;
        Ok(TeamWithHeroes { team, heroes })
    }

    /// Put a hero on a team, returning both sides as now stored
    pub fn assign_team(conn: &Connection, hero_id: i64, team_id: i64) -> Result<TeamMembership> {
        TeamRepo::require(conn, team_id)?;
        HeroRepo::require(conn, hero_id)?;

        let hero = HeroRepo::set_team(conn, hero_id, Some(team_id))?;
        let roster = Self::team_roster(conn, team_id)?;
        tracing::debug!(hero_id, team_id, members = roster.heroes.len(), "hero assigned");

        Ok(TeamMembership { hero, roster })
    }

    /// Take a hero off whatever team it is on
    pub fn clear_team(conn: &Connection, hero_id: i64) -> Result<Hero> {
        HeroRepo::set_team(conn, hero_id, None)
    }

    /// Delete a team and return the heroes it released
    ///
    /// Fails with a consistency error if a former member still references
    /// the team, or vanished instead of being released.
    pub fn delete_team(conn: &Connection, team_id: i64) -> Result<Vec<Hero>> {
        let roster = Self::team_roster(conn, team_id)?;
        let key = format!("id = {}", team_id);
        expect_deleted(TeamRepo::delete(conn, team_id)?, Team::TABLE, &key)?;
        if TeamRepo::get(conn, team_id)?.is_some() {
            return Err(HerodexError::RowNotDeleted {
                entity: Team::TABLE.to_string(),
                key,
            }
            .into());
        }

        let mut released = Vec::with_capacity(roster.heroes.len());
        for member in &roster.heroes {
            let hero_id = member.require_id()?;
            match HeroRepo::get(conn, hero_id)? {
                None => return Err(HerodexError::ReferentRemoved { hero_id, team_id }.into()),
                Some(hero) if hero.team_id.is_some() => {
                    return Err(HerodexError::ReferenceNotCleared { hero_id, team_id }.into())
                }
                Some(hero) => released.push(hero),
            }
        }

        tracing::debug!(team_id, released = released.len(), "team deleted, members released");
        Ok(released)
    }

    /// Insert a team together with its members
    ///
    /// Transient heroes are inserted pointing at the new team; persistent
    /// heroes are moved onto it.
    pub fn create_team_with_heroes(
        conn: &Connection,
        team: &Team,
        heroes: &[Hero],
    ) -> Result<TeamWithHeroes> {
        let team = TeamRepo::insert(conn, team)?;
        let team_id = team.require_id()?;

        for hero in heroes {
            match hero.id {
                Some(hero_id) => {
                    HeroRepo::set_team(conn, hero_id, Some(team_id))?;
                }
                None => {
                    let mut member = hero.clone();
                    member.team_id = Some(team_id);
                    HeroRepo::insert(conn, &member)?;
                }
            }
        }

        Self::team_roster(conn, team_id)
    }

    /// Link a hero to a region, not training
    pub fn link_region(conn: &Connection, hero_id: i64, region_id: i64) -> Result<HeroRegionLink> {
        if LinkRepo::get(conn, hero_id, region_id)?.is_some() {
            return Err(HerodexError::DuplicateRegionLink { hero_id, region_id }.into());
        }
        LinkRepo::insert(conn, &HeroRegionLink::new(hero_id, region_id))
    }

    /// Remove a hero's link to a region, returning the removed link
    pub fn unlink_region(
        conn: &Connection,
        hero_id: i64,
        region_id: i64,
    ) -> Result<HeroRegionLink> {
        let link = LinkRepo::get(conn, hero_id, region_id)?
            .ok_or(HerodexError::RegionLinkNotFound { hero_id, region_id })?;
        LinkRepo::delete(conn, hero_id, region_id)?;
        Ok(link)
    }

    /// Change the training flag on an existing link
    pub fn set_training(
        conn: &Connection,
        hero_id: i64,
        region_id: i64,
        is_training: bool,
    ) -> Result<HeroRegionLink> {
        if LinkRepo::set_training(conn, hero_id, region_id, is_training)? == 0 {
            return Err(HerodexError::RegionLinkNotFound { hero_id, region_id }.into());
        }
        LinkRepo::get(conn, hero_id, region_id)?.ok_or_else(|| {
            HerodexError::RegionLinkNotFound { hero_id, region_id }.into()
        })
    }
}
