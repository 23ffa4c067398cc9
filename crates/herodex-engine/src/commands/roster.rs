//! Team membership and cross-entity reads
//!
//! Membership is a hero's `team_id`; the team side is always read back by
//! query rather than held as a collection.

use super::{observe, observe_rows, HeroRepository};
use herodex_core::log_op_start;
use herodex_core::model::{Hero, Team, TeamMembership, TeamWithHeroes};
use herodex_core::queries::hero_queries;
use herodex_store::errors::Result;
use herodex_store::repo::exec::{fetch_left_pairs, fetch_pairs};
use herodex_store::repo::{RelationshipResolver, TeamRepo};

impl HeroRepository {
    /// Put a hero on a team
    ///
    /// ## Errors
    ///
    /// - `NotFound`: the hero or the team does not exist
    pub fn add_hero_to_team(&self, hero_id: i64, team_id: i64) -> Result<TeamMembership> {
        log_op_start!("team_add_hero", hero_id = hero_id, team_id = team_id);
        observe("team_add_hero", || {
            self.db()
                .write(|tx| RelationshipResolver::assign_team(tx, hero_id, team_id))
        })
    }

    /// Clear a hero's team
    pub fn remove_hero_from_team(&self, hero_id: i64) -> Result<Hero> {
        log_op_start!("team_remove_hero", hero_id = hero_id);
        observe("team_remove_hero", || {
            self.db()
                .write(|tx| RelationshipResolver::clear_team(tx, hero_id))
        })
    }

    /// Insert a team and its heroes as one unit
    ///
    /// Transient heroes are created on the team; persistent ones move to it.
    pub fn create_team_with_heroes(&self, team: &Team, heroes: &[Hero]) -> Result<TeamWithHeroes> {
        log_op_start!(
            "team_create_with_heroes",
            name = team.name.as_str(),
            row_count = heroes.len() as u64
        );
        observe("team_create_with_heroes", || {
            self.db()
                .write(|tx| RelationshipResolver::create_team_with_heroes(tx, team, heroes))
        })
    }

    /// Delete a team, returning the heroes it released
    ///
    /// Members are kept with their team cleared.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: the team does not exist
    /// - `ConsistencyFailure`: a member still references the team, or was
    ///   removed, after the delete
    pub fn delete_team(&self, id: i64) -> Result<Vec<Hero>> {
        log_op_start!("team_delete", team_id = id);
        observe_rows("team_delete", || {
            self.db()
                .write(|tx| RelationshipResolver::delete_team(tx, id))
        })
    }

    /// Heroes paired with their team; heroes without one are omitted
    pub fn get_heroes_with_teams(&self) -> Result<Vec<(Hero, Team)>> {
        log_op_start!("hero_list_with_teams");
        observe_rows("hero_list_with_teams", || {
            self.db()
                .read(|conn| fetch_pairs(conn, &hero_queries::heroes_with_teams()))
        })
    }

    /// Every hero with its team, or `None` for heroes without one
    pub fn get_heroes_and_teams(&self) -> Result<Vec<(Hero, Option<Team>)>> {
        log_op_start!("hero_list_and_teams");
        observe_rows("hero_list_and_teams", || {
            self.db()
                .read(|conn| fetch_left_pairs(conn, &hero_queries::heroes_and_teams()))
        })
    }

    /// Current members of a team, ordered by hero identity
    pub fn get_heroes_for_team(&self, team_id: i64) -> Result<Vec<Hero>> {
        log_op_start!("team_list_heroes", team_id = team_id);
        observe_rows("team_list_heroes", || {
            self.db().read(|conn| TeamRepo::members(conn, team_id))
        })
    }

    /// A team and its members; `NotFound` if the team does not exist
    pub fn get_team_with_heroes(&self, team_id: i64) -> Result<TeamWithHeroes> {
        log_op_start!("team_get_with_heroes", team_id = team_id);
        observe("team_get_with_heroes", || {
            self.db()
                .read(|conn| RelationshipResolver::team_roster(conn, team_id))
        })
    }
}
