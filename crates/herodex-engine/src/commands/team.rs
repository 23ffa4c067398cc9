//! Team operations

use super::{observe, HeroRepository};
use herodex_core::log_op_start;
use herodex_core::model::Team;
use herodex_store::errors::Result;
use herodex_store::repo::TeamRepo;

impl HeroRepository {
    pub fn create_team(&self, team: &Team) -> Result<Team> {
        log_op_start!("team_create", name = team.name.as_str());
        observe("team_create", || {
            self.db().write(|tx| TeamRepo::insert(tx, team))
        })
    }

    pub fn get_team(&self, id: i64) -> Result<Option<Team>> {
        log_op_start!("team_get", team_id = id);
        observe("team_get", || self.db().read(|conn| TeamRepo::get(conn, id)))
    }

    /// Store the name and headquarters of a persistent team
    pub fn update_team(&self, team: &Team) -> Result<Team> {
        log_op_start!("team_update", team_id = team.id);
        observe("team_update", || {
            self.db().write(|tx| TeamRepo::update(tx, team))
        })
    }
}
