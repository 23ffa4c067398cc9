//! Team lookups

use crate::model::Team;
use crate::query_builder::{Predicate, Select};

pub fn teams_by_id(id: i64) -> Select {
    Select::from::<Team>().filter(Predicate::eq(Team::ID, id))
}
