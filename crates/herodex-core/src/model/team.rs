use serde::{Deserialize, Serialize};

use super::entity::{require_identity, require_text, Entity};
use super::hero::Hero;
use crate::errors::Result;
use crate::query_builder::Column;

/// A team of heroes
///
/// Members are not stored on the team; read them by querying heroes whose
/// `team_id` is this team's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: Option<i64>,
    pub name: String,
    pub headquarters: String,
}

impl Team {
    pub const ID: Column = Column::new("team", "id");
    pub const NAME: Column = Column::new("team", "name");
    pub const HEADQUARTERS: Column = Column::new("team", "headquarters");

    pub fn new(name: impl Into<String>, headquarters: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            headquarters: headquarters.into(),
        }
    }

    /// Identity assigned by the store; fails for a transient value
    pub fn require_id(&self) -> Result<i64> {
        require_identity(Self::TABLE, self.id)
    }
}

impl Entity for Team {
    const TABLE: &'static str = "team";
    const COLUMNS: &'static [Column] = &[Self::ID, Self::NAME, Self::HEADQUARTERS];

    fn validate(&self) -> Result<()> {
        require_text(Self::TABLE, "name", &self.name)?;
        require_text(Self::TABLE, "headquarters", &self.headquarters)
    }
}

/// A team together with its members as read at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamWithHeroes {
    pub team: Team,
    pub heroes: Vec<Hero>,
}

impl TeamWithHeroes {
    pub fn contains(&self, hero_id: i64) -> bool {
        self.heroes.iter().any(|h| h.id == Some(hero_id))
    }
}

/// Outcome of assigning a hero to a team: both sides, refreshed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMembership {
    pub hero: Hero,
    pub roster: TeamWithHeroes,
}
