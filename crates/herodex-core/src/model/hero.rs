use serde::{Deserialize, Serialize};

use super::entity::{require_identity, require_text, Entity};
use crate::errors::Result;
use crate::query_builder::Column;

/// A hero, optionally on one team
///
/// `id` is `None` until the store assigns it on first insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: Option<i64>,

    /// Indexed, not unique
    pub name: String,

    pub secret_name: String,

    /// Indexed; absent ages never match an age comparison
    pub age: Option<u32>,

    /// Foreign key to `team.id`, cleared when the team is deleted
    pub team_id: Option<i64>,
}

impl Hero {
    pub const ID: Column = Column::new("hero", "id");
    pub const NAME: Column = Column::new("hero", "name");
    pub const SECRET_NAME: Column = Column::new("hero", "secret_name");
    pub const AGE: Column = Column::new("hero", "age");
    pub const TEAM_ID: Column = Column::new("hero", "team_id");

    /// Create a transient hero with no age and no team
    pub fn new(name: impl Into<String>, secret_name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            secret_name: secret_name.into(),
            age: None,
            team_id: None,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_team(mut self, team_id: i64) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn is_persistent(&self) -> bool {
        self.id.is_some()
    }

    /// Identity assigned by the store; fails for a transient value
    pub fn require_id(&self) -> Result<i64> {
        require_identity(Self::TABLE, self.id)
    }
}

impl Entity for Hero {
    const TABLE: &'static str = "hero";
    const COLUMNS: &'static [Column] = &[
        Self::ID,
        Self::NAME,
        Self::SECRET_NAME,
        Self::AGE,
        Self::TEAM_ID,
    ];

    fn validate(&self) -> Result<()> {
        require_text(Self::TABLE, "name", &self.name)?;
        require_text(Self::TABLE, "secret_name", &self.secret_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::HerodexError;

    #[test]
    fn test_new_hero_is_transient() {
        let hero = Hero::new("Deadpond", "Dive Wilson");
        assert!(!hero.is_persistent());
        assert_eq!(hero.age, None);
        assert_eq!(hero.team_id, None);
    }

    #[test]
    fn test_builder_sets_age_and_team() {
        let hero = Hero::new("Rusty-Man", "Tommy Sharp").with_age(48).with_team(1);
        assert_eq!(hero.age, Some(48));
        assert_eq!(hero.team_id, Some(1));
    }

    #[test]
    fn test_blank_secret_name_rejected() {
        let err = Hero::new("Spider-Boy", "  ").validate().unwrap_err();
        assert!(matches!(
            err,
            HerodexError::InvalidField { ref field, .. } if field == "secret_name"
        ));
    }

    #[test]
    fn test_serde_round_trip_keeps_absent_age() {
        let hero = Hero::new("Tarantula", "Natalia Roman-on");
        let json = serde_json::to_string(&hero).unwrap();
        assert!(json.contains("\"age\":null"));
        let back: Hero = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hero);
    }
}
