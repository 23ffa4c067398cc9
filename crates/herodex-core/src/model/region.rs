use serde::{Deserialize, Serialize};

use super::entity::{require_identity, require_text, Entity};
use super::hero::Hero;
use crate::errors::Result;
use crate::query_builder::Column;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: Option<i64>,
    pub name: String,
}

impl Region {
    pub const ID: Column = Column::new("region", "id");
    pub const NAME: Column = Column::new("region", "name");

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Identity assigned by the store; fails for a transient value
    pub fn require_id(&self) -> Result<i64> {
        require_identity(Self::TABLE, self.id)
    }
}

impl Entity for Region {
    const TABLE: &'static str = "region";
    const COLUMNS: &'static [Column] = &[Self::ID, Self::NAME];

    fn validate(&self) -> Result<()> {
        require_text(Self::TABLE, "name", &self.name)
    }
}

/// A hero in a region, with the link's payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionMember {
    pub hero: Hero,
    pub is_training: bool,
}
