use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::errors::Result;
use crate::query_builder::Column;

/// Many-to-many edge between a hero and a region
///
/// Identity is the `(hero_id, region_id)` pair, so at most one row exists per
/// pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeroRegionLink {
    pub hero_id: i64,
    pub region_id: i64,
    pub is_training: bool,
}

impl HeroRegionLink {
    pub const HERO_ID: Column = Column::new("heroregionlink", "hero_id");
    pub const REGION_ID: Column = Column::new("heroregionlink", "region_id");
    pub const IS_TRAINING: Column = Column::new("heroregionlink", "is_training");

    /// A fresh association; training defaults to off
    pub fn new(hero_id: i64, region_id: i64) -> Self {
        Self {
            hero_id,
            region_id,
            is_training: false,
        }
    }
}

impl Entity for HeroRegionLink {
    const TABLE: &'static str = "heroregionlink";
    const COLUMNS: &'static [Column] = &[Self::HERO_ID, Self::REGION_ID, Self::IS_TRAINING];

    fn validate(&self) -> Result<()> {
        Ok(())
    }
}
