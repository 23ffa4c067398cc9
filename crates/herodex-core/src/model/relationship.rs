//! Declared relationship edges between entities
//!
//! These declarations are the single description of cardinality and deletion
//! policy. The schema enforces them (`ON DELETE` clauses) and the store checks
//! at migration test time that the two agree.

use super::entity::Entity;
use super::hero::Hero;
use super::link::HeroRegionLink;
use super::region::Region;
use super::team::Team;
use crate::query_builder::Column;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    OneToMany,
    ManyToManyViaLink,
}

/// What happens to dependent rows when the referenced row is deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDelete {
    Restrict,
    SetNull,
    Cascade,
}

impl OnDelete {
    /// The `ON DELETE` action as SQLite reports it in `PRAGMA foreign_key_list`
    pub fn as_sql(&self) -> &'static str {
        match self {
            OnDelete::Restrict => "RESTRICT",
            OnDelete::SetNull => "SET NULL",
            OnDelete::Cascade => "CASCADE",
        }
    }
}

/// One relationship edge
///
/// `foreign_key` lives on the dependent table (the hero, or the link row) and
/// points at `references` on the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationshipDef {
    pub name: &'static str,
    pub parent: &'static str,
    pub child: &'static str,
    pub cardinality: Cardinality,
    pub foreign_key: Column,
    pub references: Column,
    pub on_delete: OnDelete,
    /// Link table carrying the edge, for many-to-many relationships
    pub via: Option<&'static str>,
}

/// Team → Hero; deleting a team releases its heroes
pub const TEAM_HEROES: RelationshipDef = RelationshipDef {
    name: "team_heroes",
    parent: Team::TABLE,
    child: Hero::TABLE,
    cardinality: Cardinality::OneToMany,
    foreign_key: Hero::TEAM_ID,
    references: Team::ID,
    on_delete: OnDelete::SetNull,
    via: None,
};

/// Hero ↔ Region; deleting a hero removes its link rows
pub const HERO_REGIONS: RelationshipDef = RelationshipDef {
    name: "hero_regions",
    parent: Hero::TABLE,
    child: Region::TABLE,
    cardinality: Cardinality::ManyToManyViaLink,
    foreign_key: HeroRegionLink::HERO_ID,
    references: Hero::ID,
    on_delete: OnDelete::Cascade,
    via: Some(HeroRegionLink::TABLE),
};

/// Region ↔ Hero; deleting a region removes its link rows
pub const REGION_HEROES: RelationshipDef = RelationshipDef {
    name: "region_heroes",
    parent: Region::TABLE,
    child: Hero::TABLE,
    cardinality: Cardinality::ManyToManyViaLink,
    foreign_key: HeroRegionLink::REGION_ID,
    references: Region::ID,
    on_delete: OnDelete::Cascade,
    via: Some(HeroRegionLink::TABLE),
};

pub const RELATIONSHIPS: &[RelationshipDef] = &[TEAM_HEROES, HERO_REGIONS, REGION_HEROES];

impl RelationshipDef {
    /// Table holding the foreign key column
    pub fn fk_table(&self) -> &'static str {
        self.foreign_key.table
    }
}
