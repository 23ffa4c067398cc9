//! Hero lookups

use crate::model::{Hero, HeroRegionLink, Team};
use crate::query_builder::{Predicate, Select, SortOrder};

pub fn all_heroes() -> Select {
    Select::from::<Hero>()
}

pub fn heroes_by_id(id: i64) -> Select {
    all_heroes().filter(Predicate::eq(Hero::ID, id))
}

/// Heroes with exactly this name (0..n rows)
pub fn heroes_named(name: &str) -> Select {
    all_heroes().filter(Predicate::eq(Hero::NAME, name))
}

/// Heroes with any other name
pub fn heroes_not_named(name: &str) -> Select {
    all_heroes().filter(Predicate::ne(Hero::NAME, name))
}

/// Heroes strictly older than `age`
pub fn heroes_older_than(age: u32) -> Select {
    all_heroes().filter(Predicate::gt(Hero::AGE, age))
}

/// Heroes aged within `[min, max]`
pub fn heroes_aged_between(min: u32, max: u32) -> Select {
    all_heroes().filter(Predicate::range(Hero::AGE, min, max))
}

/// Heroes aged strictly below `min` or strictly above `max`
pub fn heroes_aged_outside(min: u32, max: u32) -> Select {
    all_heroes().filter(Predicate::outside_range(Hero::AGE, min, max))
}

pub fn heroes_by_secret_name(secret_name: &str) -> Select {
    all_heroes().filter(Predicate::eq(Hero::SECRET_NAME, secret_name))
}

/// Up to `limit` heroes after skipping `offset`, in no guaranteed order
pub fn heroes_page(limit: u64, offset: Option<u64>) -> Select {
    let select = all_heroes().limit(limit);
    match offset {
        Some(offset) => select.offset(offset),
        None => select,
    }
}

/// Hero and team pairs where the hero's team exists
pub fn heroes_with_teams() -> Select {
    all_heroes().join::<Team>(Hero::TEAM_ID, Team::ID)
}

/// Every hero paired with its team, or NULL team columns
pub fn heroes_and_teams() -> Select {
    all_heroes().left_join::<Team>(Hero::TEAM_ID, Team::ID)
}

/// Members of one team
pub fn heroes_on_team(team_id: i64) -> Select {
    heroes_with_teams()
        .filter(Predicate::eq(Team::ID, team_id))
        .order_by(Hero::ID, SortOrder::Asc)
}

/// Heroes linked to one region, with the link columns projected after the hero
pub fn heroes_in_region(region_id: i64) -> Select {
    all_heroes()
        .join::<HeroRegionLink>(Hero::ID, HeroRegionLink::HERO_ID)
        .filter(Predicate::eq(HeroRegionLink::REGION_ID, region_id))
        .order_by(Hero::ID, SortOrder::Asc)
}
