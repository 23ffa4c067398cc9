//! Region and hero-region link lookups

use crate::model::{HeroRegionLink, Region};
use crate::query_builder::{Predicate, Select, SortOrder};

pub fn regions_by_id(id: i64) -> Select {
    Select::from::<Region>().filter(Predicate::eq(Region::ID, id))
}

pub fn regions_named(name: &str) -> Select {
    Select::from::<Region>().filter(Predicate::eq(Region::NAME, name))
}

/// Regions a hero is linked to
pub fn regions_for_hero(hero_id: i64) -> Select {
    Select::from::<Region>()
        .join::<HeroRegionLink>(Region::ID, HeroRegionLink::REGION_ID)
        .filter(Predicate::eq(HeroRegionLink::HERO_ID, hero_id))
        .order_by(Region::ID, SortOrder::Asc)
}

/// The link row for one (hero, region) pair
pub fn link_for(hero_id: i64, region_id: i64) -> Select {
    Select::from::<HeroRegionLink>()
        .filter(Predicate::eq(HeroRegionLink::HERO_ID, hero_id))
        .filter(Predicate::eq(HeroRegionLink::REGION_ID, region_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_for_matches_both_keys() {
        let (sql, params) = link_for(1, 2).to_sql();
        assert!(sql.ends_with(
            "WHERE (heroregionlink.hero_id = ? AND heroregionlink.region_id = ?)"
        ));
        assert_eq!(params.len(), 2);
    }
}
