//! Region operations and hero-region links

use super::{observe, observe_rows, HeroRepository};
use herodex_core::log_op_start;
use herodex_core::model::{Hero, HeroRegionLink, Region, RegionMember};
use herodex_store::errors::Result;
use herodex_store::repo::{RegionRepo, RelationshipResolver};

impl HeroRepository {
    pub fn create_region(&self, region: &Region) -> Result<Region> {
        log_op_start!("region_create", name = region.name.as_str());
        observe("region_create", || {
            self.db().write(|tx| RegionRepo::insert(tx, region))
        })
    }

    pub fn get_region(&self, id: i64) -> Result<Option<Region>> {
        log_op_start!("region_get", region_id = id);
        observe("region_get", || self.db().read(|conn| RegionRepo::get(conn, id)))
    }

    /// The single region with this name
    pub fn get_region_by_name(&self, name: &str) -> Result<Region> {
        log_op_start!("region_get_by_name", name = name);
        observe("region_get_by_name", || {
            self.db()
                .read(|conn| RegionRepo::find_one_named(conn, name))
        })
    }

    pub fn get_heroes_in_region(&self, region_id: i64) -> Result<Vec<Hero>> {
        log_op_start!("region_list_heroes", region_id = region_id);
        observe_rows("region_list_heroes", || {
            self.db().read(|conn| RegionRepo::heroes(conn, region_id))
        })
    }

    /// Heroes in a region with their training flag
    pub fn get_region_members(&self, region_id: i64) -> Result<Vec<RegionMember>> {
        log_op_start!("region_list_members", region_id = region_id);
        observe_rows("region_list_members", || {
            self.db().read(|conn| RegionRepo::members(conn, region_id))
        })
    }

    pub fn get_regions_for_hero(&self, hero_id: i64) -> Result<Vec<Region>> {
        log_op_start!("hero_list_regions", hero_id = hero_id);
        observe_rows("hero_list_regions", || {
            self.db().read(|conn| RegionRepo::for_hero(conn, hero_id))
        })
    }

    /// Link a hero to a region, not training
    ///
    /// ## Errors
    ///
    /// - `ConstraintViolation`: the pair is already linked, or the hero or
    ///   region does not exist
    pub fn add_hero_to_region(&self, hero_id: i64, region_id: i64) -> Result<HeroRegionLink> {
        log_op_start!("region_add_hero", hero_id = hero_id, region_id = region_id);
        observe("region_add_hero", || {
            self.db()
                .write(|tx| RelationshipResolver::link_region(tx, hero_id, region_id))
        })
    }

    /// Remove a hero's link to a region; `NotFound` if there is none
    pub fn remove_hero_from_region(&self, hero_id: i64, region_id: i64) -> Result<HeroRegionLink> {
        log_op_start!("region_remove_hero", hero_id = hero_id, region_id = region_id);
        observe("region_remove_hero", || {
            self.db()
                .write(|tx| RelationshipResolver::unlink_region(tx, hero_id, region_id))
        })
    }

    /// Change a link's training flag; `NotFound` if the link does not exist
    pub fn set_training(
        &self,
        hero_id: i64,
        region_id: i64,
        is_training: bool,
    ) -> Result<HeroRegionLink> {
        log_op_start!(
            "region_set_training",
            hero_id = hero_id,
            region_id = region_id,
            is_training = is_training
        );
        observe("region_set_training", || {
            self.db().write(|tx| {
                RelationshipResolver::set_training(tx, hero_id, region_id, is_training)
            })
        })
    }
}
