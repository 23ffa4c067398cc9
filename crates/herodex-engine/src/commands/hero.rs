//! Hero operations

use super::{observe, observe_rows, HeroRepository};
use herodex_core::errors::HerodexError;
use herodex_core::model::{Entity, Hero};
use herodex_core::queries::hero_queries;
use herodex_core::query_builder::Select;
use herodex_core::log_op_start;
use herodex_store::errors::Result;
use herodex_store::repo::exec::{expect_deleted, fetch_all, fetch_first, fetch_one};
use herodex_store::repo::HeroRepo;

impl HeroRepository {
    /// Persist a transient hero and return it with its identity
    ///
    /// ## Errors
    ///
    /// - `InvalidInput`: blank name/secret name, or the hero already has an id
    /// - `ConstraintViolation`: `team_id` names no team
    pub fn create_hero(&self, hero: &Hero) -> Result<Hero> {
        log_op_start!("hero_create", name = hero.name.as_str());
        observe("hero_create", || {
            self.db().write(|tx| HeroRepo::insert(tx, hero))
        })
    }

    /// Persist several heroes in one transaction; none are stored if any fails
    pub fn create_heroes(&self, heroes: &[Hero]) -> Result<Vec<Hero>> {
        log_op_start!("hero_create_batch", row_count = heroes.len() as u64);
        observe_rows("hero_create_batch", || {
            self.db().write(|tx| {
                heroes
                    .iter()
                    .map(|hero| HeroRepo::insert(tx, hero))
                    .collect()
            })
        })
    }

    pub fn get_hero(&self, id: i64) -> Result<Option<Hero>> {
        log_op_start!("hero_get", hero_id = id);
        observe("hero_get", || self.db().read(|conn| HeroRepo::get(conn, id)))
    }

    /// Every hero with exactly this name
    pub fn get_heroes_by_name(&self, name: &str) -> Result<Vec<Hero>> {
        log_op_start!("hero_list_by_name", name = name);
        observe_rows("hero_list_by_name", || {
            self.db()
                .read(|conn| fetch_all(conn, &hero_queries::heroes_named(name)))
        })
    }

    /// Every hero whose name differs
    pub fn get_heroes_not_named(&self, name: &str) -> Result<Vec<Hero>> {
        log_op_start!("hero_list_not_named", name = name);
        observe_rows("hero_list_not_named", || {
            self.db()
                .read(|conn| fetch_all(conn, &hero_queries::heroes_not_named(name)))
        })
    }

    /// Heroes strictly older than `age`; heroes without an age never match
    pub fn get_heroes_older_than(&self, age: u32) -> Result<Vec<Hero>> {
        log_op_start!("hero_list_older_than", age = age);
        observe_rows("hero_list_older_than", || {
            self.db()
                .read(|conn| fetch_all(conn, &hero_queries::heroes_older_than(age)))
        })
    }

    /// Heroes with `min <= age <= max`
    pub fn get_heroes_in_age_range(&self, min: u32, max: u32) -> Result<Vec<Hero>> {
        log_op_start!("hero_list_in_age_range", min = min, max = max);
        observe_rows("hero_list_in_age_range", || {
            self.db()
                .read(|conn| fetch_all(conn, &hero_queries::heroes_aged_between(min, max)))
        })
    }

    /// Heroes with `age < min` or `age > max`
    ///
    /// Bounds are strict: a hero aged exactly `min` or `max` is never returned
    /// here, even though [`HeroRepository::get_heroes_in_age_range`] returns it.
    pub fn get_heroes_outside_age_range(&self, min: u32, max: u32) -> Result<Vec<Hero>> {
        log_op_start!("hero_list_outside_age_range", min = min, max = max);
        observe_rows("hero_list_outside_age_range", || {
            self.db()
                .read(|conn| fetch_all(conn, &hero_queries::heroes_aged_outside(min, max)))
        })
    }

    /// Any one hero, or `None` on an empty table
    pub fn get_first_hero(&self) -> Result<Option<Hero>> {
        log_op_start!("hero_first");
        observe("hero_first", || {
            self.db()
                .read(|conn| fetch_first(conn, &hero_queries::all_heroes()))
        })
    }

    /// The single hero with this secret name
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no hero has it
    /// - `MultipleResultsFound`: more than one does
    pub fn get_hero_by_secret_name(&self, secret_name: &str) -> Result<Hero> {
        log_op_start!("hero_get_by_secret_name");
        observe("hero_get_by_secret_name", || {
            self.db().read(|conn| {
                fetch_one(
                    conn,
                    &hero_queries::heroes_by_secret_name(secret_name),
                    &format!("secret_name = '{}'", secret_name),
                )
            })
        })
    }

    /// At most `limit` heroes, in no guaranteed order
    pub fn list_heroes(&self, limit: u64) -> Result<Vec<Hero>> {
        log_op_start!("hero_list", limit = limit);
        observe_rows("hero_list", || {
            self.db()
                .read(|conn| fetch_all(conn, &hero_queries::heroes_page(limit, None)))
        })
    }

    /// At most `limit` heroes after skipping `offset`
    pub fn list_heroes_page(&self, limit: u64, offset: u64) -> Result<Vec<Hero>> {
        log_op_start!("hero_list_page", limit = limit, offset = offset);
        observe_rows("hero_list_page", || {
            self.db()
                .read(|conn| fetch_all(conn, &hero_queries::heroes_page(limit, Some(offset))))
        })
    }

    /// Run a caller-built select whose leading columns are the hero's
    pub fn find_heroes(&self, select: &Select) -> Result<Vec<Hero>> {
        log_op_start!("hero_find");
        observe_rows("hero_find", || self.db().read(|conn| fetch_all(conn, select)))
    }

    /// Set the age of the single hero with this name
    ///
    /// Nothing is written unless exactly one hero matches.
    pub fn update_hero_age_by_name(&self, age: u32, name: &str) -> Result<Hero> {
        log_op_start!("hero_update_age", name = name, age = age);
        observe("hero_update_age", || {
            self.db().write(|tx| {
                let hero = HeroRepo::find_one_named(tx, name)?;
                HeroRepo::set_age(tx, hero.require_id()?, Some(age))
            })
        })
    }

    /// Store every field of a persistent hero
    pub fn update_hero(&self, hero: &Hero) -> Result<Hero> {
        log_op_start!("hero_update", hero_id = hero.id);
        observe("hero_update", || {
            self.db().write(|tx| HeroRepo::update(tx, hero))
        })
    }

    /// Delete the single hero with this name and return it
    ///
    /// A delete that removes no row rolls back with a consistency failure.
    /// After commit the by-name lookup is re-run, and finding the row again
    /// is one too. The hero's region links are removed with it.
    pub fn delete_hero_by_name(&self, name: &str) -> Result<Hero> {
        log_op_start!("hero_delete_by_name", name = name);
        let key = format!("name = '{}'", name);
        observe("hero_delete_by_name", || {
            let deleted = self.db().write(|tx| {
                let hero = HeroRepo::find_one_named(tx, name)?;
                let changed = HeroRepo::delete(tx, hero.require_id()?)?;
                expect_deleted(changed, Hero::TABLE, &key)?;
                Ok(hero)
            })?;

            let id = deleted.require_id()?;
            let remaining: Vec<Hero> = self
                .db()
                .read(|conn| fetch_all(conn, &hero_queries::heroes_named(name)))?;
            if remaining.iter().any(|h| h.id == Some(id)) {
                return Err(HerodexError::RowNotDeleted {
                    entity: Hero::TABLE.to_string(),
                    key,
                }
                .into());
            }

            Ok(deleted)
        })
    }
}
