// Shared fixtures for engine integration tests

#![allow(dead_code)]

use herodex_core::model::{Hero, Team};
use herodex_engine::HeroRepository;
use herodex_store::StoreConfig;
use tempfile::TempDir;

/// A repository over a fresh database file; keep the `TempDir` alive
pub fn setup_repo() -> (TempDir, HeroRepository) {
    let temp_dir = TempDir::new().unwrap();
    let config = StoreConfig::new(temp_dir.path().join("heroes.db"));
    let repo = HeroRepository::open(config).unwrap();
    (temp_dir, repo)
}

/// Run raw SQL against the repository's database file, outside any operation
pub fn execute_raw(repo: &HeroRepository, sql: &str) {
    let conn = herodex_store::db::open(&repo.config().database_path).unwrap();
    conn.execute_batch(sql).unwrap();
}

pub struct Scenario {
    pub preventers: Team,
    pub z_force: Team,
    pub deadpond: Hero,
    pub heroes: Vec<Hero>,
}

/// Two teams, Deadpond on Z-Force, and six more heroes
pub fn seed_scenario(repo: &HeroRepository) -> Scenario {
    let preventers = repo
        .create_team(&Team::new("Preventers", "Sharp Tower"))
        .unwrap();
    let z_force = repo
        .create_team(&Team::new("Z-Force", "Sister Margaret's Bar"))
        .unwrap();

    let deadpond = repo
        .create_hero(&Hero::new("Deadpond", "Dive Wilson").with_team(z_force.id.unwrap()))
        .unwrap();

    let heroes = repo
        .create_heroes(&[
            Hero::new("Spider-Boy", "Pedro Parqueador"),
            Hero::new("Tarantula", "Natalia Roman-on").with_age(32),
            Hero::new("Black Lion", "Trevor Challa").with_age(35),
            Hero::new("Dr. Weird", "Steve Weird").with_age(36),
            Hero::new("Captain North America", "Esteban Rogelios").with_age(93),
            Hero::new("Spider-Youngster", "Mikey Moorales").with_age(18),
        ])
        .unwrap();

    Scenario {
        preventers,
        z_force,
        deadpond,
        heroes,
    }
}

pub fn sorted_names(heroes: &[Hero]) -> Vec<String> {
    let mut names: Vec<String> = heroes.iter().map(|h| h.name.clone()).collect();
    names.sort();
    names
}
