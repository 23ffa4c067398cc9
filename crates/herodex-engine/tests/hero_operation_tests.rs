// Integration tests for hero operations on HeroRepository
// Covers creation, filtered lookups, exactly-one semantics, update and delete

mod common;

use common::{execute_raw, seed_scenario, setup_repo, sorted_names};
use herodex_core::model::{Hero, Region};
use herodex_core::query_builder::{Predicate, Select, SortOrder};
use herodex_core::ExErrorKind;

#[test]
fn test_scenario_older_than_35_is_strict() {
    // Given: The seeded scenario
    let (_tmp, repo) = setup_repo();
    seed_scenario(&repo);

    // When: Heroes older than 35 are requested
    let older = repo.get_heroes_older_than(35).unwrap();

    // Then: Black Lion (35) is excluded; heroes without an age never match
    assert_eq!(
        sorted_names(&older),
        vec!["Captain North America", "Dr. Weird"]
    );
}

#[test]
fn test_create_hero_assigns_identity() {
    let (_tmp, repo) = setup_repo();
    let scenario = seed_scenario(&repo);

    assert!(scenario.deadpond.id.is_some());
    assert_eq!(scenario.deadpond.team_id, scenario.z_force.id);
    assert_eq!(scenario.heroes.len(), 6);
    assert!(scenario.heroes.iter().all(|h| h.id.is_some()));

    let stored = repo.get_hero(scenario.deadpond.id.unwrap()).unwrap();
    assert_eq!(stored, Some(scenario.deadpond));
}

#[test]
fn test_create_heroes_is_all_or_nothing() {
    // Given: An empty database
    let (_tmp, repo) = setup_repo();

    // When: A batch containing one invalid hero is created
    let err = repo
        .create_heroes(&[
            Hero::new("Tarantula", "Natalia Roman-on"),
            Hero::new("", "Nameless"),
        ])
        .unwrap_err();

    // Then: The batch fails and nothing from it is stored
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert!(repo.get_first_hero().unwrap().is_none());
}

#[test]
fn test_by_name_and_not_named_are_complements() {
    let (_tmp, repo) = setup_repo();
    seed_scenario(&repo);
    repo.create_hero(&Hero::new("Deadpond", "Another Wilson")).unwrap();

    let named = repo.get_heroes_by_name("Deadpond").unwrap();
    let others = repo.get_heroes_not_named("Deadpond").unwrap();

    assert_eq!(named.len(), 2);
    assert_eq!(others.len(), 6);
    assert!(others.iter().all(|h| h.name != "Deadpond"));
}

#[test]
fn test_age_range_and_outside_range() {
    let (_tmp, repo) = setup_repo();
    seed_scenario(&repo);

    let inside = repo.get_heroes_in_age_range(32, 36).unwrap();
    assert_eq!(
        sorted_names(&inside),
        vec!["Black Lion", "Dr. Weird", "Tarantula"]
    );

    // Boundary ages 32 and 36 are not outside; absent ages never match
    let outside = repo.get_heroes_outside_age_range(32, 36).unwrap();
    assert_eq!(
        sorted_names(&outside),
        vec!["Captain North America", "Spider-Youngster"]
    );
}

#[test]
fn test_first_hero_on_empty_table_is_none() {
    let (_tmp, repo) = setup_repo();
    assert_eq!(repo.get_first_hero().unwrap(), None);

    seed_scenario(&repo);
    assert!(repo.get_first_hero().unwrap().is_some());
}

#[test]
fn test_get_hero_by_secret_name_exactly_one() {
    let (_tmp, repo) = setup_repo();
    seed_scenario(&repo);

    let hero = repo.get_hero_by_secret_name("Steve Weird").unwrap();
    assert_eq!(hero.name, "Dr. Weird");

    let err = repo.get_hero_by_secret_name("Bruce Wayne").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);

    repo.create_hero(&Hero::new("Dr. Weirder", "Steve Weird"))
        .unwrap();
    let err = repo.get_hero_by_secret_name("Steve Weird").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::MultipleResultsFound);
}

#[test]
fn test_get_missing_hero_is_none() {
    let (_tmp, repo) = setup_repo();
    assert_eq!(repo.get_hero(9001).unwrap(), None);
}

#[test]
fn test_pagination() {
    let (_tmp, repo) = setup_repo();
    seed_scenario(&repo);

    assert_eq!(repo.list_heroes(3).unwrap().len(), 3);
    assert_eq!(repo.list_heroes_page(3, 4).unwrap().len(), 3);
    assert_eq!(repo.list_heroes_page(3, 6).unwrap().len(), 1);
    assert!(repo.list_heroes_page(3, 7).unwrap().is_empty());
}

#[test]
fn test_find_heroes_with_custom_select() {
    let (_tmp, repo) = setup_repo();
    seed_scenario(&repo);

    let select = Select::from::<Hero>()
        .filter(Predicate::is_not_null(Hero::AGE))
        .filter(Predicate::lt(Hero::AGE, 35))
        .order_by(Hero::AGE, SortOrder::Desc);
    let heroes = repo.find_heroes(&select).unwrap();

    let names: Vec<&str> = heroes.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Tarantula", "Spider-Youngster"]);
}

#[test]
fn test_update_age_by_name() {
    // Given: The seeded scenario
    let (_tmp, repo) = setup_repo();
    seed_scenario(&repo);

    // When: Spider-Boy's age is set
    let hero = repo.update_hero_age_by_name(16, "Spider-Boy").unwrap();

    // Then: The returned and stored hero carry the new age
    assert_eq!(hero.age, Some(16));
    assert_eq!(repo.get_hero(hero.id.unwrap()).unwrap(), Some(hero));
}

#[test]
fn test_update_age_of_unknown_name_mutates_nothing() {
    let (_tmp, repo) = setup_repo();
    seed_scenario(&repo);
    let mut before = repo.list_heroes(100).unwrap();

    let err = repo.update_hero_age_by_name(16, "spoder-boi").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    let mut after = repo.list_heroes(100).unwrap();
    before.sort_by_key(|h| h.id);
    after.sort_by_key(|h| h.id);
    assert_eq!(before, after);
}

#[test]
fn test_update_hero_full_row() {
    let (_tmp, repo) = setup_repo();
    let scenario = seed_scenario(&repo);

    let mut deadpond = scenario.deadpond.clone();
    deadpond.secret_name = "Wade".to_string();
    deadpond.team_id = scenario.preventers.id;
    let updated = repo.update_hero(&deadpond).unwrap();
    assert_eq!(updated, deadpond);

    let err = repo
        .update_hero(&Hero::new("Transient", "Nobody"))
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
}

#[test]
fn test_delete_by_name() {
    // Given: The seeded scenario
    let (_tmp, repo) = setup_repo();
    seed_scenario(&repo);

    // When: Spider-Youngster is deleted
    let deleted = repo.delete_hero_by_name("Spider-Youngster").unwrap();

    // Then: The deleted hero is returned and a by-name lookup is empty
    assert_eq!(deleted.secret_name, "Mikey Moorales");
    assert!(repo.get_heroes_by_name("Spider-Youngster").unwrap().is_empty());
}

#[test]
fn test_delete_unknown_name_is_not_found() {
    let (_tmp, repo) = setup_repo();
    seed_scenario(&repo);

    let err = repo.delete_hero_by_name("spoder-boi").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_delete_ambiguous_name_deletes_nothing() {
    let (_tmp, repo) = setup_repo();
    seed_scenario(&repo);
    repo.create_hero(&Hero::new("Deadpond", "Another Wilson")).unwrap();

    let err = repo.delete_hero_by_name("Deadpond").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::MultipleResultsFound);
    assert_eq!(repo.get_heroes_by_name("Deadpond").unwrap().len(), 2);
}

#[test]
fn test_delete_hero_removes_region_links() {
    let (_tmp, repo) = setup_repo();
    let scenario = seed_scenario(&repo);
    let region = repo.create_region(&Region::new("Gotham")).unwrap();
    let region_id = region.id.unwrap();
    repo.add_hero_to_region(scenario.deadpond.id.unwrap(), region_id)
        .unwrap();

    repo.delete_hero_by_name("Deadpond").unwrap();

    assert!(repo.get_heroes_in_region(region_id).unwrap().is_empty());
}

#[test]
fn test_delete_refused_by_store_is_consistency_failure() {
    // Given: A hero table that silently skips deletes
    let (_tmp, repo) = setup_repo();
    seed_scenario(&repo);
    execute_raw(
        &repo,
        "CREATE TRIGGER keep_heroes BEFORE DELETE ON hero BEGIN SELECT RAISE(IGNORE); END;",
    );

    // When: Spider-Youngster is deleted by name
    let err = repo.delete_hero_by_name("Spider-Youngster").unwrap_err();

    // Then: The failure is a consistency failure, not a miss
    assert_eq!(err.kind(), ExErrorKind::ConsistencyFailure);
    assert_eq!(err.entity(), Some("hero"));
    assert_eq!(repo.get_heroes_by_name("Spider-Youngster").unwrap().len(), 1);
}

#[test]
fn test_open_keeps_configuration() {
    let (tmp, repo) = setup_repo();

    assert_eq!(repo.config().database_path, tmp.path().join("heroes.db"));
}
