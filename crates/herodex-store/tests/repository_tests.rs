// Integration tests for table repositories and statement execution
// Runs against an in-memory database with foreign keys enabled

use herodex_core::model::{Hero, Region, Team};
use herodex_core::queries::hero_queries;
use herodex_core::ExErrorKind;
use herodex_store::repo::exec::{fetch_all, fetch_first, fetch_left_pairs, fetch_one, fetch_pairs};
use herodex_store::repo::{HeroRepo, RegionRepo, TeamRepo};
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    let mut conn = herodex_store::db::open_in_memory().unwrap();
    herodex_store::migrations::apply_migrations(&mut conn).unwrap();
    conn
}

fn names(heroes: &[Hero]) -> Vec<&str> {
    heroes.iter().map(|h| h.name.as_str()).collect()
}

#[test]
fn test_insert_assigns_identity() {
    let conn = setup_test_db();

    let first = HeroRepo::insert(&conn, &Hero::new("Deadpond", "Dive Wilson")).unwrap();
    let second = HeroRepo::insert(&conn, &Hero::new("Spider-Boy", "Pedro Parqueador")).unwrap();

    assert!(first.id.is_some());
    assert!(second.id > first.id);
    assert_eq!(HeroRepo::get(&conn, second.id.unwrap()).unwrap(), Some(second));
}

#[test]
fn test_insert_rejects_persistent_value() {
    let conn = setup_test_db();
    let hero = HeroRepo::insert(&conn, &Hero::new("Deadpond", "Dive Wilson")).unwrap();

    let err = HeroRepo::insert(&conn, &hero).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
}

#[test]
fn test_insert_rejects_blank_name() {
    let conn = setup_test_db();
    let err = HeroRepo::insert(&conn, &Hero::new("  ", "Dive Wilson")).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM hero", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn test_insert_with_unknown_team_is_constraint_violation() {
    let conn = setup_test_db();
    let err = HeroRepo::insert(&conn, &Hero::new("Deadpond", "Dive Wilson").with_team(404))
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
}

#[test]
fn test_update_unknown_identity_is_not_found() {
    let conn = setup_test_db();
    let mut ghost = Hero::new("Ghost", "Nobody");
    ghost.id = Some(9001);

    let err = HeroRepo::update(&conn, &ghost).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity_id(), Some("9001"));
}

#[test]
fn test_update_transient_is_invalid_input() {
    let conn = setup_test_db();
    let err = HeroRepo::update(&conn, &Hero::new("Deadpond", "Dive Wilson")).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
}

#[test]
fn test_set_age_round_trip() {
    let conn = setup_test_db();
    let hero = HeroRepo::insert(&conn, &Hero::new("Spider-Boy", "Pedro Parqueador")).unwrap();

    let updated = HeroRepo::set_age(&conn, hero.id.unwrap(), Some(16)).unwrap();
    assert_eq!(updated.age, Some(16));
    assert_eq!(updated.name, "Spider-Boy");
}

#[test]
fn test_find_one_named_distinguishes_zero_one_many() {
    let conn = setup_test_db();
    HeroRepo::insert(&conn, &Hero::new("Deadpond", "Dive Wilson")).unwrap();
    HeroRepo::insert(&conn, &Hero::new("Twin", "First")).unwrap();
    HeroRepo::insert(&conn, &Hero::new("Twin", "Second")).unwrap();

    assert_eq!(
        HeroRepo::find_one_named(&conn, "Deadpond").unwrap().secret_name,
        "Dive Wilson"
    );
    assert_eq!(
        HeroRepo::find_one_named(&conn, "Nobody").unwrap_err().kind(),
        ExErrorKind::NotFound
    );
    assert_eq!(
        HeroRepo::find_one_named(&conn, "Twin").unwrap_err().kind(),
        ExErrorKind::MultipleResultsFound
    );
}

#[test]
fn test_fetch_first_on_empty_table_is_none() {
    let conn = setup_test_db();
    let first: Option<Hero> = fetch_first(&conn, &hero_queries::all_heroes()).unwrap();
    assert_eq!(first, None);
}

#[test]
fn test_fetch_one_by_secret_name() {
    let conn = setup_test_db();
    HeroRepo::insert(&conn, &Hero::new("Rusty-Man", "Tommy Sharp").with_age(48)).unwrap();

    let hero: Hero = fetch_one(
        &conn,
        &hero_queries::heroes_by_secret_name("Tommy Sharp"),
        "secret_name = 'Tommy Sharp'",
    )
    .unwrap();
    assert_eq!(hero.name, "Rusty-Man");
}

#[test]
fn test_literals_are_bound_not_spliced() {
    let conn = setup_test_db();
    HeroRepo::insert(&conn, &Hero::new("Deadpond", "Dive Wilson")).unwrap();

    let hostile = "x' OR '1'='1";
    let found: Vec<Hero> = fetch_all(&conn, &hero_queries::heroes_named(hostile)).unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_inner_join_skips_heroes_without_team() {
    let conn = setup_test_db();
    let team = TeamRepo::insert(&conn, &Team::new("Preventers", "Sharp Tower")).unwrap();
    HeroRepo::insert(
        &conn,
        &Hero::new("Rusty-Man", "Tommy Sharp").with_team(team.id.unwrap()),
    )
    .unwrap();
    HeroRepo::insert(&conn, &Hero::new("Spider-Boy", "Pedro Parqueador")).unwrap();

    let pairs: Vec<(Hero, Team)> = fetch_pairs(&conn, &hero_queries::heroes_with_teams()).unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0.name, "Rusty-Man");
    assert_eq!(pairs[0].1, team);
}

#[test]
fn test_left_join_keeps_heroes_without_team() {
    let conn = setup_test_db();
    let team = TeamRepo::insert(&conn, &Team::new("Preventers", "Sharp Tower")).unwrap();
    HeroRepo::insert(
        &conn,
        &Hero::new("Rusty-Man", "Tommy Sharp").with_team(team.id.unwrap()),
    )
    .unwrap();
    HeroRepo::insert(&conn, &Hero::new("Spider-Boy", "Pedro Parqueador")).unwrap();

    let pairs: Vec<(Hero, Option<Team>)> =
        fetch_left_pairs(&conn, &hero_queries::heroes_and_teams()).unwrap();
    assert_eq!(pairs.len(), 2);

    let spider = pairs.iter().find(|(h, _)| h.name == "Spider-Boy").unwrap();
    assert_eq!(spider.1, None);
    let rusty = pairs.iter().find(|(h, _)| h.name == "Rusty-Man").unwrap();
    assert_eq!(rusty.1.as_ref(), Some(&team));
}

#[test]
fn test_page_limits_and_offsets() {
    let conn = setup_test_db();
    for i in 0..7 {
        HeroRepo::insert(&conn, &Hero::new(format!("Hero {}", i), "Secret")).unwrap();
    }

    let page: Vec<Hero> = fetch_all(&conn, &hero_queries::heroes_page(3, None)).unwrap();
    assert_eq!(page.len(), 3);

    let tail: Vec<Hero> = fetch_all(&conn, &hero_queries::heroes_page(3, Some(6))).unwrap();
    assert_eq!(tail.len(), 1);
}

#[test]
fn test_team_members_ordered_by_identity() {
    let conn = setup_test_db();
    let team = TeamRepo::insert(&conn, &Team::new("Z-Force", "Sister Margaret's Bar")).unwrap();
    let team_id = team.id.unwrap();
    for name in ["Deadpond", "Black Lion", "Tarantula"] {
        HeroRepo::insert(&conn, &Hero::new(name, "Secret").with_team(team_id)).unwrap();
    }

    let members = TeamRepo::members(&conn, team_id).unwrap();
    assert_eq!(names(&members), vec!["Deadpond", "Black Lion", "Tarantula"]);
}

#[test]
fn test_region_lookup_by_name() {
    let conn = setup_test_db();
    let region = RegionRepo::insert(&conn, &Region::new("Gotham")).unwrap();

    assert_eq!(RegionRepo::find_one_named(&conn, "Gotham").unwrap(), region);
    assert_eq!(
        RegionRepo::find_one_named(&conn, "Atlantis").unwrap_err().kind(),
        ExErrorKind::NotFound
    );
    assert_eq!(
        RegionRepo::require(&conn, 404).unwrap_err().kind(),
        ExErrorKind::NotFound
    );
}
