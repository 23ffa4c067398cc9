// Integration tests for the migration framework
// Covers schema creation, idempotency, and agreement between the schema's
// foreign keys and the declared relationships

use herodex_core::model::RELATIONSHIPS;
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    herodex_store::db::open_in_memory().expect("Failed to create in-memory database")
}

fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

fn get_index_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'index' AND name LIKE 'ix_%'")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    // Given: An empty SQLite database
    let mut conn = setup_test_db();

    // When: Migrations are applied
    let result = herodex_store::migrations::apply_migrations(&mut conn);

    // Then: All migrations succeed
    assert!(result.is_ok(), "Migrations should succeed: {:?}", result.err());

    // And: Every expected table exists
    let tables = get_table_names(&conn);
    for expected in [
        "schema_version",
        "team",
        "hero",
        "region",
        "heroregionlink",
        "sqlite_sequence", // Auto-created by SQLite for AUTOINCREMENT columns
    ] {
        assert!(
            tables.contains(&expected.to_string()),
            "Missing table: {}",
            expected
        );
    }
}

#[test]
fn test_indexes_created() {
    let mut conn = setup_test_db();
    herodex_store::migrations::apply_migrations(&mut conn).unwrap();

    let indexes = get_index_names(&conn);
    for expected in [
        "ix_team_name",
        "ix_hero_name",
        "ix_hero_age",
        "ix_hero_team_id",
        "ix_region_name",
        "ix_heroregionlink_region_id",
    ] {
        assert!(
            indexes.contains(&expected.to_string()),
            "Missing index: {}",
            expected
        );
    }
}

#[test]
fn test_migrations_idempotent() {
    // Given: A database with migrations applied
    let mut conn = setup_test_db();
    herodex_store::migrations::apply_migrations(&mut conn).unwrap();
    conn.execute(
        "INSERT INTO team (name, headquarters) VALUES ('Preventers', 'Sharp Tower')",
        [],
    )
    .unwrap();

    // When: Migrations are applied again
    herodex_store::migrations::apply_migrations(&mut conn).unwrap();

    // Then: Nothing was re-run and data survives
    let versions: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |r| r.get(0))
        .unwrap();
    assert_eq!(versions, 1);

    let teams: i64 = conn
        .query_row("SELECT COUNT(*) FROM team", [], |r| r.get(0))
        .unwrap();
    assert_eq!(teams, 1);
}

#[test]
fn test_schema_foreign_keys_match_declared_relationships() {
    let mut conn = setup_test_db();
    herodex_store::migrations::apply_migrations(&mut conn).unwrap();

    for rel in RELATIONSHIPS {
        // PRAGMA foreign_key_list columns: id, seq, table, from, to, on_update, on_delete, match
        let sql = format!("PRAGMA foreign_key_list({})", rel.fk_table());
        let mut stmt = conn.prepare(&sql).unwrap();
        let keys: Vec<(String, String, String, String)> = stmt
            .query_map([], |row| {
                Ok((row.get(2)?, row.get(3)?, row.get(4)?, row.get(6)?))
            })
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        let found = keys.iter().find(|(_, from, _, _)| from == rel.foreign_key.name);
        let (table, _, to, on_delete) = found.unwrap_or_else(|| {
            panic!("{}: no foreign key on {}", rel.name, rel.foreign_key)
        });

        assert_eq!(table, rel.references.table, "{}: wrong parent table", rel.name);
        assert_eq!(to, rel.references.name, "{}: wrong parent column", rel.name);
        assert_eq!(on_delete, rel.on_delete.as_sql(), "{}: wrong ON DELETE", rel.name);
    }
}
