mod helpers;

use bioread::db;
use bioread::db::migrations::{get_schema_version, run_migrations, CURRENT_SCHEMA_VERSION};
use bioread::reading::log::{list_logs, log_completion, LogOutcome};
use bioread::reading::vocab::list_entries;
use helpers::day;
use tempfile::TempDir;

#[test]
fn fresh_db_migrates_to_current_version() {
    let conn = helpers::test_db();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);
}

#[test]
fn migrations_are_idempotent() {
    let conn = helpers::test_db();
    // Running again should be a no-op
    run_migrations(&conn).unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);
}

#[test]
fn legacy_database_is_adopted() {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("reading_log.db");

    // A database written before schema_meta existed, with a duplicated reading
    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE logs (id INTEGER PRIMARY KEY AUTOINCREMENT, date DATE, title TEXT, category TEXT);
             CREATE TABLE vocabulary (id INTEGER PRIMARY KEY AUTOINCREMENT, date DATE, word TEXT, meaning TEXT, note TEXT);
             INSERT INTO logs (date, title, category) VALUES ('2024-01-05', 'Bird migration', 'Biology');
             INSERT INTO logs (date, title, category) VALUES ('2024-01-05', 'Bird migration', 'Biology');
             INSERT INTO logs (date, title, category) VALUES ('2024-01-06', 'Vaccine trial', 'Health');
             INSERT INTO vocabulary (date, word, meaning, note) VALUES ('2024-01-05', 'flyway', 'migration route', '');",
        )
        .unwrap();
    }

    let conn = db::open_database(&db_path).unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);

    let logs = list_logs(&conn).unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].title, "Bird migration");
    assert_eq!(logs[0].date, day(2024, 1, 5));

    let words = list_entries(&conn).unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].word, "flyway");

    // Dedup now holds for the adopted rows too
    assert_eq!(
        log_completion(&conn, day(2024, 1, 5), "Bird migration", "Biology").unwrap(),
        LogOutcome::AlreadyLogged
    );
}

#[test]
fn manual_v1_db_upgrades_correctly() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    db::schema::init_schema(&conn).unwrap();

    // Verify it starts at v1
    assert_eq!(get_schema_version(&conn).unwrap(), 1);

    run_migrations(&conn).unwrap();

    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);
    let index_exists: bool = conn
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = 'index' AND name = 'idx_logs_date_title'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(index_exists);
}
