//! SQL DDL for the reading tracker tables.
//!
//! Defines `logs`, `vocabulary`, `daily_selection`, and `schema_meta`. The
//! `logs` and `vocabulary` layouts match the legacy `reading_log.db` file, so
//! an existing database opens unchanged and is brought forward by
//! [`super::migrations`]. All DDL uses `IF NOT EXISTS`.

use rusqlite::Connection;

const SCHEMA_SQL: &str = r#"
-- Completed readings
CREATE TABLE IF NOT EXISTS logs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date DATE,
    title TEXT,
    category TEXT
);

CREATE INDEX IF NOT EXISTS idx_logs_date ON logs(date);

-- Personal glossary
CREATE TABLE IF NOT EXISTS vocabulary (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date DATE,
    word TEXT,
    meaning TEXT,
    note TEXT
);

-- One pinned selection per calendar day; items is a JSON array
CREATE TABLE IF NOT EXISTS daily_selection (
    date TEXT PRIMARY KEY,
    items TEXT NOT NULL,
    created_at TEXT NOT NULL
);

-- Schema metadata
CREATE TABLE IF NOT EXISTS schema_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Initialize all schema tables. Idempotent (uses IF NOT EXISTS).
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    // Set initial schema version if not already present
    conn.execute(
        "INSERT OR IGNORE INTO schema_meta (key, value) VALUES ('schema_version', '1')",
        [],
    )?;

    Ok(())
}
