//! Reading log — one completion per title per day.

use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use serde::Serialize;

use super::selection::selection_for;
use super::types::LogEntry;
use super::{format_date, parse_date_column};

/// Category recorded for a title that is neither pinned nor given one.
pub const FALLBACK_CATEGORY: &str = "Other";

/// What [`log_completion`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogOutcome {
    /// A new row was written.
    Logged,
    /// The title was already logged for that date; nothing changed.
    AlreadyLogged,
}

/// Record that `title` was read on `date`. Repeats on the same date are a no-op.
pub fn log_completion(
    conn: &Connection,
    date: NaiveDate,
    title: &str,
    category: &str,
) -> Result<LogOutcome> {
    // Relies on the unique (date, title) index installed by migration v2.
    let inserted = conn.execute(
        "INSERT OR IGNORE INTO logs (date, title, category) VALUES (?1, ?2, ?3)",
        params![format_date(date), title, category],
    )?;

    if inserted == 0 {
        tracing::debug!(%date, title, "already logged");
        return Ok(LogOutcome::AlreadyLogged);
    }

    tracing::info!(%date, title, category, "reading logged");
    Ok(LogOutcome::Logged)
}

/// Category to log `title` under: `explicit` if given, else the category of
/// the matching article pinned for `date`, else [`FALLBACK_CATEGORY`].
pub fn category_for_title(
    conn: &Connection,
    date: NaiveDate,
    title: &str,
    explicit: Option<&str>,
) -> Result<String> {
    if let Some(category) = explicit {
        return Ok(category.to_string());
    }

    let pinned = selection_for(conn, date)?
        .and_then(|p| p.items.into_iter().find(|i| i.title == title))
        .map(|i| i.category);

    Ok(pinned.unwrap_or_else(|| FALLBACK_CATEGORY.to_string()))
}

fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<LogEntry> {
    let date: String = row.get(1)?;
    Ok(LogEntry {
        id: row.get(0)?,
        date: parse_date_column(1, &date)?,
        title: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        category: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
    })
}

/// Every logged reading, oldest first.
pub fn list_logs(conn: &Connection) -> Result<Vec<LogEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, title, category FROM logs WHERE date IS NOT NULL ORDER BY date, id",
    )?;
    let entries = stmt
        .query_map([], row_to_entry)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}

/// Readings logged on one date, in the order they were logged.
pub fn logs_on(conn: &Connection, date: NaiveDate) -> Result<Vec<LogEntry>> {
    let mut stmt =
        conn.prepare("SELECT id, date, title, category FROM logs WHERE date = ?1 ORDER BY id")?;
    let entries = stmt
        .query_map(params![format_date(date)], row_to_entry)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn logs_once_per_day() {
        let conn = open_memory_database().unwrap();

        assert_eq!(
            log_completion(&conn, date(1), "Whale songs", "Biology").unwrap(),
            LogOutcome::Logged
        );
        assert_eq!(
            log_completion(&conn, date(1), "Whale songs", "Biology").unwrap(),
            LogOutcome::AlreadyLogged
        );

        let entries = list_logs(&conn).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Whale songs");
        assert_eq!(entries[0].category, "Biology");
        assert_eq!(entries[0].date, date(1));
    }

    #[test]
    fn same_title_on_another_day_is_logged() {
        let conn = open_memory_database().unwrap();
        log_completion(&conn, date(1), "Whale songs", "Biology").unwrap();
        assert_eq!(
            log_completion(&conn, date(2), "Whale songs", "Biology").unwrap(),
            LogOutcome::Logged
        );
        assert_eq!(list_logs(&conn).unwrap().len(), 2);
        assert_eq!(logs_on(&conn, date(2)).unwrap().len(), 1);
        assert!(logs_on(&conn, date(3)).unwrap().is_empty());
    }

    #[test]
    fn list_logs_orders_by_date() {
        let conn = open_memory_database().unwrap();
        log_completion(&conn, date(5), "Later", "Health").unwrap();
        log_completion(&conn, date(2), "Earlier", "Science").unwrap();

        let titles: Vec<String> = list_logs(&conn)
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["Earlier", "Later"]);
    }
}
