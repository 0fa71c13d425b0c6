use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;

use super::parse_date_column;

/// Completions on one date and the running total up to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u64,
    pub cumulative: u64,
}

/// Response from [`reading_stats`].
#[derive(Debug, Serialize)]
pub struct ReadingStats {
    /// One row per date with at least one completion, oldest first.
    pub days: Vec<DailyCount>,
    pub total: u64,
}

/// Per-day completion counts with a cumulative total.
pub fn reading_stats(conn: &Connection) -> Result<ReadingStats> {
    let mut stmt = conn.prepare(
        "SELECT date, COUNT(*) FROM logs WHERE date IS NOT NULL GROUP BY date ORDER BY date",
    )?;
    let rows: Vec<(NaiveDate, i64)> = stmt
        .query_map([], |row| {
            let date: String = row.get(0)?;
            Ok((parse_date_column(0, &date)?, row.get(1)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut cumulative = 0u64;
    let days = rows
        .into_iter()
        .map(|(date, count)| {
            let count = count as u64;
            cumulative += count;
            DailyCount {
                date,
                count,
                cumulative,
            }
        })
        .collect();

    Ok(ReadingStats {
        days,
        total: cumulative,
    })
}
