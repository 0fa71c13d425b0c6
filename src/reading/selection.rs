//! The daily selection cache.
//!
//! [`todays_selection`] is the single entry point. The first call for a date
//! fetches a candidate pool, draws up to `size` items uniformly at random
//! without replacement, and pins them in `daily_selection`. Every later call
//! for the same date returns the pinned row without touching the pool source,
//! including after a restart.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info, warn};

use super::types::{CandidateItem, DailySelection};
use super::{format_date, parse_date_column};
use crate::feeds::PoolSource;

/// Articles pinned per day unless configured otherwise.
pub const DEFAULT_SELECTION_SIZE: usize = 3;

/// Return the selection pinned for `date`, drawing and pinning one first if
/// none exists yet. An empty pool pins an empty selection.
pub async fn todays_selection<P, R>(
    conn: &Connection,
    source: &P,
    rng: &mut R,
    date: NaiveDate,
    size: usize,
) -> Result<DailySelection>
where
    P: PoolSource,
    R: Rng + ?Sized,
{
    if let Some(existing) = selection_for(conn, date)? {
        debug!(%date, items = existing.items.len(), "using pinned selection");
        return Ok(existing);
    }

    let pool = source.fetch_pool().await;
    let items = choose_items(&pool, size, rng);
    if items.is_empty() {
        warn!(%date, "candidate pool is empty, pinning an empty selection");
    }

    pin_selection(conn, date, &items)
}

/// Draw up to `size` distinct items from `pool`, uniformly at random.
pub fn choose_items<R: Rng + ?Sized>(
    pool: &[CandidateItem],
    size: usize,
    rng: &mut R,
) -> Vec<CandidateItem> {
    pool.choose_multiple(rng, size).cloned().collect()
}

/// Persist `items` as the selection for `date` unless one is already stored.
/// Returns whatever is stored afterwards.
fn pin_selection(
    conn: &Connection,
    date: NaiveDate,
    items: &[CandidateItem],
) -> Result<DailySelection> {
    let items_json = serde_json::to_string(items).context("failed to serialize selection")?;
    let inserted = conn.execute(
        "INSERT OR IGNORE INTO daily_selection (date, items, created_at) VALUES (?1, ?2, ?3)",
        params![format_date(date), items_json, chrono::Utc::now().to_rfc3339()],
    )?;

    if inserted > 0 {
        info!(%date, items = items.len(), "pinned daily selection");
    } else {
        debug!(%date, "selection already pinned, keeping stored row");
    }

    selection_for(conn, date)?
        .with_context(|| format!("selection for {date} missing after insert"))
}

/// Read the selection pinned for `date`, if any.
pub fn selection_for(conn: &Connection, date: NaiveDate) -> Result<Option<DailySelection>> {
    let items_json: Option<String> = conn
        .query_row(
            "SELECT items FROM daily_selection WHERE date = ?1",
            params![format_date(date)],
            |row| row.get(0),
        )
        .optional()?;

    items_json
        .map(|json| {
            let items = serde_json::from_str(&json)
                .with_context(|| format!("corrupt selection stored for {date}"))?;
            Ok::<_, anyhow::Error>(DailySelection { date, items })
        })
        .transpose()
}

/// Article number `n` (1-based, as shown to the user) from the selection
/// pinned for `date`. `None` when nothing is pinned or `n` is out of range.
pub fn pinned_item(conn: &Connection, date: NaiveDate, n: usize) -> Result<Option<CandidateItem>> {
    let Some(pinned) = selection_for(conn, date)? else {
        return Ok(None);
    };
    Ok(n.checked_sub(1).and_then(|i| pinned.items.into_iter().nth(i)))
}

/// All pinned selections, oldest first.
pub fn list_selections(conn: &Connection) -> Result<Vec<DailySelection>> {
    let mut stmt = conn.prepare("SELECT date, items FROM daily_selection ORDER BY date")?;
    let rows: Vec<(NaiveDate, String)> = stmt
        .query_map([], |row| {
            let date: String = row.get(0)?;
            Ok((parse_date_column(0, &date)?, row.get(1)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(date, json)| {
            let items = serde_json::from_str(&json)
                .with_context(|| format!("corrupt selection stored for {date}"))?;
            Ok::<_, anyhow::Error>(DailySelection { date, items })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;
    use crate::feeds::StaticPool;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::Cell;

    fn item(n: usize) -> CandidateItem {
        CandidateItem {
            title: format!("Article {n}"),
            link: format!("https://example.com/{n}"),
            summary: format!("Summary {n}"),
            category: "Science".into(),
            published: None,
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    /// Counts how often the pool is fetched.
    struct CountingPool {
        inner: StaticPool,
        fetches: Cell<usize>,
    }

    impl PoolSource for CountingPool {
        async fn fetch_pool(&self) -> Vec<CandidateItem> {
            self.fetches.set(self.fetches.get() + 1);
            self.inner.fetch_pool().await
        }
    }

    #[test]
    fn choose_items_caps_at_size_without_repeats() {
        let pool: Vec<_> = (0..5).map(item).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let chosen = choose_items(&pool, 3, &mut rng);
        assert_eq!(chosen.len(), 3);
        for c in &chosen {
            assert!(pool.contains(c));
            assert_eq!(chosen.iter().filter(|o| *o == c).count(), 1);
        }
    }

    #[test]
    fn choose_items_returns_whole_small_pool() {
        let pool: Vec<_> = (0..2).map(item).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let chosen = choose_items(&pool, 3, &mut rng);
        assert_eq!(chosen.len(), 2);
    }

    #[tokio::test]
    async fn second_call_does_not_refetch() {
        let conn = open_memory_database().unwrap();
        let pool = CountingPool {
            inner: StaticPool::new((0..5).map(item).collect()),
            fetches: Cell::new(0),
        };
        let mut rng = StdRng::seed_from_u64(7);

        let first = todays_selection(&conn, &pool, &mut rng, date(1), 3).await.unwrap();
        let second = todays_selection(&conn, &pool, &mut rng, date(1), 3).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(pool.fetches.get(), 1);
    }

    #[test]
    fn pin_keeps_existing_row() {
        let conn = open_memory_database().unwrap();
        let stored = pin_selection(&conn, date(2), &[item(1)]).unwrap();
        let again = pin_selection(&conn, date(2), &[item(2), item(3)]).unwrap();
        assert_eq!(stored, again);
        assert_eq!(again.items, vec![item(1)]);
    }

    #[test]
    fn selection_for_missing_date_is_none() {
        let conn = open_memory_database().unwrap();
        assert!(selection_for(&conn, date(3)).unwrap().is_none());
    }

    #[test]
    fn corrupt_row_is_reported() {
        let conn = open_memory_database().unwrap();
        conn.execute(
            "INSERT INTO daily_selection (date, items, created_at) VALUES ('2024-05-04', 'not json', '')",
            [],
        )
        .unwrap();
        let err = selection_for(&conn, date(4)).unwrap_err();
        assert!(err.to_string().contains("corrupt selection"));
    }
}
