//! CLI `done` command — log a completed reading.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use rusqlite::Connection;

use bioread::reading::log::{category_for_title, log_completion, LogOutcome};
use bioread::reading::selection::{pinned_item, selection_for};

/// Log either article number `index` (1-based) from today's selection, or an
/// arbitrary `title`.
pub fn done(
    conn: &Connection,
    date: NaiveDate,
    index: Option<usize>,
    title: Option<&str>,
    category: Option<&str>,
) -> Result<()> {
    let (title, category) = match (index, title) {
        (Some(n), _) => match pinned_item(conn, date, n)? {
            Some(item) => (item.title, item.category),
            None => match selection_for(conn, date)? {
                None => bail!("no articles pinned for today; run `bioread today` first"),
                Some(pinned) => bail!(
                    "there is no article #{n} today ({} pinned)",
                    pinned.items.len()
                ),
            },
        },
        (None, Some(title)) => (
            title.to_string(),
            category_for_title(conn, date, title, category)?,
        ),
        (None, None) => bail!("pass an article number or --title"),
    };

    match log_completion(conn, date, &title, &category)? {
        LogOutcome::Logged => println!("Logged reading: {title}"),
        LogOutcome::AlreadyLogged => eprintln!("Already logged today: {title}"),
    }

    Ok(())
}
