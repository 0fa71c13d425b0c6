//! Vocabulary notebook — an append-only personal glossary.

use chrono::NaiveDate;
use rusqlite::{params, Connection};
use thiserror::Error;

use super::types::VocabEntry;
use super::{format_date, parse_date_column};

/// Why an entry was not added.
#[derive(Debug, Error)]
pub enum VocabError {
    #[error("a word is required")]
    MissingWord,
    #[error("a meaning is required")]
    MissingMeaning,
    #[error("vocabulary storage failed")]
    Storage(#[from] rusqlite::Error),
}

impl VocabError {
    /// `true` for input problems, `false` for storage failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingWord | Self::MissingMeaning)
    }
}

/// Append a glossary entry. `word` and `meaning` must be non-blank; `note` is optional.
pub fn add_entry(
    conn: &Connection,
    date: NaiveDate,
    word: &str,
    meaning: &str,
    note: &str,
) -> Result<VocabEntry, VocabError> {
    let word = word.trim();
    let meaning = meaning.trim();
    let note = note.trim();

    if word.is_empty() {
        return Err(VocabError::MissingWord);
    }
    if meaning.is_empty() {
        return Err(VocabError::MissingMeaning);
    }

    conn.execute(
        "INSERT INTO vocabulary (date, word, meaning, note) VALUES (?1, ?2, ?3, ?4)",
        params![format_date(date), word, meaning, note],
    )?;
    let id = conn.last_insert_rowid();
    tracing::info!(id, word, "vocabulary entry saved");

    Ok(VocabEntry {
        id,
        date,
        word: word.to_string(),
        meaning: meaning.to_string(),
        note: note.to_string(),
    })
}

/// All entries, newest first.
pub fn list_entries(conn: &Connection) -> Result<Vec<VocabEntry>, VocabError> {
    let mut stmt = conn.prepare(
        "SELECT id, date, word, meaning, note FROM vocabulary WHERE date IS NOT NULL ORDER BY id DESC",
    )?;
    let entries = stmt
        .query_map([], |row| {
            let date: String = row.get(1)?;
            Ok(VocabEntry {
                id: row.get(0)?,
                date: parse_date_column(1, &date)?,
                word: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                meaning: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                note: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}

/// Number of entries [`list_entries`] returns.
pub fn count_entries(conn: &Connection) -> Result<u64, VocabError> {
    let n: i64 = conn.query_row(
        "SELECT COUNT(*) FROM vocabulary WHERE date IS NOT NULL",
        [],
        |row| row.get(0),
    )?;
    Ok(n as u64)
}
