//! CLI `vocab` commands — add to and list the vocabulary notebook.

use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::Connection;

use bioread::reading::vocab::{add_entry, list_entries};

pub fn add(conn: &Connection, date: NaiveDate, word: &str, meaning: &str, note: &str) -> Result<()> {
    match add_entry(conn, date, word, meaning, note) {
        Ok(entry) => println!("Saved word: {}", entry.word),
        Err(e) if e.is_validation() => {
            eprintln!("Not saved: {e}. Enter at least a word and its meaning.");
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

pub fn list(conn: &Connection) -> Result<()> {
    let entries = list_entries(conn)?;

    if entries.is_empty() {
        println!("Your vocabulary notebook is empty. Add words with `bioread vocab add`.");
        return Ok(());
    }

    let word_width = entries.iter().map(|e| e.word.chars().count()).max().unwrap_or(4).max(4);
    let meaning_width = entries
        .iter()
        .map(|e| e.meaning.chars().count())
        .max()
        .unwrap_or(7)
        .max(7);

    println!(
        "{:<10}  {:<word_width$}  {:<meaning_width$}  Notes",
        "Date", "Word", "Meaning"
    );
    println!("{}", "-".repeat(10 + word_width + meaning_width + 13));
    for entry in &entries {
        println!(
            "{:<10}  {:<word_width$}  {:<meaning_width$}  {}",
            entry.date.to_string(),
            entry.word,
            entry.meaning,
            entry.note
        );
    }
    println!();
    println!("{} word(s)", entries.len());

    Ok(())
}
