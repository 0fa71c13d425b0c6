use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

use bioread::reading::types::{DailySelection, LogEntry, VocabEntry};
use bioread::reading::{log, selection, vocab};

/// Export format — every table in one document.
#[derive(Debug, Serialize)]
struct ExportData {
    exported_at: String,
    logs: Vec<LogEntry>,
    vocabulary: Vec<VocabEntry>,
    selections: Vec<DailySelection>,
}

/// Export the reading log, vocabulary and pinned selections as JSON to stdout.
pub fn export(conn: &Connection) -> Result<()> {
    let data = ExportData {
        exported_at: chrono::Utc::now().to_rfc3339(),
        logs: log::list_logs(conn)?,
        vocabulary: vocab::list_entries(conn)?,
        selections: selection::list_selections(conn)?,
    };

    let json = serde_json::to_string_pretty(&data)?;
    println!("{json}");

    eprintln!(
        "Exported {} readings, {} words and {} daily selections.",
        data.logs.len(),
        data.vocabulary.len(),
        data.selections.len()
    );

    Ok(())
}
