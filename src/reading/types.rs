//! Record types for the reading tracker.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// An article fetched from a feed. Only persisted as part of a [`DailySelection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateItem {
    pub title: String,
    pub link: String,
    pub summary: String,
    /// Name of the feed the item came from (e.g. `"Biology"`).
    pub category: String,
    pub published: Option<DateTime<Utc>>,
}

/// The articles pinned for one calendar day. Never changes once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySelection {
    pub date: NaiveDate,
    pub items: Vec<CandidateItem>,
}

impl DailySelection {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A completed reading, matching the `logs` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub title: String,
    pub category: String,
}

/// A glossary entry, matching the `vocabulary` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub word: String,
    pub meaning: String,
    /// Example sentence or free-form note. May be empty.
    pub note: String,
}
