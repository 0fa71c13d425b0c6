//! Daily reading engine: the pinned selection, the reading log, the
//! vocabulary notebook, and statistics over the log.
//!
//! Every operation takes the open [`rusqlite::Connection`] and the calendar
//! date it applies to, so callers (and tests) decide what "today" means.

pub mod log;
pub mod selection;
pub mod stats;
pub mod types;
pub mod vocab;

use chrono::NaiveDate;

/// Storage format for calendar dates, compatible with the legacy database.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The current local calendar date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a stored date column inside a rusqlite row mapper.
pub(crate) fn parse_date_column(idx: usize, value: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}
