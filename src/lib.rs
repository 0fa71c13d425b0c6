//! Daily science reading tracker.
//!
//! bioread pins three science news articles per calendar day, keeps a log of
//! the ones you finish, and collects the words you look up along the way.
//! Everything lives in a single local SQLite file.
//!
//! | Table | Purpose | Invariant |
//! |-------|---------|-----------|
//! | `daily_selection` | Articles pinned for a date | Written once per date, never changed |
//! | `logs` | Completed readings | At most one row per `(date, title)` |
//! | `vocabulary` | Personal glossary | Append-only |
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`db`] — SQLite lifecycle, schema, migrations, and health checks
//! - [`feeds`] — Candidate pool sources (HTTP syndication feeds, static pools)
//! - [`reading`] — Daily selection, reading log, vocabulary, and statistics

pub mod config;
pub mod db;
pub mod feeds;
pub mod reading;
