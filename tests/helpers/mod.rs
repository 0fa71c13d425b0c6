#![allow(dead_code)]

use bioread::db;
use bioread::reading::types::CandidateItem;
use chrono::NaiveDate;
use rusqlite::Connection;

/// Open a fresh in-memory database with schema and migrations applied.
pub fn test_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::schema::init_schema(&conn).unwrap();
    db::migrations::run_migrations(&conn).unwrap();
    conn
}

/// A candidate article whose fields are all derived from `n`.
pub fn candidate(n: usize) -> CandidateItem {
    let category = ["Biology", "Health", "Science"][n % 3];
    CandidateItem {
        title: format!("Article {n}"),
        link: format!("https://www.example.com/news/{n}"),
        summary: format!("Findings from study number {n}."),
        category: category.to_string(),
        published: None,
    }
}

/// A pool of `size` distinct candidates.
pub fn candidate_pool(size: usize) -> Vec<CandidateItem> {
    (0..size).map(candidate).collect()
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
