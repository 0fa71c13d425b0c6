pub mod doctor;
pub mod done;
pub mod export;
pub mod stats;
pub mod today;
pub mod vocab;

use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;

use bioread::config::SelectionConfig;

/// RNG for the selection draw on `date`. A configured seed is mixed with the
/// date so pinned runs stay reproducible without repeating the same draw daily.
pub fn selection_rng(config: &SelectionConfig, date: NaiveDate) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed ^ date.num_days_from_ce() as u64),
        None => StdRng::from_entropy(),
    }
}
