//! Candidate pool sources.
//!
//! A [`PoolSource`] produces the full set of candidate articles a daily
//! selection is drawn from. [`FeedPool`] fetches them over HTTP from a fixed
//! list of syndication feeds; [`StaticPool`] serves a fixed list held in memory.

mod http;

pub use http::{parse_feed, FeedPool};

use serde::{Deserialize, Serialize};
use std::future::Future;

use crate::reading::types::CandidateItem;

/// A named feed. `category` is attached to every item the feed yields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    pub category: String,
    pub url: String,
}

impl FeedSource {
    pub fn new(category: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            url: url.into(),
        }
    }
}

/// The three ScienceDaily feeds used when no sources are configured.
pub fn default_sources() -> Vec<FeedSource> {
    vec![
        FeedSource::new(
            "Biology",
            "https://www.sciencedaily.com/rss/plants_animals/biology.xml",
        ),
        FeedSource::new(
            "Health",
            "https://www.sciencedaily.com/rss/health_medicine.xml",
        ),
        FeedSource::new("Science", "https://www.sciencedaily.com/rss/top/science.xml"),
    ]
}

/// Something that can produce a pool of candidate items.
///
/// Fetching never fails as a whole: a source that cannot be reached
/// contributes nothing and the remaining sources still count.
pub trait PoolSource {
    fn fetch_pool(&self) -> impl Future<Output = Vec<CandidateItem>>;
}

/// A pool fixed at construction time.
#[derive(Debug, Clone, Default)]
pub struct StaticPool {
    items: Vec<CandidateItem>,
}

impl StaticPool {
    pub fn new(items: Vec<CandidateItem>) -> Self {
        Self { items }
    }
}

impl PoolSource for StaticPool {
    async fn fetch_pool(&self) -> Vec<CandidateItem> {
        self.items.clone()
    }
}
