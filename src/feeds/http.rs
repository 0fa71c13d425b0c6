use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use reqwest::Client;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::{FeedSource, PoolSource};
use crate::config::FeedsConfig;
use crate::reading::types::CandidateItem;

/// Fetches the candidate pool from syndication feeds over HTTP.
pub struct FeedPool {
    client: Client,
    sources: Vec<FeedSource>,
    per_feed_limit: usize,
}

impl FeedPool {
    pub fn new(config: &FeedsConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self {
            client,
            sources: config.sources.clone(),
            per_feed_limit: config.per_feed_limit,
        })
    }

    async fn fetch_source(&self, source: &FeedSource) -> Result<Vec<CandidateItem>> {
        let response = self
            .client
            .get(&source.url)
            .send()
            .await
            .with_context(|| format!("HTTP request failed for {}", source.url))?;

        anyhow::ensure!(
            response.status().is_success(),
            "feed returned HTTP {}",
            response.status()
        );

        let body = response.bytes().await.context("error reading response")?;
        parse_feed(&source.category, &body, self.per_feed_limit)
    }
}

impl PoolSource for FeedPool {
    async fn fetch_pool(&self) -> Vec<CandidateItem> {
        let mut pool = Vec::new();
        let mut seen_links = HashSet::new();

        for source in &self.sources {
            match self.fetch_source(source).await {
                Ok(items) => {
                    debug!(category = %source.category, items = items.len(), "feed fetched");
                    // The same story is often syndicated in several feeds; first feed wins.
                    for item in items {
                        if seen_links.insert(item.link.clone()) {
                            pool.push(item);
                        } else {
                            debug!(link = %item.link, "skipping duplicate article");
                        }
                    }
                }
                Err(e) => {
                    warn!(category = %source.category, url = %source.url, error = %format!("{e:#}"), "skipping feed");
                }
            }
        }

        info!(items = pool.len(), sources = self.sources.len(), "candidate pool fetched");
        pool
    }
}

/// Parse an RSS/Atom document into at most `limit` candidate items, in feed order.
///
/// Entries without a link are skipped.
pub fn parse_feed(category: &str, content: &[u8], limit: usize) -> Result<Vec<CandidateItem>> {
    let feed = feed_rs::parser::parse(content).map_err(|e| anyhow!("failed to parse feed: {e}"))?;

    let items = feed
        .entries
        .into_iter()
        .filter_map(|entry| {
            let link = entry.links.first()?.href.clone();
            Some(CandidateItem {
                title: entry
                    .title
                    .map(|t| t.content.trim().to_string())
                    .unwrap_or_else(|| "Untitled".to_string()),
                link,
                summary: entry
                    .summary
                    .map(|s| s.content.trim().to_string())
                    .unwrap_or_default(),
                category: category.to_string(),
                published: entry.published.or(entry.updated).map(|dt| dt.with_timezone(&Utc)),
            })
        })
        .take(limit)
        .collect();

    Ok(items)
}
