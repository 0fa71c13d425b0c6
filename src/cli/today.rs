//! CLI `today` command — show today's pinned articles, drawing them on first use.

use anyhow::Result;
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use rusqlite::Connection;
use std::collections::HashSet;
use std::time::Duration;

use bioread::config::BioreadConfig;
use bioread::feeds::FeedPool;
use bioread::reading::{log, selection};

pub async fn today(config: &BioreadConfig, conn: &Connection, date: NaiveDate) -> Result<()> {
    let pool = FeedPool::new(&config.feeds)?;
    let mut rng = super::selection_rng(&config.selection, date);

    let spinner = if selection::selection_for(conn, date)?.is_some() {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner} {msg}")
                .expect("valid template"),
        );
        pb.set_message("Fetching today's articles...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };

    let pinned =
        selection::todays_selection(conn, &pool, &mut rng, date, config.selection.size).await;
    spinner.finish_and_clear();
    let pinned = pinned?;

    println!("Today's reading ({date})");
    println!("{}", "=".repeat(40));

    if pinned.is_empty() {
        println!("No articles available today.");
        return Ok(());
    }

    let done: HashSet<String> = log::logs_on(conn, date)?
        .into_iter()
        .map(|entry| entry.title)
        .collect();

    for (i, item) in pinned.items.iter().enumerate() {
        let mark = if done.contains(&item.title) { "x" } else { " " };
        let published = item
            .published
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        println!();
        println!("[{}] [{mark}] {}", i + 1, item.title);
        println!("    {} | published {published}", item.category);
        if !item.summary.is_empty() {
            println!("    {}", item.summary);
        }
        println!("    {}", item.link);
    }

    println!();
    println!("Finished one? Run `bioread done <number>`.");
    Ok(())
}
