use anyhow::Result;
use rusqlite::Connection;

use bioread::reading::stats::reading_stats;

/// Display reading statistics in the terminal.
pub fn stats(conn: &Connection) -> Result<()> {
    let response = reading_stats(conn)?;

    if response.days.is_empty() {
        println!("No reading records yet. Keep going!");
        return Ok(());
    }

    println!("Reading Statistics");
    println!("{}", "=".repeat(40));
    println!("  {:<12} {:>6} {:>11}", "Date", "Read", "Cumulative");
    for day in &response.days {
        println!(
            "  {:<12} {:>6} {:>11}",
            day.date.to_string(),
            day.count,
            day.cumulative
        );
    }
    println!();
    println!("Total articles read:   {}", response.total);

    Ok(())
}
