mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rusqlite::Connection;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use bioread::config::BioreadConfig;
use bioread::{db, reading};

#[derive(Parser)]
#[command(name = "bioread", version, about = "Daily science reading tracker")]
struct Cli {
    /// Config file (defaults to ~/.bioread/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show today's articles, drawing and pinning them on first use
    Today,
    /// Log a finished article
    Done {
        /// Article number from `bioread today`
        #[arg(conflicts_with = "title")]
        index: Option<usize>,
        /// Log an article by title instead of number
        #[arg(long)]
        title: Option<String>,
        /// Category for --title (defaults to the pinned article's category)
        #[arg(long, requires = "title")]
        category: Option<String>,
    },
    /// Manage the vocabulary notebook
    Vocab {
        #[command(subcommand)]
        action: VocabAction,
    },
    /// Show reading counts per day and overall
    Stats,
    /// Export all data as JSON to stdout
    Export,
    /// Check database health
    Doctor,
}

#[derive(Subcommand)]
enum VocabAction {
    /// Save a word and its meaning
    Add {
        word: String,
        meaning: String,
        /// Example sentence or note
        #[arg(long, default_value = "")]
        note: String,
    },
    /// List saved words, newest first
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => BioreadConfig::load_from(path)?,
        None => BioreadConfig::load()?,
    };

    // Log to stderr so stdout stays clean for command output and exports.
    let filter = EnvFilter::try_new(&config.general.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Doctor inspects the file before anything opens (and possibly creates) it.
    let conn = match cli.command {
        Command::Doctor => return cli::doctor::doctor(&config),
        _ => db::open_database(config.resolved_db_path())?,
    };

    let result = run(cli.command, &config, &conn).await;

    db::close_database(conn)?;
    result
}

async fn run(command: Command, config: &BioreadConfig, conn: &Connection) -> Result<()> {
    let today = reading::today();

    match command {
        Command::Today => cli::today::today(config, conn, today).await,
        Command::Done {
            index,
            title,
            category,
        } => cli::done::done(conn, today, index, title.as_deref(), category.as_deref()),
        Command::Vocab { action } => match action {
            VocabAction::Add {
                word,
                meaning,
                note,
            } => cli::vocab::add(conn, today, &word, &meaning, &note),
            VocabAction::List => cli::vocab::list(conn),
        },
        Command::Stats => cli::stats::stats(conn),
        Command::Export => cli::export::export(conn),
        Command::Doctor => cli::doctor::doctor(config),
    }
}
