use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::feeds::FeedSource;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BioreadConfig {
    pub general: GeneralConfig,
    pub storage: StorageConfig,
    pub feeds: FeedsConfig,
    pub selection: SelectionConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FeedsConfig {
    /// Entries taken from the head of each feed.
    pub per_feed_limit: usize,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub sources: Vec<FeedSource>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SelectionConfig {
    /// Number of articles pinned per day.
    pub size: usize,
    /// Fixed RNG seed. Unset means a fresh entropy-seeded draw.
    pub seed: Option<u64>,
}

impl Default for BioreadConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            storage: StorageConfig::default(),
            feeds: FeedsConfig::default(),
            selection: SelectionConfig::default(),
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_bioread_dir()
            .join("reading_log.db")
            .to_string_lossy()
            .into_owned();
        Self { db_path }
    }
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            per_feed_limit: 3,
            timeout_secs: 20,
            user_agent: concat!("bioread/", env!("CARGO_PKG_VERSION")).into(),
            sources: crate::feeds::default_sources(),
        }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            size: crate::reading::selection::DEFAULT_SELECTION_SIZE,
            seed: None,
        }
    }
}

/// Returns `~/.bioread/`
pub fn default_bioread_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".bioread")
}

/// Returns the default config file path: `~/.bioread/config.toml`
pub fn default_config_path() -> PathBuf {
    default_bioread_dir().join("config.toml")
}

impl BioreadConfig {
    /// Load config from the default TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            BioreadConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (BIOREAD_DB, BIOREAD_LOG_LEVEL, BIOREAD_SEED).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("BIOREAD_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("BIOREAD_LOG_LEVEL") {
            self.general.log_level = val;
        }
        if let Ok(val) = std::env::var("BIOREAD_SEED") {
            match val.parse::<u64>() {
                Ok(seed) => self.selection.seed = Some(seed),
                Err(_) => tracing::warn!(value = %val, "ignoring non-numeric BIOREAD_SEED"),
            }
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
