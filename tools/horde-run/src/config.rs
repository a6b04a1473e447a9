//! Run configuration, optionally loaded from a JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use horde_core::config::{LedgerConfig, SessionConfig};

/// Everything `horde-run` needs. Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub session: SessionConfig,
    pub ledger: LedgerConfig,
    /// Directory holding `leaderboard.json` and `stats.json`.
    pub data_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            ledger: LedgerConfig::default(),
            data_dir: PathBuf::from("horde-data"),
        }
    }
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: RunConfig = serde_json::from_str(&json)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config
            .session
            .spawner
            .validate()
            .context("invalid spawner config")?;
        Ok(config)
    }

    pub fn leaderboard_path(&self) -> PathBuf {
        self.data_dir.join("leaderboard.json")
    }

    pub fn stats_path(&self) -> PathBuf {
        self.data_dir.join("stats.json")
    }
}
