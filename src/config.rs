use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the odds provider's snapshot (JSON array of games)
    pub odds_snapshot_path: PathBuf,

    /// Path to the metrics provider's snapshot (JSON map of team → metrics)
    pub metrics_snapshot_path: PathBuf,

    /// Minimum sample size before a team's metrics are trusted
    pub min_sample_games: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            odds_snapshot_path: env::var("ODDS_SNAPSHOT_PATH")
                .unwrap_or_else(|_| "data/odds.json".to_string())
                .into(),

            metrics_snapshot_path: env::var("METRICS_SNAPSHOT_PATH")
                .unwrap_or_else(|_| "data/metrics.json".to_string())
                .into(),

            min_sample_games: env::var("MIN_SAMPLE_GAMES")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .context("MIN_SAMPLE_GAMES must be a valid number")?,
        })
    }
}
