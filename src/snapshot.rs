//! Provider snapshot loading.
//!
//! The odds and metrics collaborators run elsewhere (scrapers and API
//! clients are out of scope here) and drop their latest pull as JSON files.
//! This module reads those files into the boundary types the core consumes:
//! a finite odds list and a team-key → metrics mapping keyed under both
//! abbreviation and full name where the provider has them.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::models::{GameOdds, TeamMetrics};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse snapshot {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the odds provider's snapshot: a JSON array of games
pub fn load_odds(path: &Path) -> Result<Vec<GameOdds>, SnapshotError> {
    let content = read(path)?;
    serde_json::from_str(&content).map_err(|source| SnapshotError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Load the metrics provider's snapshot: a JSON object of team key → metrics
pub fn load_metrics(path: &Path) -> Result<HashMap<String, TeamMetrics>, SnapshotError> {
    let content = read(path)?;
    serde_json::from_str(&content).map_err(|source| SnapshotError::Parse {
        path: path.display().to_string(),
        source,
    })
}

fn read(path: &Path) -> Result<String, SnapshotError> {
    std::fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.display().to_string(),
        source,
    })
}
