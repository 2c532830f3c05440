use serde::{Deserialize, Serialize};

/// Team-level shot quality over a recent window, all situations 5v5
///
/// Produced by the metrics provider. Every stat is optional: a team with an
/// insufficient sample simply has `None` there, and every consumer defines
/// its own behavior for absence (documented defaults, never silent zeroes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMetrics {
    /// Team name or abbreviation as the metrics provider spells it
    pub team: String,

    /// Games in the sample window
    pub games: u32,

    /// Corsi For % (possession share)
    #[serde(default)]
    pub cf_pct: Option<f64>,

    /// Expected Goals For %
    #[serde(default)]
    pub xgf_pct: Option<f64>,

    /// High-Danger Corsi For % (quality chance share)
    #[serde(default)]
    pub hdcf_pct: Option<f64>,

    /// High-danger chances for, per 60 minutes
    #[serde(default)]
    pub hdcf_per_60: Option<f64>,

    /// High-danger chances against, per 60 minutes
    #[serde(default)]
    pub hdca_per_60: Option<f64>,

    /// Shooting %
    #[serde(default)]
    pub sh_pct: Option<f64>,

    /// Save %
    #[serde(default)]
    pub sv_pct: Option<f64>,

    /// PDO (sh% + sv%), the luck indicator
    #[serde(default)]
    pub pdo: Option<f64>,
}
