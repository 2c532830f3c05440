use serde::{Deserialize, Serialize};

/// Missing quality percentages are read as exactly league average:
/// neither strong nor weak.
pub const NEUTRAL_QUALITY_PCT: f64 = 50.0;

/// Classification thresholds, the numbers that encode the framework
///
/// One immutable value injected into the classifier, so boundary values can
/// be exercised in tests without touching code. The defaults are the
/// framework's production constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Total at or above which a game is "high total"
    pub high_total: f64,

    /// Total at or above which a game is "moderate total"
    pub moderate_total: f64,

    /// HDCF% meaningfully above league average (50% at 5v5)
    pub strong_quality_pct: f64,

    /// HDCF% meaningfully below league average
    pub weak_quality_pct: f64,

    /// PDO above this is running hot and likely to regress
    pub high_pdo: f64,

    /// Implied team total this high...
    pub divergence_implied_total: f64,

    /// ...with HDCF% this low is a divergence
    pub divergence_quality_pct: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            high_total: 6.0,
            moderate_total: 5.5,
            strong_quality_pct: 52.0,
            weak_quality_pct: 47.0,
            high_pdo: 101.5,
            divergence_implied_total: 3.0,
            divergence_quality_pct: 47.0,
        }
    }
}
