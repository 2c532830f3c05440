use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Vegas market state for a single NHL game
///
/// Produced by the odds provider (out of scope here) and treated as
/// immutable once constructed. Implied totals are derived from the
/// moneylines upstream and must sum to `total`; that is the provider's
/// contract, not validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOdds {
    /// Home team name as the odds provider spells it
    pub home_team: String,

    /// Away team name as the odds provider spells it
    pub away_team: String,

    /// Scheduled puck drop, if known
    #[serde(default)]
    pub commence_time: Option<DateTime<Utc>>,

    /// Market total (combined final score) for the game
    pub total: f64,

    /// Share of the total implied for the home side
    pub home_implied_total: f64,

    /// Share of the total implied for the away side
    pub away_implied_total: f64,

    /// Home moneyline, American odds convention
    pub home_ml: i32,

    /// Away moneyline, American odds convention
    pub away_ml: i32,

    /// Point spread for the home side, if offered
    #[serde(default)]
    pub home_spread: Option<f64>,
}
