use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::TeamMetrics;

/// Game environment tier for DFS entry allocation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// High-total games with strong shot quality on both sides. Everyone
    /// will be here; you need exposure but not overweight (~25% of entries).
    StrongConsensus,
    /// Moderate-to-high totals where one side has a quality edge the market
    /// may be underpricing. This is where edges live (~50% of entries).
    Edge,
    /// Low totals, or trap games where Vegas disagrees with the underlying
    /// data. Thin ownership, GPP upside (~25% of entries).
    Contrarian,
    /// No clear edge or path to differentiation.
    Avoid,
}

impl Tier {
    /// Sort rank: lower means the tier surfaces earlier in a breakdown
    pub fn rank(&self) -> u8 {
        match self {
            Tier::StrongConsensus => 0,
            Tier::Edge => 1,
            Tier::Contrarian => 2,
            Tier::Avoid => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::StrongConsensus => "strong_consensus",
            Tier::Edge => "edge",
            Tier::Contrarian => "contrarian",
            Tier::Avoid => "avoid",
        }
    }
}

/// A single game's full slate analysis, the core unit of the product
///
/// Echoes the market fields from [`crate::models::GameOdds`], carries both
/// teams' metrics where resolved, and adds the classification: tier,
/// rationale, and the divergence annotation. Built once per game by the
/// classifier and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlateEntry {
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub commence_time: Option<DateTime<Utc>>,

    // Vegas
    pub total: f64,
    pub home_implied_total: f64,
    pub away_implied_total: f64,
    pub home_ml: i32,
    pub away_ml: i32,
    #[serde(default)]
    pub home_spread: Option<f64>,

    // Shot quality, where the registry resolved a record
    #[serde(default)]
    pub home_metrics: Option<TeamMetrics>,
    #[serde(default)]
    pub away_metrics: Option<TeamMetrics>,

    // Classification
    pub tier: Tier,
    pub rationale: String,

    // Divergence annotation; detail is non-empty iff the flag is set
    pub divergence_flag: bool,
    pub divergence_detail: String,
}

impl SlateEntry {
    /// Display matchup in "AWY @ HOM" convention
    pub fn matchup(&self) -> String {
        format!("{} @ {}", self.away_team, self.home_team)
    }
}

/// Full slate analysis for one fetch cycle, the top-level product output
///
/// Entries are ordered by tier rank, then total descending within a tier.
/// Consumers only read; there is no mutation surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlateBreakdown {
    pub games: Vec<SlateEntry>,
}

impl SlateBreakdown {
    pub fn strong_consensus_games(&self) -> Vec<&SlateEntry> {
        self.by_tier(Tier::StrongConsensus)
    }

    pub fn edge_games(&self) -> Vec<&SlateEntry> {
        self.by_tier(Tier::Edge)
    }

    pub fn contrarian_games(&self) -> Vec<&SlateEntry> {
        self.by_tier(Tier::Contrarian)
    }

    pub fn avoid_games(&self) -> Vec<&SlateEntry> {
        self.by_tier(Tier::Avoid)
    }

    /// Games carrying any divergence flag, in breakdown order
    pub fn divergence_games(&self) -> Vec<&SlateEntry> {
        self.games.iter().filter(|g| g.divergence_flag).collect()
    }

    fn by_tier(&self, tier: Tier) -> Vec<&SlateEntry> {
        self.games.iter().filter(|g| g.tier == tier).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_rank_order() {
        assert!(Tier::StrongConsensus.rank() < Tier::Edge.rank());
        assert!(Tier::Edge.rank() < Tier::Contrarian.rank());
        assert!(Tier::Contrarian.rank() < Tier::Avoid.rank());
    }

    #[test]
    fn test_tier_as_str() {
        assert_eq!(Tier::StrongConsensus.as_str(), "strong_consensus");
        assert_eq!(Tier::Avoid.as_str(), "avoid");
    }
}
