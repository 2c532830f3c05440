use std::collections::HashMap;

use tracing::debug;

use crate::models::TeamMetrics;

/// Resolves odds-provider team names against the metrics mapping
///
/// The odds side uses full names ("Carolina Hurricanes") while the metrics
/// side keys by abbreviation ("CAR") and, where available, full name too.
/// Resolution is two-phase: exact key match first, then a substring scan in
/// either direction. The scan walks keys in sorted order so that when more
/// than one partial match exists the result is still deterministic.
pub struct MetricsRegistry {
    metrics: HashMap<String, TeamMetrics>,
}

impl MetricsRegistry {
    /// Build a registry over the provider's team-key → metrics mapping
    pub fn new(metrics: HashMap<String, TeamMetrics>) -> Self {
        Self { metrics }
    }

    /// Look up a team's metrics by full name or abbreviation
    ///
    /// Returns `None` when no key matches, a normal state (new franchise,
    /// name drift), which downstream treats as "league average", not an error.
    pub fn resolve(&self, team: &str) -> Option<&TeamMetrics> {
        // Exact match (by abbrev or full name)
        if let Some(metrics) = self.metrics.get(team) {
            return Some(metrics);
        }

        // Fall back to substring containment in either direction, compared
        // case-insensitively so "CAR" still finds "Carolina Hurricanes".
        // Keys are scanned in sorted order; the first hit wins.
        let team_lower = team.to_lowercase();
        let mut keys: Vec<&String> = self.metrics.keys().collect();
        keys.sort();

        for key in keys {
            let key_lower = key.to_lowercase();
            if team_lower.contains(&key_lower) || key_lower.contains(&team_lower) {
                debug!("Resolved '{}' to metrics key '{}'", team, key);
                return Some(&self.metrics[key]);
            }
        }

        debug!("No metrics found for '{}'", team);
        None
    }
}
