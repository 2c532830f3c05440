use tracing::debug;

use crate::analysis::SlateClassifier;
use crate::matching::MetricsRegistry;
use crate::models::{GameOdds, SlateBreakdown};

/// Build a full slate breakdown from odds + the metrics registry
///
/// Pure function of its inputs: resolve both sides, classify (divergence
/// first, then tier), collect, and sort with a stable sort by tier rank then
/// total descending, so higher-total games surface first within a tier and
/// ties keep the provider's order. An empty odds list yields an empty
/// breakdown.
pub fn build_breakdown(
    classifier: &SlateClassifier,
    odds_list: &[GameOdds],
    registry: &MetricsRegistry,
) -> SlateBreakdown {
    let mut games = Vec::with_capacity(odds_list.len());

    for odds in odds_list {
        let home_metrics = registry.resolve(&odds.home_team);
        let away_metrics = registry.resolve(&odds.away_team);

        let entry = classifier.classify(odds, home_metrics, away_metrics);
        debug!(
            "Classified {}: {} ({})",
            entry.matchup(),
            entry.tier.as_str(),
            entry.rationale
        );
        games.push(entry);
    }

    // Strong consensus first, then edge, contrarian, avoid
    games.sort_by(|a, b| {
        a.tier
            .rank()
            .cmp(&b.tier.rank())
            .then(b.total.total_cmp(&a.total))
    });

    SlateBreakdown { games }
}
