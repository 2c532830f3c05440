//! Game environment classification.
//!
//! The framework picks games before players: every game on the slate gets
//! exactly one tier (strong consensus / edge / contrarian / avoid) plus a
//! rationale a reader can audit without the raw inputs, so each string
//! carries the total and the quality numbers that drove the call.

use crate::analysis::divergence::annotate_divergence;
use crate::analysis::thresholds::{Thresholds, NEUTRAL_QUALITY_PCT};
use crate::models::{GameOdds, SlateEntry, TeamMetrics, Tier};

/// Classifies single games from odds + shot quality
///
/// Holds the injected thresholds; stateless otherwise, so one classifier can
/// serve any number of slates. Classification never fails: every input
/// combination, including fully absent metrics, yields a tier and rationale.
pub struct SlateClassifier {
    thresholds: Thresholds,
}

impl SlateClassifier {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Classify a single game's environment
    ///
    /// Divergence detection runs first; the tier decision reads its flag
    /// for the low-total trap branch.
    pub fn classify(
        &self,
        odds: &GameOdds,
        home_metrics: Option<&TeamMetrics>,
        away_metrics: Option<&TeamMetrics>,
    ) -> SlateEntry {
        let mut entry = SlateEntry {
            home_team: odds.home_team.clone(),
            away_team: odds.away_team.clone(),
            commence_time: odds.commence_time,
            total: odds.total,
            home_implied_total: odds.home_implied_total,
            away_implied_total: odds.away_implied_total,
            home_ml: odds.home_ml,
            away_ml: odds.away_ml,
            home_spread: odds.home_spread,
            home_metrics: home_metrics.cloned(),
            away_metrics: away_metrics.cloned(),
            tier: Tier::Avoid,
            rationale: String::new(),
            divergence_flag: false,
            divergence_detail: String::new(),
        };

        annotate_divergence(&mut entry, &self.thresholds);
        self.assign_tier(&mut entry);

        entry
    }

    fn assign_tier(&self, entry: &mut SlateEntry) {
        let t = &self.thresholds;
        let total = entry.total;

        // Without shot quality on both sides, classify purely on total
        if entry.home_metrics.is_none() || entry.away_metrics.is_none() {
            let (tier, rationale) = if total >= t.high_total {
                (
                    Tier::StrongConsensus,
                    format!("High total ({total:.1}) — no shot quality data to differentiate further"),
                )
            } else if total >= t.moderate_total {
                (
                    Tier::Edge,
                    format!("Moderate total ({total:.1}) — no shot quality data available"),
                )
            } else {
                (
                    Tier::Contrarian,
                    format!("Low total ({total:.1}) — no shot quality data available"),
                )
            };
            entry.tier = tier;
            entry.rationale = rationale;
            return;
        }

        // A missing HDCF% reads as exactly league average
        let home_hdcf = entry
            .home_metrics
            .as_ref()
            .and_then(|m| m.hdcf_pct)
            .unwrap_or(NEUTRAL_QUALITY_PCT);
        let away_hdcf = entry
            .away_metrics
            .as_ref()
            .and_then(|m| m.hdcf_pct)
            .unwrap_or(NEUTRAL_QUALITY_PCT);

        let home_strong = home_hdcf >= t.strong_quality_pct;
        let away_strong = away_hdcf >= t.strong_quality_pct;
        let home_weak = home_hdcf < t.weak_quality_pct;
        let away_weak = away_hdcf < t.weak_quality_pct;

        // Strong consensus: high total + both teams generating quality chances
        if total >= t.high_total && home_strong && away_strong {
            entry.tier = Tier::StrongConsensus;
            entry.rationale = format!(
                "High total ({total:.1}) with strong shot quality on both sides \
                 (home HDCF% {home_hdcf:.1}, away HDCF% {away_hdcf:.1}). \
                 Expect high ownership — core game for the slate."
            );
            return;
        }

        // Edge: good total + one side with a clear quality advantage
        if total >= t.moderate_total {
            if home_strong && away_weak {
                entry.tier = Tier::Edge;
                entry.rationale = format!(
                    "Total {total:.1} with {} dominating shot quality \
                     (HDCF% {home_hdcf:.1} vs {away_hdcf:.1}). \
                     Home stacks are the play — the quality edge is real.",
                    entry.home_team
                );
                return;
            }
            if away_strong && home_weak {
                entry.tier = Tier::Edge;
                entry.rationale = format!(
                    "Total {total:.1} with {} dominating shot quality \
                     (HDCF% {away_hdcf:.1} vs {home_hdcf:.1}). \
                     Away stacks are the play — the quality edge is real.",
                    entry.away_team
                );
                return;
            }
            // No clean split, but a high enough total still plays as consensus
            if total >= t.high_total {
                entry.tier = Tier::StrongConsensus;
                entry.rationale = format!(
                    "High total ({total:.1}) with moderate shot quality on both sides \
                     (home HDCF% {home_hdcf:.1}, away HDCF% {away_hdcf:.1})."
                );
                return;
            }
            entry.tier = Tier::Edge;
            entry.rationale = format!(
                "Moderate total ({total:.1}) with balanced shot quality \
                 (home HDCF% {home_hdcf:.1}, away HDCF% {away_hdcf:.1})."
            );
            return;
        }

        // Low total from here down. A divergence trap outranks everything.
        if entry.divergence_flag {
            entry.tier = Tier::Contrarian;
            entry.rationale = format!(
                "Divergence detected — Vegas total ({total:.1}) disagrees with shot quality. \
                 Low ownership expected. GPP-only play."
            );
            return;
        }

        if total < t.moderate_total {
            // One strong side in a low-total game is sneaky GPP upside
            if home_strong || away_strong {
                let (side, pct) = if home_strong {
                    ("home", home_hdcf)
                } else {
                    ("away", away_hdcf)
                };
                entry.tier = Tier::Contrarian;
                entry.rationale = format!(
                    "Low total ({total:.1}) but {side} team has strong shot quality \
                     (HDCF% {pct:.1}). Low ownership = GPP upside."
                );
            } else {
                entry.tier = Tier::Avoid;
                entry.rationale = format!(
                    "Low total ({total:.1}) with weak shot quality on both sides \
                     (home HDCF% {home_hdcf:.1}, away HDCF% {away_hdcf:.1}). No edge."
                );
            }
            return;
        }

        // Unreachable: the branches above partition the threshold space.
        entry.tier = Tier::Avoid;
        entry.rationale = "No clear classification — insufficient signal.".to_string();
    }
}

impl Default for SlateClassifier {
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn odds(total: f64, home_implied: f64, away_implied: f64) -> GameOdds {
        GameOdds {
            home_team: "Carolina Hurricanes".to_string(),
            away_team: "Philadelphia Flyers".to_string(),
            commence_time: None,
            total,
            home_implied_total: home_implied,
            away_implied_total: away_implied,
            home_ml: -160,
            away_ml: 140,
            home_spread: Some(-1.5),
        }
    }

    fn quality(hdcf_pct: f64) -> TeamMetrics {
        TeamMetrics {
            team: "TST".to_string(),
            games: 10,
            cf_pct: Some(50.0),
            xgf_pct: Some(50.0),
            hdcf_pct: Some(hdcf_pct),
            hdcf_per_60: None,
            hdca_per_60: None,
            sh_pct: None,
            sv_pct: None,
            pdo: Some(100.0),
        }
    }

    #[test]
    fn test_strong_consensus_high_total_both_strong() {
        // Scenario A
        let classifier = SlateClassifier::default();
        let entry = classifier.classify(
            &odds(6.5, 3.4, 3.1),
            Some(&quality(54.0)),
            Some(&quality(53.0)),
        );

        assert_eq!(entry.tier, Tier::StrongConsensus);
        assert!(entry.rationale.contains("6.5"));
        assert!(entry.rationale.contains("54.0"));
        assert!(entry.rationale.contains("53.0"));
    }

    #[test]
    fn test_edge_names_dominant_side_and_flags_divergence() {
        // Scenario B: home dominates quality while the market prices the
        // weak away side at a 3.1 implied total.
        let classifier = SlateClassifier::default();
        let entry = classifier.classify(
            &odds(5.5, 2.4, 3.1),
            Some(&quality(56.3)),
            Some(&quality(44.2)),
        );

        assert_eq!(entry.tier, Tier::Edge);
        assert!(entry.rationale.contains("Carolina Hurricanes"));
        assert!(entry.rationale.contains("Home stacks"));
        assert!(entry.divergence_flag);
        assert!(entry.divergence_detail.contains("overpricing"));
    }

    #[test]
    fn test_edge_away_dominant() {
        let classifier = SlateClassifier::default();
        let entry = classifier.classify(
            &odds(5.5, 2.9, 2.6),
            Some(&quality(44.2)),
            Some(&quality(56.3)),
        );

        assert_eq!(entry.tier, Tier::Edge);
        assert!(entry.rationale.contains("Philadelphia Flyers"));
        assert!(entry.rationale.contains("Away stacks"));
        assert!(entry.rationale.contains("56.3"));
    }

    #[test]
    fn test_avoid_low_total_no_edge() {
        // Scenario C
        let classifier = SlateClassifier::default();
        let entry = classifier.classify(
            &odds(5.0, 2.6, 2.4),
            Some(&quality(48.1)),
            Some(&quality(45.3)),
        );

        assert_eq!(entry.tier, Tier::Avoid);
        assert!(entry.rationale.contains("No edge"));
        assert!(!entry.divergence_flag);
    }

    #[test]
    fn test_no_metrics_fallback_by_total() {
        // Scenario D at the high band, plus the other two bands
        let classifier = SlateClassifier::default();

        let high = classifier.classify(&odds(6.0, 3.2, 2.8), None, None);
        assert_eq!(high.tier, Tier::StrongConsensus);
        assert!(high.rationale.contains("no shot quality data"));

        let moderate = classifier.classify(&odds(5.5, 2.9, 2.6), None, None);
        assert_eq!(moderate.tier, Tier::Edge);
        assert!(moderate.rationale.contains("no shot quality data"));

        let low = classifier.classify(&odds(5.0, 2.6, 2.4), None, None);
        assert_eq!(low.tier, Tier::Contrarian);
        assert!(low.rationale.contains("5.0"));
    }

    #[test]
    fn test_one_sided_metrics_take_total_only_path() {
        let classifier = SlateClassifier::default();
        let entry = classifier.classify(&odds(6.0, 3.2, 2.8), Some(&quality(55.0)), None);

        assert_eq!(entry.tier, Tier::StrongConsensus);
        assert!(entry.rationale.contains("no shot quality data"));
    }

    #[test]
    fn test_high_total_moderate_quality_falls_back_to_consensus() {
        let classifier = SlateClassifier::default();
        let entry = classifier.classify(
            &odds(6.5, 3.4, 3.1),
            Some(&quality(50.5)),
            Some(&quality(49.5)),
        );

        assert_eq!(entry.tier, Tier::StrongConsensus);
        assert!(entry.rationale.contains("moderate shot quality"));
    }

    #[test]
    fn test_moderate_total_balanced_quality_is_edge() {
        let classifier = SlateClassifier::default();
        let entry = classifier.classify(
            &odds(5.5, 2.9, 2.6),
            Some(&quality(50.0)),
            Some(&quality(49.0)),
        );

        assert_eq!(entry.tier, Tier::Edge);
        assert!(entry.rationale.contains("balanced shot quality"));
    }

    #[test]
    fn test_low_total_divergence_trap_is_contrarian() {
        // Away side: 3.0 implied on 44% HDCF fires the divergence rule,
        // which outranks the sneaky-upside check at low totals.
        let classifier = SlateClassifier::default();
        let entry = classifier.classify(
            &odds(5.4, 2.4, 3.0),
            Some(&quality(53.0)),
            Some(&quality(44.0)),
        );

        assert_eq!(entry.tier, Tier::Contrarian);
        assert!(entry.rationale.contains("Divergence detected"));
        assert!(entry.divergence_flag);
    }

    #[test]
    fn test_low_total_one_strong_side_is_sneaky_contrarian() {
        let classifier = SlateClassifier::default();
        let entry = classifier.classify(
            &odds(5.0, 2.6, 2.4),
            Some(&quality(53.5)),
            Some(&quality(48.0)),
        );

        assert_eq!(entry.tier, Tier::Contrarian);
        assert!(entry.rationale.contains("GPP upside"));
        assert!(entry.rationale.contains("53.5"));
    }

    #[test]
    fn test_missing_hdcf_reads_as_neutral() {
        // Neutral 50.0 is neither strong nor weak: a 6.5 total with both
        // sides missing HDCF% lands in the moderate-quality consensus branch,
        // never in avoid.
        let classifier = SlateClassifier::default();
        let mut home = quality(0.0);
        home.hdcf_pct = None;
        let mut away = quality(0.0);
        away.hdcf_pct = None;

        let entry = classifier.classify(&odds(6.5, 3.4, 3.1), Some(&home), Some(&away));

        assert_eq!(entry.tier, Tier::StrongConsensus);
        assert!(entry.rationale.contains("50.0"));
    }

    #[test]
    fn test_every_input_yields_tier_and_rationale() {
        // Sweep the threshold partition; no combination may leave the
        // defensive fallback rationale or an empty one.
        let classifier = SlateClassifier::default();
        let totals = [4.5, 5.4, 5.5, 5.9, 6.0, 7.0];
        let hdcfs = [43.0, 47.0, 50.0, 52.0, 56.0];

        for &total in &totals {
            for &h in &hdcfs {
                for &a in &hdcfs {
                    let entry = classifier.classify(
                        &odds(total, total / 2.0, total / 2.0),
                        Some(&quality(h)),
                        Some(&quality(a)),
                    );
                    assert!(!entry.rationale.is_empty());
                    assert_ne!(
                        entry.rationale, "No clear classification — insufficient signal.",
                        "fallback reached for total={total} home={h} away={a}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_custom_thresholds_move_the_boundaries() {
        let classifier = SlateClassifier::new(Thresholds {
            high_total: 7.0,
            ..Thresholds::default()
        });
        // 6.5 is no longer a high total under the custom thresholds
        let entry = classifier.classify(
            &odds(6.5, 3.4, 3.1),
            Some(&quality(54.0)),
            Some(&quality(53.0)),
        );

        assert_eq!(entry.tier, Tier::Edge);
    }
}
