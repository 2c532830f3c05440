//! Divergence detection: flag games where the Vegas number and the
//! underlying shot quality tell different stories.
//!
//! Example: a side with a 4.1 implied total but a 44% HDCF share: the
//! market is pricing in offense the chance quality doesn't support.

use crate::analysis::Thresholds;
use crate::models::SlateEntry;

/// Annotate an entry with any market/quality divergence signals
///
/// Rules run in a fixed order (home offense, away offense, home PDO, away
/// PDO) and accumulate: one game can trigger several. The flag is set iff at
/// least one rule fired; the detail joins every fired message with "; ".
/// Only hot PDO is flagged; a cold team is not a fade signal in this
/// framework.
pub fn annotate_divergence(entry: &mut SlateEntry, thresholds: &Thresholds) {
    let mut flags: Vec<String> = Vec::new();

    // High implied total but poor chance quality, each side in turn
    check_overpriced_offense(
        &mut flags,
        &entry.home_team,
        entry.home_implied_total,
        entry.home_metrics.as_ref().and_then(|m| m.hdcf_pct),
        thresholds,
    );
    check_overpriced_offense(
        &mut flags,
        &entry.away_team,
        entry.away_implied_total,
        entry.away_metrics.as_ref().and_then(|m| m.hdcf_pct),
        thresholds,
    );

    // High PDO = running hot, likely to regress
    check_hot_pdo(
        &mut flags,
        &entry.home_team,
        entry.home_metrics.as_ref().and_then(|m| m.pdo),
        thresholds,
    );
    check_hot_pdo(
        &mut flags,
        &entry.away_team,
        entry.away_metrics.as_ref().and_then(|m| m.pdo),
        thresholds,
    );

    if !flags.is_empty() {
        entry.divergence_flag = true;
        entry.divergence_detail = flags.join("; ");
    }
}

fn check_overpriced_offense(
    flags: &mut Vec<String>,
    team: &str,
    implied_total: f64,
    hdcf_pct: Option<f64>,
    thresholds: &Thresholds,
) {
    if let Some(hdcf) = hdcf_pct {
        if implied_total >= thresholds.divergence_implied_total
            && hdcf < thresholds.divergence_quality_pct
        {
            flags.push(format!(
                "{team}: {implied_total:.1} implied total but only {hdcf:.1}% HDCF \
                 — market overpricing offense"
            ));
        }
    }
}

fn check_hot_pdo(flags: &mut Vec<String>, team: &str, pdo: Option<f64>, thresholds: &Thresholds) {
    if let Some(pdo) = pdo {
        if pdo > thresholds.high_pdo {
            flags.push(format!(
                "{team}: PDO at {pdo:.1} — running hot, regression risk"
            ));
        }
    }
}
