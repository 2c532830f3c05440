mod analysis;
mod config;
mod matching;
mod models;
mod snapshot;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::analysis::{build_breakdown, SlateClassifier, Thresholds};
use crate::config::Config;
use crate::matching::MetricsRegistry;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slate_signal=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting slate-signal");

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded");

    // Load provider snapshots
    let odds_list = snapshot::load_odds(&config.odds_snapshot_path)?;
    info!("Got odds for {} games", odds_list.len());

    if odds_list.is_empty() {
        warn!("No games in the odds snapshot — is there an NHL slate today?");
        return Ok(());
    }

    let mut metrics = snapshot::load_metrics(&config.metrics_snapshot_path)?;
    info!("Got shot quality for {} team entries", metrics.len());

    // Thin samples say more about variance than about the team
    let before = metrics.len();
    metrics.retain(|_, m| m.games >= config.min_sample_games);
    if metrics.len() < before {
        warn!(
            "Dropped {} team entries below the {}-game sample floor",
            before - metrics.len(),
            config.min_sample_games
        );
    }

    let registry = MetricsRegistry::new(metrics);
    let classifier = SlateClassifier::new(Thresholds::default());

    // Classify the slate
    let breakdown = build_breakdown(&classifier, &odds_list, &registry);
    info!(
        "Slate breakdown: {} strong-consensus, {} edge, {} contrarian, {} avoid",
        breakdown.strong_consensus_games().len(),
        breakdown.edge_games().len(),
        breakdown.contrarian_games().len(),
        breakdown.avoid_games().len(),
    );

    for entry in &breakdown.games {
        info!(
            "{} | total {:.1} | {} | {}",
            entry.matchup(),
            entry.total,
            entry.tier.as_str(),
            entry.rationale
        );
        if entry.divergence_flag {
            warn!("  divergence: {}", entry.divergence_detail);
        }
    }

    let traps = breakdown.divergence_games();
    if !traps.is_empty() {
        info!("{} games carry divergence flags", traps.len());
    }

    Ok(())
}
