//! `rank` command: load a candidate batch, apply preferences, print a report.

use std::path::Path;

use anyhow::Context;
use vendhive_core::{AppConfig, CandidateLocation, SearchPreferences};
use vendhive_scoring::{rank_locations, RankReport, ScoredLocation};

pub(crate) fn run_rank(
    config: &AppConfig,
    input: &Path,
    preferences_override: Option<&Path>,
    limit: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let locations = load_locations(input)?;
    let preferences = resolve_preferences(config, preferences_override)?;
    let limit = limit.or(config.result_limit);

    let report = rank_locations(locations, &preferences, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

/// Read a JSON array of candidate-location records.
pub(crate) fn load_locations(path: &Path) -> anyhow::Result<Vec<CandidateLocation>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read locations file {}", path.display()))?;
    let locations: Vec<CandidateLocation> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse locations file {}", path.display()))?;
    Ok(locations)
}

/// The CLI flag wins; otherwise the configured path is used when the file
/// exists, falling back to defaults so a bare checkout still ranks.
fn resolve_preferences(
    config: &AppConfig,
    preferences_override: Option<&Path>,
) -> anyhow::Result<SearchPreferences> {
    match preferences_override {
        Some(path) => Ok(vendhive_core::load_preferences(path)?),
        None if config.preferences_path.exists() => {
            Ok(vendhive_core::load_preferences(&config.preferences_path)?)
        }
        None => {
            tracing::info!(
                path = %config.preferences_path.display(),
                "no preferences file found, using defaults"
            );
            Ok(SearchPreferences::default())
        }
    }
}

fn print_report(report: &RankReport) {
    println!(
        "{:<4} {:<30} {:>8} {:<10} {:<12}",
        "#", "NAME", "SCORE", "TRAFFIC", "CONTACT"
    );
    for (i, entry) in report.locations.iter().enumerate() {
        println!("{}", format_row(i + 1, entry));
    }
    println!();
    println!(
        "{} results ({} filtered), average priority {:.1}",
        report.results_count,
        report.filtered.total(),
        report.summary.average_priority_score
    );
}

pub(crate) fn format_row(rank: usize, entry: &ScoredLocation) -> String {
    format!(
        "{rank:<4} {:<30} {:>8} {:<10} {:<12}",
        entry.location.name,
        entry.priority_score,
        entry.foot_traffic_estimate.to_string(),
        entry.contact_completeness.to_string(),
    )
}
