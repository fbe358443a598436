//! `score` command: score records one by one with no filtering.

use std::path::Path;

use vendhive_scoring::{score_location, ScoredLocation};

use crate::rank::load_locations;

pub(crate) fn run_score(input: &Path, json: bool) -> anyhow::Result<()> {
    let locations = load_locations(input)?;
    let scored: Vec<ScoredLocation> = locations.into_iter().map(score_location).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&scored)?);
    } else {
        for entry in &scored {
            println!("{}", format_scored_line(entry));
        }
        println!("{} records scored", scored.len());
    }

    Ok(())
}

pub(crate) fn format_scored_line(entry: &ScoredLocation) -> String {
    format!(
        "{}: priority {} ({} traffic, contact {})",
        entry.location.name,
        entry.priority_score,
        entry.foot_traffic_estimate,
        entry.contact_completeness,
    )
}
