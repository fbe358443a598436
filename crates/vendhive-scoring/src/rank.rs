//! Preference filtering, scoring, and ranking of candidate batches.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;
use vendhive_core::{CandidateLocation, ContactCompleteness, SearchPreferences, TrafficLevel};

use crate::foot_traffic::estimate_foot_traffic;
use crate::priority::compute_priority;

/// A candidate with both derived scoring values attached.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredLocation {
    #[serde(flatten)]
    pub location: CandidateLocation,
    pub foot_traffic_estimate: TrafficLevel,
    pub priority_score: u32,
    pub contact_completeness: ContactCompleteness,
}

/// How many candidates each preference filter removed.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct FilterCounts {
    pub excluded_place_id: usize,
    pub excluded_category: usize,
    pub below_minimum_rating: usize,
    pub missing_contact_info: usize,
}

impl FilterCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.excluded_place_id
            + self.excluded_category
            + self.below_minimum_rating
            + self.missing_contact_info
    }
}

/// Aggregate statistics over the ranked results.
#[derive(Debug, Clone, Serialize)]
pub struct RankSummary {
    /// Mean priority score across results. 0.0 for an empty report.
    pub average_priority_score: f64,
    pub by_traffic_level: BTreeMap<TrafficLevel, usize>,
    pub by_contact_completeness: BTreeMap<ContactCompleteness, usize>,
}

impl RankSummary {
    #[must_use]
    pub fn from_scored(scored: &[ScoredLocation]) -> Self {
        let mut by_traffic_level = BTreeMap::new();
        let mut by_contact_completeness = BTreeMap::new();
        for entry in scored {
            *by_traffic_level.entry(entry.foot_traffic_estimate).or_insert(0) += 1;
            *by_contact_completeness
                .entry(entry.contact_completeness)
                .or_insert(0) += 1;
        }

        let average_priority_score = if scored.is_empty() {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let denom = scored.len() as f64;
            let sum: u64 = scored.iter().map(|s| u64::from(s.priority_score)).sum();
            #[allow(clippy::cast_precision_loss)]
            let sum = sum as f64;
            sum / denom
        };

        Self {
            average_priority_score,
            by_traffic_level,
            by_contact_completeness,
        }
    }
}

/// A ranked batch of scored candidates with filter and summary bookkeeping.
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub results_count: usize,
    pub filtered: FilterCounts,
    pub summary: RankSummary,
    pub locations: Vec<ScoredLocation>,
}

/// Score one candidate: estimate foot traffic first, then compute priority
/// with the estimate as an input.
#[must_use]
pub fn score_location(location: CandidateLocation) -> ScoredLocation {
    let foot_traffic_estimate = estimate_foot_traffic(&location);
    let priority = compute_priority(&location, foot_traffic_estimate);
    ScoredLocation {
        location,
        foot_traffic_estimate,
        priority_score: priority.score,
        contact_completeness: priority.contact_completeness,
    }
}

/// Filter, score, and rank a batch of candidates.
///
/// Candidates are dropped if their place ID is excluded, an excluded category
/// keyword matches, their rating falls below the preference floor (a missing
/// rating counts as 0), or they lack contact info while
/// `require_contact_info` is set. Survivors are scored and sorted by priority
/// score descending with name ascending as tie-break, then truncated to
/// `limit` when given.
#[must_use]
pub fn rank_locations(
    locations: Vec<CandidateLocation>,
    preferences: &SearchPreferences,
    limit: Option<usize>,
) -> RankReport {
    let excluded_ids: HashSet<&str> = preferences
        .excluded_place_ids
        .iter()
        .map(String::as_str)
        .collect();

    let mut filtered = FilterCounts::default();
    let mut scored: Vec<ScoredLocation> = Vec::new();

    for location in locations {
        if location
            .google_place_id
            .as_deref()
            .is_some_and(|id| excluded_ids.contains(id))
        {
            tracing::debug!(name = %location.name, "skipping candidate — place ID excluded");
            filtered.excluded_place_id += 1;
            continue;
        }

        if matches_excluded_category(&location, &preferences.excluded_categories) {
            tracing::debug!(name = %location.name, "skipping candidate — category excluded");
            filtered.excluded_category += 1;
            continue;
        }

        if location.google_rating.unwrap_or(Decimal::ZERO) < preferences.minimum_rating {
            tracing::debug!(name = %location.name, "skipping candidate — below minimum rating");
            filtered.below_minimum_rating += 1;
            continue;
        }

        if preferences.require_contact_info && !location.has_contact_info() {
            tracing::debug!(name = %location.name, "skipping candidate — no contact info");
            filtered.missing_contact_info += 1;
            continue;
        }

        scored.push(score_location(location));
    }

    scored.sort_by(|a, b| {
        b.priority_score
            .cmp(&a.priority_score)
            .then_with(|| a.location.name.cmp(&b.location.name))
    });

    if let Some(limit) = limit {
        scored.truncate(limit);
    }

    let summary = RankSummary::from_scored(&scored);

    tracing::info!(
        results = scored.len(),
        filtered = filtered.total(),
        "ranked candidate batch"
    );

    RankReport {
        id: Uuid::new_v4(),
        generated_at: Utc::now(),
        results_count: scored.len(),
        filtered,
        summary,
        locations: scored,
    }
}

fn matches_excluded_category(location: &CandidateLocation, excluded: &[String]) -> bool {
    if excluded.is_empty() {
        return false;
    }
    let detailed = location.detailed_category.to_lowercase();
    let coarse = location.category.to_lowercase();
    excluded.iter().any(|token| {
        let token = token.to_lowercase();
        detailed.contains(&token) || coarse.contains(&token)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendhive_core::BusinessStatus;

    fn candidate(name: &str) -> CandidateLocation {
        CandidateLocation {
            name: name.to_string(),
            google_place_id: None,
            phone: Some("555-0000".to_string()),
            email: None,
            website: None,
            google_rating: None,
            google_user_ratings_total: None,
            google_business_status: BusinessStatus::Unknown,
            detailed_category: String::new(),
            category: String::new(),
        }
    }

    #[test]
    fn equal_scores_order_by_name() {
        let report = rank_locations(
            vec![candidate("Zeta Mart"), candidate("Alpha Mart")],
            &SearchPreferences::default(),
            None,
        );
        assert_eq!(report.results_count, 2);
        assert_eq!(report.locations[0].location.name, "Alpha Mart");
        assert_eq!(report.locations[1].location.name, "Zeta Mart");
    }

    #[test]
    fn higher_score_ranks_first() {
        let mut strong = candidate("Strong Lead");
        strong.email = Some("a@b.com".to_string());
        let report = rank_locations(
            vec![candidate("Weak Lead"), strong],
            &SearchPreferences::default(),
            None,
        );
        assert_eq!(report.locations[0].location.name, "Strong Lead");
    }

    #[test]
    fn excluded_place_id_never_appears() {
        let mut excluded = candidate("Ruled Out");
        excluded.google_place_id = Some("ChIJabc".to_string());
        let prefs = SearchPreferences {
            excluded_place_ids: vec!["ChIJabc".to_string()],
            ..SearchPreferences::default()
        };
        let report = rank_locations(vec![excluded, candidate("Kept")], &prefs, None);
        assert_eq!(report.results_count, 1);
        assert_eq!(report.filtered.excluded_place_id, 1);
        assert_eq!(report.locations[0].location.name, "Kept");
    }

    #[test]
    fn category_exclusion_is_case_insensitive_substring() {
        let mut bar = candidate("Dive Bar");
        bar.detailed_category = "Sports BAR and grill".to_string();
        let prefs = SearchPreferences {
            excluded_categories: vec!["bar".to_string()],
            ..SearchPreferences::default()
        };
        let report = rank_locations(vec![bar, candidate("Kept")], &prefs, None);
        assert_eq!(report.results_count, 1);
        assert_eq!(report.filtered.excluded_category, 1);
    }

    #[test]
    fn missing_rating_fails_a_positive_rating_floor() {
        let prefs = SearchPreferences {
            minimum_rating: Decimal::new(30, 1),
            ..SearchPreferences::default()
        };
        let mut rated = candidate("Rated");
        rated.google_rating = Some(Decimal::new(35, 1));
        let report = rank_locations(vec![candidate("Unrated"), rated], &prefs, None);
        assert_eq!(report.results_count, 1);
        assert_eq!(report.filtered.below_minimum_rating, 1);
        assert_eq!(report.locations[0].location.name, "Rated");
    }

    #[test]
    fn contact_requirement_can_be_disabled() {
        let mut no_contact = candidate("Silent Site");
        no_contact.phone = None;

        let default_report = rank_locations(
            vec![no_contact.clone()],
            &SearchPreferences::default(),
            None,
        );
        assert_eq!(default_report.results_count, 0);
        assert_eq!(default_report.filtered.missing_contact_info, 1);

        let relaxed = SearchPreferences {
            require_contact_info: false,
            ..SearchPreferences::default()
        };
        let relaxed_report = rank_locations(vec![no_contact], &relaxed, None);
        assert_eq!(relaxed_report.results_count, 1);
    }

    #[test]
    fn limit_truncates_after_sorting() {
        let mut strong = candidate("Strong Lead");
        strong.email = Some("a@b.com".to_string());
        let report = rank_locations(
            vec![candidate("Weak Lead"), strong],
            &SearchPreferences::default(),
            Some(1),
        );
        assert_eq!(report.results_count, 1);
        assert_eq!(report.locations[0].location.name, "Strong Lead");
    }

    #[test]
    fn summary_counts_sum_to_results_count() {
        let mut busy = candidate("Busy Corner");
        busy.google_rating = Some(Decimal::new(46, 1));
        busy.google_user_ratings_total = Some(600);
        busy.detailed_category = "grocery".to_string();
        busy.google_business_status = BusinessStatus::Operational;

        let report = rank_locations(
            vec![busy, candidate("Quiet Corner")],
            &SearchPreferences::default(),
            None,
        );
        let traffic_total: usize = report.summary.by_traffic_level.values().sum();
        let contact_total: usize = report.summary.by_contact_completeness.values().sum();
        assert_eq!(traffic_total, report.results_count);
        assert_eq!(contact_total, report.results_count);
    }

    #[test]
    fn empty_report_has_zero_average() {
        let report = rank_locations(Vec::new(), &SearchPreferences::default(), None);
        assert_eq!(report.results_count, 0);
        assert!((report.summary.average_priority_score - 0.0).abs() < f64::EPSILON);
    }
}
