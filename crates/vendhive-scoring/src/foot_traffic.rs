//! Foot-traffic estimation over candidate-location records.

use rust_decimal::Decimal;
use vendhive_core::{BusinessStatus, CandidateLocation, TrafficLevel};

/// Category keywords that indicate heavy walk-in volume. Matched as lowercase
/// substrings of either feed category field; first match wins.
pub(crate) const HIGH_TRAFFIC_CATEGORIES: &[&str] = &[
    "gas_station",
    "convenience_store",
    "grocery",
    "shopping_mall",
    "hospital",
    "school",
    "university",
    "restaurant",
    "fast_food",
    "transit_station",
    "airport",
];

/// Checked only when no high-traffic keyword matches.
pub(crate) const MEDIUM_TRAFFIC_CATEGORIES: &[&str] =
    &["office", "hotel", "gym", "fitness", "cafe", "bank"];

/// Estimate pedestrian volume from rating, review count, category, and
/// operational status.
///
/// Deterministic and side-effect free; missing optional fields contribute
/// zero. Point bands: rating ≥4.5 → 15 / ≥4.0 → 10 / ≥3.5 → 5; reviews
/// ≥500 → 20 / ≥100 → 15 / ≥50 → 10 / ≥10 → 5; high-traffic category → 15,
/// else medium-traffic → 8; operational → 10. Totals map to levels at
/// 40 / 25 / 15 / 5.
#[must_use]
pub fn estimate_foot_traffic(location: &CandidateLocation) -> TrafficLevel {
    let mut score: u32 = 0;

    if let Some(rating) = location.google_rating {
        if rating >= Decimal::new(45, 1) {
            score += 15;
        } else if rating >= Decimal::new(40, 1) {
            score += 10;
        } else if rating >= Decimal::new(35, 1) {
            score += 5;
        }
    }

    score += match location.google_user_ratings_total.unwrap_or(0) {
        n if n >= 500 => 20,
        n if n >= 100 => 15,
        n if n >= 50 => 10,
        n if n >= 10 => 5,
        _ => 0,
    };

    score += category_points(&location.detailed_category, &location.category);

    if location.google_business_status == BusinessStatus::Operational {
        score += 10;
    }

    match score {
        s if s >= 40 => TrafficLevel::VeryHigh,
        s if s >= 25 => TrafficLevel::High,
        s if s >= 15 => TrafficLevel::Moderate,
        s if s >= 5 => TrafficLevel::Low,
        _ => TrafficLevel::VeryLow,
    }
}

fn category_points(detailed_category: &str, category: &str) -> u32 {
    let detailed = detailed_category.to_lowercase();
    let coarse = category.to_lowercase();
    let matches = |keyword: &&str| detailed.contains(*keyword) || coarse.contains(*keyword);

    if HIGH_TRAFFIC_CATEGORIES.iter().any(matches) {
        15
    } else if MEDIUM_TRAFFIC_CATEGORIES.iter().any(matches) {
        8
    } else {
        0
    }
}
