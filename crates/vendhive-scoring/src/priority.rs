//! Priority scoring for ranking candidate locations as sales leads.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use vendhive_core::{BusinessStatus, CandidateLocation, ContactCompleteness, TrafficLevel};

/// Output of [`compute_priority`]: the lead-quality score plus the contact
/// bucket derived while scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriorityResult {
    pub score: u32,
    pub contact_completeness: ContactCompleteness,
}

/// Compute the priority score for a candidate, given its foot-traffic
/// estimate.
///
/// Contact info dominates the score (both channels 50, phone 30, email 20);
/// rating adds `floor(rating * 5)`, reviews add banded points
/// (≥100 → 15 / ≥50 → 10 / ≥10 → 5), traffic adds 15/10/5/2/0 from
/// very_high down to very_low, and status adds 10 for operational or 5 for
/// temporarily-closed/unknown. Missing fields contribute zero; the result is
/// never negative.
#[must_use]
pub fn compute_priority(
    location: &CandidateLocation,
    traffic: TrafficLevel,
) -> PriorityResult {
    let (contact_points, contact_completeness) = match (location.has_phone(), location.has_email())
    {
        (true, true) => (50, ContactCompleteness::Both),
        (true, false) => (30, ContactCompleteness::PhoneOnly),
        (false, true) => (20, ContactCompleteness::EmailOnly),
        (false, false) => (0, ContactCompleteness::None),
    };

    let mut score: u32 = contact_points;

    if let Some(rating) = location.google_rating {
        // floor(rating * 5); an out-of-scale negative rating clamps to zero.
        score += (rating * Decimal::from(5)).floor().to_u32().unwrap_or(0);
    }

    score += match location.google_user_ratings_total.unwrap_or(0) {
        n if n >= 100 => 15,
        n if n >= 50 => 10,
        n if n >= 10 => 5,
        _ => 0,
    };

    score += traffic_points(traffic);

    score += match location.google_business_status {
        BusinessStatus::Operational => 10,
        BusinessStatus::ClosedTemporarily | BusinessStatus::Unknown => 5,
        BusinessStatus::ClosedPermanently => 0,
    };

    PriorityResult {
        score,
        contact_completeness,
    }
}

fn traffic_points(level: TrafficLevel) -> u32 {
    match level {
        TrafficLevel::VeryHigh => 15,
        TrafficLevel::High => 10,
        TrafficLevel::Moderate => 5,
        TrafficLevel::Low => 2,
        TrafficLevel::VeryLow => 0,
    }
}
