use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Operational status reported by the upstream places feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessStatus {
    Operational,
    ClosedTemporarily,
    ClosedPermanently,
    #[default]
    Unknown,
}

impl BusinessStatus {
    /// Parse a feed status string. Unrecognized values map to `Unknown`,
    /// matching the stored record default.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "operational" => BusinessStatus::Operational,
            "closed_temporarily" => BusinessStatus::ClosedTemporarily,
            "closed_permanently" => BusinessStatus::ClosedPermanently,
            _ => BusinessStatus::Unknown,
        }
    }
}

impl std::fmt::Display for BusinessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BusinessStatus::Operational => write!(f, "operational"),
            BusinessStatus::ClosedTemporarily => write!(f, "closed_temporarily"),
            BusinessStatus::ClosedPermanently => write!(f, "closed_permanently"),
            BusinessStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Estimated pedestrian volume at a candidate location.
///
/// Variant order is the ordering: `VeryLow < Low < Moderate < High < VeryHigh`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TrafficLevel {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl std::fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrafficLevel::VeryLow => write!(f, "very_low"),
            TrafficLevel::Low => write!(f, "low"),
            TrafficLevel::Moderate => write!(f, "moderate"),
            TrafficLevel::High => write!(f, "high"),
            TrafficLevel::VeryHigh => write!(f, "very_high"),
        }
    }
}

/// Which contact channels a candidate record carries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ContactCompleteness {
    Both,
    PhoneOnly,
    EmailOnly,
    None,
}

impl std::fmt::Display for ContactCompleteness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactCompleteness::Both => write!(f, "both"),
            ContactCompleteness::PhoneOnly => write!(f, "phone_only"),
            ContactCompleteness::EmailOnly => write!(f, "email_only"),
            ContactCompleteness::None => write!(f, "none"),
        }
    }
}

/// A business/site record under evaluation as a vending-machine placement.
///
/// All scoring inputs are optional; a missing field contributes zero to every
/// heuristic, so any partially populated feed record is scoreable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateLocation {
    pub name: String,
    #[serde(default)]
    pub google_place_id: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Google rating on the 0–5 scale, if the place has one.
    #[serde(default)]
    pub google_rating: Option<Decimal>,
    #[serde(default)]
    pub google_user_ratings_total: Option<u32>,
    #[serde(default)]
    pub google_business_status: BusinessStatus,
    /// Fine-grained feed category, e.g. `"convenience_store"`.
    #[serde(default)]
    pub detailed_category: String,
    /// Coarse feed category, e.g. `"shop"`.
    #[serde(default)]
    pub category: String,
}

impl CandidateLocation {
    #[must_use]
    pub fn has_phone(&self) -> bool {
        non_blank(self.phone.as_deref())
    }

    #[must_use]
    pub fn has_email(&self) -> bool {
        non_blank(self.email.as_deref())
    }

    /// Returns `true` if the record carries any contact channel.
    #[must_use]
    pub fn has_contact_info(&self) -> bool {
        self.has_phone() || self.has_email()
    }

    /// Coarse contact score: 3 for both channels, 2 for one, 1 for none.
    #[must_use]
    pub fn contact_score(&self) -> u8 {
        if self.has_phone() && self.has_email() {
            3
        } else if self.has_contact_info() {
            2
        } else {
            1
        }
    }
}

/// A present-but-blank string is treated the same as an absent field.
fn non_blank(field: Option<&str>) -> bool {
    field.is_some_and(|s| !s.trim().is_empty())
}
