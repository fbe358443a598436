//! Lead scoring for candidate vending-machine locations.
//!
//! Two deterministic heuristics — a foot-traffic estimate and a priority
//! score — plus the preference-driven ranking pipeline that applies them to a
//! batch of candidates and produces an ordered report.

pub mod foot_traffic;
pub mod priority;
pub mod rank;

pub use foot_traffic::estimate_foot_traffic;
pub use priority::{compute_priority, PriorityResult};
pub use rank::{rank_locations, score_location, FilterCounts, RankReport, RankSummary, ScoredLocation};
