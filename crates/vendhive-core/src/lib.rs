//! Core domain types and configuration for the vendhive lead locator.
//!
//! Defines the candidate-location record shared by the scoring pipeline and
//! the CLI, the operator search preferences loaded from YAML, and env-based
//! application configuration.

pub mod app_config;
pub mod config;
pub mod error;
pub mod location;
pub mod preferences;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use location::{BusinessStatus, CandidateLocation, ContactCompleteness, TrafficLevel};
pub use preferences::{load_preferences, SearchPreferences};
