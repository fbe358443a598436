use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Operator preferences applied before ranking a batch of candidates.
///
/// Mirrors the per-operator search settings: category keywords to screen out,
/// place IDs already ruled out, a minimum rating floor, and whether leads
/// without a contact channel are worth keeping at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPreferences {
    /// Lowercase keyword tokens; any substring match against either category
    /// field removes the candidate.
    #[serde(default)]
    pub excluded_categories: Vec<String>,
    /// Google place IDs the operator has already contacted or rejected.
    #[serde(default)]
    pub excluded_place_ids: Vec<String>,
    /// Candidates rated below this are dropped. A missing rating counts as 0.
    #[serde(default)]
    pub minimum_rating: Decimal,
    /// Drop candidates with neither phone nor email before scoring.
    #[serde(default = "default_require_contact")]
    pub require_contact_info: bool,
}

fn default_require_contact() -> bool {
    true
}

impl Default for SearchPreferences {
    fn default() -> Self {
        Self {
            excluded_categories: Vec::new(),
            excluded_place_ids: Vec::new(),
            minimum_rating: Decimal::ZERO,
            require_contact_info: true,
        }
    }
}

/// Load and validate search preferences from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_preferences(path: &Path) -> Result<SearchPreferences, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::PreferencesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let preferences: SearchPreferences =
        serde_yaml::from_str(&content).map_err(ConfigError::PreferencesFileParse)?;

    validate_preferences(&preferences)?;

    Ok(preferences)
}

fn validate_preferences(preferences: &SearchPreferences) -> Result<(), ConfigError> {
    if preferences.minimum_rating < Decimal::ZERO || preferences.minimum_rating > Decimal::from(5)
    {
        return Err(ConfigError::Validation(format!(
            "minimum_rating {} is outside the 0-5 rating scale",
            preferences.minimum_rating
        )));
    }

    let mut seen_categories = HashSet::new();
    for token in &preferences.excluded_categories {
        if token.trim().is_empty() {
            return Err(ConfigError::Validation(
                "excluded category tokens must be non-empty".to_string(),
            ));
        }
        if !seen_categories.insert(token.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate excluded category: '{token}'"
            )));
        }
    }

    let mut seen_ids = HashSet::new();
    for place_id in &preferences.excluded_place_ids {
        if place_id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "excluded place IDs must be non-empty".to_string(),
            ));
        }
        if !seen_ids.insert(place_id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate excluded place ID: '{place_id}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_require_contact_info() {
        let prefs = SearchPreferences::default();
        assert!(prefs.require_contact_info);
        assert_eq!(prefs.minimum_rating, Decimal::ZERO);
        assert!(prefs.excluded_categories.is_empty());
    }

    #[test]
    fn empty_yaml_mapping_uses_defaults() {
        let prefs: SearchPreferences = serde_yaml::from_str("{}").expect("parse failed");
        assert!(prefs.require_contact_info);
        assert_eq!(prefs.minimum_rating, Decimal::ZERO);
    }

    #[test]
    fn yaml_overrides_are_applied() {
        let prefs: SearchPreferences = serde_yaml::from_str(
            "excluded_categories: [bar, nightclub]\nminimum_rating: \"3.5\"\nrequire_contact_info: false\n",
        )
        .expect("parse failed");
        assert_eq!(prefs.excluded_categories, vec!["bar", "nightclub"]);
        assert_eq!(prefs.minimum_rating, Decimal::new(35, 1));
        assert!(!prefs.require_contact_info);
    }

    #[test]
    fn validate_rejects_rating_above_scale() {
        let prefs = SearchPreferences {
            minimum_rating: Decimal::from(7),
            ..SearchPreferences::default()
        };
        let err = validate_preferences(&prefs).unwrap_err();
        assert!(err.to_string().contains("0-5 rating scale"));
    }

    #[test]
    fn validate_rejects_negative_rating() {
        let prefs = SearchPreferences {
            minimum_rating: Decimal::from(-1),
            ..SearchPreferences::default()
        };
        assert!(validate_preferences(&prefs).is_err());
    }

    #[test]
    fn validate_rejects_empty_category_token() {
        let prefs = SearchPreferences {
            excluded_categories: vec!["  ".to_string()],
            ..SearchPreferences::default()
        };
        let err = validate_preferences(&prefs).unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn validate_rejects_duplicate_category_case_insensitive() {
        let prefs = SearchPreferences {
            excluded_categories: vec!["Bar".to_string(), "bar".to_string()],
            ..SearchPreferences::default()
        };
        let err = validate_preferences(&prefs).unwrap_err();
        assert!(err.to_string().contains("duplicate excluded category"));
    }

    #[test]
    fn validate_rejects_duplicate_place_id() {
        let prefs = SearchPreferences {
            excluded_place_ids: vec!["ChIJabc".to_string(), "ChIJabc".to_string()],
            ..SearchPreferences::default()
        };
        let err = validate_preferences(&prefs).unwrap_err();
        assert!(err.to_string().contains("duplicate excluded place ID"));
    }

    #[test]
    fn validate_accepts_typical_preferences() {
        let prefs = SearchPreferences {
            excluded_categories: vec!["bar".to_string(), "nightclub".to_string()],
            excluded_place_ids: vec!["ChIJabc".to_string()],
            minimum_rating: Decimal::new(30, 1),
            require_contact_info: true,
        };
        assert!(validate_preferences(&prefs).is_ok());
    }

    #[test]
    fn load_preferences_from_real_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("preferences.yaml");
        assert!(
            path.exists(),
            "preferences.yaml missing at {path:?} — required for this test"
        );
        let result = load_preferences(&path);
        assert!(result.is_ok(), "failed to load preferences.yaml: {result:?}");
    }
}
