//! Saved library entries and model-suggested themes.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::GridConfig;

/// A named configuration persisted in the theme library.
///
/// Entries are immutable once created; only the id is guaranteed unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTheme {
    /// Unique identifier (UUID v4)
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Snapshot of the configuration
    pub config: GridConfig,
    /// Creation time in epoch milliseconds
    pub created_at: i64,
}

impl SavedTheme {
    /// Returns the creation time as a UTC timestamp, if representable.
    #[must_use]
    pub fn created(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.created_at).single()
    }
}

/// A theme proposed by the prompt adapter: a configuration plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSuggestion {
    /// Suggested name
    pub name: String,
    /// Short explanation of the theme choice
    pub description: String,
    /// Suggested configuration
    pub config: GridConfig,
}

impl ThemeSuggestion {
    /// Returns the suggestion with its configuration forced into control bounds.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            config: self.config.sanitized(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_saved_theme_wire_shape() {
        let theme = SavedTheme {
            id: "abc".to_string(),
            name: "Ocean".to_string(),
            description: "Blues".to_string(),
            config: GridConfig::default(),
            created_at: 1_700_000_000_000,
        };
        let value = serde_json::to_value(&theme).unwrap();
        assert_eq!(value["createdAt"], json!(1_700_000_000_000_i64));
        assert_eq!(value["config"]["columnMode"], json!("lightness"));
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_created_timestamp() {
        let theme = SavedTheme {
            id: "abc".to_string(),
            name: String::new(),
            description: String::new(),
            config: GridConfig::default(),
            created_at: 0,
        };
        assert_eq!(theme.created().unwrap().timestamp(), 0);
    }
}
