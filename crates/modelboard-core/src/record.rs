//! Listed model records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Deployment status of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelStatus {
    Active,
    Inactive,
}

impl ModelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelStatus::Active => "Active",
            ModelStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One model entry in the library table.
///
/// Records are immutable once built; the table only ever reorders and slices
/// references to them. `id` is the unique key and has the form `#<number>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRecord {
    pub display_name: String,
    pub id: String,
    pub model_type: String,
    pub description: String,
    pub created_on: String,
    pub last_trained_on: String,
    pub status: ModelStatus,
}

impl ModelRecord {
    /// Returns true if the display name or id contains `needle`.
    ///
    /// `needle` must already be lower-cased; an empty needle matches everything.
    pub fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.display_name.to_lowercase().contains(needle)
            || self.id.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, id: &str) -> ModelRecord {
        ModelRecord {
            display_name: name.to_string(),
            id: id.to_string(),
            model_type: "Extraction".to_string(),
            description: String::new(),
            created_on: "29/02/2024".to_string(),
            last_trained_on: "29/02/2024".to_string(),
            status: ModelStatus::Active,
        }
    }

    #[test]
    fn matches_name_or_id() {
        let r = record("Model Q", "#5000017");
        assert!(r.matches_search("model q"));
        assert!(r.matches_search("017"));
        assert!(r.matches_search(""));
        assert!(!r.matches_search("extraction"));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let r = record("Model A", "#5000001");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["displayName"], "Model A");
        assert_eq!(json["lastTrainedOn"], "29/02/2024");
        assert_eq!(json["status"], "Active");
    }
}
