//! Local draft snapshot of a plan year
//!
//! Drafts hold unsaved edits so they survive a restart. They are keyed by
//! `"namespace:year"`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::pending::PendingEntry;
use super::section::EditableSection;

/// Current draft format version; drafts with another version are ignored
pub const DRAFT_VERSION: u32 = 1;

/// Snapshot of a plan year's sections and pending entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDraft {
    pub year: i32,
    pub version: u32,
    pub sections: Vec<Arc<EditableSection>>,
    #[serde(default)]
    pub pending_entries: Vec<PendingEntry>,
    pub updated_at: DateTime<Utc>,
}

impl PlanDraft {
    pub fn new(
        year: i32,
        sections: Vec<Arc<EditableSection>>,
        pending_entries: Vec<PendingEntry>,
    ) -> Self {
        Self {
            year,
            version: DRAFT_VERSION,
            sections,
            pending_entries,
            updated_at: Utc::now(),
        }
    }

    /// Storage key for a namespace and year
    pub fn key(namespace: &str, year: i32) -> String {
        format!("{}:{}", namespace, year)
    }

    pub fn is_current_version(&self) -> bool {
        self.version == DRAFT_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format() {
        assert_eq!(PlanDraft::key("budget-plan", 2025), "budget-plan:2025");
    }

    #[test]
    fn test_wire_field_names() {
        let draft = PlanDraft::new(2025, vec![Arc::new(EditableSection::new("RECEITAS"))], vec![]);
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["year"], 2025);
        assert_eq!(json["version"], DRAFT_VERSION);
        assert!(json["pendingEntries"].as_array().unwrap().is_empty());
        assert!(json.get("updatedAt").is_some());
        assert!(draft.is_current_version());
    }
}
