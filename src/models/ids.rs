//! Strongly-typed ID wrappers for all entity types
//!
//! Plan-local entities (sections, rows, pending entries) and backend records
//! (categories, wallets, budget groups, transactions) each get their own
//! newtype so a row id can never be passed where a section id is expected.
//! The backend speaks plain UUID strings, so every id serializes transparently.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an ID from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a string (full UUID, with or without prefix)
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                s.parse()
            }

            /// Check whether this id matches a short display form or full UUID
            pub fn matches(&self, s: &str) -> bool {
                let full = self.0.to_string();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                s.len() >= 8 && full.starts_with(s)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            /// Short form by default, full UUID with `{:#}`
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if f.alternate() {
                    write!(f, "{}", self.0)
                } else {
                    write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
                }
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Try to parse the full UUID
                if let Ok(uuid) = Uuid::parse_str(s) {
                    return Ok(Self(uuid));
                }
                // Try stripping common prefixes
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(SectionId, "sec-");
define_id!(RowId, "row-");
define_id!(ComputedRowId, "cmp-");
define_id!(EntryId, "ent-");

impl ComputedRowId {
    /// Stable id for the computed row referencing `title`
    ///
    /// Computed rows are rebuilt from section titles, so the same title always
    /// yields the same id.
    pub fn for_title(title: &str) -> Self {
        Self(Uuid::new_v5(&Uuid::NAMESPACE_OID, title.as_bytes()))
    }
}
define_id!(CategoryId, "cat-");
define_id!(BudgetGroupId, "grp-");
define_id!(WalletId, "wal-");
define_id!(TransactionId, "txn-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_id_creation() {
        let id = SectionId::new();
        assert!(!id.as_uuid().is_nil());
    }

    #[test]
    fn test_id_display() {
        let id = RowId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("row-"));
        assert_eq!(display.len(), 12); // "row-" + 8 chars
    }

    #[test]
    fn test_computed_row_id_is_stable() {
        assert_eq!(
            ComputedRowId::for_title("RECEITAS"),
            ComputedRowId::for_title("RECEITAS")
        );
        assert_ne!(
            ComputedRowId::for_title("RECEITAS"),
            ComputedRowId::for_title("DÍVIDAS")
        );
    }

    #[test]
    fn test_id_serialization() {
        let id = WalletId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: WalletId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_parse_with_prefix() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: CategoryId = format!("cat-{}", uuid_str).parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);

        let plain = CategoryId::parse(uuid_str).unwrap();
        assert_eq!(id, plain);
    }

    #[test]
    fn test_alternate_display_and_matches() {
        let id = SectionId::new();
        let full = format!("{:#}", id);
        assert_eq!(full, id.as_uuid().to_string());
        assert!(id.matches(&id.to_string()));
        assert!(id.matches(&full));
        assert!(!id.matches("sec-"));
    }

    #[test]
    fn test_row_id_shares_category_uuid() {
        let category = CategoryId::new();
        let row = RowId::from_uuid(*category.as_uuid());
        assert_eq!(row.as_uuid(), category.as_uuid());
    }
}
