//! Budget group records as served by the backend
//!
//! A budget group is the backend's name for a plan section: an ordered,
//! colored bucket that categories are assigned to.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetGroupId, CategoryId};

/// A budget group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetGroup {
    pub id: BudgetGroupId,
    pub name: String,
    #[serde(default)]
    pub color: String,
    /// Display order (ascending)
    #[serde(default)]
    pub position: i32,
}

impl fmt::Display for BudgetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Request body for creating or updating a budget group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetGroupInput {
    pub name: String,
    #[serde(default)]
    pub color: String,
}

/// One entry of a bulk category assignment; `None` unassigns the category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAssignment {
    pub category_id: CategoryId,
    pub budget_group_id: Option<BudgetGroupId>,
}

impl CategoryAssignment {
    pub fn assign(category_id: CategoryId, group_id: BudgetGroupId) -> Self {
        Self {
            category_id,
            budget_group_id: Some(group_id),
        }
    }

    pub fn unassign(category_id: CategoryId) -> Self {
        Self {
            category_id,
            budget_group_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unassign_serializes_null() {
        let assignment = CategoryAssignment::unassign(CategoryId::new());
        let json = serde_json::to_value(&assignment).unwrap();
        assert!(json["budgetGroupId"].is_null());
        assert!(json.get("categoryId").is_some());
    }

    #[test]
    fn test_group_defaults() {
        let json = r#"{"id": "550e8400-e29b-41d4-a716-446655440000", "name": "Receitas"}"#;
        let group: BudgetGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.position, 0);
        assert!(group.color.is_empty());
    }
}
