//! Category records as served by the backend
//!
//! A category may or may not be assigned to a budget group; the assignment
//! decides which plan section its row lands in.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetGroupId, CategoryId};

/// A spending/income category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub color: String,

    /// Icon name understood by the front end
    #[serde(default)]
    pub icon: String,

    /// Budget group this category is assigned to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<BudgetGroupId>,
}

impl Category {
    pub fn is_assigned(&self) -> bool {
        self.group_id.is_some()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Request body for creating or updating a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon: String,
}

impl CategoryInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            color: String::new(),
            icon: String::new(),
        }
    }

    /// Validate before sending
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        let chars = self.name.chars().count();
        if chars > 50 {
            return Err(CategoryValidationError::NameTooLong(chars));
        }

        Ok(())
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
