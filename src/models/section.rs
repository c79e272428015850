//! Plan sections: editable rows grouped under a title
//!
//! An [`EditableSection`] is one budget bucket of the yearly plan (income,
//! essential expenses, ...). Its rows are held behind `Arc` so that editing
//! one cell produces a new collection that shares every untouched row.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::ids::{CategoryId, RowId, SectionId};
use super::series::MonthlyValues;

/// A single editable line of the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub id: RowId,

    /// Label shown in the first column
    pub label: String,

    /// One amount per month
    #[serde(default)]
    pub values: MonthlyValues,

    /// Backend category this row was built from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

impl Row {
    /// Create a row with all-zero values
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: RowId::new(),
            label: label.into(),
            values: MonthlyValues::zero(),
            category_id: None,
        }
    }

    /// Create a row with initial values
    pub fn with_values(label: impl Into<String>, values: MonthlyValues) -> Self {
        Self {
            values,
            ..Self::new(label)
        }
    }

    /// Create a row mirroring a backend category (row id = category id)
    pub fn for_category(category_id: CategoryId, label: impl Into<String>) -> Self {
        Self {
            id: RowId::from_uuid(*category_id.as_uuid()),
            category_id: Some(category_id),
            ..Self::new(label)
        }
    }
}

/// A titled group of editable rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableSection {
    pub id: SectionId,

    /// Unique title; computed rows reference sections by it
    pub title: String,

    /// Label of the totals line under the rows
    pub footer_label: String,

    /// Display color (CSS-style hex)
    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub rows: Vec<Arc<Row>>,
}

fn default_color() -> String {
    "#64748b".to_string()
}

impl EditableSection {
    /// Create an empty section; the footer reads "TOTAL <title>"
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: SectionId::new(),
            footer_label: format!("TOTAL {}", title),
            title,
            color: default_color(),
            rows: Vec::new(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_rows(mut self, rows: impl IntoIterator<Item = Row>) -> Self {
        self.rows = rows.into_iter().map(Arc::new).collect();
        self
    }

    /// Find a row by id
    pub fn row(&self, id: RowId) -> Option<&Arc<Row>> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Find a row by label (case-insensitive) or id string
    pub fn find_row(&self, identifier: &str) -> Option<&Arc<Row>> {
        let lower = identifier.to_lowercase();
        self.rows
            .iter()
            .find(|r| r.label.to_lowercase() == lower)
            .or_else(|| self.rows.iter().find(|r| r.id.matches(identifier)))
    }

    /// Validate the section
    pub fn validate(&self) -> Result<(), SectionValidationError> {
        if self.title.trim().is_empty() {
            return Err(SectionValidationError::EmptyTitle);
        }

        let chars = self.title.chars().count();
        if chars > 60 {
            return Err(SectionValidationError::TitleTooLong(chars));
        }

        Ok(())
    }
}

impl fmt::Display for EditableSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Validation errors for a set of sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionValidationError {
    EmptyTitle,
    TitleTooLong(usize),
    DuplicateTitle(String),
}

impl fmt::Display for SectionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Section title cannot be empty"),
            Self::TitleTooLong(len) => {
                write!(f, "Section title too long ({} chars, max 60)", len)
            }
            Self::DuplicateTitle(title) => write!(f, "Duplicate section title: {}", title),
        }
    }
}

impl std::error::Error for SectionValidationError {}

/// Validate a whole section collection, including title uniqueness
pub fn validate_sections(sections: &[Arc<EditableSection>]) -> Result<(), SectionValidationError> {
    let mut seen = std::collections::HashSet::new();
    for section in sections {
        section.validate()?;
        if !seen.insert(section.title.as_str()) {
            return Err(SectionValidationError::DuplicateTitle(section.title.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_section() {
        let section = EditableSection::new("RECEITAS");
        assert_eq!(section.footer_label, "TOTAL RECEITAS");
        assert!(section.rows.is_empty());
        assert!(section.validate().is_ok());
    }

    #[test]
    fn test_find_row() {
        let section =
            EditableSection::new("RECEITAS").with_rows([Row::new("Salário"), Row::new("Extra")]);
        let extra_id = section.rows[1].id;

        assert_eq!(section.find_row("salário").unwrap().label, "Salário");
        assert_eq!(section.find_row(&extra_id.to_string()).unwrap().id, extra_id);
        assert!(section.find_row("missing").is_none());
    }

    #[test]
    fn test_row_for_category_shares_id() {
        let category = CategoryId::new();
        let row = Row::for_category(category, "Mercado");
        assert_eq!(row.id.as_uuid(), category.as_uuid());
        assert_eq!(row.category_id, Some(category));
    }

    #[test]
    fn test_duplicate_titles_rejected() {
        let sections = vec![
            Arc::new(EditableSection::new("RECEITAS")),
            Arc::new(EditableSection::new("RECEITAS")),
        ];
        assert_eq!(
            validate_sections(&sections),
            Err(SectionValidationError::DuplicateTitle("RECEITAS".into()))
        );
    }

    #[test]
    fn test_empty_title_rejected() {
        let section = EditableSection::new("  ");
        assert_eq!(section.validate(), Err(SectionValidationError::EmptyTitle));
    }

    #[test]
    fn test_title_length_counts_chars() {
        // 60 characters, 120 bytes
        let accented = EditableSection::new("Ã".repeat(60));
        assert_eq!(accented.validate(), Ok(()));

        let long = EditableSection::new("Ã".repeat(61));
        assert_eq!(long.validate(), Err(SectionValidationError::TitleTooLong(61)));
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let section = EditableSection::new("DÍVIDAS").with_rows([Row::new("Cartão")]);
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["footerLabel"], "TOTAL DÍVIDAS");
        assert_eq!(json["rows"][0]["values"].as_array().unwrap().len(), 12);

        let back: EditableSection = serde_json::from_value(json).unwrap();
        assert_eq!(back, section);
    }
}
