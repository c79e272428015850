//! Per-section monthly totals
//!
//! Element `i` of a section's total is the sum of `values[i]` over all of its
//! rows. Missing values were already normalized to zero when the series was
//! built, so summing never fails.

use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{EditableSection, MonthlyValues};

/// Monthly totals keyed by section title
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionTotals {
    by_title: HashMap<String, MonthlyValues>,
}

impl SectionTotals {
    /// Totals for `title`, if a section with that title exists
    pub fn get(&self, title: &str) -> Option<&MonthlyValues> {
        self.by_title.get(title)
    }

    /// Totals for `title`, or a zero series when it is unknown
    pub fn get_or_zero(&self, title: &str) -> MonthlyValues {
        self.get(title).copied().unwrap_or_else(MonthlyValues::zero)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.by_title.contains_key(title)
    }

    pub fn len(&self) -> usize {
        self.by_title.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_title.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MonthlyValues)> {
        self.by_title.iter().map(|(title, values)| (title.as_str(), values))
    }
}

/// Sum every row of one section, month by month
pub fn section_total(section: &EditableSection) -> MonthlyValues {
    section
        .rows
        .iter()
        .fold(MonthlyValues::zero(), |acc, row| acc.plus(&row.values))
}

/// Compute the totals of every section
///
/// Titles are expected to be unique; if two sections share a title the later
/// one wins.
pub fn section_totals(sections: &[Arc<EditableSection>]) -> SectionTotals {
    let by_title = sections
        .iter()
        .map(|section| (section.title.clone(), section_total(section)))
        .collect();
    SectionTotals { by_title }
}
