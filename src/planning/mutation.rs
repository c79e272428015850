//! Cell mutation with structural sharing
//!
//! Updating one cell rebuilds only the path to it: a new row, a new section
//! holding that row, and a new outer collection. Every other section and row
//! is the same `Arc` as before.

use std::sync::Arc;

use crate::models::{EditableSection, Money, Month, Row, RowId, SectionId};

/// Apply `next_value` to one cell, returning the new collection
///
/// Returns `None` when the section, the row or the month index does not
/// exist.
pub fn try_update_cell<F>(
    sections: &[Arc<EditableSection>],
    section_id: SectionId,
    row_id: RowId,
    month_index: usize,
    next_value: F,
) -> Option<Vec<Arc<EditableSection>>>
where
    F: FnOnce(Money) -> Money,
{
    let month = Month::from_index(month_index)?;
    let section_pos = sections.iter().position(|s| s.id == section_id)?;
    let section = &sections[section_pos];
    let row_pos = section.rows.iter().position(|r| r.id == row_id)?;

    let old_row = &section.rows[row_pos];
    let new_row = Row {
        values: old_row.values.with(month, next_value(old_row.values.get(month))),
        ..Row::clone(old_row)
    };

    let mut rows = section.rows.clone();
    rows[row_pos] = Arc::new(new_row);

    let new_section = EditableSection {
        rows,
        ..EditableSection::clone(section)
    };

    let mut next = sections.to_vec();
    next[section_pos] = Arc::new(new_section);
    Some(next)
}

/// Apply `next_value` to one cell
///
/// Unknown ids leave the collection unchanged (every element is the same
/// `Arc`); this never fails.
pub fn update_cell<F>(
    sections: &[Arc<EditableSection>],
    section_id: SectionId,
    row_id: RowId,
    month_index: usize,
    next_value: F,
) -> Vec<Arc<EditableSection>>
where
    F: FnOnce(Money) -> Money,
{
    try_update_cell(sections, section_id, row_id, month_index, next_value).unwrap_or_else(|| {
        tracing::debug!(%section_id, %row_id, month_index, "cell update target not found");
        sections.to_vec()
    })
}

/// Value factory that adds `delta` to the current value
pub fn add(delta: Money) -> impl FnOnce(Money) -> Money {
    move |current| current + delta
}

/// Value factory that removes `delta`, never going below zero
pub fn undo(delta: Money) -> impl FnOnce(Money) -> Money {
    move |current| current.saturating_sub_floor(delta)
}

/// Value factory that overwrites the current value
pub fn set(value: Money) -> impl FnOnce(Money) -> Money {
    move |_| value
}
