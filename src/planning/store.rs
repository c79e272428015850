//! The plan store: single owner of a plan year's state
//!
//! All edits go through a `&mut PlanStore`. The derived [`PlanSummary`] is
//! computed on first access and cached until the next edit.

use std::cell::OnceCell;
use std::sync::Arc;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{
    validate_sections, ComputedSection, EditableSection, EntryId, Money, Month, PendingEntry,
    PlanDraft, Row, RowId, SectionId,
};

use super::defaults::{computed_for, default_sections};
use super::mutation::{self, try_update_cell};
use super::summary::{summarize, PlanSummary};

/// State of one plan year
#[derive(Debug)]
pub struct PlanStore {
    sections: Vec<Arc<EditableSection>>,
    computed: ComputedSection,
    pending: Vec<PendingEntry>,
    summary: OnceCell<PlanSummary>,
    revision: u64,
}

impl PlanStore {
    /// Create a store over an existing layout
    pub fn new(sections: Vec<Arc<EditableSection>>, computed: ComputedSection) -> Self {
        Self {
            sections,
            computed,
            pending: Vec::new(),
            summary: OnceCell::new(),
            revision: 0,
        }
    }

    /// Create a store with the default sections and balance
    pub fn with_defaults() -> Self {
        let sections = default_sections();
        let computed = computed_for(&sections);
        Self::new(sections, computed)
    }

    /// Restore a store from a draft snapshot
    ///
    /// The computed section is rebuilt from the draft's sections.
    pub fn from_draft(draft: PlanDraft) -> Self {
        let computed = computed_for(&draft.sections);
        let mut store = Self::new(draft.sections, computed);
        store.pending = draft.pending_entries;
        store
    }

    /// Snapshot the current state for a year
    pub fn to_draft(&self, year: i32) -> PlanDraft {
        PlanDraft::new(year, self.sections.clone(), self.pending.clone())
    }

    pub fn sections(&self) -> &[Arc<EditableSection>] {
        &self.sections
    }

    pub fn computed(&self) -> &ComputedSection {
        &self.computed
    }

    pub fn pending(&self) -> &[PendingEntry] {
        &self.pending
    }

    /// Number of edits applied since the store was created
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Derived totals and balance, cached until the next edit
    pub fn summary(&self) -> &PlanSummary {
        self.summary
            .get_or_init(|| summarize(&self.sections, &self.computed))
    }

    // === Lookups ===

    pub fn section(&self, id: SectionId) -> Option<&Arc<EditableSection>> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Find a section by title (case-insensitive) or id string
    pub fn find_section(&self, identifier: &str) -> Option<&Arc<EditableSection>> {
        let lower = identifier.to_lowercase();
        self.sections
            .iter()
            .find(|s| s.title.to_lowercase() == lower)
            .or_else(|| self.sections.iter().find(|s| s.id.matches(identifier)))
    }

    /// Resolve a (section, row) pair from user-supplied identifiers
    pub fn find_cell(&self, section: &str, row: &str) -> PlannerResult<(SectionId, RowId)> {
        let found = self
            .find_section(section)
            .ok_or_else(|| PlannerError::section_not_found(section))?;
        let row = found
            .find_row(row)
            .ok_or_else(|| PlannerError::row_not_found(row))?;
        Ok((found.id, row.id))
    }

    /// Locate a row and the section owning it
    pub fn row(&self, section_id: SectionId, row_id: RowId) -> Option<(&EditableSection, &Row)> {
        let section = self.section(section_id)?;
        let row = section.row(row_id)?;
        Some((section.as_ref(), row.as_ref()))
    }

    // === Edits ===

    /// Add `amount` to a cell and remember it as a pending entry
    ///
    /// Returns the new entry's id, or `None` when the target does not exist
    /// (nothing is changed or recorded in that case).
    pub fn add(
        &mut self,
        section_id: SectionId,
        row_id: RowId,
        month: Month,
        amount: Money,
    ) -> PlannerResult<Option<EntryId>> {
        if !amount.is_positive() {
            return Err(PlannerError::Validation(format!(
                "Amount to add must be positive, got {}",
                amount
            )));
        }

        if let Some((_, row)) = self.row(section_id, row_id) {
            if row.values[month].checked_add(amount).is_none() {
                return Err(PlannerError::Validation(format!(
                    "Adding {} to {} would overflow the cell",
                    amount,
                    month.label()
                )));
            }
        }

        let applied = self.apply(section_id, row_id, month, mutation::add(amount));
        if !applied {
            return Ok(None);
        }

        let entry = PendingEntry::new(section_id, row_id, month, amount);
        let id = entry.id;
        tracing::debug!(entry = %id, %month, %amount, "recorded pending entry");
        self.pending.push(entry);
        Ok(Some(id))
    }

    /// Undo the most recent pending entry
    pub fn undo_last(&mut self) -> Option<PendingEntry> {
        let entry = self.pending.pop()?;
        self.revert(&entry);
        Some(entry)
    }

    /// Undo a specific pending entry
    pub fn undo(&mut self, entry_id: EntryId) -> PlannerResult<PendingEntry> {
        let pos = self
            .pending
            .iter()
            .position(|e| e.id == entry_id)
            .ok_or_else(|| PlannerError::entry_not_found(entry_id.to_string()))?;

        let entry = self.pending.remove(pos);
        self.revert(&entry);
        Ok(entry)
    }

    /// Attach a description to a pending entry
    pub fn describe_pending(
        &mut self,
        entry_id: EntryId,
        description: impl Into<String>,
    ) -> PlannerResult<()> {
        let entry = self
            .pending
            .iter_mut()
            .find(|e| e.id == entry_id)
            .ok_or_else(|| PlannerError::entry_not_found(entry_id.to_string()))?;
        entry.description = description.into();
        Ok(())
    }

    /// Overwrite a cell; not recorded as a pending entry
    pub fn set_cell(
        &mut self,
        section_id: SectionId,
        row_id: RowId,
        month: Month,
        value: Money,
    ) -> PlannerResult<bool> {
        if value.is_negative() {
            return Err(PlannerError::Validation(format!(
                "Cell value cannot be negative, got {}",
                value
            )));
        }

        Ok(self.apply(section_id, row_id, month, mutation::set(value)))
    }

    /// Append an empty row to a section
    pub fn add_row(&mut self, section_id: SectionId, label: &str) -> PlannerResult<RowId> {
        let label = label.trim();
        if label.is_empty() {
            return Err(PlannerError::Validation("Row label cannot be empty".into()));
        }

        let pos = self
            .sections
            .iter()
            .position(|s| s.id == section_id)
            .ok_or_else(|| PlannerError::section_not_found(section_id.to_string()))?;

        let section = &self.sections[pos];
        if section.rows.iter().any(|r| r.label.eq_ignore_ascii_case(label)) {
            return Err(PlannerError::Validation(format!(
                "Row '{}' already exists in {}",
                label, section.title
            )));
        }

        let row = Row::new(label);
        let row_id = row.id;
        let mut rows = section.rows.clone();
        rows.push(Arc::new(row));
        let updated = EditableSection {
            rows,
            ..EditableSection::clone(section)
        };

        let mut sections = self.sections.clone();
        sections[pos] = Arc::new(updated);
        self.sections = sections;
        self.touch();
        Ok(row_id)
    }

    /// Swap in a new section layout (after group management on the backend)
    ///
    /// Pending entries follow their row into whichever section now holds it;
    /// entries whose row no longer exists are dropped.
    pub fn replace_sections(&mut self, sections: Vec<Arc<EditableSection>>) -> PlannerResult<()> {
        validate_sections(&sections).map_err(|e| PlannerError::Validation(e.to_string()))?;

        self.computed = computed_for(&sections);
        self.sections = sections;

        let before = self.pending.len();
        let mut moved = 0usize;
        let sections = &self.sections;
        self.pending.retain_mut(|entry| {
            match sections.iter().find(|s| s.row(entry.row_id).is_some()) {
                Some(owner) => {
                    if owner.id != entry.section_id {
                        entry.section_id = owner.id;
                        moved += 1;
                    }
                    true
                }
                None => false,
            }
        });
        if moved > 0 {
            tracing::debug!(moved, "moved pending entries to their row's new section");
        }
        let dropped = before - self.pending.len();
        if dropped > 0 {
            tracing::warn!(dropped, "dropped pending entries for removed rows");
        }

        self.touch();
        Ok(())
    }

    /// Drain all pending entries (after they were committed)
    pub fn take_pending(&mut self) -> Vec<PendingEntry> {
        std::mem::take(&mut self.pending)
    }

    fn revert(&mut self, entry: &PendingEntry) {
        let applied = self.apply(
            entry.section_id,
            entry.row_id,
            entry.month,
            mutation::undo(entry.amount),
        );
        if !applied {
            tracing::debug!(entry = %entry.id, "undo target no longer exists");
        }
    }

    fn apply<F>(&mut self, section_id: SectionId, row_id: RowId, month: Month, next: F) -> bool
    where
        F: FnOnce(Money) -> Money,
    {
        match try_update_cell(&self.sections, section_id, row_id, month.index(), next) {
            Some(sections) => {
                self.sections = sections;
                self.touch();
                true
            }
            None => false,
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.summary = OnceCell::new();
    }
}

impl Default for PlanStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}
