//! Resolve computed rows against section totals

use crate::models::{ComputedRowId, ComputedSection, MonthlyValues, Sign};

use super::totals::SectionTotals;

/// A computed row with its values filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRow {
    pub id: ComputedRowId,
    pub label: String,
    pub ref_section_title: String,
    /// Direction this row contributes to the balance
    pub sign: Sign,
    pub values: MonthlyValues,
    /// False when no section carries `ref_section_title`
    pub resolved: bool,
}

/// Resolve every computed row, preserving their order
///
/// A row whose referenced section is missing resolves to a zero series.
pub fn resolve_computed_rows(computed: &ComputedSection, totals: &SectionTotals) -> Vec<ResolvedRow> {
    computed
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let found = totals.get(&row.ref_section_title);
            if found.is_none() {
                tracing::debug!(
                    row = %row.label,
                    section = %row.ref_section_title,
                    "computed row references unknown section"
                );
            }

            ResolvedRow {
                id: row.id,
                label: row.label.clone(),
                ref_section_title: row.ref_section_title.clone(),
                sign: computed.effective_sign(index),
                values: found.copied().unwrap_or_else(MonthlyValues::zero),
                resolved: found.is_some(),
            }
        })
        .collect()
}
