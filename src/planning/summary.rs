//! Everything derived from a plan's sections in one value

use std::sync::Arc;

use crate::models::{ComputedSection, EditableSection, Money, MonthlyValues};

use super::balance::balance_series;
use super::resolver::{resolve_computed_rows, ResolvedRow};
use super::totals::{section_totals, SectionTotals};

/// Section totals, resolved computed rows and the balance series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSummary {
    pub totals: SectionTotals,
    pub computed_rows: Vec<ResolvedRow>,
    pub balance: MonthlyValues,
}

impl PlanSummary {
    /// Sum of the balance over the whole year
    pub fn annual_balance(&self) -> Money {
        self.balance.annual_total()
    }

    /// Computed rows pointing at sections that do not exist
    pub fn unresolved_rows(&self) -> impl Iterator<Item = &ResolvedRow> {
        self.computed_rows.iter().filter(|row| !row.resolved)
    }
}

/// Run totals, resolution and balance over a section collection
pub fn summarize(sections: &[Arc<EditableSection>], computed: &ComputedSection) -> PlanSummary {
    let totals = section_totals(sections);
    let computed_rows = resolve_computed_rows(computed, &totals);
    let balance = balance_series(&computed_rows);

    PlanSummary {
        totals,
        computed_rows,
        balance,
    }
}
