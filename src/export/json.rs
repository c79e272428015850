//! JSON export of a plan year
//!
//! The export carries the editable sections together with everything derived
//! from them, so it can be read without recomputing anything.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::sync::Arc;

use crate::error::PlannerResult;
use crate::models::{EditableSection, Money, MonthlyValues, PendingEntry, Sign};
use crate::planning::PlanStore;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// One computed row with its resolved values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedComputedRow {
    pub label: String,
    pub ref_section_title: String,
    pub sign: Sign,
    pub values: MonthlyValues,
}

/// Full plan export
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub year: i32,
    pub sections: Vec<Arc<EditableSection>>,
    pub computed_rows: Vec<ExportedComputedRow>,
    pub formula: String,
    pub balance: MonthlyValues,
    #[serde(with = "crate::models::money::as_decimal")]
    pub annual_balance: Money,
    pub pending_entries: Vec<PendingEntry>,
}

impl PlanExport {
    pub fn from_store(store: &PlanStore, year: i32) -> Self {
        let summary = store.summary();
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            year,
            sections: store.sections().to_vec(),
            computed_rows: summary
                .computed_rows
                .iter()
                .map(|r| ExportedComputedRow {
                    label: r.label.clone(),
                    ref_section_title: r.ref_section_title.clone(),
                    sign: r.sign,
                    values: r.values,
                })
                .collect(),
            formula: store.computed().footer.formula.clone(),
            balance: summary.balance,
            annual_balance: summary.annual_balance(),
            pending_entries: store.pending().to_vec(),
        }
    }
}

/// Write the plan as pretty-printed JSON
pub fn export_plan_json<W: Write>(store: &PlanStore, year: i32, writer: W) -> PlannerResult<()> {
    let export = PlanExport::from_store(store, year);
    serde_json::to_writer_pretty(writer, &export)?;
    Ok(())
}
