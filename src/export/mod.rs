//! Export of a plan year
//!
//! - CSV: the plan grid, spreadsheet-compatible
//! - JSON: sections plus derived totals and balance

pub mod csv;
pub mod json;

pub use self::csv::export_plan_csv;
pub use json::{export_plan_json, PlanExport, EXPORT_SCHEMA_VERSION};
