//! Budget aggregation engine
//!
//! Turns a plan's editable sections into per-section monthly totals, resolves
//! the computed section's rows against those totals and derives the balance
//! series. Cell edits produce new section collections that share every
//! untouched row.
//!
//! The free functions are pure; [`PlanStore`] owns a plan year's state and
//! caches the derived [`PlanSummary`] between edits.

pub mod balance;
pub mod defaults;
pub mod mutation;
pub mod resolver;
pub mod store;
pub mod summary;
pub mod totals;

pub use balance::balance_series;
pub use defaults::{computed_for, default_sections, sections_from_groups};
pub use mutation::{try_update_cell, update_cell};
pub use resolver::{resolve_computed_rows, ResolvedRow};
pub use store::PlanStore;
pub use summary::{summarize, PlanSummary};
pub use totals::{section_total, section_totals, SectionTotals};
