//! Core data models for the budget planner
//!
//! Plan-side types (months, value series, sections, computed rows, pending
//! entries) and the records exchanged with the backend (categories, wallets,
//! budget groups, transactions).

pub mod budget_group;
pub mod category;
pub mod computed;
pub mod draft;
pub mod ids;
pub mod money;
pub mod month;
pub mod pending;
pub mod section;
pub mod series;
pub mod transaction;
pub mod wallet;

pub use budget_group::{BudgetGroup, BudgetGroupInput, CategoryAssignment};
pub use category::{Category, CategoryInput};
pub use computed::{Aggregation, ComputedFooter, ComputedRow, ComputedSection, Sign};
pub use draft::{PlanDraft, DRAFT_VERSION};
pub use ids::{
    BudgetGroupId, CategoryId, ComputedRowId, EntryId, RowId, SectionId, TransactionId, WalletId,
};
pub use money::Money;
pub use month::{Month, MONTHS_PER_YEAR};
pub use pending::PendingEntry;
pub use section::{validate_sections, EditableSection, Row};
pub use series::MonthlyValues;
pub use transaction::{Transaction, TransactionFilter, TransactionInput, TransactionKind};
pub use wallet::{Wallet, WalletInput, WalletType};
