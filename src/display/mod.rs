//! Display formatting for terminal output
//!
//! Plain fixed-width tables for the plan grid, the balance, pending entries
//! and the records fetched from the backend.

pub mod category;
pub mod plan;
pub mod transaction;
pub mod wallet;

pub use category::{format_category_list, format_group_tree};
pub use plan::{format_balance, format_pending_list, format_plan_grid};
pub use transaction::{format_import_preview, format_transaction_list};
pub use wallet::format_wallet_list;
