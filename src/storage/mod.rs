//! Local storage for the budget planner
//!
//! Plan drafts live on the local filesystem as JSON; everything else belongs
//! to the backend.

pub mod drafts;
pub mod file_io;

pub use drafts::DraftStore;
pub use file_io::{read_json_optional, write_json_atomic};
