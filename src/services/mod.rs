//! Service layer for the budget planner
//!
//! Services sit between the front end and the plan store, the local drafts
//! and the backend client. Backend failures come back as [`RemoteState`]
//! values and user-facing [`Notification`]s.

pub mod notification;
pub mod plan;
pub mod remote;

pub use notification::{Notification, NotificationKind, NotificationQueue};
pub use plan::{find_wallet, PlanService};
pub use remote::{load, RemoteState};
