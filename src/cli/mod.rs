//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the plan store, the local drafts and the
//! backend client.

pub mod category;
pub mod draft;
pub mod group;
pub mod plan;
pub mod transaction;
pub mod wallet;

pub use category::{handle_category_command, CategoryCommands};
pub use draft::{handle_draft_command, DraftCommands};
pub use group::{handle_group_command, GroupCommands};
pub use plan::{handle_plan_command, PlanCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use wallet::{handle_wallet_command, WalletCommands};

use std::future::Future;

use crate::api::ApiClient;
use crate::config::{PlannerPaths, Settings};
use crate::error::{PlannerError, PlannerResult};
use crate::models::{Money, Month};
use crate::services::{load, NotificationQueue, RemoteState};
use crate::storage::DraftStore;

/// Everything a command handler needs besides its arguments
pub struct CliContext {
    pub paths: PlannerPaths,
    pub settings: Settings,
    /// Plan year the command works on
    pub year: i32,
}

impl CliContext {
    pub fn new(paths: PlannerPaths, settings: Settings, year: i32) -> Self {
        Self {
            paths,
            settings,
            year,
        }
    }

    /// Draft store for the configured namespace
    pub fn drafts(&self) -> DraftStore {
        DraftStore::new(self.paths.drafts_dir(), self.settings.draft_namespace.clone())
    }

    /// Backend client for the configured base URL
    pub fn api(&self) -> PlannerResult<ApiClient> {
        ApiClient::from_settings(&self.settings)
    }
}

/// Fetch data from the backend, reporting a failure as a notification
pub(crate) async fn fetch<T, F>(what: &str, call: F) -> PlannerResult<T>
where
    F: Future<Output = PlannerResult<T>>,
{
    let mut notifications = NotificationQueue::new();
    match load(what, call, &mut notifications).await {
        RemoteState::Ready(data) => Ok(data),
        _ => {
            for notification in notifications.drain() {
                eprintln!("{}", notification);
            }
            Err(PlannerError::Api(format!("{} unavailable", what)))
        }
    }
}

/// Parse a user-supplied month ("FEV", "feb", "2")
pub(crate) fn parse_month(s: &str) -> PlannerResult<Month> {
    s.parse().map_err(PlannerError::Validation)
}

/// Parse a user-supplied amount ("10,50", "R$10.50", "10")
pub(crate) fn parse_amount(s: &str) -> PlannerResult<Money> {
    Money::parse(s).map_err(|e| PlannerError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_month("fev").unwrap(), Month::Feb);
        assert!(parse_month("13").unwrap_err().is_validation());
        assert_eq!(parse_amount("R$10,50").unwrap(), Money::from_cents(1050));
        assert!(parse_amount("abc").unwrap_err().is_validation());
    }
}
