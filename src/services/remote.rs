//! Transient state of data fetched from the backend
//!
//! A collaborator call resolves once to data or an error. Errors are kept as
//! a display string and echoed as an error notification; they are never
//! retried automatically.

use std::future::Future;

use crate::error::PlannerResult;

use super::notification::{Notification, NotificationQueue};

/// Where a remote resource stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RemoteState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> RemoteState<T> {
    /// Map a finished call onto a state
    pub fn from_result(result: PlannerResult<T>) -> Self {
        match result {
            Ok(data) => Self::Ready(data),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Run a collaborator call, recording a failure in `notifications`
///
/// `what` names the resource for the notification ("wallets").
pub async fn load<T, F>(what: &str, call: F, notifications: &mut NotificationQueue) -> RemoteState<T>
where
    F: Future<Output = PlannerResult<T>>,
{
    let state = RemoteState::from_result(call.await);
    if let Some(message) = state.error() {
        tracing::error!(resource = what, error = %message, "failed to load from backend");
        notifications.push(Notification::error(format!(
            "Failed to load {}: {}",
            what, message
        )));
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;

    #[test]
    fn test_from_result() {
        let ok: RemoteState<u32> = RemoteState::from_result(Ok(3));
        assert_eq!(ok.data(), Some(&3));
        assert!(ok.error().is_none());

        let failed: RemoteState<u32> =
            RemoteState::from_result(Err(PlannerError::Api("connection refused".into())));
        assert_eq!(failed.error(), Some("API error: connection refused"));
        assert!(failed.into_data().is_none());
    }

    #[tokio::test]
    async fn test_load_failure_notifies() {
        let mut notifications = NotificationQueue::new();

        let state: RemoteState<Vec<u8>> = load(
            "wallets",
            async { Err(PlannerError::Api("timeout".into())) },
            &mut notifications,
        )
        .await;

        assert!(state.error().is_some());
        let items = notifications.drain();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].message, "Failed to load wallets: API error: timeout");
    }

    #[tokio::test]
    async fn test_load_success_is_silent() {
        let mut notifications = NotificationQueue::new();
        let state = load("categories", async { Ok(vec![1, 2]) }, &mut notifications).await;

        assert_eq!(state, RemoteState::Ready(vec![1, 2]));
        assert!(notifications.is_empty());
    }
}
