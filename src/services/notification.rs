//! User-visible notifications
//!
//! Collaborator failures and completed actions are reported as short
//! notifications; the front end decides how to render them.

use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Prefix used when printing to a terminal
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }
}

/// A transient message for the user
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
    /// How long the message stays relevant
    pub ttl: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            ttl: Duration::from_secs(3),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.icon(), self.message)
    }
}

/// FIFO of pending notifications
#[derive(Debug, Default)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.items.push_back(notification);
    }

    /// Oldest notification that has not expired yet
    pub fn current(&mut self) -> Option<&Notification> {
        while self.items.front().is_some_and(|n| n.is_expired()) {
            self.items.pop_front();
        }
        self.items.front()
    }

    /// Remove and return every queued notification
    pub fn drain(&mut self) -> Vec<Notification> {
        self.items.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::error("Falha ao carregar carteiras");
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.to_string(), "[x] Falha ao carregar carteiras");
    }

    #[test]
    fn test_queue_order() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.push(Notification::info("First"));
        queue.push(Notification::success("Second"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().message, "First");
        assert_eq!(queue.drain().len(), 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_expired_notifications_skipped() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::info("gone").with_ttl(Duration::ZERO));
        queue.push(Notification::info("still here"));

        assert_eq!(queue.current().unwrap().message, "still here");
        assert_eq!(queue.len(), 1);
    }
}
