//! Transient toast messages.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub text: String,
    pub created_at: Instant,
    /// `None` stays up until dismissed.
    pub ttl: Option<Duration>,
}

impl Notification {
    pub const SUCCESS_TTL: Duration = Duration::from_millis(2000);

    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            text: text.into(),
            created_at: Instant::now(),
            ttl: Some(Self::SUCCESS_TTL),
        }
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            text: text.into(),
            created_at: Instant::now(),
            ttl: None,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.ttl
            .is_some_and(|ttl| now.saturating_duration_since(self.created_at) >= ttl)
    }

    /// Time left before expiry; `None` for sticky notifications.
    pub fn remaining_at(&self, now: Instant) -> Option<Duration> {
        self.ttl
            .map(|ttl| ttl.saturating_sub(now.saturating_duration_since(self.created_at)))
    }
}
