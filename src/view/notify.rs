//! Transient notifications
//!
//! Notifications stack in arrival order and each expires a fixed TTL after
//! it was pushed. Expiry is a sweep performed at dispatch time, not a
//! background timer; a later notification never shortens or extends an
//! earlier one, and duplicates are kept.

use std::time::{Duration, Instant};

/// Visual style of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// CSS class the host page styles the notification with
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification notification-success",
            NotificationKind::Error => "notification notification-error",
        }
    }
}

/// One visible notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    expires_at: Instant,
}

impl Notification {
    /// Whether this notification is past its TTL at `now`
    pub fn expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Holds the currently visible notifications
#[derive(Debug)]
pub struct NotificationHub {
    ttl: Duration,
    active: Vec<Notification>,
}

impl NotificationHub {
    /// Create a hub whose notifications live for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            active: Vec::new(),
        }
    }

    /// Push a notification, stamped to expire `ttl` from now
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.active.push(Notification {
            message: message.into(),
            kind,
            expires_at: Instant::now() + self.ttl,
        });
    }

    /// Drop expired notifications
    pub fn sweep(&mut self) {
        self.sweep_at(Instant::now());
    }

    /// Drop notifications expired as of `now`
    ///
    /// Taking the instant as a parameter lets tests simulate the passage of
    /// time without sleeping.
    pub fn sweep_at(&mut self, now: Instant) {
        self.active.retain(|n| !n.expired_at(now));
    }

    /// Currently visible notifications, oldest first
    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
