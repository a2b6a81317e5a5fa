//! View Module
//!
//! Markup rendering and transient notifications.
//!
//! ## Responsibilities
//! - Render the items list as markup (full replace, no diffing)
//! - Render placeholder messages for empty and no-match listings
//! - Format aggregate statistics for display
//! - Hold stacked, auto-expiring notifications

pub mod render;

mod notify;

pub use notify::{Notification, NotificationHub, NotificationKind};
