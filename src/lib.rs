//! # notekv
//!
//! A local key/value note keeper with:
//! - A single serialized record list under one namespaced storage key
//! - Search/filter and delete over stored pairs
//! - Markup rendering with full-replace refreshes
//! - Aggregate statistics (item count, approximate storage size)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Host Page / CLI                        │
//! │            (form submit, search input, delete click)         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ UiEvent
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Widget                                │
//! │        (view state, notifications, confirmation)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    View     │          │  Storage    │
//!   │  (markup)   │          │  Manager    │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │   Backing   │
//!                           │ (file, mem) │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod manager;
pub mod record;
pub mod store;
pub mod ui;
pub mod view;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::Config;
pub use error::{NoteKvError, Result};
pub use manager::{StorageManager, StoreStats};
pub use record::{Listing, Record, RecordId};
pub use ui::{UiEvent, Widget};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of notekv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
