//! Record definitions
//!
//! The single entity held by the store: one key/value pair with metadata.
//! Field order and names mirror the persisted JSON shape:
//! `{"key": ..., "value": ..., "timestamp": ..., "id": ...}`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier of a record within the list
pub type RecordId = u64;

/// One stored key/value pair with metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// User-supplied label, trimmed and non-empty at creation
    pub key: String,

    /// User-supplied payload, trimmed and non-empty at creation
    pub value: String,

    /// Creation time, ISO-8601 UTC with millisecond precision.
    /// The sole sort key for listings (descending, plain string compare).
    #[serde(rename = "timestamp")]
    pub created_at: String,

    /// Unique within the list for the lifetime of the list
    pub id: RecordId,
}

impl Record {
    /// Build a record stamped with the current time
    ///
    /// Callers are responsible for trimming and validating `key`/`value`;
    /// see `StorageManager::create`.
    pub fn new(id: RecordId, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            created_at: now_iso(),
            id,
        }
    }

    /// Case-insensitive substring match against key or value
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.key.to_lowercase().contains(needle) || self.value.to_lowercase().contains(needle)
    }

    /// Human-readable creation time for the card view
    ///
    /// Falls back to the raw stored string if it does not parse.
    pub fn created_at_display(&self) -> String {
        DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|_| self.created_at.clone())
    }
}

/// Result of a filtered read of the record list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// The store holds no records at all
    Empty,

    /// Records exist but none survived the filter
    NoMatches,

    /// Matching records, newest first
    Records(Vec<Record>),
}

impl Listing {
    /// Number of records in the listing (0 for the placeholder variants)
    pub fn len(&self) -> usize {
        match self {
            Listing::Records(records) => records.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Current UTC time as fixed-width ISO-8601 (e.g. `2026-08-07T09:15:42.123Z`)
///
/// Fixed width keeps lexicographic order equal to chronological order for
/// every timestamp this crate writes.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
