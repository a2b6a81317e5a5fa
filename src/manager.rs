//! Storage Manager
//!
//! The CRUD core over the backing store. Every operation is a synchronous
//! read-mutate-write cycle over the whole record list; the list is one JSON
//! array persisted under one namespaced item key.
//!
//! ## Responsibilities
//! - Validate and append new records
//! - Remove records by id
//! - Filtered, newest-first reads of the record list
//! - Aggregate statistics (count, serialized byte size)
//!
//! ## Concurrency:
//! - `backing`: Protected by RwLock (concurrent reads, exclusive writer)
//! - `next_id`: Atomic counter (lock-free), seeded from the stored maximum
//! - All methods use `&self` (no exclusive access needed)

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::config::Config;
use crate::error::{NoteKvError, Result};
use crate::record::{Listing, Record, RecordId};
use crate::store::Backing;

/// Aggregate statistics over the stored record list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of stored records
    pub count: usize,

    /// UTF-8 byte length of the serialized record list
    pub bytes: usize,
}

/// Manages the record list persisted in a backing store
pub struct StorageManager {
    /// Namespaced item key the record blob lives under
    storage_key: String,

    /// The backing store; only this type touches it
    backing: RwLock<Box<dyn Backing>>,

    /// Next record id (atomic, lock-free)
    next_id: AtomicU64,
}

impl StorageManager {
    /// Open a manager over the given backing store
    ///
    /// On startup:
    /// 1. Read the record blob if present
    /// 2. Seed the id counter to `max(stored ids) + 1` (1 for an empty store)
    pub fn open(backing: Box<dyn Backing>, config: &Config) -> Result<Self> {
        let records = Self::load(&*backing, &config.storage_key)?;

        // Next id = max + 1, or 1 if no records exist
        let next_id = records.iter().map(|r| r.id).max().map_or(1, |max| max + 1);

        Ok(Self {
            storage_key: config.storage_key.clone(),
            backing: RwLock::new(backing),
            next_id: AtomicU64::new(next_id),
        })
    }

    /// Append a new record built from raw user input
    ///
    /// Both inputs are trimmed; if either trims to empty the operation fails
    /// with a validation error and nothing is written.
    pub fn create(&self, key: &str, value: &str) -> Result<Record> {
        let key = key.trim();
        let value = value.trim();

        if key.is_empty() || value.is_empty() {
            return Err(NoteKvError::Validation(
                "key and value must both be non-empty".to_string(),
            ));
        }

        let mut backing = self.backing.write();
        let mut records = Self::load(&**backing, &self.storage_key)?;

        let record = Record::new(self.next_id.fetch_add(1, Ordering::SeqCst), key, value);
        records.push(record.clone());

        let blob = Self::encode(&records)?;
        backing.set_item(&self.storage_key, &blob)?;

        tracing::debug!(id = record.id, count = records.len(), "record created");

        Ok(record)
    }

    /// Remove the record with the given id
    ///
    /// Removes every record whose id matches (expected: exactly one) and
    /// writes the list back either way, so a missing id is an idempotent
    /// no-op. Returns whether anything was removed.
    pub fn delete(&self, id: RecordId) -> Result<bool> {
        let mut backing = self.backing.write();
        let mut records = Self::load(&**backing, &self.storage_key)?;

        let before = records.len();
        records.retain(|r| r.id != id);
        let removed = records.len() != before;

        let blob = Self::encode(&records)?;
        backing.set_item(&self.storage_key, &blob)?;

        if removed {
            tracing::debug!(id, count = records.len(), "record deleted");
        }

        Ok(removed)
    }

    /// Read the record list, filtered and sorted newest first
    ///
    /// A non-empty `filter` retains records whose key or value contains it
    /// as a case-insensitive substring. Ordering is a plain string compare
    /// on `created_at`, descending.
    pub fn list(&self, filter: &str) -> Result<Listing> {
        let backing = self.backing.read();
        let records = Self::load(&**backing, &self.storage_key)?;

        if records.is_empty() {
            return Ok(Listing::Empty);
        }

        let mut matched: Vec<Record> = if filter.is_empty() {
            records
        } else {
            let needle = filter.to_lowercase();
            records.into_iter().filter(|r| r.matches(&needle)).collect()
        };

        if matched.is_empty() {
            return Ok(Listing::NoMatches);
        }

        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(Listing::Records(matched))
    }

    /// Compute aggregate statistics over the stored list
    pub fn stats(&self) -> Result<StoreStats> {
        let backing = self.backing.read();
        let records = Self::load(&**backing, &self.storage_key)?;
        let blob = Self::encode(&records)?;

        Ok(StoreStats {
            count: records.len(),
            bytes: blob.len(),
        })
    }

    /// Next id that will be allocated (for testing and debugging)
    pub fn next_id(&self) -> RecordId {
        self.next_id.load(Ordering::SeqCst)
    }

    // =========================================================================
    // Blob codec
    // =========================================================================

    /// Read and decode the record blob
    ///
    /// A malformed blob fails closed: it is logged and treated as an empty
    /// list. The next successful mutation overwrites it with a well-formed
    /// array.
    fn load(backing: &dyn Backing, storage_key: &str) -> Result<Vec<Record>> {
        let Some(blob) = backing.get_item(storage_key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&blob) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!(%storage_key, error = %e, "malformed record blob, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn encode(records: &[Record]) -> Result<String> {
        serde_json::to_string(records).map_err(|e| NoteKvError::Serialization(e.to_string()))
    }
}
