//! In-memory store
//!
//! HashMap-backed `Backing` used by tests and benchmarks.

use std::collections::HashMap;

use crate::error::Result;

use super::Backing;

/// Store backed by an in-process map
#[derive(Debug, Default)]
pub struct MemoryBacking {
    items: HashMap<String, String>,
}

impl MemoryBacking {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of item keys currently stored
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Backing for MemoryBacking {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
