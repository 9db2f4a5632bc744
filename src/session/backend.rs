//! Key-value store abstraction backing the session flag.
//!
//! The session only ever needs three operations on string keys, so the trait
//! stays that small.

use crate::domain::error::Result;
use std::collections::HashMap;

/// Durable string key-value storage.
///
/// # Implementations
///
/// - [`JsonStore`](crate::session::JsonStore): JSON file with atomic writes (default)
/// - [`MemoryStore`]: process-local map, used when the data directory is unavailable
pub trait KeyValueStore: Send {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be persisted.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Non-durable store kept in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
