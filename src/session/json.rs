//! JSON file-based key-value store.
//!
//! The whole map is kept in memory and rewritten on every change using a
//! write-to-temp + rename, so a crash never leaves a half-written file.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "entries": {
//!     "isLoggedIn": "1"
//!   }
//! }
//! ```

use crate::domain::error::{LoginGateError, Result};
use crate::session::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    version: u32,

    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file store.
///
/// `Send` but not `Sync`; the plugin owns it from a single thread.
#[derive(Debug)]
pub struct JsonStore {
    file_path: PathBuf,
    data: StoreData,
}

impl JsonStore {
    /// Opens the store at `file_path`, creating parent directories as needed.
    ///
    /// A missing file is an empty store; the file is only created on the
    /// first write.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but is not valid JSON
    /// - The file cannot be read
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use logingate::session::JsonStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonStore::open(PathBuf::from("/tmp/session.json"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no store file yet, starting empty");
            StoreData::default()
        };

        tracing::debug!(entries = data.entries.len(), "store opened");

        Ok(Self { file_path, data })
    }

    fn load_from_file(path: &Path) -> Result<StoreData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StoreData = serde_json::from_str(&contents)
            .map_err(|e| LoginGateError::Storage(format!("failed to parse JSON: {e}")))?;

        if data.version != FORMAT_VERSION {
            tracing::warn!(version = data.version, "unexpected store version, reading anyway");
        }

        Ok(data)
    }

    /// Writes `next` and adopts it. On failure the in-memory map keeps the
    /// last state that reached the disk.
    fn commit(&mut self, next: StoreData) -> Result<()> {
        Self::save_to_file(&self.file_path, &next)?;
        self.data = next;
        Ok(())
    }

    fn save_to_file(file_path: &Path, data: &StoreData) -> Result<()> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| LoginGateError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, file_path)?;

        tracing::debug!(path = ?file_path, "store saved");
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl KeyValueStore for JsonStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set", key = %key).entered();

        if self.data.entries.get(key).map(String::as_str) == Some(value) {
            tracing::trace!("value unchanged, skipping save");
            return Ok(());
        }

        let mut next = self.data.clone();
        next.entries.insert(key.to_string(), value.to_string());
        self.commit(next)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_remove", key = %key).entered();

        if !self.data.entries.contains_key(key) {
            tracing::trace!("key absent, skipping save");
            return Ok(());
        }

        let mut next = self.data.clone();
        next.entries.remove(key);
        self.commit(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty_and_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let store = JsonStore::open(path.clone()).unwrap();
        assert_eq!(store.get("isLoggedIn").unwrap(), None);
        assert!(!path.exists());
        assert!(path.parent().unwrap().exists());
    }

    #[test]
    fn set_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = JsonStore::open(path.clone()).unwrap();
        store.set("isLoggedIn", "1").unwrap();
        drop(store);

        let reopened = JsonStore::open(path.clone()).unwrap();
        assert_eq!(reopened.get("isLoggedIn").unwrap().as_deref(), Some("1"));
        assert!(!path.with_extension("tmp").exists());

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["version"], 1);
        assert_eq!(raw["entries"]["isLoggedIn"], "1");
    }

    #[test]
    fn remove_deletes_key_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = JsonStore::open(path.clone()).unwrap();
        store.set("isLoggedIn", "1").unwrap();
        store.remove("isLoggedIn").unwrap();
        store.remove("isLoggedIn").unwrap();

        let reopened = JsonStore::open(path).unwrap();
        assert_eq!(reopened.get("isLoggedIn").unwrap(), None);
    }

    #[test]
    fn failed_write_is_retried_on_next_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let blocker = path.with_extension("tmp");
        std::fs::create_dir(&blocker).unwrap();

        let mut store = JsonStore::open(path.clone()).unwrap();
        assert!(store.set("isLoggedIn", "1").is_err());
        assert_eq!(store.get("isLoggedIn").unwrap(), None);

        std::fs::remove_dir(&blocker).unwrap();
        store.set("isLoggedIn", "1").unwrap();

        let reopened = JsonStore::open(path).unwrap();
        assert_eq!(reopened.get("isLoggedIn").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn failed_remove_keeps_key_and_retries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = JsonStore::open(path.clone()).unwrap();
        store.set("isLoggedIn", "1").unwrap();

        let blocker = path.with_extension("tmp");
        std::fs::create_dir(&blocker).unwrap();
        assert!(store.remove("isLoggedIn").is_err());
        assert_eq!(store.get("isLoggedIn").unwrap().as_deref(), Some("1"));

        std::fs::remove_dir(&blocker).unwrap();
        store.remove("isLoggedIn").unwrap();

        let reopened = JsonStore::open(path).unwrap();
        assert_eq!(reopened.get("isLoggedIn").unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let err = JsonStore::open(path).unwrap_err();
        assert!(matches!(err, LoginGateError::Storage(_)));
    }
}
