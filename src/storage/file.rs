use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::storage::StateStore;
use crate::utils::error::BoxResult;

/// Store backed by a JSON file, written through on every `set`.
///
/// A failed write is logged and otherwise ignored, so a read-only location
/// degrades to session-only state rather than failing the transformation.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: RefCell<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading any existing entries. A missing
    /// file yields an empty store.
    pub fn open<P: Into<PathBuf>>(path: P) -> BoxResult<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            HashMap::new()
        };
        Ok(JsonFileStore {
            path,
            entries: RefCell::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) {
        let entries = self.entries.borrow();
        match serde_json::to_string_pretty(&*entries) {
            Ok(raw) => {
                if let Err(e) = fs::write(&self.path, raw) {
                    warn!("Failed to write state file {}: {}", self.path.display(), e);
                }
            }
            Err(e) => warn!("Failed to serialize state file {}: {}", self.path.display(), e),
        }
    }
}

impl StateStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("state.json")).unwrap();

        assert_eq!(store.get("page#id"), None);
    }

    #[test]
    fn test_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        {
            let store = JsonFileStore::open(&path).unwrap();
            store.set("page#intro-section", "false");
            store.set("page#usage-section", "true");
        }

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("page#intro-section").as_deref(), Some("false"));
        assert_eq!(reopened.get("page#usage-section").as_deref(), Some("true"));
        assert_eq!(reopened.get("page#other"), None);
    }
}
