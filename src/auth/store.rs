//! Key-value stores holding the persisted session flags.

use dashmap::DashMap;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Error type for loading a store from disk.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read session store {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse session store {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only view of persisted session values.
pub trait SessionStore: Send + Sync + std::fmt::Debug {
    fn get(&self, key: &str) -> Option<String>;
}

/// A thread-safe in-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a value. Used by the session side, never by the router.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.inner.remove(key);
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).map(|v| v.value().clone())
    }
}

/// A store loaded from a JSON object of string keys and values.
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    values: HashMap<String, String>,
}

impl FileStore {
    /// Load from file. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Session store file missing, starting empty");
            return Ok(Self::default());
        }

        let file = File::open(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let values: HashMap<String, String> = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| StoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!(path = %path.display(), keys = values.len(), "Loaded session store");
        Ok(Self { values })
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get("isLoggedIn"), None);

        store.set("isLoggedIn", "yes");
        assert_eq!(store.get("isLoggedIn").as_deref(), Some("yes"));

        store.remove("isLoggedIn");
        assert_eq!(store.get("isLoggedIn"), None);
    }

    #[test]
    fn test_file_store_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"isLoggedIn": "yes", "theme": "dark"}}"#).unwrap();

        let store = FileStore::load(file.path()).unwrap();
        assert_eq!(store.get("isLoggedIn").as_deref(), Some("yes"));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(store.get("isLoggedIn"), None);
    }

    #[test]
    fn test_file_store_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = FileStore::load(file.path()).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }
}
