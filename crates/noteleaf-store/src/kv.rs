//! Key-value persistence adapters.
//!
//! The store treats persistence as an opaque string-blob store. Two adapters
//! are provided: [`MemoryStore`] for tests and ephemeral sessions, and
//! [`FileStore`] which keeps one file per key inside a root directory.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use noteleaf_core::{Error, KeyValueStore, Result};

// =============================================================================
// IN-MEMORY ADAPTER
// =============================================================================

/// In-process key-value store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
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

// =============================================================================
// FILE-BACKED ADAPTER
// =============================================================================

/// File-backed key-value store: one file per key inside a root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Root directory of this store.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    /// Map a key to its on-disk path.
    ///
    /// Keys are restricted to alphanumerics plus `.`, `_`, and `-` so they
    /// can never escape the root directory.
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(Error::Storage(format!("invalid storage key: {key:?}")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::write(&path, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut kv = MemoryStore::new();
        assert_eq!(kv.get("k").unwrap(), None);

        kv.set("k", "v1").unwrap();
        assert_eq!(kv.get("k").unwrap().as_deref(), Some("v1"));

        kv.set("k", "v2").unwrap();
        assert_eq!(kv.get("k").unwrap().as_deref(), Some("v2"));

        kv.remove("k").unwrap();
        assert_eq!(kv.get("k").unwrap(), None);
    }

    #[test]
    fn memory_store_remove_absent_key_is_noop() {
        let mut kv = MemoryStore::new();
        kv.remove("missing").unwrap();
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut kv = FileStore::open(dir.path()).unwrap();

        assert_eq!(kv.get("notes").unwrap(), None);

        kv.set("notes", "[1,2,3]").unwrap();
        assert_eq!(kv.get("notes").unwrap().as_deref(), Some("[1,2,3]"));

        kv.remove("notes").unwrap();
        assert_eq!(kv.get("notes").unwrap(), None);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut kv = FileStore::open(dir.path()).unwrap();
            kv.set("smartNotes", "[]").unwrap();
        }
        let kv = FileStore::open(dir.path()).unwrap();
        assert_eq!(kv.get("smartNotes").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn file_store_rejects_path_traversal_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut kv = FileStore::open(dir.path()).unwrap();

        for key in ["../escape", "a/b", "", "a b"] {
            assert!(
                matches!(kv.set(key, "x"), Err(Error::Storage(_))),
                "key {key:?} should be rejected"
            );
        }
    }

    #[test]
    fn file_store_remove_absent_key_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut kv = FileStore::open(dir.path()).unwrap();
        kv.remove("missing").unwrap();
    }
}
