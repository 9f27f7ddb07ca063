//! Local filesystem storage backend
//!
//! Each key is one file (`<key>.json`) under a base directory. All
//! operations complete immediately.

use super::{validate_key, KeyValueStore, StorageError};
use std::path::{Path, PathBuf};

/// File extension for stored blobs
const BLOB_EXTENSION: &str = "json";

/// Directory name under the platform data dir
#[cfg(not(target_arch = "wasm32"))]
const APP_DIR: &str = "focusmap";

/// Local filesystem key-value store
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Directory holding one file per key
    base_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `base_dir` (created on first write)
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Create a store in the platform data directory
    ///
    /// Falls back to the current directory when the platform has none.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn in_data_dir() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);
        Self::with_base_dir(base)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve a key to its file path
    fn resolve(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.base_dir.join(format!("{}.{}", key, BLOB_EXTENSION)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.resolve(key)?;

        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::from(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.resolve(key)?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.resolve(key)?;

        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            // Not found is OK for delete
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::from(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_dir() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::with_base_dir(dir.path());
        (dir, store)
    }

    #[test]
    fn test_set_and_get() {
        let (dir, mut store) = setup_test_dir();

        store.set("planeTextures", "{\"backPlane\":\"wall3\"}").unwrap();
        assert!(dir.path().join("planeTextures.json").exists());

        let value = store.get("planeTextures").unwrap();
        assert_eq!(value.as_deref(), Some("{\"backPlane\":\"wall3\"}"));
    }

    #[test]
    fn test_get_missing_is_none() {
        let (_dir, store) = setup_test_dir();
        assert_eq!(store.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let (_dir, mut store) = setup_test_dir();
        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_remove() {
        let (dir, mut store) = setup_test_dir();
        store.set("gone", "x").unwrap();

        store.remove("gone").unwrap();
        assert!(!dir.path().join("gone.json").exists());

        // Removing again should be OK
        store.remove("gone").unwrap();
    }

    #[test]
    fn test_creates_base_dir() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::with_base_dir(dir.path().join("deep/nested"));
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_rejects_path_keys() {
        let (_dir, mut store) = setup_test_dir();
        assert!(matches!(store.set("../k", "v"), Err(StorageError::InvalidKey(_))));
        assert!(matches!(store.get("a/b"), Err(StorageError::InvalidKey(_))));
    }
}
