//! Persistence
//!
//! Small pieces of state (the wall texture mapping, optionally the icon
//! layout) are stored as string blobs under well-known keys:
//! - `planeTextures` → plane id to texture name (`mapping`)
//! - `iconLayout` → placed icons, only when layout persistence is enabled (`layout`)
//!
//! Backends implement [`KeyValueStore`]. All operations are synchronous;
//! callers run on the single interaction thread and writes complete before
//! the next event is handled.

pub mod layout;
pub mod local;
pub mod mapping;
pub mod memory;

pub use layout::{load_layout, save_layout, SavedIcon, LAYOUT_KEY};
pub use local::FileStore;
pub use mapping::{MappingStore, PlaneMapping, MAPPING_KEY};
pub use memory::MemoryStore;

use thiserror::Error;

/// Storage error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    /// File or directory not found
    #[error("not found: {0}")]
    NotFound(String),
    /// Permission denied
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),
    /// Key contains characters that can't be stored
    #[error("invalid key: {0:?}")]
    InvalidKey(String),
    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    SerdeError(String),
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound(e.to_string()),
            std::io::ErrorKind::PermissionDenied => StorageError::PermissionDenied(e.to_string()),
            _ => StorageError::IoError(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::SerdeError(e.to_string())
    }
}

/// Flat string key-value storage
///
/// A missing key is `Ok(None)`, not an error.
pub trait KeyValueStore {
    /// Read the blob stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Create or overwrite the blob stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key` (deleting a missing key is OK)
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Check that a key is safe to use as a file name on every backend
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
