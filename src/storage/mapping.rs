//! Mapping Store
//!
//! Persists which texture each wall plane wears. The whole mapping is one
//! JSON object (`{"backPlane": "wall3", ...}`) under [`MAPPING_KEY`]; every
//! save overwrites it wholesale.

use std::collections::BTreeMap;

use super::{KeyValueStore, StorageError};
use crate::wall::PlaneId;

/// Well-known key for the plane texture mapping
pub const MAPPING_KEY: &str = "planeTextures";

/// Plane id → texture asset name
pub type PlaneMapping = BTreeMap<PlaneId, String>;

/// Load/save wrapper around the persisted plane mapping
pub struct MappingStore<S: KeyValueStore> {
    store: S,
    /// In-memory copy, kept in sync with what was last written
    mapping: PlaneMapping,
}

impl<S: KeyValueStore> MappingStore<S> {
    /// Wrap a backend; the in-memory mapping starts empty until `load()`
    pub fn new(store: S) -> Self {
        Self {
            store,
            mapping: PlaneMapping::new(),
        }
    }

    /// Read the persisted mapping, replacing the in-memory copy
    ///
    /// A missing, unreadable or malformed blob is treated as "nothing saved
    /// yet" and yields an empty mapping. Entries for unknown planes are
    /// dropped.
    pub fn load(&mut self) -> PlaneMapping {
        self.mapping = self.read_persisted();
        self.mapping.clone()
    }

    fn read_persisted(&self) -> PlaneMapping {
        let blob = match self.store.get(MAPPING_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                tracing::debug!("no saved plane textures");
                return PlaneMapping::new();
            }
            Err(e) => {
                tracing::warn!("failed to read saved plane textures: {}", e);
                return PlaneMapping::new();
            }
        };

        let raw: BTreeMap<String, String> = match serde_json::from_str(&blob) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("ignoring malformed plane textures: {}", e);
                return PlaneMapping::new();
            }
        };

        raw.into_iter()
            .filter_map(|(plane, texture)| match plane.parse::<PlaneId>() {
                Ok(id) => Some((id, texture)),
                Err(e) => {
                    tracing::warn!("dropping saved texture {:?}: {}", texture, e);
                    None
                }
            })
            .collect()
    }

    /// Overwrite the persisted blob with `mapping`
    pub fn save(&mut self, mapping: &PlaneMapping) -> Result<(), StorageError> {
        let blob = serde_json::to_string(mapping)?;
        self.store.set(MAPPING_KEY, &blob)?;
        self.mapping = mapping.clone();
        Ok(())
    }

    /// Assign a texture to a plane and persist the full mapping immediately
    ///
    /// The in-memory mapping is updated even if the write fails.
    pub fn set_and_persist(&mut self, plane: PlaneId, texture: impl Into<String>) -> Result<(), StorageError> {
        self.mapping.insert(plane, texture.into());
        let mapping = self.mapping.clone();
        self.save(&mapping)
    }

    /// In-memory mapping as of the last load/save
    pub fn mapping(&self) -> &PlaneMapping {
        &self.mapping
    }

    pub fn texture_for(&self, plane: PlaneId) -> Option<&str> {
        self.mapping.get(&plane).map(String::as_str)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Backend access for other blobs kept alongside the mapping
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};
    use tempfile::TempDir;

    #[test]
    fn test_load_empty() {
        let mut store = MappingStore::new(MemoryStore::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_persistence_round_trip() {
        let dir = TempDir::new().unwrap();

        let mut store = MappingStore::new(FileStore::with_base_dir(dir.path()));
        store.set_and_persist(PlaneId::Back, "wall3").unwrap();

        // Fresh store over the same directory, as on the next launch
        let mut fresh = MappingStore::new(FileStore::with_base_dir(dir.path()));
        let loaded = fresh.load();

        let mut expected = PlaneMapping::new();
        expected.insert(PlaneId::Back, "wall3".to_string());
        assert_eq!(loaded, expected);
    }

    #[test]
    fn test_blob_format() {
        let mut store = MappingStore::new(MemoryStore::new());
        store.set_and_persist(PlaneId::Back, "wall3").unwrap();
        store.set_and_persist(PlaneId::Left, "wall1").unwrap();

        let blob = store.store().get(MAPPING_KEY).unwrap().unwrap();
        let raw: BTreeMap<String, String> = serde_json::from_str(&blob).unwrap();
        assert_eq!(raw.get("backPlane").map(String::as_str), Some("wall3"));
        assert_eq!(raw.get("leftPlane").map(String::as_str), Some("wall1"));
        assert_eq!(raw.len(), 2);
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let mut store = MappingStore::new(MemoryStore::new());
        store.set_and_persist(PlaneId::Back, "wall3").unwrap();
        store.set_and_persist(PlaneId::Left, "wall1").unwrap();

        let mut only_bottom = PlaneMapping::new();
        only_bottom.insert(PlaneId::Bottom, "floor2".to_string());
        store.save(&only_bottom).unwrap();

        let mut fresh = MappingStore::new(store.into_store());
        assert_eq!(fresh.load(), only_bottom);
    }

    #[test]
    fn test_reassign_replaces_texture() {
        let mut store = MappingStore::new(MemoryStore::new());
        store.set_and_persist(PlaneId::Back, "wall3").unwrap();
        store.set_and_persist(PlaneId::Back, "wall5").unwrap();

        let mut fresh = MappingStore::new(store.into_store());
        fresh.load();
        assert_eq!(fresh.texture_for(PlaneId::Back), Some("wall5"));
        assert_eq!(fresh.mapping().len(), 1);
    }

    #[test]
    fn test_malformed_blob_is_empty() {
        let mut backend = MemoryStore::new();
        backend.set(MAPPING_KEY, "not json at all").unwrap();
        let mut store = MappingStore::new(backend);
        assert!(store.load().is_empty());

        let mut backend = MemoryStore::new();
        backend.set(MAPPING_KEY, "[1, 2, 3]").unwrap();
        let mut store = MappingStore::new(backend);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_unknown_planes_are_dropped() {
        let mut backend = MemoryStore::new();
        backend
            .set(MAPPING_KEY, r#"{"backPlane": "wall2", "ceilingPlane": "sky"}"#)
            .unwrap();
        let mut store = MappingStore::new(backend);

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get(&PlaneId::Back).map(String::as_str), Some("wall2"));
    }
}
