//! Icon layout persistence
//!
//! Optional: icon positions are only saved when the room is configured with
//! `persist_icon_layout`. Stored as a JSON array under [`LAYOUT_KEY`], next to
//! the plane mapping in the same backend.

use serde::{Deserialize, Serialize};

use super::{KeyValueStore, StorageError};
use crate::icons::IconRegistry;
use crate::wall::NormalizedPos;

/// Well-known key for the saved icon layout
pub const LAYOUT_KEY: &str = "iconLayout";

/// One saved icon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedIcon {
    pub asset: String,
    pub x: f32,
    pub y: f32,
}

impl SavedIcon {
    pub fn position(&self) -> NormalizedPos {
        NormalizedPos::new(self.x, self.y)
    }
}

/// Snapshot every icon in the registry, in creation order
pub fn snapshot(registry: &IconRegistry) -> Vec<SavedIcon> {
    registry
        .iter()
        .map(|icon| SavedIcon {
            asset: icon.asset.clone(),
            x: icon.position.x,
            y: icon.position.y,
        })
        .collect()
}

/// Read the saved layout
///
/// Missing or malformed data yields an empty layout. Entries with
/// non-finite coordinates are skipped.
pub fn load_layout<S: KeyValueStore + ?Sized>(store: &S) -> Vec<SavedIcon> {
    let blob = match store.get(LAYOUT_KEY) {
        Ok(Some(blob)) => blob,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!("failed to read saved icon layout: {}", e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<SavedIcon>>(&blob) {
        Ok(icons) => icons
            .into_iter()
            .filter(|icon| icon.x.is_finite() && icon.y.is_finite())
            .collect(),
        Err(e) => {
            tracing::warn!("ignoring malformed icon layout: {}", e);
            Vec::new()
        }
    }
}

/// Overwrite the saved layout with the registry's current icons
///
/// An empty registry removes the key rather than storing an empty list.
pub fn save_layout<S: KeyValueStore + ?Sized>(store: &mut S, registry: &IconRegistry) -> Result<(), StorageError> {
    if registry.is_empty() {
        return store.remove(LAYOUT_KEY);
    }
    let blob = serde_json::to_string(&snapshot(registry))?;
    store.set(LAYOUT_KEY, &blob)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::MovementConfig;
    use crate::storage::MemoryStore;

    #[test]
    fn test_layout_round_trip() {
        let mut registry = IconRegistry::new();
        registry.add("star", NormalizedPos::new(0.25, 0.5));
        registry.add("moon", NormalizedPos::new(0.75, 0.5));

        let mut store = MemoryStore::new();
        save_layout(&mut store, &registry).unwrap();

        let saved = load_layout(&store);
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].asset, "star");
        assert_eq!(saved[0].position(), NormalizedPos::new(0.25, 0.5));
        assert_eq!(saved[1].asset, "moon");

        // Restoring into an empty registry reproduces the layout unfocused
        let mut restored = IconRegistry::new();
        for icon in &saved {
            restored.restore(icon.asset.clone(), icon.position(), &MovementConfig::default());
        }
        assert_eq!(restored.len(), 2);
        assert!(restored.focused().is_none());
    }

    #[test]
    fn test_empty_registry_clears_saved_layout() {
        let mut registry = IconRegistry::new();
        registry.add("star", NormalizedPos::new(0.25, 0.5));

        let mut store = MemoryStore::new();
        save_layout(&mut store, &registry).unwrap();
        assert!(store.get(LAYOUT_KEY).unwrap().is_some());

        registry.remove_focused();
        save_layout(&mut store, &registry).unwrap();
        assert_eq!(store.get(LAYOUT_KEY).unwrap(), None);
        assert!(load_layout(&store).is_empty());

        // Nothing saved yet is fine too
        save_layout(&mut MemoryStore::new(), &IconRegistry::new()).unwrap();
    }

    #[test]
    fn test_missing_and_malformed() {
        let store = MemoryStore::new();
        assert!(load_layout(&store).is_empty());

        let mut store = MemoryStore::new();
        store.set(LAYOUT_KEY, "{\"asset\": 3}").unwrap();
        assert!(load_layout(&store).is_empty());
    }
}
