//! Retained scene state
//!
//! The room tells the renderer what changed; this keeps the result around
//! so the frame loop can draw it.

use std::collections::{BTreeMap, HashMap};

use focusmap::room::{PickerCollection, RoomRenderer};
use focusmap::{IconId, PlaneId, WorldPos};

/// Visual node for one icon
#[derive(Debug, Clone, PartialEq)]
pub struct IconNode {
    pub asset: String,
    pub position: WorldPos,
}

#[derive(Debug, Default)]
pub struct SceneRenderer {
    /// Icon nodes keyed by id (draw order = creation order)
    pub icons: BTreeMap<IconId, IconNode>,
    /// Material currently applied to each plane
    pub materials: HashMap<PlaneId, String>,
    /// Whether the move/delete controls are shown
    pub controls_visible: bool,
    /// Picker sheet being shown
    pub picker: Option<PickerCollection>,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoomRenderer for SceneRenderer {
    fn render_icon(&mut self, id: IconId, asset: &str, position: WorldPos) {
        self.icons.insert(
            id,
            IconNode {
                asset: asset.to_string(),
                position,
            },
        );
    }

    fn remove_rendered_icon(&mut self, id: IconId) {
        self.icons.remove(&id);
    }

    fn apply_texture(&mut self, plane: PlaneId, texture: &str) {
        self.materials.insert(plane, texture.to_string());
    }

    fn set_movement_controls_visible(&mut self, visible: bool) {
        self.controls_visible = visible;
    }

    fn present_picker(&mut self, picker: &PickerCollection) {
        self.picker = Some(picker.clone());
    }

    fn dismiss_picker(&mut self) {
        self.picker = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use focusmap::storage::MemoryStore;
    use focusmap::{Room, RoomConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scene_tracks_room() {
        let mut room: Room<SceneRenderer, MemoryStore> = Room::new(
            RoomConfig::default(),
            MemoryStore::new(),
            SceneRenderer::new(),
            Box::new(StdRng::seed_from_u64(9)),
        );
        assert_eq!(room.renderer().materials.get(&PlaneId::Back).map(String::as_str), Some("wall1"));

        let id = room.on_icon_asset_chosen("star").unwrap();
        assert!(room.renderer().icons.contains_key(&id));
        assert!(room.renderer().controls_visible);

        room.on_delete_pressed();
        assert!(room.renderer().icons.is_empty());
        assert!(!room.renderer().controls_visible);
    }
}
