//! Picker collections
//!
//! The bottom-sheet picker shows either wall textures (for one plane) or
//! icon assets. What happens when an item is chosen depends only on which
//! collection is open.

use crate::wall::PlaneId;

/// What the picker is currently offering
#[derive(Debug, Clone, PartialEq)]
pub enum PickerCollection {
    /// Textures for the given plane
    Wall { plane: PlaneId, textures: Vec<String> },
    /// Icons to drop on the wall
    Icon { assets: Vec<String> },
}

/// What choosing a picker item asks the room to do
#[derive(Debug, Clone, PartialEq)]
pub enum PickerChoice {
    Texture { plane: PlaneId, texture: String },
    IconAsset(String),
}

impl PickerCollection {
    /// Item names in display order
    pub fn items(&self) -> &[String] {
        match self {
            PickerCollection::Wall { textures, .. } => textures,
            PickerCollection::Icon { assets } => assets,
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Title for the picker sheet
    pub fn title(&self) -> String {
        match self {
            PickerCollection::Wall { plane, .. } => format!("{} texture", plane.label()),
            PickerCollection::Icon { .. } => "Add icon".to_string(),
        }
    }

    /// Resolve the item at `index`, or `None` when out of range
    pub fn choose(&self, index: usize) -> Option<PickerChoice> {
        let name = self.items().get(index)?.clone();
        Some(match self {
            PickerCollection::Wall { plane, .. } => PickerChoice::Texture {
                plane: *plane,
                texture: name,
            },
            PickerCollection::Icon { .. } => PickerChoice::IconAsset(name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_choose_wall() {
        let picker = PickerCollection::Wall {
            plane: PlaneId::Left,
            textures: names(&["wall1", "wall2"]),
        };
        assert_eq!(
            picker.choose(1),
            Some(PickerChoice::Texture {
                plane: PlaneId::Left,
                texture: "wall2".to_string()
            })
        );
        assert_eq!(picker.choose(2), None);
        assert_eq!(picker.title(), "Left wall texture");
    }

    #[test]
    fn test_choose_icon() {
        let picker = PickerCollection::Icon { assets: names(&["star"]) };
        assert_eq!(picker.choose(0), Some(PickerChoice::IconAsset("star".to_string())));
        assert_eq!(picker.len(), 1);
    }
}
