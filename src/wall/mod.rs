//! Room walls
//!
//! A room is a fixed set of 3-4 textured planes, each addressed by a stable
//! identifier. Planes are created once when the room is built and are never
//! destroyed; only their texture assignment changes.

mod coords;

pub use coords::{NormalizedPos, WallGeometry, WorldPos};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier for one of the room's planes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlaneId {
    #[serde(rename = "backPlane")]
    Back,
    #[serde(rename = "leftPlane")]
    Left,
    #[serde(rename = "rightPlane")]
    Right,
    #[serde(rename = "bottomPlane")]
    Bottom,
}

impl PlaneId {
    /// All known planes
    pub const ALL: &'static [PlaneId] = &[PlaneId::Back, PlaneId::Left, PlaneId::Right, PlaneId::Bottom];

    /// Identifier used in persisted state
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaneId::Back => "backPlane",
            PlaneId::Left => "leftPlane",
            PlaneId::Right => "rightPlane",
            PlaneId::Bottom => "bottomPlane",
        }
    }

    /// Get a display label for UI
    pub fn label(&self) -> &'static str {
        match self {
            PlaneId::Back => "Back wall",
            PlaneId::Left => "Left wall",
            PlaneId::Right => "Right wall",
            PlaneId::Bottom => "Floor",
        }
    }
}

impl fmt::Display for PlaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known plane identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plane identifier: {0}")]
pub struct UnknownPlane(pub String);

impl FromStr for PlaneId {
    type Err = UnknownPlane;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlaneId::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPlane(s.to_string()))
    }
}

/// One plane of the room and its current material
#[derive(Debug, Clone, PartialEq)]
pub struct WallPlane {
    id: PlaneId,
    texture: Option<String>,
}

impl WallPlane {
    pub fn new(id: PlaneId) -> Self {
        Self { id, texture: None }
    }

    pub fn id(&self) -> PlaneId {
        self.id
    }

    /// Currently assigned texture asset name
    pub fn texture(&self) -> Option<&str> {
        self.texture.as_deref()
    }
}

/// The fixed set of planes making up a room
///
/// Plane order follows construction order and never changes. Duplicate ids
/// passed at construction are collapsed to the first occurrence.
#[derive(Debug, Clone, Default)]
pub struct Walls {
    planes: Vec<WallPlane>,
}

impl Walls {
    /// Build the room's planes
    pub fn new(ids: &[PlaneId]) -> Self {
        let mut planes: Vec<WallPlane> = Vec::with_capacity(ids.len());
        for &id in ids {
            if !planes.iter().any(|p| p.id == id) {
                planes.push(WallPlane::new(id));
            }
        }
        Self { planes }
    }

    /// Check if the room has a plane with this id
    pub fn contains(&self, id: PlaneId) -> bool {
        self.planes.iter().any(|p| p.id == id)
    }

    pub fn get(&self, id: PlaneId) -> Option<&WallPlane> {
        self.planes.iter().find(|p| p.id == id)
    }

    /// Replace a plane's texture
    ///
    /// Returns false (and changes nothing) if the room has no such plane.
    pub fn assign(&mut self, id: PlaneId, texture: impl Into<String>) -> bool {
        match self.planes.iter_mut().find(|p| p.id == id) {
            Some(plane) => {
                plane.texture = Some(texture.into());
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &WallPlane> {
        self.planes.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = PlaneId> + '_ {
        self.planes.iter().map(|p| p.id)
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_id_names() {
        for &id in PlaneId::ALL {
            assert_eq!(id.as_str().parse::<PlaneId>(), Ok(id));
        }
        assert_eq!("backPlane".parse::<PlaneId>(), Ok(PlaneId::Back));
        assert!("ceilingPlane".parse::<PlaneId>().is_err());
    }

    #[test]
    fn test_plane_id_serde_uses_stable_names() {
        let json = serde_json::to_string(&PlaneId::Bottom).unwrap();
        assert_eq!(json, "\"bottomPlane\"");
    }

    #[test]
    fn test_walls_assign() {
        let mut walls = Walls::new(&[PlaneId::Back, PlaneId::Left, PlaneId::Bottom]);
        assert_eq!(walls.len(), 3);
        assert!(walls.get(PlaneId::Back).unwrap().texture().is_none());

        assert!(walls.assign(PlaneId::Back, "wall3"));
        assert_eq!(walls.get(PlaneId::Back).unwrap().texture(), Some("wall3"));

        // Reassigning replaces, never accumulates
        assert!(walls.assign(PlaneId::Back, "wall1"));
        assert_eq!(walls.get(PlaneId::Back).unwrap().texture(), Some("wall1"));

        // Plane not in this room
        assert!(!walls.assign(PlaneId::Right, "wall2"));
        assert!(!walls.contains(PlaneId::Right));
    }

    #[test]
    fn test_walls_dedupe() {
        let walls = Walls::new(&[PlaneId::Back, PlaneId::Back, PlaneId::Left]);
        assert_eq!(walls.ids().collect::<Vec<_>>(), vec![PlaneId::Back, PlaneId::Left]);
    }
}
