//! Wall coordinate mapping
//!
//! Icons are positioned in normalized wall space: x and y are fractions of
//! the wall's width and height, with (0, 0) at the top-left corner. The
//! renderer works in world space, centered on the wall with +Y up.

use serde::{Deserialize, Serialize};

/// Position on a wall as fractions of its width/height (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedPos {
    pub x: f32,
    pub y: f32,
}

impl NormalizedPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in normalized units
    pub fn distance(&self, other: NormalizedPos) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Clamp both axes independently into [min, max]
    pub fn clamped(&self, min: f32, max: f32) -> Self {
        Self {
            x: self.x.clamp(min, max),
            y: self.y.clamp(min, max),
        }
    }
}

/// Position in the renderer's world space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPos {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Dimensions of the wall icons are anchored to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallGeometry {
    /// Wall width in world units
    pub width: f32,
    /// Wall height in world units
    pub height: f32,
    /// Distance in front of the wall surface for icon nodes (avoids z-fighting)
    pub depth_offset: f32,
}

impl Default for WallGeometry {
    fn default() -> Self {
        Self {
            width: 4.0,
            height: 3.0,
            depth_offset: 0.01,
        }
    }
}

impl WallGeometry {
    /// Map a normalized wall position to world space
    ///
    /// Inputs are not range-checked.
    pub fn to_world(&self, pos: NormalizedPos) -> WorldPos {
        WorldPos {
            x: (pos.x - 0.5) * self.width,
            // Normalized y grows downward, world +Y is up
            y: (0.5 - pos.y) * self.height,
            z: self.depth_offset,
        }
    }

    /// Map a world position on the wall back to normalized space (z is ignored)
    pub fn to_normalized(&self, pos: WorldPos) -> NormalizedPos {
        NormalizedPos {
            x: pos.x / self.width + 0.5,
            y: 0.5 - pos.y / self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_center_maps_to_origin() {
        let geo = WallGeometry::default();
        let world = geo.to_world(NormalizedPos::new(0.5, 0.5));
        assert!(world.x.abs() < EPS);
        assert!(world.y.abs() < EPS);
        assert_eq!(world.z, geo.depth_offset);
    }

    #[test]
    fn test_y_axis_is_inverted() {
        let geo = WallGeometry { width: 2.0, height: 2.0, depth_offset: 0.0 };
        // Top-left of the wall is up and to the left in world space
        let top_left = geo.to_world(NormalizedPos::new(0.0, 0.0));
        assert_eq!((top_left.x, top_left.y), (-1.0, 1.0));

        let bottom_right = geo.to_world(NormalizedPos::new(1.0, 1.0));
        assert_eq!((bottom_right.x, bottom_right.y), (1.0, -1.0));
    }

    #[test]
    fn test_round_trip() {
        let geo = WallGeometry::default();
        for i in 0..=10 {
            for j in 0..=10 {
                let pos = NormalizedPos::new(i as f32 / 10.0, j as f32 / 10.0);
                let back = geo.to_normalized(geo.to_world(pos));
                assert!((back.x - pos.x).abs() < EPS, "x mismatch for {:?}", pos);
                assert!((back.y - pos.y).abs() < EPS, "y mismatch for {:?}", pos);
            }
        }
    }

    #[test]
    fn test_clamped() {
        let pos = NormalizedPos::new(-0.3, 1.4).clamped(0.1, 0.9);
        assert_eq!(pos, NormalizedPos::new(0.1, 0.9));
    }
}
