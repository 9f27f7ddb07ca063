//! Icon placement
//!
//! New icons are dropped at a random spot on the wall that keeps a minimum
//! distance from every icon already there. The search is bounded: when the
//! wall is too crowded it gives up and reports that no spot was found.

mod search;
mod spacing;

pub use search::{find_valid_position, PlacementBounds};
pub use spacing::is_occupied;

use serde::{Deserialize, Serialize};

/// Tunables for placing new icons
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Minimum distance between icon centers (normalized units)
    pub min_spacing: f32,
    /// Sub-region of the wall new icons are drawn from
    pub bounds: PlacementBounds,
    /// Random draws before giving up
    pub max_attempts: u32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            min_spacing: 0.15,
            bounds: PlacementBounds::default(),
            max_attempts: 10,
        }
    }
}
