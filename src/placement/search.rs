use rand::Rng;
use serde::{Deserialize, Serialize};

use super::spacing::is_occupied;
use crate::wall::NormalizedPos;

/// Square sub-region `[low, high)` of the wall used for new icons
///
/// Padded in from the edges so freshly placed icons never hug the border.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementBounds {
    pub low: f32,
    pub high: f32,
}

impl Default for PlacementBounds {
    fn default() -> Self {
        Self { low: 0.15, high: 0.85 }
    }
}

impl PlacementBounds {
    pub const fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    /// True if the range is finite and non-empty
    pub fn is_valid(&self) -> bool {
        self.low.is_finite() && self.high.is_finite() && self.low < self.high
    }
}

/// Find a random spot that keeps `min_spacing` from every existing icon
///
/// Each attempt draws x and y independently and uniformly from the bounds.
/// Returns `None` after `max_attempts` rejected draws; a crowded wall is an
/// expected outcome, not an error.
pub fn find_valid_position<R: Rng + ?Sized>(
    existing: &[NormalizedPos],
    min_spacing: f32,
    bounds: PlacementBounds,
    max_attempts: u32,
    rng: &mut R,
) -> Option<NormalizedPos> {
    if !bounds.is_valid() {
        return None;
    }

    for _ in 0..max_attempts {
        let candidate = NormalizedPos::new(
            rng.gen_range(bounds.low..bounds.high),
            rng.gen_range(bounds.low..bounds.high),
        );
        if !is_occupied(candidate, existing, min_spacing) {
            return Some(candidate);
        }
    }

    None
}
