//! Discrete icon movement
//!
//! Directional controls nudge the focused icon by a fixed step. The result
//! is clamped to the movable area on each axis; moving into the boundary
//! stops there rather than bouncing or being rejected. Spacing against other
//! icons is not re-checked, so icons can be pushed on top of each other.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::wall::NormalizedPos;

/// Direction pressed on the movement controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: &'static [Direction] = &[Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Parse a control name ("up", "down", "left", "right", case-insensitive)
    ///
    /// Anything else is not a direction and yields `None`.
    pub fn parse(s: &str) -> Option<Direction> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Unit delta in normalized space (y grows downward)
    fn delta(&self) -> (f32, f32) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Step size and movable area for directional controls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Distance moved per press (normalized units)
    pub step: f32,
    /// Lowest allowed coordinate on either axis
    pub min: f32,
    /// Highest allowed coordinate on either axis
    pub max: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            step: 0.05,
            min: 0.1,
            max: 0.9,
        }
    }
}

/// Compute where an icon at `pos` ends up after one press of `direction`
pub fn step_position(pos: NormalizedPos, direction: Direction, config: &MovementConfig) -> NormalizedPos {
    let (dx, dy) = direction.delta();
    NormalizedPos::new(pos.x + dx * config.step, pos.y + dy * config.step).clamped(config.min, config.max)
}
