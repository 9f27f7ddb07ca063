//! Wall icons
//!
//! Icons are small decorative markers anchored to a wall at a normalized
//! position. The registry owns every icon and tracks which one (if any) is
//! focused, meaning eligible for movement and deletion.

mod icon;
mod movement;
mod registry;

pub use icon::{Icon, IconId};
pub use movement::{step_position, Direction, MovementConfig};
pub use registry::{FocusState, IconRegistry};
