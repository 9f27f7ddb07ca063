//! Desktop viewer
//!
//! Implements the room's rendering collaborator with macroquad: a fixed
//! look-at camera, walls drawn as thin cubes, icons as small textured tiles.
//! - `scene`: retained state the room pushes through `RoomRenderer`
//! - `hit`: mouse ray → plane/icon hit targets
//! - `draw`: 3D scene and 2D overlay (controls hint, picker sheet)
//! - `input`: turns this frame's mouse/keyboard into room events

mod draw;
mod hit;
mod input;
mod scene;

pub use draw::{draw_overlay, draw_room, TextureCache};
pub use hit::RoomShape;
pub use input::collect_events;
pub use scene::SceneRenderer;
