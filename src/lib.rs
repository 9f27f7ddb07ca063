//! FocusMap: decorate the walls of a 3D room
//!
//! A room is three or four textured planes. The user drops decorative icons
//! on the back wall, nudges them around with directional controls, deletes
//! them, and retextures any plane from a picker. Wall textures survive
//! restarts; icon layout optionally does too.
//!
//! The crate is the room's logic only. Drawing, hit-testing and picker
//! presentation live behind [`room::RoomRenderer`].

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod catalog;
pub mod config;
pub mod icons;
pub mod placement;
pub mod room;
pub mod storage;
pub mod wall;

pub use config::RoomConfig;
pub use icons::{Direction, Icon, IconId, IconRegistry};
pub use room::{HitTarget, Room, RoomEvent, RoomRenderer};
pub use wall::{NormalizedPos, PlaneId, WallGeometry, WorldPos};
