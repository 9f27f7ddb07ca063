//! Drawing
//!
//! Walls are thin cubes so every face catches the texture; icons are small
//! tiles floating just in front of the back wall. The overlay is plain
//! macroquad text and rectangles.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use macroquad::prelude::*;

use focusmap::catalog::{AssetCatalog, AssetKind};
use focusmap::{IconId, PlaneId};

use super::hit::{RoomShape, ICON_HALF_SIZE};
use super::scene::SceneRenderer;

/// Thickness of wall slabs
const WALL_THICKNESS: f32 = 0.1;

/// Picker sheet row height in pixels
pub const PICKER_ROW_HEIGHT: f32 = 28.0;

/// Picker sheet width in pixels
const PICKER_WIDTH: f32 = 260.0;

/// Loaded images by asset name
#[derive(Default)]
pub struct TextureCache {
    textures: HashMap<String, Texture2D>,
}

impl TextureCache {
    /// Load every catalog asset that has a PNG on disk
    ///
    /// Missing files are fine: those assets are drawn as flat colors.
    pub async fn load(catalog: &AssetCatalog) -> Self {
        let mut textures = HashMap::new();

        for kind in [AssetKind::Wall, AssetKind::Icon] {
            for name in catalog.names(kind) {
                let path = format!("{}/{}.png", kind.directory(), name);
                match load_texture(&path).await {
                    Ok(tex) => {
                        tex.set_filter(FilterMode::Nearest);
                        textures.insert(name.clone(), tex);
                    }
                    Err(e) => {
                        tracing::debug!("no image for {}: {}", name, e);
                    }
                }
            }
        }

        tracing::info!("loaded {} asset images", textures.len());
        Self { textures }
    }

    pub fn get(&self, name: &str) -> Option<&Texture2D> {
        self.textures.get(name)
    }
}

/// Stable fallback color for an asset without an image
fn name_color(name: &str) -> Color {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    let h = hasher.finish();
    let channel = |shift: u32| 0.35 + ((h >> shift) & 0xff) as f32 / 255.0 * 0.55;
    Color::new(channel(0), channel(8), channel(16), 1.0)
}

/// Center and size of a plane's slab
fn plane_box(shape: &RoomShape, plane: PlaneId) -> (Vec3, Vec3) {
    let (hw, hh, d) = (shape.width / 2.0, shape.height / 2.0, shape.depth);
    let t = WALL_THICKNESS;
    match plane {
        PlaneId::Back => (vec3(0.0, 0.0, -t / 2.0), vec3(shape.width, shape.height, t)),
        PlaneId::Left => (vec3(-hw - t / 2.0, 0.0, d / 2.0), vec3(t, shape.height, d)),
        PlaneId::Right => (vec3(hw + t / 2.0, 0.0, d / 2.0), vec3(t, shape.height, d)),
        PlaneId::Bottom => (vec3(0.0, -hh - t / 2.0, d / 2.0), vec3(shape.width, t, d)),
    }
}

/// Draw the 3D scene (camera must already be set)
pub fn draw_room(scene: &SceneRenderer, shape: &RoomShape, textures: &TextureCache, focused: Option<IconId>) {
    for (&plane, material) in &scene.materials {
        let (center, size) = plane_box(shape, plane);
        match textures.get(material) {
            Some(tex) => draw_cube(center, size, Some(tex), WHITE),
            None => draw_cube(center, size, None, name_color(material)),
        }
    }

    let tile = vec3(ICON_HALF_SIZE * 2.0, ICON_HALF_SIZE * 2.0, 0.02);
    for (&id, node) in &scene.icons {
        let center = vec3(node.position.x, node.position.y, node.position.z + tile.z / 2.0);
        match textures.get(&node.asset) {
            Some(tex) => draw_cube(center, tile, Some(tex), WHITE),
            None => draw_cube(center, tile, None, name_color(&node.asset)),
        }
        if focused == Some(id) {
            draw_cube_wires(center, tile * 1.15, YELLOW);
        }
    }
}

/// Screen rectangles of the picker rows, top to bottom
pub fn picker_rows(count: usize) -> Vec<Rect> {
    let x = screen_width() - PICKER_WIDTH - 16.0;
    let top = 56.0;
    (0..count)
        .map(|i| Rect::new(x, top + i as f32 * PICKER_ROW_HEIGHT, PICKER_WIDTH, PICKER_ROW_HEIGHT - 2.0))
        .collect()
}

/// Draw the 2D overlay (default camera must be set)
pub fn draw_overlay(scene: &SceneRenderer, icon_count: usize) {
    draw_text(
        &format!("FocusMap v{}  ·  click a wall to retexture  ·  I: add icon", focusmap::VERSION),
        16.0,
        28.0,
        22.0,
        LIGHTGRAY,
    );
    draw_text(&format!("{} icons", icon_count), 16.0, 52.0, 20.0, GRAY);

    if scene.controls_visible {
        draw_text(
            "arrows: move  ·  Del: delete  ·  click icon again: done",
            16.0,
            screen_height() - 20.0,
            22.0,
            YELLOW,
        );
    }

    if let Some(picker) = &scene.picker {
        let rows = picker_rows(picker.len());
        if let Some(first) = rows.first() {
            draw_text(&picker.title(), first.x, first.y - 10.0, 22.0, WHITE);
        }
        let mouse = Vec2::from(mouse_position());
        for (i, (rect, name)) in rows.iter().zip(picker.items()).enumerate() {
            let bg = if rect.contains(mouse) {
                Color::new(0.3, 0.3, 0.4, 0.9)
            } else {
                Color::new(0.1, 0.1, 0.12, 0.85)
            };
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);
            let label = if i < 9 {
                format!("{}. {}", i + 1, name)
            } else {
                name.clone()
            };
            draw_text(&label, rect.x + 8.0, rect.y + rect.h - 8.0, 20.0, WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_color_is_stable() {
        assert_eq!(name_color("wall1"), name_color("wall1"));
        let c = name_color("star");
        assert!(c.r >= 0.35 && c.r <= 0.9);
    }

    #[test]
    fn test_back_wall_box_sits_behind_origin() {
        let shape = RoomShape { width: 4.0, height: 3.0, depth: 4.0 };
        let (center, size) = plane_box(&shape, PlaneId::Back);
        assert!(center.z < 0.0);
        assert_eq!((size.x, size.y), (4.0, 3.0));
    }
}
