//! Room controller
//!
//! Ties the walls, the icon registry and persistence together and exposes
//! them as event handlers. The rendering layer reports what the user did
//! (a hit target, a direction, a picker choice) and the room calls back into
//! the renderer through [`RoomRenderer`] to show the result.
//!
//! Every handler runs to completion before returning and no handler ever
//! fails: a request that can't be honored (nothing focused, unknown id,
//! crowded wall) is a logged no-op. Not `Sync`: callers needing several
//! writers must put the room behind a lock.

mod picker;

pub use picker::{PickerChoice, PickerCollection};

use rand::RngCore;

use crate::catalog::{AssetCatalog, AssetKind};
use crate::config::RoomConfig;
use crate::icons::{Direction, IconId, IconRegistry};
use crate::placement::find_valid_position;
use crate::storage::{load_layout, save_layout, KeyValueStore, MappingStore, PlaneMapping};
use crate::wall::{NormalizedPos, PlaneId, Walls, WorldPos};

/// Callbacks into the rendering/presentation layer
pub trait RoomRenderer {
    /// Create or update the visual node for an icon
    fn render_icon(&mut self, id: IconId, asset: &str, position: WorldPos);

    /// Remove the visual node for an icon
    fn remove_rendered_icon(&mut self, id: IconId);

    /// Update a plane's material
    fn apply_texture(&mut self, plane: PlaneId, texture: &str);

    /// Show or hide the directional/delete controls
    fn set_movement_controls_visible(&mut self, visible: bool);

    /// Show a picker sheet
    fn present_picker(&mut self, _picker: &PickerCollection) {}

    /// Hide the picker sheet
    fn dismiss_picker(&mut self) {}
}

/// What a hit test at a screen point struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Wall(PlaneId),
    Icon(IconId),
}

/// A user action reported by the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum RoomEvent {
    Hit(HitTarget),
    WallTapped(PlaneId),
    IconTapped(IconId),
    DirectionPressed(Direction),
    DeletePressed,
    TextureChosen { plane: PlaneId, texture: String },
    IconAssetChosen(String),
    OpenIconPicker,
    PickerItemChosen(usize),
    ClosePicker,
}

/// The room: walls, icons, persisted textures and the renderer they drive
pub struct Room<R: RoomRenderer, S: KeyValueStore = Box<dyn KeyValueStore>> {
    config: RoomConfig,
    catalog: AssetCatalog,
    walls: Walls,
    icons: IconRegistry,
    textures: MappingStore<S>,
    /// Open picker, if any
    picker: Option<PickerCollection>,
    renderer: R,
    rng: Box<dyn RngCore>,
}

impl<R: RoomRenderer, S: KeyValueStore> Room<R, S> {
    /// Build the room, restore persisted state and push it to the renderer
    pub fn new(config: RoomConfig, store: S, renderer: R, rng: Box<dyn RngCore>) -> Self {
        let catalog = AssetCatalog::with_builtin(&config.wall_textures, &config.icon_assets);
        let walls = Walls::new(&config.planes);

        let mut room = Self {
            config,
            catalog,
            walls,
            icons: IconRegistry::new(),
            textures: MappingStore::new(store),
            picker: None,
            renderer,
            rng,
        };

        room.restore_textures();
        if room.config.persist_icon_layout {
            room.restore_layout();
        }
        room.renderer.set_movement_controls_visible(room.icons.controls_visible());

        tracing::info!(
            "room ready: {} planes, {} icons, {} wall textures, {} icon assets",
            room.walls.len(),
            room.icons.len(),
            room.catalog.names(AssetKind::Wall).len(),
            room.catalog.names(AssetKind::Icon).len()
        );
        room
    }

    /// Saved textures win over configured defaults
    fn restore_textures(&mut self) {
        let saved = self.textures.load();
        let ids: Vec<PlaneId> = self.walls.ids().collect();

        for plane in ids {
            let texture = saved
                .get(&plane)
                .or_else(|| self.config.default_textures.get(&plane))
                .cloned();
            if let Some(texture) = texture {
                self.walls.assign(plane, texture.as_str());
                self.renderer.apply_texture(plane, &texture);
            }
        }
    }

    fn restore_layout(&mut self) {
        let saved = load_layout(self.textures.store());
        for icon in saved {
            let position = icon.position();
            let id = self.icons.restore(icon.asset, position, &self.config.movement);
            self.render(id);
        }
        tracing::debug!("restored {} icons", self.icons.len());
    }

    fn persist_layout(&mut self) {
        if !self.config.persist_icon_layout {
            return;
        }
        if let Err(e) = save_layout(self.textures.store_mut(), &self.icons) {
            tracing::error!("failed to save icon layout: {}", e);
        }
    }

    /// Push an icon's current state to the renderer
    fn render(&mut self, id: IconId) {
        if let Some(icon) = self.icons.get(id) {
            let world = self.config.wall.to_world(icon.position);
            self.renderer.render_icon(id, &icon.asset, world);
        }
    }

    fn sync_controls(&mut self) {
        self.renderer.set_movement_controls_visible(self.icons.controls_visible());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Event handlers
    // ─────────────────────────────────────────────────────────────────────────

    /// Dispatch a user action
    pub fn handle(&mut self, event: RoomEvent) {
        tracing::trace!("event: {:?}", event);
        match event {
            RoomEvent::Hit(target) => self.on_hit(target),
            RoomEvent::WallTapped(plane) => self.on_wall_tapped(plane),
            RoomEvent::IconTapped(id) => self.on_icon_tapped(id),
            RoomEvent::DirectionPressed(direction) => {
                self.on_direction_pressed(direction);
            }
            RoomEvent::DeletePressed => {
                self.on_delete_pressed();
            }
            RoomEvent::TextureChosen { plane, texture } => {
                self.on_texture_chosen(plane, &texture);
            }
            RoomEvent::IconAssetChosen(asset) => {
                self.on_icon_asset_chosen(&asset);
            }
            RoomEvent::OpenIconPicker => self.open_icon_picker(),
            RoomEvent::PickerItemChosen(index) => {
                self.on_picker_item_chosen(index);
            }
            RoomEvent::ClosePicker => self.close_picker(),
        }
    }

    /// Something was struck by a tap
    pub fn on_hit(&mut self, target: HitTarget) {
        match target {
            HitTarget::Wall(plane) => self.on_wall_tapped(plane),
            HitTarget::Icon(id) => self.on_icon_tapped(id),
        }
    }

    /// Open the texture picker for a plane
    pub fn on_wall_tapped(&mut self, plane: PlaneId) {
        if !self.walls.contains(plane) {
            tracing::debug!("tap on {} ignored: not part of this room", plane);
            return;
        }
        let textures = self.catalog.names(AssetKind::Wall).to_vec();
        self.open_picker(PickerCollection::Wall { plane, textures });
    }

    /// Open the icon picker
    pub fn open_icon_picker(&mut self) {
        let assets = self.catalog.names(AssetKind::Icon).to_vec();
        self.open_picker(PickerCollection::Icon { assets });
    }

    fn open_picker(&mut self, picker: PickerCollection) {
        self.renderer.present_picker(&picker);
        self.picker = Some(picker);
    }

    /// Close the picker without choosing anything
    pub fn close_picker(&mut self) {
        if self.picker.take().is_some() {
            self.renderer.dismiss_picker();
        }
    }

    /// An item of the open picker was chosen
    ///
    /// Returns false (and leaves the picker open) if no picker is open or
    /// the index is out of range.
    pub fn on_picker_item_chosen(&mut self, index: usize) -> bool {
        let choice = match self.picker.as_ref().and_then(|p| p.choose(index)) {
            Some(choice) => choice,
            None => {
                tracing::debug!("picker item {} ignored", index);
                return false;
            }
        };

        self.close_picker();
        match choice {
            PickerChoice::Texture { plane, texture } => self.on_texture_chosen(plane, &texture),
            PickerChoice::IconAsset(asset) => self.on_icon_asset_chosen(&asset).is_some(),
        }
    }

    /// Toggle focus on a tapped icon
    pub fn on_icon_tapped(&mut self, id: IconId) {
        if !self.icons.contains(id) {
            tracing::debug!("tap on unknown {} ignored", id);
            return;
        }
        let visible = self.icons.toggle_focus_visibility(id);
        self.renderer.set_movement_controls_visible(visible);
    }

    /// Move the focused icon one step
    ///
    /// Returns the new normalized position, or `None` when nothing is focused.
    pub fn on_direction_pressed(&mut self, direction: Direction) -> Option<NormalizedPos> {
        let pos = self.icons.move_focused(direction, &self.config.movement)?;
        if let Some(id) = self.icons.focus_state().focused() {
            self.render(id);
        }
        self.persist_layout();
        Some(pos)
    }

    /// Move the focused icon by a direction name ("up", "down", ...)
    ///
    /// Unrecognized names do nothing.
    pub fn on_direction_input(&mut self, name: &str) -> Option<NormalizedPos> {
        match Direction::parse(name) {
            Some(direction) => self.on_direction_pressed(direction),
            None => {
                tracing::debug!("unrecognized direction {:?} ignored", name);
                None
            }
        }
    }

    /// Delete the focused icon
    ///
    /// Returns false if nothing was focused.
    pub fn on_delete_pressed(&mut self) -> bool {
        let Some(icon) = self.icons.take_focused() else {
            return false;
        };
        self.renderer.remove_rendered_icon(icon.id());
        self.sync_controls();
        self.persist_layout();
        tracing::debug!("deleted {} ({})", icon.id(), icon.asset);
        true
    }

    /// Retexture a plane and persist the choice
    ///
    /// Returns false if the room has no such plane. A failed write is logged;
    /// the new texture stays applied for this session.
    pub fn on_texture_chosen(&mut self, plane: PlaneId, texture: &str) -> bool {
        if !self.walls.assign(plane, texture) {
            tracing::debug!("texture for {} ignored: not part of this room", plane);
            return false;
        }
        self.renderer.apply_texture(plane, texture);
        if let Err(e) = self.textures.set_and_persist(plane, texture) {
            tracing::error!("failed to save texture for {}: {}", plane, e);
        }
        true
    }

    /// Drop a new icon at a free spot on the wall
    ///
    /// Returns `None` (and creates nothing) if no free spot was found.
    pub fn on_icon_asset_chosen(&mut self, asset: &str) -> Option<IconId> {
        let placement = self.config.placement;
        let existing = self.icons.positions();
        let Some(position) = find_valid_position(
            &existing,
            placement.min_spacing,
            placement.bounds,
            placement.max_attempts,
            &mut *self.rng,
        ) else {
            tracing::warn!(
                "no free spot for {:?} after {} attempts ({} icons on the wall)",
                asset,
                placement.max_attempts,
                existing.len()
            );
            return None;
        };

        let id = self.icons.add(asset, position);
        self.render(id);
        self.sync_controls();
        self.persist_layout();
        tracing::debug!("placed {} ({}) at ({:.2}, {:.2})", id, asset, position.x, position.y);
        Some(id)
    }

    /// Remove every icon from the scene (the room itself stays)
    pub fn teardown(&mut self) {
        let ids: Vec<IconId> = self.icons.iter().map(|icon| icon.id()).collect();
        for id in ids {
            self.renderer.remove_rendered_icon(id);
        }
        self.icons.clear();
        self.sync_controls();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    pub fn walls(&self) -> &Walls {
        &self.walls
    }

    pub fn icons(&self) -> &IconRegistry {
        &self.icons
    }

    /// Persisted texture mapping as of the last load/save
    pub fn mapping(&self) -> &PlaneMapping {
        self.textures.mapping()
    }

    pub fn picker(&self) -> Option<&PickerCollection> {
        self.picker.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Tear the room apart, keeping the backend (e.g. to reopen it)
    pub fn into_store(self) -> S {
        self.textures.into_store()
    }
}
