//! Icon Registry
//!
//! Authoritative collection of placed icons plus the focus pointer.
//!
//! Invariant: when the focus names an icon, that icon is alive in the
//! registry. Every removal path goes through `take()`, which clears the focus
//! in the same step.

use super::icon::{Icon, IconId};
use super::movement::{step_position, Direction, MovementConfig};
use crate::wall::NormalizedPos;

/// Which icon, if any, is eligible for movement and deletion
///
/// At most one icon is focused. Focusing another replaces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusState {
    focused: Option<IconId>,
}

impl FocusState {
    pub fn focused(&self) -> Option<IconId> {
        self.focused
    }

    pub fn is_focused(&self, id: IconId) -> bool {
        self.focused == Some(id)
    }

    /// Movement controls are shown exactly when something is focused
    pub fn controls_visible(&self) -> bool {
        self.focused.is_some()
    }

    fn set(&mut self, id: IconId) {
        self.focused = Some(id);
    }

    fn clear(&mut self) {
        self.focused = None;
    }
}

/// Owns every icon placed on the wall
#[derive(Debug, Default)]
pub struct IconRegistry {
    /// Live icons in creation order
    icons: Vec<Icon>,
    focus: FocusState,
    /// Next id to hand out (never reused)
    next_id: u64,
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> IconId {
        let id = IconId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Store a new icon and focus it
    ///
    /// The position is trusted: callers run placement search first.
    pub fn add(&mut self, asset: impl Into<String>, position: NormalizedPos) -> IconId {
        let id = self.allocate_id();
        self.icons.push(Icon::new(id, asset, position));
        self.focus.set(id);
        id
    }

    /// Store a previously persisted icon without touching focus
    pub fn restore(&mut self, asset: impl Into<String>, position: NormalizedPos, limits: &MovementConfig) -> IconId {
        let id = self.allocate_id();
        self.icons.push(Icon::new(id, asset, position.clamped(limits.min, limits.max)));
        id
    }

    /// Focus a live icon
    ///
    /// Unknown ids are ignored and leave the current focus alone.
    pub fn focus(&mut self, id: IconId) -> bool {
        if self.contains(id) {
            self.focus.set(id);
            true
        } else {
            false
        }
    }

    /// Drop the focus without removing anything
    pub fn clear_focus(&mut self) {
        self.focus.clear();
    }

    /// Handle a tap on an icon
    ///
    /// Tapping the focused icon toggles the focus (and with it the movement
    /// controls) off; tapping any other live icon moves the focus there.
    /// Returns whether the controls should now be visible.
    pub fn toggle_focus_visibility(&mut self, id: IconId) -> bool {
        if self.focus.is_focused(id) {
            self.focus.clear();
        } else {
            self.focus(id);
        }
        self.focus.controls_visible()
    }

    /// Remove and return the focused icon, clearing focus
    pub fn take_focused(&mut self) -> Option<Icon> {
        let id = self.focus.focused()?;
        self.take(id)
    }

    /// Remove the focused icon
    ///
    /// Returns false if nothing was focused.
    pub fn remove_focused(&mut self) -> bool {
        self.take_focused().is_some()
    }

    fn take(&mut self, id: IconId) -> Option<Icon> {
        let index = self.icons.iter().position(|icon| icon.id() == id)?;
        if self.focus.is_focused(id) {
            self.focus.clear();
        }
        Some(self.icons.remove(index))
    }

    /// Nudge the focused icon one step, returning its new position
    ///
    /// `None` when nothing is focused.
    pub fn move_focused(&mut self, direction: Direction, config: &MovementConfig) -> Option<NormalizedPos> {
        let id = self.focus.focused()?;
        let icon = self.icons.iter_mut().find(|icon| icon.id() == id)?;
        icon.position = step_position(icon.position, direction, config);
        Some(icon.position)
    }

    /// Remove every icon (scene teardown)
    pub fn clear(&mut self) {
        self.icons.clear();
        self.focus.clear();
    }

    pub fn get(&self, id: IconId) -> Option<&Icon> {
        self.icons.iter().find(|icon| icon.id() == id)
    }

    pub fn contains(&self, id: IconId) -> bool {
        self.get(id).is_some()
    }

    pub fn focus_state(&self) -> FocusState {
        self.focus
    }

    pub fn focused(&self) -> Option<&Icon> {
        self.focus.focused().and_then(|id| self.get(id))
    }

    pub fn is_focused(&self, id: IconId) -> bool {
        self.focus.is_focused(id)
    }

    pub fn controls_visible(&self) -> bool {
        self.focus.controls_visible()
    }

    /// Positions of every icon, for spacing checks
    pub fn positions(&self) -> Vec<NormalizedPos> {
        self.icons.iter().map(|icon| icon.position).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Icon> {
        self.icons.iter()
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}
