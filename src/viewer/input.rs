//! Frame input → room events

use macroquad::prelude::*;

use focusmap::room::RoomEvent;
use focusmap::{Direction, Room};

use super::draw::picker_rows;
use super::hit::{pick, Ray, RoomShape};
use super::scene::SceneRenderer;

/// Number keys that choose the first nine picker rows
const DIGIT_KEYS: [KeyCode; 9] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
];

/// Arrow keys and what they mean to the movement controls
const ARROW_KEYS: [(KeyCode, Direction); 4] = [
    (KeyCode::Up, Direction::Up),
    (KeyCode::Down, Direction::Down),
    (KeyCode::Left, Direction::Left),
    (KeyCode::Right, Direction::Right),
];

/// Translate this frame's mouse and keyboard state into room events
///
/// While a picker is open it captures all input.
pub fn collect_events(room: &Room<SceneRenderer>, shape: &RoomShape, camera: &Camera3D) -> Vec<RoomEvent> {
    let mut events = Vec::new();
    let scene = room.renderer();
    let clicked = is_mouse_button_pressed(MouseButton::Left);
    let mouse = Vec2::from(mouse_position());

    if let Some(picker) = &scene.picker {
        if is_key_pressed(KeyCode::Escape) {
            events.push(RoomEvent::ClosePicker);
        }
        for (i, key) in DIGIT_KEYS.iter().enumerate().take(picker.len()) {
            if is_key_pressed(*key) {
                events.push(RoomEvent::PickerItemChosen(i));
            }
        }
        if clicked {
            match picker_rows(picker.len()).iter().position(|row| row.contains(mouse)) {
                Some(i) => events.push(RoomEvent::PickerItemChosen(i)),
                // Clicking outside the sheet dismisses it
                None => events.push(RoomEvent::ClosePicker),
            }
        }
        return events;
    }

    if is_key_pressed(KeyCode::I) {
        events.push(RoomEvent::OpenIconPicker);
    }

    if scene.controls_visible {
        for (key, direction) in ARROW_KEYS {
            if is_key_pressed(key) {
                events.push(RoomEvent::DirectionPressed(direction));
            }
        }
        if is_key_pressed(KeyCode::Delete) || is_key_pressed(KeyCode::Backspace) {
            events.push(RoomEvent::DeletePressed);
        }
    }

    if clicked {
        let ndc = vec2(
            mouse.x / screen_width() * 2.0 - 1.0,
            1.0 - mouse.y / screen_height() * 2.0,
        );
        let ray = Ray::from_ndc(camera.matrix(), ndc);
        let icons = scene.icons.iter().map(|(id, node)| (*id, &node.position));
        if let Some(target) = pick(shape, room.walls().ids(), icons, &ray) {
            events.push(RoomEvent::Hit(target));
        }
    }

    events
}
