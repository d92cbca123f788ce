//! Host input adapter.
//!
//! [`poll_input`] reads Raylib's keyboard and mouse state once per frame and
//! queues the matching [`InputEvent`]s on
//! [`InputState`](crate::resources::input::InputState). Auto-repeat presses
//! are forwarded as extra key-downs.

use raylib::RaylibHandle;
use raylib::ffi::{KeyboardKey, MouseButton};

use crate::events::input::Key;
use crate::resources::input::InputState;

/// Physical keys the game listens to.
const BINDINGS: [(KeyboardKey, Key); 13] = [
    (KeyboardKey::KEY_LEFT, Key::Left),
    (KeyboardKey::KEY_RIGHT, Key::Right),
    (KeyboardKey::KEY_UP, Key::Up),
    (KeyboardKey::KEY_DOWN, Key::Down),
    (KeyboardKey::KEY_SPACE, Key::Space),
    (KeyboardKey::KEY_ENTER, Key::Enter),
    (KeyboardKey::KEY_ESCAPE, Key::Escape),
    (KeyboardKey::KEY_A, Key::Char('a')),
    (KeyboardKey::KEY_D, Key::Char('d')),
    (KeyboardKey::KEY_W, Key::Char('w')),
    (KeyboardKey::KEY_S, Key::Char('s')),
    (KeyboardKey::KEY_Z, Key::Char('z')),
    (KeyboardKey::KEY_X, Key::Char('x')),
];

/// Queue events for one key given this frame's Raylib edge flags.
pub fn queue_key_edges(
    input: &mut InputState,
    key: Key,
    pressed: bool,
    repeated: bool,
    released: bool,
) {
    if pressed || repeated {
        input.key_down(key);
    }
    if released {
        input.key_up(key);
    }
}

/// Poll Raylib for this frame's input and queue it.
pub fn poll_input(rl: &RaylibHandle, input: &mut InputState) {
    for (raw, key) in BINDINGS {
        queue_key_edges(
            input,
            key,
            rl.is_key_pressed(raw),
            rl.is_key_pressed_repeat(raw),
            rl.is_key_released(raw),
        );
    }

    // Touch presses arrive as the left mouse button
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        input.click();
    }
}
