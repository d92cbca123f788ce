//! Input-controlled movement intent.
//!
//! [`PlayerInput`] is what the player wants to do this frame, already reduced
//! from raw key events. It is filled by the playing screen's key handlers and
//! read by the movement system.

use crate::events::input::Key;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    /// One-frame jump request. Set on a fresh press, cleared after the frame
    /// that consumed it.
    pub jump: bool,
    /// Jump key is physically held. Blocks auto-repeat from re-arming `jump`.
    pub jump_held: bool,
}

impl PlayerInput {
    pub fn key_down(&mut self, key: Key) {
        if key.is_left() {
            self.left = true;
        }
        if key.is_right() {
            self.right = true;
        }
        if key.is_jump() && !self.jump_held {
            self.jump = true;
            self.jump_held = true;
        }
    }

    pub fn key_up(&mut self, key: Key) {
        if key.is_left() {
            self.left = false;
        }
        if key.is_right() {
            self.right = false;
        }
        if key.is_jump() {
            self.jump_held = false;
        }
    }

    /// Drop the jump request once the frame has used it.
    pub fn consume_jump(&mut self) {
        self.jump = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
