//! Input events.
//!
//! This module defines [`InputEvent`], one discrete key or pointer event
//! captured by the host, and [`Key`], the host-independent key identifier it
//! carries.
//!
//! Events are queued in [`InputState`](crate::resources::input::InputState)
//! and routed to the active screen once per frame by
//! [`Game::update`](crate::game::Game::update).

use std::borrow::Cow;
use std::fmt;

/// Logical key identifier.
///
/// Only the keys the game reacts to get their own variant; printable keys
/// arrive as [`Key::Char`] in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Enter,
    Escape,
    Char(char),
}

impl Key {
    /// Identifier used in logs. Only [`Key::Char`] allocates.
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Key::Left => Cow::Borrowed("ArrowLeft"),
            Key::Right => Cow::Borrowed("ArrowRight"),
            Key::Up => Cow::Borrowed("ArrowUp"),
            Key::Down => Cow::Borrowed("ArrowDown"),
            Key::Space => Cow::Borrowed("Space"),
            Key::Enter => Cow::Borrowed("Enter"),
            Key::Escape => Cow::Borrowed("Escape"),
            Key::Char(c) => Cow::Owned(c.to_string()),
        }
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Key::Left | Key::Char('a'))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Key::Right | Key::Char('d'))
    }

    pub fn is_jump(&self) -> bool {
        matches!(self, Key::Up | Key::Space | Key::Char('w'))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{c}"),
            other => f.write_str(&other.name()),
        }
    }
}

/// One discrete input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key went down. Auto-repeat produces further `KeyDown`s without a
    /// `KeyUp` in between.
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer press or touch start. Position is irrelevant to the game.
    Click,
}
