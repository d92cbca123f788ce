//! Per-frame logic.
//!
//! Submodules overview
//! - [`collision`] – axis-separated collision response against the room
//! - [`input`] – read hardware input into [`crate::resources::input::InputState`]
//! - [`movement`] – horizontal intent, friction, jump and gravity
//! - [`render`] – the [`render::Canvas`] drawing surface and its backends
//! - [`time`] – delta clamping and simulation time

pub mod collision;
pub mod input;
pub mod movement;
pub mod render;
pub mod time;
