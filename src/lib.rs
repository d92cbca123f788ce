//! Emberfall library.
//!
//! The platformer runtime: screens, the fade transition, physics, collision
//! and camera. Exposed as a library for integration tests and for the
//! Raylib host in `main.rs`.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod screens;
pub mod systems;
