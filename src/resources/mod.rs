//! Long-lived data shared by the game and its screens.
//!
//! Overview
//! - `camera` – horizontal side-scrolling camera with a dead zone
//! - `gameconfig` – settings loaded from `config.ini`
//! - `gamestate` – the high-level game state tags
//! - `input` – per-frame queue of input events
//! - `rendertarget` – fixed-resolution framebuffer and letterboxing
//! - `room` – static level geometry and decoration
//! - `spritesheet` – sprite atlas loaded from JSON
//! - `texturestore` – loaded textures keyed by string IDs
//! - `transition` – fade-to-black screen transition
//! - `worldtime` – simulation time and the clamped frame clock
pub mod camera;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod rendertarget;
pub mod room;
pub mod spritesheet;
pub mod texturestore;
pub mod transition;
pub mod worldtime;
