//! Event types exchanged between the host, the game and its screens.
//!
//! Submodules:
//! - [`gamestate`] – state change requests pushed by screens
//! - [`input`] – discrete key and pointer events
pub mod gamestate;
pub mod input;
