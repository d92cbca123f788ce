//! Per-object state.
//!
//! Plain data types owned by screens, each with the small amount of behaviour
//! that belongs to the data itself.
//!
//! Submodules overview:
//! - [`animation`] – playback cursor over a shared sprite sheet
//! - [`boxcollider`] – axis-aligned rectangle used for collision
//! - [`ember`] – rising ember particle for the title screen
//! - [`inputcontrolled`] – movement intent derived from key events
//! - [`player`] – the player body
//! - [`pulse`] – ping-pong alpha for blinking prompts

pub mod animation;
pub mod boxcollider;
pub mod ember;
pub mod inputcontrolled;
pub mod player;
pub mod pulse;
