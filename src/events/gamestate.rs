//! Game state change requests.
//!
//! Screens never touch [`Game`](crate::game::Game) directly. To change the
//! high-level [`GameStates`] they push a [`GameStateRequest`] into their
//! [`ScreenContext`](crate::screens::ScreenContext); the game applies it as
//! soon as the screen callback that produced it returns.
//!
//! This decouples the intent to change state from the mechanics of running
//! exit/enter hooks and avoids borrowing the active screen and the game at
//! the same time.

use crate::resources::gamestate::GameStates;
use crate::resources::transition::TransitionOptions;

#[derive(Debug)]
pub enum GameStateRequest {
    /// Swap screens right away, with no overlay.
    Immediate(GameStates),
    /// Fade out, swap screens at full black, fade back in. Input is disabled
    /// until the fade completes. Ignored if a fade is already running.
    Fade(GameStates, TransitionOptions),
}

impl GameStateRequest {
    pub fn target(&self) -> GameStates {
        match self {
            GameStateRequest::Immediate(state) => *state,
            GameStateRequest::Fade(state, _) => *state,
        }
    }
}
