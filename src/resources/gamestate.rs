//! High-level game state tags.
//!
//! [`GameStates`] names the screen the game is showing. Screens ask for a
//! change by pushing a [`GameStateRequest`](crate::events::gamestate::GameStateRequest);
//! [`Game`](crate::game::Game) applies it.

use std::fmt;
use std::str::FromStr;

/// Discrete high-level states the game can be in.
///
/// `Paused` and `GameOver` are valid tags that currently have no screen
/// registered; while one of them is current only the background is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    Start,
    Story,
    Playing,
    Paused,
    GameOver,
}

impl GameStates {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStates::Start => "start",
            GameStates::Story => "story",
            GameStates::Playing => "playing",
            GameStates::Paused => "paused",
            GameStates::GameOver => "game_over",
        }
    }
}

impl fmt::Display for GameStates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameStates {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(GameStates::Start),
            "story" => Ok(GameStates::Story),
            "playing" => Ok(GameStates::Playing),
            "paused" => Ok(GameStates::Paused),
            "game_over" | "gameover" => Ok(GameStates::GameOver),
            other => Err(format!("Unknown game state '{}'", other)),
        }
    }
}
