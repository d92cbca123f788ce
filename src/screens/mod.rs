//! Game screens.
//!
//! Each [`GameStates`](crate::resources::gamestate::GameStates) tag with
//! behaviour is backed by one [`Screen`]. The game owns every screen for the
//! whole run and forwards lifecycle, update, render and input calls to the
//! one matching the current state.
//!
//! Submodules overview
//! - [`start`] – title screen with torches, embers and a blinking prompt
//! - [`story`] – typewriter intro text that fades into play
//! - [`playing`] – the platformer itself: room, player and camera

use crate::events::gamestate::GameStateRequest;
use crate::events::input::{InputEvent, Key};
use crate::resources::gamestate::GameStates;
use crate::resources::transition::TransitionOptions;
use crate::systems::render::Canvas;

pub mod playing;
pub mod start;
pub mod story;

/// What a screen can see of the game during a callback, and where it leaves
/// its state change requests.
#[derive(Debug)]
pub struct ScreenContext {
    pub screen_width: f32,
    pub screen_height: f32,
    requests: Vec<GameStateRequest>,
}

impl ScreenContext {
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
            requests: Vec::new(),
        }
    }

    pub fn request(&mut self, request: GameStateRequest) {
        self.requests.push(request);
    }

    pub fn change_state(&mut self, state: GameStates) {
        self.request(GameStateRequest::Immediate(state));
    }

    pub fn fade_to(&mut self, state: GameStates, options: TransitionOptions) {
        self.request(GameStateRequest::Fade(state, options));
    }

    pub fn has_requests(&self) -> bool {
        !self.requests.is_empty()
    }

    /// Hand over the queued requests, oldest first.
    pub fn take_requests(&mut self) -> Vec<GameStateRequest> {
        std::mem::take(&mut self.requests)
    }
}

/// A screen's capability set. Every method defaults to doing nothing, so a
/// screen only implements what it reacts to.
pub trait Screen {
    fn on_enter(&mut self) {}

    fn on_exit(&mut self) {}

    fn update(&mut self, _dt: f32, _ctx: &mut ScreenContext) {}

    fn render(&self, _canvas: &mut dyn Canvas) {}

    /// Generic "advance" input: every key press and every click.
    fn handle_input(&mut self, _event: &InputEvent, _ctx: &mut ScreenContext) {}

    /// Continuous key state: press (and auto-repeat).
    fn handle_key_down(&mut self, _key: Key, _ctx: &mut ScreenContext) {}

    fn handle_key_up(&mut self, _key: Key, _ctx: &mut ScreenContext) {}
}
