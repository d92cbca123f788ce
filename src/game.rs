//! Top-level game object: screen state machine and frame loop.
//!
//! [`Game`] owns one [`Screen`] per playable [`GameStates`] tag, the single
//! [`Transition`], the input queue and the frame clock. The host calls
//! [`Game::start`] once and then [`Game::tick`] every frame with its current
//! timestamp and a [`Canvas`] to draw into.
//!
//! Per frame, in order:
//! 1. queued input is routed to the active screen, or dropped while a
//!    transition has input disabled
//! 2. the transition advances, swapping screens at its midpoint
//! 3. the active screen updates
//! 4. the background is cleared, the active screen renders, the transition
//!    overlay renders on top
//!
//! State change requests pushed by a screen are applied right after the
//! screen callback that produced them.

use std::rc::Rc;

use fastrand::Rng;
use log::{debug, info};
use raylib::prelude::Color;
use rustc_hash::FxHashMap;

use crate::events::gamestate::GameStateRequest;
use crate::events::input::InputEvent;
use crate::resources::gamestate::GameStates;
use crate::resources::input::InputState;
use crate::resources::spritesheet::SpriteSheet;
use crate::resources::transition::{Transition, TransitionOptions, TransitionStep};
use crate::resources::worldtime::{FrameClock, WorldTime};
use crate::screens::playing::PlayingScreen;
use crate::screens::start::StartScreen;
use crate::screens::story::StoryScreen;
use crate::screens::{Screen, ScreenContext};
use crate::systems::render::Canvas;
use crate::systems::time::update_world_time;

/// Colour the canvas is cleared to before the active screen draws.
pub const BACKGROUND: Color = Color::new(16, 12, 22, 255);

pub struct Game {
    screens: FxHashMap<GameStates, Box<dyn Screen>>,
    state: GameStates,
    transition: Transition,
    input_enabled: bool,
    input: InputState,
    clock: FrameClock,
    world_time: WorldTime,
    running: bool,
    screen_width: f32,
    screen_height: f32,
}

impl Game {
    /// Build every screen for a `width` x `height` canvas. `seed` drives all
    /// cosmetic randomness.
    pub fn new(width: f32, height: f32, seed: u64, initial: GameStates) -> Self {
        Self::with_player_sprite(width, height, seed, initial, None)
    }

    /// Like [`Game::new`], drawing the player from `sprite` when given.
    pub fn with_player_sprite(
        width: f32,
        height: f32,
        seed: u64,
        initial: GameStates,
        sprite: Option<Rc<SpriteSheet>>,
    ) -> Self {
        let mut rng = Rng::with_seed(seed);
        let mut game = Self::empty(width, height, initial);
        game.insert_screen(
            GameStates::Start,
            Box::new(StartScreen::new(width, height, rng.fork())),
        );
        game.insert_screen(GameStates::Story, Box::new(StoryScreen::new(width, height)));

        let mut playing = PlayingScreen::new(width, height, &mut rng);
        if let Some(sheet) = sprite {
            playing.set_sprite(sheet);
        }
        game.insert_screen(GameStates::Playing, Box::new(playing));
        game
    }

    /// A game with no screens registered.
    pub fn empty(width: f32, height: f32, initial: GameStates) -> Self {
        Self {
            screens: FxHashMap::default(),
            state: initial,
            transition: Transition::new(),
            input_enabled: true,
            input: InputState::new(),
            clock: FrameClock::new(),
            world_time: WorldTime::default(),
            running: false,
            screen_width: width,
            screen_height: height,
        }
    }

    /// Register (or replace) the screen backing `state`.
    pub fn insert_screen(&mut self, state: GameStates, screen: Box<dyn Screen>) {
        self.screens.insert(state, screen);
    }

    pub fn state(&self) -> GameStates {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn world_time(&self) -> &WorldTime {
        &self.world_time
    }

    /// Queue the host pushes input events into.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Exit the current screen, switch tags, enter the new screen.
    ///
    /// Tags without a registered screen are accepted; update and render then
    /// skip the screen until the state changes again.
    pub fn set_state(&mut self, new_state: GameStates) {
        if let Some(screen) = self.screens.get_mut(&self.state) {
            screen.on_exit();
        }
        info!("Game state {} -> {}", self.state, new_state);
        self.state = new_state;
        match self.screens.get_mut(&new_state) {
            Some(screen) => screen.on_enter(),
            None => debug!("No screen registered for {}", new_state),
        }
    }

    /// Fade to `target`. Returns `false` if a transition is already running.
    pub fn start_transition(&mut self, target: GameStates, options: TransitionOptions) -> bool {
        let accepted = self.transition.start(target, options);
        if accepted {
            self.input_enabled = false;
        }
        accepted
    }

    /// Begin running at host time `now` (seconds) and enter the first screen.
    pub fn start(&mut self, now: f64) {
        info!("Game started in state {}", self.state);
        self.running = true;
        self.clock.reset(now);
        if let Some(screen) = self.screens.get_mut(&self.state) {
            screen.on_enter();
        }
    }

    pub fn stop(&mut self) {
        info!("Game stopped");
        self.running = false;
    }

    /// One frame at host time `now`: clamp the delta, update, render.
    pub fn tick(&mut self, now: f64, canvas: &mut dyn Canvas) {
        if !self.running {
            return;
        }
        let dt = self.clock.tick(now);
        self.update(dt);
        self.render(canvas);
    }

    pub fn update(&mut self, dt: f32) {
        let dt = update_world_time(&mut self.world_time, dt);

        self.dispatch_input();

        match self.transition.update(dt) {
            TransitionStep::Midpoint(target) => {
                self.set_state(target);
                self.transition.fire_midpoint();
            }
            TransitionStep::Completed => {
                self.input_enabled = true;
                debug!("Input re-enabled");
            }
            TransitionStep::None => {}
        }

        let mut ctx = self.context();
        if let Some(screen) = self.screens.get_mut(&self.state) {
            screen.update(dt, &mut ctx);
        }
        self.apply_requests(ctx);
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.clear(BACKGROUND);
        if let Some(screen) = self.screens.get(&self.state) {
            screen.render(canvas);
        }
        self.transition.render(canvas);
    }

    fn context(&self) -> ScreenContext {
        ScreenContext::new(self.screen_width, self.screen_height)
    }

    /// Route this frame's queued events to the active screen.
    fn dispatch_input(&mut self) {
        let events = self.input.drain();
        for (i, event) in events.iter().enumerate() {
            if !self.input_enabled {
                debug!("Dropped {} input event(s) while input is disabled", events.len() - i);
                return;
            }
            let mut ctx = self.context();
            if let Some(screen) = self.screens.get_mut(&self.state) {
                match *event {
                    InputEvent::KeyDown(key) => {
                        screen.handle_input(event, &mut ctx);
                        screen.handle_key_down(key, &mut ctx);
                    }
                    InputEvent::KeyUp(key) => screen.handle_key_up(key, &mut ctx),
                    InputEvent::Click => screen.handle_input(event, &mut ctx),
                }
            }
            self.apply_requests(ctx);
        }
    }

    fn apply_requests(&mut self, mut ctx: ScreenContext) {
        for request in ctx.take_requests() {
            match request {
                GameStateRequest::Immediate(state) => self.set_state(state),
                GameStateRequest::Fade(state, options) => {
                    self.start_transition(state, options);
                }
            }
        }
    }
}
