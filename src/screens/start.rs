//! Title screen.
//!
//! Purely presentational: two flickering torches, a pool of rising embers and
//! a blinking "press any key" prompt. Input is ignored for a short cooldown
//! after entering so a key still held from the previous screen does not count.
//! Input after the cooldown is logged and otherwise has no effect.

use arrayvec::ArrayVec;
use fastrand::Rng;
use log::{debug, info};
use raylib::prelude::{Color, Rectangle, Vector2};

use crate::components::ember::Ember;
use crate::components::pulse::Pulse;
use crate::events::input::InputEvent;
use crate::screens::{Screen, ScreenContext};
use crate::systems::render::{Canvas, fade};

pub const EMBER_COUNT: usize = 40;
/// Seconds between torch flicker re-rolls.
pub const FLICKER_INTERVAL: f32 = 0.05;
/// Chance that a re-roll is a bright flare above 1.0.
pub const FLARE_CHANCE: f32 = 0.1;
/// Seconds after entering during which input is ignored.
pub const INPUT_COOLDOWN: f32 = 0.5;

const TITLE: &str = "EMBERFALL";
const PROMPT: &str = "PRESS ANY KEY";

const BG_TOP: Color = Color::new(8, 6, 14, 255);
const BG_BOTTOM: Color = Color::new(34, 18, 26, 255);
const TORCH_GLOW: Color = Color::new(255, 140, 40, 255);
const TORCH_POLE: Color = Color::new(70, 50, 40, 255);
const TITLE_COLOR: Color = Color::new(250, 210, 150, 255);
const PROMPT_COLOR: Color = Color::new(230, 230, 230, 255);

pub struct StartScreen {
    width: f32,
    height: f32,
    rng: Rng,
    flicker: f32,
    flicker_timer: f32,
    prompt: Pulse,
    embers: ArrayVec<Ember, EMBER_COUNT>,
    cooldown: f32,
}

impl StartScreen {
    pub fn new(width: f32, height: f32, mut rng: Rng) -> Self {
        let embers = (0..EMBER_COUNT)
            .map(|_| Ember::scattered(&mut rng, width, height))
            .collect();
        Self {
            width,
            height,
            rng,
            flicker: 1.0,
            flicker_timer: 0.0,
            prompt: Pulse::prompt(),
            embers,
            cooldown: INPUT_COOLDOWN,
        }
    }

    /// Current torch intensity multiplier.
    pub fn flicker(&self) -> f32 {
        self.flicker
    }

    pub fn prompt_alpha(&self) -> f32 {
        self.prompt.value
    }

    pub fn embers(&self) -> &[Ember] {
        &self.embers
    }

    pub fn accepts_input(&self) -> bool {
        self.cooldown <= 0.0
    }

    fn roll_flicker(&mut self) {
        self.flicker = if self.rng.f32() < FLARE_CHANCE {
            1.0 + self.rng.f32() * 0.3
        } else {
            0.7 + self.rng.f32() * 0.3
        };
    }

    fn render_torch(&self, canvas: &mut dyn Canvas, x: f32) {
        let flame = Vector2::new(x, self.height * 0.45);
        let glow = fade(TORCH_GLOW, (0.45 * self.flicker).min(1.0));
        canvas.radial_gradient(flame, 36.0 * self.flicker, glow, fade(TORCH_GLOW, 0.0));
        canvas.fill_rect(Rectangle::new(x - 2.0, flame.y, 4.0, 24.0), TORCH_POLE);
        canvas.fill_circle(flame, 3.0 * self.flicker, TORCH_GLOW);
    }
}

impl Screen for StartScreen {
    fn on_enter(&mut self) {
        self.cooldown = INPUT_COOLDOWN;
        self.prompt.reset();
    }

    fn update(&mut self, dt: f32, _ctx: &mut ScreenContext) {
        self.cooldown = (self.cooldown - dt).max(0.0);

        self.flicker_timer += dt;
        if self.flicker_timer >= FLICKER_INTERVAL {
            self.flicker_timer = 0.0;
            self.roll_flicker();
        }

        self.prompt.update(dt);

        for ember in self.embers.iter_mut() {
            ember.update(dt);
            if ember.is_spent() {
                ember.respawn(&mut self.rng, self.width, self.height);
            }
        }
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        canvas.gradient_rect_v(
            Rectangle::new(0.0, 0.0, self.width, self.height),
            BG_TOP,
            BG_BOTTOM,
        );
        self.render_torch(canvas, self.width * 0.2);
        self.render_torch(canvas, self.width * 0.8);

        for ember in &self.embers {
            ember.render(canvas);
        }

        let title_w = canvas.measure_text(TITLE, 20);
        canvas.draw_text(
            TITLE,
            Vector2::new(((self.width - title_w as f32) * 0.5).round(), self.height * 0.3),
            20,
            TITLE_COLOR,
        );

        let prompt_w = canvas.measure_text(PROMPT, 10);
        canvas.draw_text(
            PROMPT,
            Vector2::new(((self.width - prompt_w as f32) * 0.5).round(), self.height * 0.75),
            10,
            fade(PROMPT_COLOR, self.prompt.value),
        );
    }

    fn handle_input(&mut self, event: &InputEvent, _ctx: &mut ScreenContext) {
        if !self.accepts_input() {
            debug!("Start screen input {:?} ignored during cooldown", event);
            return;
        }
        info!("Start screen input {:?}", event);
    }
}
