//! Intro story with a typewriter effect.
//!
//! Characters appear one every [`CHAR_DELAY`] seconds. Any input before the
//! text is complete reveals all of it. Once complete, a prompt appears after
//! [`PROMPT_DELAY`] and pulses; input from then on fades into play.
//!
//! Wrapping is recomputed on every render from the revealed part only.

use log::{debug, info};
use raylib::prelude::{Color, Rectangle, Vector2};

use crate::components::pulse::Pulse;
use crate::events::input::InputEvent;
use crate::resources::gamestate::GameStates;
use crate::resources::transition::TransitionOptions;
use crate::screens::{Screen, ScreenContext};
use crate::systems::render::{Canvas, fade};

pub const CHAR_DELAY: f32 = 0.05;
pub const PROMPT_DELAY: f32 = 0.5;

pub const STORY_TEXT: &str = "The last torch of the old keep still burns.\n\
Below it the halls are dark, the stones cold, the way down long forgotten.\n\
You carry the final ember. Climb, leap, and do not let it go out.";

const PROMPT: &str = "PRESS ANY KEY";
const TEXT_SIZE: i32 = 10;
const LINE_HEIGHT: f32 = 14.0;
const MARGIN: f32 = 24.0;

const BG: Color = Color::new(10, 8, 16, 255);
const TEXT_COLOR: Color = Color::new(220, 210, 190, 255);
const PROMPT_COLOR: Color = Color::new(250, 200, 120, 255);

/// Break `text` into lines no wider than `max_width` at `size`.
///
/// Breaks at spaces and keeps explicit newlines. A single word wider than
/// the limit gets a line to itself.
pub fn wrap_text(canvas: &dyn Canvas, text: &str, size: i32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split(' ') {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{line} {word}")
            };
            if !line.is_empty() && canvas.measure_text(&candidate, size) as f32 > max_width {
                lines.push(std::mem::replace(&mut line, word.to_string()));
            } else {
                line = candidate;
            }
        }
        lines.push(line);
    }
    lines
}

pub struct StoryScreen {
    width: f32,
    height: f32,
    revealed: usize,
    total: usize,
    char_timer: f32,
    complete: bool,
    prompt_timer: f32,
    prompt: Pulse,
}

impl StoryScreen {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            revealed: 0,
            total: STORY_TEXT.chars().count(),
            char_timer: 0.0,
            complete: false,
            prompt_timer: 0.0,
            prompt: Pulse::prompt(),
        }
    }

    /// Number of characters currently shown.
    pub fn revealed_chars(&self) -> usize {
        self.revealed
    }

    pub fn revealed_text(&self) -> &str {
        match STORY_TEXT.char_indices().nth(self.revealed) {
            Some((end, _)) => &STORY_TEXT[..end],
            None => STORY_TEXT,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn prompt_visible(&self) -> bool {
        self.complete && self.prompt_timer >= PROMPT_DELAY
    }

    fn finish(&mut self) {
        self.revealed = self.total;
        self.complete = true;
        self.prompt_timer = 0.0;
    }
}

impl Screen for StoryScreen {
    fn on_enter(&mut self) {
        self.revealed = 0;
        self.char_timer = 0.0;
        self.complete = false;
        self.prompt_timer = 0.0;
        self.prompt.reset();
    }

    fn update(&mut self, dt: f32, _ctx: &mut ScreenContext) {
        if !self.complete {
            self.char_timer += dt;
            while self.char_timer >= CHAR_DELAY && self.revealed < self.total {
                self.char_timer -= CHAR_DELAY;
                self.revealed += 1;
            }
            if self.revealed >= self.total {
                self.finish();
            }
            return;
        }

        self.prompt_timer += dt;
        if self.prompt_visible() {
            self.prompt.update(dt);
        }
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(Rectangle::new(0.0, 0.0, self.width, self.height), BG);

        let lines = wrap_text(
            &*canvas,
            self.revealed_text(),
            TEXT_SIZE,
            self.width - 2.0 * MARGIN,
        );
        for (i, line) in lines.iter().enumerate() {
            canvas.draw_text(
                line,
                Vector2::new(MARGIN, MARGIN + i as f32 * LINE_HEIGHT),
                TEXT_SIZE,
                TEXT_COLOR,
            );
        }

        if self.prompt_visible() {
            let w = canvas.measure_text(PROMPT, TEXT_SIZE);
            canvas.draw_text(
                PROMPT,
                Vector2::new(
                    ((self.width - w as f32) * 0.5).round(),
                    self.height - MARGIN,
                ),
                TEXT_SIZE,
                fade(PROMPT_COLOR, self.prompt.value),
            );
        }
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &mut ScreenContext) {
        if !self.complete {
            debug!("Story skipped by {:?}", event);
            self.finish();
        } else if self.prompt_visible() {
            info!("Story finished, entering play");
            ctx.fade_to(GameStates::Playing, TransitionOptions::new(0.5, 0.3, 0.5));
        }
    }
}
