//! Ember particles for the title screen.
//!
//! Embers live in a fixed pool. A spent ember is re-rolled in place by
//! [`Ember::respawn`]; nothing is allocated after the pool is built.

use std::f32::consts::TAU;

use fastrand::Rng;
use raylib::prelude::{Color, Vector2};

use crate::systems::render::{Canvas, fade};

const EMBER_COLOR: Color = Color::new(255, 150, 60, 255);
/// Horizontal wobble amplitude in px/s.
const WOBBLE: f32 = 12.0;
/// Wobble angular speed in rad/s.
const WOBBLE_RATE: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ember {
    pub x: f32,
    pub y: f32,
    /// Rise speed in px/s.
    pub speed: f32,
    pub life: f32,
    pub max_life: f32,
    pub radius: f32,
    phase: f32,
}

impl Ember {
    /// A fresh ember somewhere on screen, used to fill the pool.
    pub fn scattered(rng: &mut Rng, width: f32, height: f32) -> Self {
        let mut ember = Self {
            x: 0.0,
            y: 0.0,
            speed: 0.0,
            life: 0.0,
            max_life: 0.0,
            radius: 0.0,
            phase: 0.0,
        };
        ember.respawn(rng, width, height);
        ember.y = rng.f32() * height;
        ember
    }

    /// Re-roll this ember just below the bottom edge.
    pub fn respawn(&mut self, rng: &mut Rng, width: f32, height: f32) {
        self.x = rng.f32() * width;
        self.y = height + rng.f32() * 8.0;
        self.speed = 10.0 + rng.f32() * 20.0;
        self.max_life = 2.0 + rng.f32() * 2.0;
        self.life = self.max_life;
        self.radius = 0.5 + rng.f32();
        self.phase = rng.f32() * TAU;
    }

    pub fn update(&mut self, dt: f32) {
        self.phase += WOBBLE_RATE * dt;
        self.x += self.phase.sin() * WOBBLE * dt;
        self.y -= self.speed * dt;
        self.life -= dt;
    }

    pub fn is_spent(&self) -> bool {
        self.life <= 0.0 || self.y + self.radius < 0.0
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        let alpha = (self.life / self.max_life).clamp(0.0, 1.0);
        canvas.fill_circle(
            Vector2::new(self.x, self.y),
            self.radius,
            fade(EMBER_COLOR, alpha),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ember_rises_and_burns_out() {
        let mut rng = Rng::with_seed(3);
        let mut ember = Ember::scattered(&mut rng, 320.0, 180.0);
        let start_y = ember.y;
        ember.update(0.5);
        assert!(ember.y < start_y);
        ember.update(ember.max_life);
        assert!(ember.is_spent());
    }

    #[test]
    fn test_respawn_places_below_screen_with_full_life() {
        let mut rng = Rng::with_seed(9);
        let mut ember = Ember::scattered(&mut rng, 320.0, 180.0);
        ember.life = 0.0;
        ember.respawn(&mut rng, 320.0, 180.0);
        assert!(ember.y >= 180.0);
        assert_eq!(ember.life, ember.max_life);
        assert!(!ember.is_spent());
        assert!((0.0..320.0).contains(&ember.x));
    }

    #[test]
    fn test_ember_off_top_is_spent() {
        let mut rng = Rng::with_seed(1);
        let mut ember = Ember::scattered(&mut rng, 320.0, 180.0);
        ember.y = -5.0;
        assert!(ember.is_spent());
    }
}
