//! The player body.
//!
//! [`Player`] is plain per-frame state: a box, its velocity and a couple of
//! flags. Movement rules live in [`crate::systems::movement`] and collision
//! response in [`crate::systems::collision`]; [`Player::update`] runs them in
//! order.

use raylib::prelude::{Color, Rectangle, Vector2};

use crate::components::boxcollider::BoxCollider;
use crate::components::inputcontrolled::PlayerInput;
use crate::resources::room::Room;
use crate::systems::collision::move_and_collide;
use crate::systems::movement::{apply_gravity, apply_horizontal_input, try_jump};
use crate::systems::render::Canvas;

/// Downward acceleration in px/s².
pub const GRAVITY: f32 = 600.0;
/// Horizontal speed in px/s while a direction is held.
pub const MOVE_SPEED: f32 = 80.0;
/// Vertical velocity set by a jump (negative is up).
pub const JUMP_VELOCITY: f32 = -200.0;
/// Horizontal velocity multiplier per frame with no direction held.
pub const FRICTION: f32 = 0.85;
/// Horizontal speeds below this snap to zero.
pub const STOP_THRESHOLD: f32 = 1.0;

pub const PLAYER_WIDTH: f32 = 12.0;
pub const PLAYER_HEIGHT: f32 = 16.0;

const BODY: Color = Color::new(200, 90, 60, 255);
const HEAD: Color = Color::new(240, 200, 160, 255);
const EYE: Color = Color::new(20, 16, 24, 255);

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vx: f32,
    pub vy: f32,
    pub on_ground: bool,
    /// `1.0` facing right, `-1.0` facing left.
    pub facing: f32,
    pub anim_timer: f32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            vx: 0.0,
            vy: 0.0,
            on_ground: false,
            facing: 1.0,
            anim_timer: 0.0,
        }
    }

    /// Put the player back at `(x, y)`, at rest.
    pub fn reset(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.vx = 0.0;
        self.vy = 0.0;
        self.on_ground = false;
        self.facing = 1.0;
        self.anim_timer = 0.0;
    }

    pub fn bounds(&self) -> BoxCollider {
        BoxCollider::new(self.x, self.y, self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width * 0.5
    }

    /// Advance one frame: input, jump, gravity, then X and Y collision.
    pub fn update(&mut self, dt: f32, input: &PlayerInput, room: &Room) {
        apply_horizontal_input(self, input);
        try_jump(self, input);
        apply_gravity(self, dt);
        move_and_collide(self, room, dt);
        self.anim_timer += dt;
    }

    /// Draw in room coordinates; the caller applies the camera offset.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        let walking = self.on_ground && self.vx != 0.0;
        let bob = if walking {
            ((self.anim_timer * 14.0).sin() * 1.5).round().abs()
        } else {
            0.0
        };
        let x = self.x.round();
        let y = (self.y - bob).round();

        canvas.fill_rect(
            Rectangle::new(x, y + 6.0, self.width, self.height - 6.0),
            BODY,
        );
        canvas.fill_rect(Rectangle::new(x + 2.0, y, self.width - 4.0, 6.0), HEAD);

        let eye_x = if self.facing > 0.0 {
            x + self.width - 5.0
        } else {
            x + 3.0
        };
        canvas.fill_rect(Rectangle::new(eye_x, y + 2.0, 2.0, 2.0), EYE);

        if !self.on_ground {
            // Tuck the feet while airborne
            canvas.fill_circle(
                Vector2::new(x + self.width * 0.5, y + self.height - 1.0),
                2.0,
                HEAD,
            );
        }
    }
}
