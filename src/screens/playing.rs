//! The platformer.
//!
//! Owns the room, the player, the camera and the player's input intent.
//! Key events set [`PlayerInput`] flags; each update steps the player, drops
//! the one-frame jump request, then lets the camera follow.
//!
//! With a sprite sheet attached the player is drawn from its `idle`, `run`
//! and `jump` animations; otherwise it is drawn procedurally.

use std::rc::Rc;

use fastrand::Rng;
use log::debug;
use raylib::prelude::Vector2;

use crate::components::animation::Animator;
use crate::components::inputcontrolled::PlayerInput;
use crate::components::player::Player;
use crate::events::input::Key;
use crate::resources::camera::Camera;
use crate::resources::room::Room;
use crate::resources::spritesheet::SpriteSheet;
use crate::screens::{Screen, ScreenContext};
use crate::systems::render::Canvas;

/// Spawn x in room pixels. The player spawns standing on the floor.
pub const SPAWN_X: f32 = 40.0;

pub struct PlayingScreen {
    room: Room,
    player: Player,
    camera: Camera,
    input: PlayerInput,
    sprite: Option<Animator>,
}

impl PlayingScreen {
    pub fn new(width: f32, height: f32, rng: &mut Rng) -> Self {
        let room = Room::new(width, height, rng);
        Self::with_room(width, room)
    }

    pub fn with_room(screen_width: f32, room: Room) -> Self {
        let camera = Camera::new(screen_width, room.width);
        let mut screen = Self {
            player: Player::new(SPAWN_X, 0.0),
            room,
            camera,
            input: PlayerInput::default(),
            sprite: None,
        };
        screen.respawn();
        screen
    }

    /// Draw the player from `sheet` instead of procedurally.
    pub fn set_sprite(&mut self, sheet: Rc<SpriteSheet>) {
        self.sprite = Some(Animator::new(sheet));
    }

    pub fn sprite(&self) -> Option<&Animator> {
        self.sprite.as_ref()
    }

    fn animation_name(&self) -> &'static str {
        if !self.player.on_ground {
            "jump"
        } else if self.player.vx != 0.0 {
            "run"
        } else {
            "idle"
        }
    }

    fn update_sprite(&mut self, dt: f32) {
        let name = self.animation_name();
        let Some(animator) = self.sprite.as_mut() else {
            return;
        };
        if animator.has_animation(name) {
            animator.play(name);
        }
        animator.update(dt);
    }

    /// Draw the sprite with its bottom-center on the player's feet.
    /// Returns `false` if there is nothing to draw yet.
    fn render_sprite(&self, canvas: &mut dyn Canvas) -> bool {
        let Some(animator) = &self.sprite else {
            return false;
        };
        if !animator.sheet().is_loaded() {
            return false;
        }
        let Some(frame) = animator.current_frame() else {
            return false;
        };
        let scale = animator.sheet().scale();
        let pos = Vector2::new(
            self.player.center_x() - frame.w * scale * 0.5,
            self.player.y + self.player.height - frame.h * scale,
        );
        animator.draw(canvas, pos, self.player.facing < 0.0, Vector2::new(1.0, 1.0));
        true
    }

    fn respawn(&mut self) {
        let floor = self.room.floor_y - self.player.height;
        self.player.reset(SPAWN_X, floor);
        self.input.clear();
        self.camera.snap_to(self.player.center_x());
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn input(&self) -> &PlayerInput {
        &self.input
    }
}

impl Screen for PlayingScreen {
    fn on_enter(&mut self) {
        self.respawn();
        debug!(
            "Player spawned at ({}, {}) in a {}x{} room",
            self.player.x, self.player.y, self.room.width, self.room.height
        );
    }

    fn update(&mut self, dt: f32, _ctx: &mut ScreenContext) {
        self.player.update(dt, &self.input, &self.room);
        self.input.consume_jump();
        self.camera.follow(self.player.center_x());
        self.update_sprite(dt);
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        let cam_x = self.camera.render_x();
        self.room.render(canvas, cam_x);
        canvas.push_offset(-cam_x, 0.0);
        if !self.render_sprite(canvas) {
            self.player.render(canvas);
        }
        canvas.pop_offset();
    }

    fn handle_key_down(&mut self, key: Key, _ctx: &mut ScreenContext) {
        self.input.key_down(key);
    }

    fn handle_key_up(&mut self, key: Key, _ctx: &mut ScreenContext) {
        self.input.key_up(key);
    }
}
