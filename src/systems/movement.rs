//! Player movement rules.
//!
//! These functions turn [`PlayerInput`] into velocity. Nothing here moves the
//! player; integration and collision response happen in
//! [`crate::systems::collision::move_and_collide`].

use crate::components::inputcontrolled::PlayerInput;
use crate::components::player::{
    FRICTION, GRAVITY, JUMP_VELOCITY, MOVE_SPEED, Player, STOP_THRESHOLD,
};

/// Set horizontal velocity from the held direction.
///
/// Holding a direction sets the speed outright (no acceleration). With no
/// direction held, friction decays the speed once per call and snaps it to
/// zero below [`STOP_THRESHOLD`]. Left wins if both are held.
pub fn apply_horizontal_input(player: &mut Player, input: &PlayerInput) {
    if input.left {
        player.vx = -MOVE_SPEED;
        player.facing = -1.0;
    } else if input.right {
        player.vx = MOVE_SPEED;
        player.facing = 1.0;
    } else {
        player.vx *= FRICTION;
        if player.vx.abs() < STOP_THRESHOLD {
            player.vx = 0.0;
        }
    }
}

/// Apply the jump impulse if a jump was requested and the player stands on
/// something. Returns whether the jump happened.
pub fn try_jump(player: &mut Player, input: &PlayerInput) -> bool {
    if input.jump && player.on_ground {
        player.vy = JUMP_VELOCITY;
        true
    } else {
        false
    }
}

pub fn apply_gravity(player: &mut Player, dt: f32) {
    player.vy += GRAVITY * dt;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_sets_velocity_instantly() {
        let mut player = Player::new(0.0, 0.0);
        apply_horizontal_input(
            &mut player,
            &PlayerInput {
                left: true,
                ..Default::default()
            },
        );
        assert_eq!(player.vx, -MOVE_SPEED);
        assert_eq!(player.facing, -1.0);
    }

    #[test]
    fn test_friction_snaps_to_exact_zero() {
        let mut player = Player::new(0.0, 0.0);
        player.vx = 1.1;
        apply_horizontal_input(&mut player, &PlayerInput::default());
        assert_eq!(player.vx, 0.0);
    }

    #[test]
    fn test_friction_decays_to_zero_from_two() {
        let mut player = Player::new(0.0, 0.0);
        player.vx = 2.0;
        apply_horizontal_input(&mut player, &PlayerInput::default());
        assert!((player.vx - 1.7).abs() < 1e-6);

        let mut frames = 1;
        while player.vx != 0.0 {
            assert!(player.vx >= STOP_THRESHOLD);
            apply_horizontal_input(&mut player, &PlayerInput::default());
            frames += 1;
            assert!(frames < 10);
        }
        assert_eq!(player.vx, 0.0);
    }

    #[test]
    fn test_friction_keeps_facing() {
        let mut player = Player::new(0.0, 0.0);
        player.vx = -40.0;
        player.facing = -1.0;
        apply_horizontal_input(&mut player, &PlayerInput::default());
        assert_eq!(player.vx, -40.0 * FRICTION);
        assert_eq!(player.facing, -1.0);
    }

    #[test]
    fn test_jump_requires_ground() {
        let mut player = Player::new(0.0, 0.0);
        let input = PlayerInput {
            jump: true,
            ..Default::default()
        };
        assert!(!try_jump(&mut player, &input));
        assert_eq!(player.vy, 0.0);

        player.on_ground = true;
        assert!(try_jump(&mut player, &input));
        assert_eq!(player.vy, JUMP_VELOCITY);
    }

    #[test]
    fn test_gravity_integrates_dt() {
        let mut player = Player::new(0.0, 0.0);
        apply_gravity(&mut player, 0.5);
        assert_eq!(player.vy, 300.0);
    }
}
