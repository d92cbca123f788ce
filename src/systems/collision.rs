//! Axis-separated collision response.
//!
//! A body moves along X and is pushed out of anything it overlaps, then moves
//! along Y and is pushed out again. Resolving each axis on its own means a
//! fast diagonal move can never slip through the corner of a platform: the
//! X pass stops the body at the face it hit before Y is ever applied.

use crate::components::player::Player;
use crate::resources::room::Room;

/// Integrate velocity over `dt` and resolve collisions, X first, then Y.
pub fn move_and_collide(player: &mut Player, room: &Room, dt: f32) {
    player.x += player.vx * dt;
    resolve_horizontal(player, room);
    player.y += player.vy * dt;
    resolve_vertical(player, room);
}

/// Push the player out of platforms along X, against the direction of
/// travel, then keep it inside the room's side bounds.
pub fn resolve_horizontal(player: &mut Player, room: &Room) {
    for platform in room.platforms() {
        if !player.bounds().overlaps(platform) {
            continue;
        }
        if player.vx > 0.0 {
            player.x = platform.left() - player.width;
            player.vx = 0.0;
        } else if player.vx < 0.0 {
            player.x = platform.right();
            player.vx = 0.0;
        }
    }

    if player.x < 0.0 {
        player.x = 0.0;
        player.vx = 0.0;
    } else if player.x + player.width > room.width {
        player.x = room.width - player.width;
        player.vx = 0.0;
    }
}

/// Push the player out of platforms along Y and land it on the floor.
///
/// `on_ground` is cleared first and only set again by a downward landing, so
/// walking off a ledge drops the flag on the very next frame.
pub fn resolve_vertical(player: &mut Player, room: &Room) {
    player.on_ground = false;

    for platform in room.platforms() {
        if !player.bounds().overlaps(platform) {
            continue;
        }
        if player.vy > 0.0 {
            player.y = platform.top() - player.height;
            player.vy = 0.0;
            player.on_ground = true;
        } else if player.vy < 0.0 {
            player.y = platform.bottom();
            player.vy = 0.0;
        }
    }

    if player.y + player.height >= room.floor_y {
        player.y = room.floor_y - player.height;
        player.vy = 0.0;
        player.on_ground = true;
    }
}
