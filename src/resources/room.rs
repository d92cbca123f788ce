//! Static level geometry for the playing screen.
//!
//! A [`Room`] is built once and never changes. It holds the solid
//! rectangles bodies collide with (floating platforms plus a full-height wall
//! at each end), the floor line, and purely cosmetic background stones.
//!
//! Only the stones use randomness. The generator is injected so a given seed
//! always produces the same layout.

use fastrand::Rng;
use raylib::prelude::{Color, Rectangle};
use smallvec::SmallVec;

use crate::components::boxcollider::BoxCollider;
use crate::systems::render::{Canvas, brighten};

/// Room width as a multiple of the screen width.
pub const ROOM_WIDTH_FACTOR: f32 = 2.5;
/// Distance from the floor line to the bottom of the room.
pub const FLOOR_HEIGHT: f32 = 20.0;
pub const WALL_THICKNESS: f32 = 16.0;
pub const PLATFORM_THICKNESS: f32 = 8.0;
const STONE_COUNT: usize = 48;

/// Floating platforms as `(x, height above floor, width)`.
const PLATFORM_LAYOUT: [(f32, f32, f32); 8] = [
    (64.0, 28.0, 48.0),
    (140.0, 52.0, 40.0),
    (212.0, 30.0, 56.0),
    (300.0, 58.0, 40.0),
    (372.0, 84.0, 48.0),
    (460.0, 46.0, 64.0),
    (560.0, 70.0, 40.0),
    (640.0, 34.0, 56.0),
];

const SKY_TOP: Color = Color::new(12, 10, 24, 255);
const SKY_BOTTOM: Color = Color::new(38, 26, 48, 255);
const FAR_BRICK: Color = Color::new(30, 24, 40, 255);
const PILLAR: Color = Color::new(46, 36, 58, 255);
const PLATFORM_COLOR: Color = Color::new(92, 78, 70, 255);
const PLATFORM_EDGE: Color = Color::new(140, 120, 100, 255);
const FLOOR_COLOR: Color = Color::new(64, 52, 50, 255);
const FLOOR_EDGE: Color = Color::new(110, 92, 80, 255);
const WALL_COLOR: Color = Color::new(52, 44, 56, 255);

/// Background decoration. Never collides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stone {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Brightness multiplier applied to the base stone colour.
    pub shade: f32,
}

#[derive(Debug, Clone)]
pub struct Room {
    pub width: f32,
    pub height: f32,
    pub floor_y: f32,
    platforms: SmallVec<[BoxCollider; 10]>,
    stones: Vec<Stone>,
}

impl Room {
    /// Build the demo room for a `screen_w` x `screen_h` viewport.
    pub fn new(screen_w: f32, screen_h: f32, rng: &mut Rng) -> Self {
        let width = screen_w * ROOM_WIDTH_FACTOR;
        let height = screen_h;
        let floor_y = height - FLOOR_HEIGHT;

        let mut platforms: SmallVec<[BoxCollider; 10]> = PLATFORM_LAYOUT
            .iter()
            .map(|&(x, rise, w)| BoxCollider::new(x, floor_y - rise, w, PLATFORM_THICKNESS))
            .collect();
        platforms.push(BoxCollider::new(0.0, 0.0, WALL_THICKNESS, height));
        platforms.push(BoxCollider::new(width - WALL_THICKNESS, 0.0, WALL_THICKNESS, height));

        let stones = (0..STONE_COUNT)
            .map(|_| {
                let w = 4.0 + rng.f32() * 10.0;
                let h = 3.0 + rng.f32() * 6.0;
                Stone {
                    x: WALL_THICKNESS + rng.f32() * (width - 2.0 * WALL_THICKNESS - w).max(0.0),
                    y: rng.f32() * (floor_y - h).max(0.0),
                    w,
                    h,
                    shade: 0.7 + rng.f32() * 0.6,
                }
            })
            .collect();

        Self {
            width,
            height,
            floor_y,
            platforms,
            stones,
        }
    }

    /// Room with explicit solid geometry and no decoration.
    pub fn with_platforms(
        width: f32,
        height: f32,
        floor_y: f32,
        platforms: impl IntoIterator<Item = BoxCollider>,
    ) -> Self {
        Self {
            width,
            height,
            floor_y,
            platforms: platforms.into_iter().collect(),
            stones: Vec::new(),
        }
    }

    /// Every solid rectangle, walls included.
    pub fn platforms(&self) -> &[BoxCollider] {
        &self.platforms
    }

    pub fn stones(&self) -> &[Stone] {
        &self.stones
    }

    fn is_wall(&self, p: &BoxCollider) -> bool {
        p.h >= self.height
    }

    /// Draw the room as seen by a camera scrolled to `camera_x`.
    pub fn render(&self, canvas: &mut dyn Canvas, camera_x: f32) {
        let screen_w = canvas.width() as f32;
        let screen_h = canvas.height() as f32;

        canvas.gradient_rect_v(Rectangle::new(0.0, 0.0, screen_w, screen_h), SKY_TOP, SKY_BOTTOM);
        self.render_parallax(canvas, camera_x, screen_w);

        for stone in &self.stones {
            let sx = stone.x - camera_x;
            if sx + stone.w < 0.0 || sx > screen_w {
                continue;
            }
            canvas.fill_rect(
                Rectangle::new(sx, stone.y, stone.w, stone.h),
                brighten(FAR_BRICK, stone.shade),
            );
        }

        for p in self.platforms.iter().filter(|p| !self.is_wall(p)) {
            if p.is_outside_span(camera_x, screen_w) {
                continue;
            }
            let x = p.x - camera_x;
            canvas.fill_rect(Rectangle::new(x, p.y, p.w, p.h), PLATFORM_COLOR);
            canvas.fill_rect(Rectangle::new(x, p.y, p.w, 2.0), PLATFORM_EDGE);
        }

        canvas.fill_rect(
            Rectangle::new(0.0, self.floor_y, screen_w, self.height - self.floor_y),
            FLOOR_COLOR,
        );
        canvas.fill_rect(Rectangle::new(0.0, self.floor_y, screen_w, 2.0), FLOOR_EDGE);

        for wall in self.platforms.iter().filter(|p| self.is_wall(p)) {
            if wall.is_outside_span(camera_x, screen_w) {
                continue;
            }
            canvas.fill_rect(
                Rectangle::new(wall.x - camera_x, wall.y, wall.w, wall.h),
                WALL_COLOR,
            );
        }
    }

    /// Two background layers scrolling slower than the room.
    fn render_parallax(&self, canvas: &mut dyn Canvas, camera_x: f32, screen_w: f32) {
        const FAR_SPACING: f32 = 48.0;
        const NEAR_SPACING: f32 = 96.0;

        let far_shift = (camera_x * 0.2).rem_euclid(FAR_SPACING);
        let mut x = -far_shift;
        while x < screen_w {
            canvas.fill_rect(Rectangle::new(x, 20.0, 20.0, self.floor_y - 40.0), FAR_BRICK);
            x += FAR_SPACING;
        }

        let near_shift = (camera_x * 0.5).rem_euclid(NEAR_SPACING);
        let mut x = -near_shift;
        while x < screen_w {
            canvas.fill_rect(Rectangle::new(x, 0.0, 14.0, self.floor_y), PILLAR);
            x += NEAR_SPACING;
        }
    }
}
