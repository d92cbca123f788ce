//! Render target for fixed-resolution rendering.
//!
//! The game draws into a texture at its internal resolution, which is then
//! scaled to fit the window with letterboxing/pillarboxing as needed.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// Destination rectangle that fits a `game_w` x `game_h` image into a
/// `window_w` x `window_h` window, preserving aspect ratio and centering.
pub fn letterbox(game_w: f32, game_h: f32, window_w: f32, window_h: f32) -> Rectangle {
    let game_aspect = game_w / game_h;
    let window_aspect = window_w / window_h;

    if window_aspect > game_aspect {
        // Window is wider than game - pillarbox (bars on the sides)
        let scaled_w = game_w * (window_h / game_h);
        Rectangle::new((window_w - scaled_w) / 2.0, 0.0, scaled_w, window_h)
    } else {
        // Window is taller than game - letterbox (bars top/bottom)
        let scaled_h = game_h * (window_w / game_w);
        Rectangle::new(0.0, (window_h - scaled_h) / 2.0, window_w, scaled_h)
    }
}

pub struct RenderTarget {
    pub texture: RenderTexture2D,
    pub game_width: u32,
    pub game_height: u32,
}

impl RenderTarget {
    /// Create a render target at the game resolution, nearest filtered.
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create render texture: {}", e))?;

        let target = Self {
            texture,
            game_width: width,
            game_height: height,
        };
        target.apply_filter();

        Ok(target)
    }

    /// Pixel art is always sampled nearest-neighbour.
    fn apply_filter(&self) {
        unsafe {
            ffi::SetTextureFilter(
                self.texture.texture,
                TextureFilter::TEXTURE_FILTER_POINT as i32,
            );
        }
    }

    /// Source rectangle with negative height to flip the Y axis,
    /// compensating for OpenGL's inverted texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.game_width as f32,
            height: -(self.game_height as f32),
        }
    }

    /// Where to draw the texture in a window of the given size.
    pub fn dest_rect(&self, window_w: i32, window_h: i32) -> Rectangle {
        letterbox(
            self.game_width as f32,
            self.game_height as f32,
            window_w as f32,
            window_h as f32,
        )
    }
}
