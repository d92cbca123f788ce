//! Drawing surface abstraction.
//!
//! The simulation never talks to raylib directly. Screens draw into a
//! [`Canvas`], an immediate-mode 2D surface with a translation stack.
//!
//! - [`RaylibCanvas`] forwards every call to a raylib draw handle (usually the
//!   texture mode of the fixed-resolution [`RenderTarget`](crate::resources::rendertarget::RenderTarget)).
//! - [`RecordingCanvas`] keeps a list of [`DrawCall`]s instead of drawing. It
//!   backs the headless runner and the tests.

use std::ffi::CString;

use raylib::ffi;
use raylib::prelude::*;
use smallvec::SmallVec;

use crate::resources::texturestore::TextureStore;

/// Return `color` with its alpha replaced by `alpha` in `[0, 1]`.
pub fn fade(color: Color, alpha: f32) -> Color {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::new(color.r, color.g, color.b, a)
}

/// Multiply the RGB channels of `color` by `factor`, saturating at 255.
pub fn brighten(color: Color, factor: f32) -> Color {
    let scale = |c: u8| ((c as f32) * factor).clamp(0.0, 255.0) as u8;
    Color::new(scale(color.r), scale(color.g), scale(color.b), color.a)
}

/// Immediate-mode 2D drawing surface used by screens and game objects.
///
/// Every positional argument is affected by the current offset, the sum of
/// all values pushed with [`Canvas::push_offset`].
pub trait Canvas {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rectangle, color: Color);
    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Color);
    /// Vertical linear gradient from `top` to `bottom`.
    fn gradient_rect_v(&mut self, rect: Rectangle, top: Color, bottom: Color);
    /// Filled circle fading from `inner` at the center to `outer` at the rim.
    fn radial_gradient(&mut self, center: Vector2, radius: f32, inner: Color, outer: Color);
    fn draw_text(&mut self, text: &str, pos: Vector2, size: i32, color: Color);
    fn measure_text(&self, text: &str, size: i32) -> i32;
    /// Blit `src` from the texture registered under `key` into `dest`.
    fn draw_texture_region(&mut self, key: &str, src: Rectangle, dest: Rectangle, flip_h: bool);

    fn push_offset(&mut self, dx: f32, dy: f32);
    fn pop_offset(&mut self);
}

type OffsetStack = SmallVec<[Vector2; 4]>;

fn total_offset(stack: &OffsetStack) -> Vector2 {
    stack
        .iter()
        .fold(Vector2::new(0.0, 0.0), |acc, o| Vector2::new(acc.x + o.x, acc.y + o.y))
}

fn shift_rect(rect: Rectangle, offset: Vector2) -> Rectangle {
    Rectangle::new(rect.x + offset.x, rect.y + offset.y, rect.width, rect.height)
}

fn shift_point(point: Vector2, offset: Vector2) -> Vector2 {
    Vector2::new(point.x + offset.x, point.y + offset.y)
}

/// [`Canvas`] backed by any raylib draw handle.
pub struct RaylibCanvas<'a, D: RaylibDraw> {
    d: &'a mut D,
    textures: &'a TextureStore,
    width: i32,
    height: i32,
    offsets: OffsetStack,
}

impl<'a, D: RaylibDraw> RaylibCanvas<'a, D> {
    pub fn new(d: &'a mut D, textures: &'a TextureStore, width: i32, height: i32) -> Self {
        Self {
            d,
            textures,
            width,
            height,
            offsets: SmallVec::new(),
        }
    }

    fn offset(&self) -> Vector2 {
        total_offset(&self.offsets)
    }
}

impl<D: RaylibDraw> Canvas for RaylibCanvas<'_, D> {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn clear(&mut self, color: Color) {
        self.d.clear_background(color);
    }

    fn fill_rect(&mut self, rect: Rectangle, color: Color) {
        let rect = shift_rect(rect, self.offset());
        self.d.draw_rectangle_rec(rect, color);
    }

    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Color) {
        let center = shift_point(center, self.offset());
        self.d.draw_circle_v(center, radius, color);
    }

    fn gradient_rect_v(&mut self, rect: Rectangle, top: Color, bottom: Color) {
        let r = shift_rect(rect, self.offset());
        self.d.draw_rectangle_gradient_v(
            r.x.round() as i32,
            r.y.round() as i32,
            r.width.round() as i32,
            r.height.round() as i32,
            top,
            bottom,
        );
    }

    fn radial_gradient(&mut self, center: Vector2, radius: f32, inner: Color, outer: Color) {
        let c = shift_point(center, self.offset());
        self.d
            .draw_circle_gradient(c.x.round() as i32, c.y.round() as i32, radius, inner, outer);
    }

    fn draw_text(&mut self, text: &str, pos: Vector2, size: i32, color: Color) {
        let p = shift_point(pos, self.offset());
        self.d
            .draw_text(text, p.x.round() as i32, p.y.round() as i32, size, color);
    }

    fn measure_text(&self, text: &str, size: i32) -> i32 {
        let Ok(c_text) = CString::new(text) else {
            return 0;
        };
        unsafe { ffi::MeasureText(c_text.as_ptr(), size) }
    }

    fn draw_texture_region(&mut self, key: &str, src: Rectangle, dest: Rectangle, flip_h: bool) {
        let Some(texture) = self.textures.get(key) else {
            return;
        };
        let mut src = src;
        if flip_h {
            // Negative source width mirrors the blit horizontally
            src.width = -src.width;
        }
        let dest = shift_rect(dest, self.offset());
        self.d
            .draw_texture_pro(texture, src, dest, Vector2::new(0.0, 0.0), 0.0, Color::WHITE);
    }

    fn push_offset(&mut self, dx: f32, dy: f32) {
        self.offsets.push(Vector2::new(dx, dy));
    }

    fn pop_offset(&mut self) {
        self.offsets.pop();
    }
}

/// A single recorded drawing operation, in surface coordinates (offset applied).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Rect {
        rect: Rectangle,
        color: Color,
    },
    Circle {
        center: Vector2,
        radius: f32,
        color: Color,
    },
    GradientV {
        rect: Rectangle,
        top: Color,
        bottom: Color,
    },
    Radial {
        center: Vector2,
        radius: f32,
        inner: Color,
        outer: Color,
    },
    Text {
        text: String,
        pos: Vector2,
        size: i32,
        color: Color,
    },
    Texture {
        key: String,
        src: Rectangle,
        dest: Rectangle,
        flip_h: bool,
    },
}

/// [`Canvas`] that records draw calls instead of rasterizing them.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    width: i32,
    height: i32,
    offsets: OffsetStack,
    calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            offsets: SmallVec::new(),
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Drain the recorded calls, leaving the canvas empty for the next frame.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Current offset depth; zero after a balanced frame.
    pub fn offset_depth(&self) -> usize {
        self.offsets.len()
    }

    fn record(&mut self, call: DrawCall) {
        self.calls.push(call);
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn clear(&mut self, color: Color) {
        self.record(DrawCall::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rectangle, color: Color) {
        let rect = shift_rect(rect, total_offset(&self.offsets));
        self.record(DrawCall::Rect { rect, color });
    }

    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Color) {
        let center = shift_point(center, total_offset(&self.offsets));
        self.record(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn gradient_rect_v(&mut self, rect: Rectangle, top: Color, bottom: Color) {
        let rect = shift_rect(rect, total_offset(&self.offsets));
        self.record(DrawCall::GradientV { rect, top, bottom });
    }

    fn radial_gradient(&mut self, center: Vector2, radius: f32, inner: Color, outer: Color) {
        let center = shift_point(center, total_offset(&self.offsets));
        self.record(DrawCall::Radial {
            center,
            radius,
            inner,
            outer,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vector2, size: i32, color: Color) {
        let pos = shift_point(pos, total_offset(&self.offsets));
        self.record(DrawCall::Text {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }

    fn measure_text(&self, text: &str, size: i32) -> i32 {
        // Rough metric of raylib's default font
        text.chars().count() as i32 * (size / 2 + 1)
    }

    fn draw_texture_region(&mut self, key: &str, src: Rectangle, dest: Rectangle, flip_h: bool) {
        let dest = shift_rect(dest, total_offset(&self.offsets));
        self.record(DrawCall::Texture {
            key: key.to_string(),
            src,
            dest,
            flip_h,
        });
    }

    fn push_offset(&mut self, dx: f32, dy: f32) {
        self.offsets.push(Vector2::new(dx, dy));
    }

    fn pop_offset(&mut self) {
        self.offsets.pop();
    }
}
