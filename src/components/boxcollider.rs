//! Axis-aligned rectangle used for static room geometry and body bounds.
//!
//! All coordinates are room-space pixels with the origin at the top-left and
//! Y growing downward.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxCollider {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl BoxCollider {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// AABB vs AABB overlap test. Touching edges do not count as overlap, so
    /// a body resting flush against a face is not pushed again next frame.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// True when the horizontal span `[view_x, view_x + view_w]` misses this box entirely.
    pub fn is_outside_span(&self, view_x: f32, view_w: f32) -> bool {
        self.right() < view_x || self.x > view_x + view_w
    }
}
