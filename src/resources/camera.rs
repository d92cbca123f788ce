//! Side-scrolling camera.
//!
//! The camera only scrolls horizontally. It keeps the followed point inside
//! a dead zone around the screen center and eases towards it once it leaves,
//! moving a fixed fraction of the remaining distance per update.
//!
//! The easing factor is applied per call, not per second, so scroll speed
//! depends on frame rate.

/// Width of the dead zone as a fraction of the screen width.
pub const DEAD_ZONE_FRACTION: f32 = 0.3;
/// Fraction of the remaining distance covered per update.
pub const FOLLOW_LERP: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Horizontal scroll offset in room pixels.
    pub x: f32,
    pub screen_width: f32,
    pub room_width: f32,
    pub dead_zone: f32,
}

impl Camera {
    pub fn new(screen_width: f32, room_width: f32) -> Self {
        Self {
            x: 0.0,
            screen_width,
            room_width,
            dead_zone: screen_width * DEAD_ZONE_FRACTION,
        }
    }

    /// Largest valid scroll offset.
    pub fn max_x(&self) -> f32 {
        (self.room_width - self.screen_width).max(0.0)
    }

    fn clamp(&mut self) {
        self.x = self.x.clamp(0.0, self.max_x());
    }

    /// Ease towards keeping `target_x` (room space) inside the dead zone.
    pub fn follow(&mut self, target_x: f32) {
        let center = self.x + self.screen_width * 0.5;
        let offset = target_x - center;
        let half_zone = self.dead_zone * 0.5;

        let excess = if offset > half_zone {
            offset - half_zone
        } else if offset < -half_zone {
            offset + half_zone
        } else {
            0.0
        };
        if excess != 0.0 {
            let desired = self.x + excess;
            self.x += (desired - self.x) * FOLLOW_LERP;
        }
        self.clamp();
    }

    /// Center on `target_x` immediately.
    pub fn snap_to(&mut self, target_x: f32) {
        self.x = target_x - self.screen_width * 0.5;
        self.clamp();
    }

    /// Left edge of the visible span, rounded to whole pixels for drawing.
    pub fn render_x(&self) -> f32 {
        self.x.round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_dead_zone_holds_camera_still() {
        let mut cam = Camera::new(320.0, 800.0);
        cam.x = 100.0;
        // Center is 260, half zone is 48
        cam.follow(300.0);
        cam.follow(215.0);
        assert_eq!(cam.x, 100.0);
    }

    #[test]
    fn test_follow_eases_ten_percent_of_excess() {
        let mut cam = Camera::new(320.0, 800.0);
        cam.x = 100.0;
        // offset 100, excess past the zone edge 52
        cam.follow(360.0);
        assert!((cam.x - 105.2).abs() < 1e-4);
        cam.x = 100.0;
        cam.follow(160.0);
        assert!((cam.x - 94.8).abs() < 1e-4);
    }

    #[test]
    fn test_follow_converges_to_zone_edge() {
        let mut cam = Camera::new(320.0, 800.0);
        for _ in 0..300 {
            cam.follow(400.0);
        }
        let center = cam.x + 160.0;
        assert!((400.0 - center - 48.0).abs() < 0.01);
    }

    #[test]
    fn test_snap_clamps() {
        let mut cam = Camera::new(320.0, 800.0);
        cam.snap_to(40.0);
        assert_eq!(cam.x, 0.0);
        cam.snap_to(10_000.0);
        assert_eq!(cam.x, 480.0);
        cam.snap_to(400.0);
        assert_eq!(cam.x, 240.0);
    }

    #[test]
    fn test_room_narrower_than_screen_pins_to_zero() {
        let mut cam = Camera::new(320.0, 200.0);
        cam.follow(1000.0);
        assert_eq!(cam.x, 0.0);
    }

    proptest! {
        #[test]
        fn prop_camera_stays_in_room(targets in prop::collection::vec(-5000.0f32..5000.0, 1..200)) {
            let mut cam = Camera::new(320.0, 800.0);
            for t in targets {
                cam.follow(t);
                prop_assert!(cam.x >= 0.0 && cam.x <= 480.0, "x = {}", cam.x);
            }
        }
    }
}
