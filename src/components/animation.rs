//! Sprite animation playback.
//!
//! An [`Animator`] is a playback cursor over one shared
//! [`SpriteSheet`]: which animation is active, which frame of it is showing
//! and how long that frame has been up. Animations always loop.

use std::rc::Rc;

use log::warn;
use raylib::prelude::{Rectangle, Vector2};

use crate::resources::spritesheet::{FrameRect, SpriteSheet};
use crate::systems::render::Canvas;

#[derive(Debug, Clone)]
pub struct Animator {
    sheet: Rc<SpriteSheet>,
    current: Option<String>,
    frame_index: usize,
    frame_timer: f32,
    playing: bool,
}

impl Animator {
    pub fn new(sheet: Rc<SpriteSheet>) -> Self {
        Self {
            sheet,
            current: None,
            frame_index: 0,
            frame_timer: 0.0,
            playing: false,
        }
    }

    /// Start playing `name` from its first frame.
    ///
    /// Asking for the animation that is already playing does nothing, so this
    /// can be called every frame. Unknown names are logged and ignored.
    pub fn play(&mut self, name: &str) {
        if self.playing && self.current.as_deref() == Some(name) {
            return;
        }
        if self.sheet.animation(name).is_none() {
            warn!("Animator: unknown animation '{}'", name);
            return;
        }
        self.current = Some(name.to_string());
        self.frame_index = 0;
        self.frame_timer = 0.0;
        self.playing = true;
    }

    /// Freeze on the current frame.
    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn sheet(&self) -> &SpriteSheet {
        &self.sheet
    }

    pub fn has_animation(&self, name: &str) -> bool {
        self.sheet.animation(name).is_some()
    }

    pub fn current_animation(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }
        let Some(anim) = self.current.as_deref().and_then(|n| self.sheet.animation(n)) else {
            return;
        };
        self.frame_timer += dt;
        if self.frame_timer >= anim.frame_duration {
            self.frame_timer -= anim.frame_duration;
            self.frame_index = (self.frame_index + 1) % anim.frames.len();
        }
    }

    /// Source rectangle of the frame currently showing, if any animation was
    /// ever started.
    pub fn current_frame(&self) -> Option<&FrameRect> {
        let name = self.current.as_deref()?;
        let Some(anim) = self.sheet.animation(name) else {
            warn!("Animator: unknown animation '{}'", name);
            return None;
        };
        let frame_name = anim.frames.get(self.frame_index % anim.frames.len())?;
        self.sheet.frame(frame_name)
    }

    /// Draw the current frame with its top-left at `pos`.
    ///
    /// `scale` stretches the sprite around its bottom-center, so squash and
    /// stretch keep the feet planted. Destination coordinates are rounded to
    /// whole pixels.
    pub fn draw(&self, canvas: &mut dyn Canvas, pos: Vector2, flip_h: bool, scale: Vector2) {
        if !self.sheet.is_loaded() {
            return;
        }
        let Some(frame) = self.current_frame() else {
            return;
        };

        let base_w = frame.w * self.sheet.scale();
        let base_h = frame.h * self.sheet.scale();
        let w = base_w * scale.x;
        let h = base_h * scale.y;
        let x = pos.x + (base_w - w) * 0.5;
        let y = pos.y + (base_h - h);

        let src = Rectangle::new(frame.x, frame.y, frame.w, frame.h);
        let dest = Rectangle::new(x.round(), y.round(), w.round(), h.round());
        canvas.draw_texture_region(self.sheet.texture_key(), src, dest, flip_h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::spritesheet::tests::{HERO_JSON, StubLoader};
    use crate::systems::render::{DrawCall, RecordingCanvas};
    use std::path::Path;

    fn sheet(loaded: bool) -> Rc<SpriteSheet> {
        let mut sheet = SpriteSheet::parse(HERO_JSON, Path::new("assets")).unwrap();
        if loaded {
            sheet.attach_texture(&mut StubLoader::ok()).unwrap();
        }
        Rc::new(sheet)
    }

    #[test]
    fn test_new_animator_has_no_frame() {
        let animator = Animator::new(sheet(true));
        assert!(!animator.is_playing());
        assert!(animator.current_frame().is_none());
    }

    #[test]
    fn test_frames_advance_and_wrap() {
        let mut animator = Animator::new(sheet(true));
        animator.play("run");
        assert_eq!(animator.frame_index(), 0);
        animator.update(0.1);
        assert_eq!(animator.frame_index(), 1);
        animator.update(0.1);
        assert_eq!(animator.frame_index(), 2);
        animator.update(0.1);
        assert_eq!(animator.frame_index(), 0);
        assert_eq!(animator.current_frame().unwrap().x, 0.0);
    }

    #[test]
    fn test_play_same_animation_does_not_restart() {
        let mut animator = Animator::new(sheet(true));
        animator.play("run");
        animator.update(0.1);
        animator.play("run");
        assert_eq!(animator.frame_index(), 1);

        animator.play("idle");
        assert_eq!(animator.frame_index(), 0);
        assert_eq!(animator.current_animation(), Some("idle"));
    }

    #[test]
    fn test_unknown_animation_leaves_state_unchanged() {
        let mut animator = Animator::new(sheet(true));
        animator.play("nope");
        assert!(animator.current_animation().is_none());
        assert!(animator.current_frame().is_none());

        animator.play("idle");
        animator.play("nope");
        assert_eq!(animator.current_animation(), Some("idle"));
    }

    #[test]
    fn test_stop_freezes_frame() {
        let mut animator = Animator::new(sheet(true));
        animator.play("run");
        animator.update(0.1);
        animator.stop();
        animator.update(1.0);
        assert_eq!(animator.frame_index(), 1);
    }

    #[test]
    fn test_draw_skipped_until_loaded() {
        let mut animator = Animator::new(sheet(false));
        animator.play("idle");
        let mut canvas = RecordingCanvas::new(320, 180);
        animator.draw(&mut canvas, Vector2::new(0.0, 0.0), false, Vector2::new(1.0, 1.0));
        assert!(canvas.calls().is_empty());
    }

    #[test]
    fn test_draw_scales_from_bottom_center_and_rounds() {
        let mut animator = Animator::new(sheet(true));
        animator.play("idle");
        let mut canvas = RecordingCanvas::new(320, 180);
        // Sheet scale 2 makes the frame 32x32; squash to 1.5 wide, 0.5 tall
        animator.draw(&mut canvas, Vector2::new(10.3, 20.0), true, Vector2::new(1.5, 0.5));

        match &canvas.calls()[0] {
            DrawCall::Texture {
                src, dest, flip_h, ..
            } => {
                assert_eq!(*src, Rectangle::new(0.0, 0.0, 16.0, 16.0));
                // x = 10.3 + (32 - 48) / 2 = 2.3, y = 20 + (32 - 16) = 36
                assert_eq!(*dest, Rectangle::new(2.0, 36.0, 48.0, 16.0));
                assert!(*flip_h);
            }
            other => panic!("unexpected call {other:?}"),
        }
    }
}
