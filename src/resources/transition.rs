//! Fade-to-black screen transition.
//!
//! A [`Transition`] masks a screen swap behind a full-screen black overlay:
//!
//! ```text
//! Idle --start--> FadingOut --fade_out--> Holding --hold--> FadingIn --fade_in--> Idle
//!                                  (swap + on_midpoint)             (on_complete)
//! ```
//!
//! Only one transition runs at a time. [`Transition::start`] while another is
//! active is rejected and returns `false`; nothing is queued.
//!
//! The transition does not own the screens. [`Transition::update`] reports
//! the midpoint and completion as a [`TransitionStep`] and
//! [`Game`](crate::game::Game) performs the swap and re-enables input.

use std::fmt;

use log::{debug, info};
use raylib::prelude::{Color, Rectangle};

use crate::resources::gamestate::GameStates;
use crate::systems::render::{Canvas, fade};

/// Phase boundaries tolerate this much accumulated float error, so that e.g.
/// five 0.1 s steps land exactly on a 0.5 s fade.
const PHASE_EPSILON: f32 = 1e-4;

const DEFAULT_FADE_OUT: f32 = 0.5;
const DEFAULT_HOLD: f32 = 0.2;
const DEFAULT_FADE_IN: f32 = 0.5;

/// One-shot callback run at a transition milestone.
pub type TransitionCallback = Box<dyn FnOnce()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    #[default]
    Idle,
    FadingOut,
    Holding,
    FadingIn,
}

/// Durations (seconds) and optional callbacks for one transition.
pub struct TransitionOptions {
    pub fade_out: f32,
    pub hold: f32,
    pub fade_in: f32,
    pub on_midpoint: Option<TransitionCallback>,
    pub on_complete: Option<TransitionCallback>,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self::new(DEFAULT_FADE_OUT, DEFAULT_HOLD, DEFAULT_FADE_IN)
    }
}

impl TransitionOptions {
    pub fn new(fade_out: f32, hold: f32, fade_in: f32) -> Self {
        Self {
            fade_out,
            hold,
            fade_in,
            on_midpoint: None,
            on_complete: None,
        }
    }

    /// Run `callback` once, when the screen is swapped.
    pub fn on_midpoint(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_midpoint = Some(Box::new(callback));
        self
    }

    /// Run `callback` once, when the overlay is gone again.
    pub fn on_complete(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for TransitionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionOptions")
            .field("fade_out", &self.fade_out)
            .field("hold", &self.hold)
            .field("fade_in", &self.fade_in)
            .field("on_midpoint", &self.on_midpoint.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

/// What happened during one [`Transition::update`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStep {
    None,
    /// The screen is fully covered: swap to this state now, then call
    /// [`Transition::fire_midpoint`].
    Midpoint(GameStates),
    /// The overlay is gone: input may resume.
    Completed,
}

pub struct Transition {
    phase: TransitionPhase,
    timer: f32,
    alpha: f32,
    target_state: Option<GameStates>,
    fade_out: f32,
    hold: f32,
    fade_in: f32,
    on_midpoint: Option<TransitionCallback>,
    on_complete: Option<TransitionCallback>,
}

impl Default for Transition {
    fn default() -> Self {
        Self::new()
    }
}

fn progress(timer: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        1.0
    } else {
        (timer / duration).clamp(0.0, 1.0)
    }
}

fn reached(timer: f32, duration: f32) -> bool {
    timer + PHASE_EPSILON >= duration
}

impl Transition {
    pub fn new() -> Self {
        Self {
            phase: TransitionPhase::Idle,
            timer: 0.0,
            alpha: 0.0,
            target_state: None,
            fade_out: DEFAULT_FADE_OUT,
            hold: DEFAULT_HOLD,
            fade_in: DEFAULT_FADE_IN,
            on_midpoint: None,
            on_complete: None,
        }
    }

    /// Begin a transition towards `target`.
    ///
    /// Returns `false`, leaving the running transition untouched, if one is
    /// already active.
    pub fn start(&mut self, target: GameStates, options: TransitionOptions) -> bool {
        if self.is_active() {
            debug!(
                "Transition to {} rejected: already transitioning to {:?}",
                target, self.target_state
            );
            return false;
        }
        info!(
            "Transition to {} (out {:.2}s, hold {:.2}s, in {:.2}s)",
            target, options.fade_out, options.hold, options.fade_in
        );
        self.phase = TransitionPhase::FadingOut;
        self.timer = 0.0;
        self.alpha = 0.0;
        self.target_state = Some(target);
        self.fade_out = options.fade_out;
        self.hold = options.hold;
        self.fade_in = options.fade_in;
        self.on_midpoint = options.on_midpoint;
        self.on_complete = options.on_complete;
        true
    }

    pub fn update(&mut self, dt: f32) -> TransitionStep {
        match self.phase {
            TransitionPhase::Idle => TransitionStep::None,
            TransitionPhase::FadingOut => {
                self.timer += dt;
                self.alpha = progress(self.timer, self.fade_out);
                if !reached(self.timer, self.fade_out) {
                    return TransitionStep::None;
                }
                self.phase = TransitionPhase::Holding;
                self.timer = 0.0;
                self.alpha = 1.0;
                match self.target_state {
                    Some(target) => TransitionStep::Midpoint(target),
                    None => TransitionStep::None,
                }
            }
            TransitionPhase::Holding => {
                self.timer += dt;
                self.alpha = 1.0;
                if reached(self.timer, self.hold) {
                    self.phase = TransitionPhase::FadingIn;
                    self.timer = 0.0;
                }
                TransitionStep::None
            }
            TransitionPhase::FadingIn => {
                self.timer += dt;
                self.alpha = 1.0 - progress(self.timer, self.fade_in);
                if !reached(self.timer, self.fade_in) {
                    return TransitionStep::None;
                }
                self.phase = TransitionPhase::Idle;
                self.timer = 0.0;
                self.alpha = 0.0;
                if let Some(callback) = self.on_complete.take() {
                    callback();
                }
                TransitionStep::Completed
            }
        }
    }

    /// Run the `on_midpoint` callback, if it has not run yet.
    ///
    /// Called by the owner once the swap reported by
    /// [`TransitionStep::Midpoint`] is done.
    pub fn fire_midpoint(&mut self) {
        if let Some(callback) = self.on_midpoint.take() {
            callback();
        }
    }

    /// Draw the black overlay at the current alpha.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        if self.phase == TransitionPhase::Idle && self.alpha <= 0.0 {
            return;
        }
        let full = Rectangle::new(0.0, 0.0, canvas.width() as f32, canvas.height() as f32);
        canvas.fill_rect(full, fade(Color::BLACK, self.alpha));
    }

    pub fn is_active(&self) -> bool {
        self.phase != TransitionPhase::Idle
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Target of the current (or most recent) transition.
    pub fn target_state(&self) -> Option<GameStates> {
        self.target_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::render::{DrawCall, RecordingCanvas};
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
        (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)))
    }

    #[test]
    fn test_alpha_profile_and_callbacks() {
        let (mid, done) = counter();
        let (mid_c, done_c) = (mid.clone(), done.clone());
        let mut t = Transition::new();
        assert!(t.start(
            GameStates::Playing,
            TransitionOptions::new(0.5, 0.2, 0.5)
                .on_midpoint(move || mid_c.set(mid_c.get() + 1))
                .on_complete(move || done_c.set(done_c.get() + 1)),
        ));

        let mut alphas = Vec::new();
        let mut steps = Vec::new();
        for _ in 0..12 {
            let step = t.update(0.1);
            if matches!(step, TransitionStep::Midpoint(_)) {
                t.fire_midpoint();
            }
            steps.push(step);
            alphas.push(t.alpha());
        }

        // Fade out: strictly increasing, ending at 1
        for i in 1..5 {
            assert!(alphas[i] > alphas[i - 1], "fade out not increasing at {i}: {alphas:?}");
        }
        assert!(alphas[0] > 0.0);
        assert_eq!(alphas[4], 1.0);
        // Hold
        assert_eq!(alphas[5], 1.0);
        assert_eq!(alphas[6], 1.0);
        // Fade in: strictly decreasing, ending at 0
        assert!(alphas[7] < 1.0);
        for i in 8..12 {
            assert!(alphas[i] < alphas[i - 1], "fade in not decreasing at {i}: {alphas:?}");
        }
        assert_eq!(alphas[11], 0.0);

        // Midpoint at elapsed 0.5 (step 5), completion at 1.2 (step 12)
        assert_eq!(steps[4], TransitionStep::Midpoint(GameStates::Playing));
        assert_eq!(steps[11], TransitionStep::Completed);
        assert_eq!(
            steps
                .iter()
                .filter(|s| matches!(s, TransitionStep::Midpoint(_)))
                .count(),
            1
        );
        assert_eq!(mid.get(), 1);
        assert_eq!(done.get(), 1);
        assert_eq!(t.phase(), TransitionPhase::Idle);

        // Nothing fires again once idle
        assert_eq!(t.update(0.1), TransitionStep::None);
        assert_eq!(mid.get(), 1);
        assert_eq!(done.get(), 1);
    }

    #[test]
    fn test_midpoint_callback_fires_on_fifth_step() {
        let (mid, _) = counter();
        let mid_c = mid.clone();
        let mut t = Transition::new();
        t.start(
            GameStates::Story,
            TransitionOptions::new(0.5, 0.2, 0.5).on_midpoint(move || mid_c.set(mid_c.get() + 1)),
        );
        for _ in 0..4 {
            t.update(0.1);
        }
        assert_eq!(mid.get(), 0);
        assert_eq!(t.update(0.1), TransitionStep::Midpoint(GameStates::Story));
        // Reaching the midpoint alone does not run the callback
        assert_eq!(mid.get(), 0);
        t.fire_midpoint();
        t.fire_midpoint();
        assert_eq!(mid.get(), 1);
        assert_eq!(t.phase(), TransitionPhase::Holding);
    }

    #[test]
    fn test_start_while_active_is_rejected() {
        let mut t = Transition::new();
        assert!(t.start(GameStates::Playing, TransitionOptions::new(0.5, 0.3, 0.5)));
        t.update(0.2);
        let timer = t.timer();

        assert!(!t.start(GameStates::Start, TransitionOptions::new(2.0, 2.0, 2.0)));
        assert_eq!(t.target_state(), Some(GameStates::Playing));
        assert_eq!(t.timer(), timer);
        assert_eq!(t.phase(), TransitionPhase::FadingOut);

        // Original timings still apply: 0.3 more seconds reach the midpoint
        assert_eq!(t.update(0.3), TransitionStep::Midpoint(GameStates::Playing));
    }

    #[test]
    fn test_start_accepted_again_after_completion() {
        let mut t = Transition::new();
        t.start(GameStates::Playing, TransitionOptions::new(0.1, 0.1, 0.1));
        for _ in 0..3 {
            t.update(0.1);
        }
        assert!(!t.is_active());
        assert!(t.start(GameStates::Start, TransitionOptions::default()));
    }

    #[test]
    fn test_zero_durations_complete_in_three_updates() {
        let mut t = Transition::new();
        t.start(GameStates::Story, TransitionOptions::new(0.0, 0.0, 0.0));
        assert_eq!(t.update(0.016), TransitionStep::Midpoint(GameStates::Story));
        assert_eq!(t.update(0.016), TransitionStep::None);
        assert_eq!(t.update(0.016), TransitionStep::Completed);
        assert_eq!(t.alpha(), 0.0);
    }

    #[test]
    fn test_render_only_while_visible() {
        let mut canvas = RecordingCanvas::new(320, 180);
        let mut t = Transition::new();
        t.render(&mut canvas);
        assert!(canvas.calls().is_empty());

        t.start(GameStates::Playing, TransitionOptions::new(0.5, 0.2, 0.5));
        t.update(0.25);
        t.render(&mut canvas);
        match &canvas.calls()[0] {
            DrawCall::Rect { rect, color } => {
                assert_eq!(*rect, Rectangle::new(0.0, 0.0, 320.0, 180.0));
                assert_eq!(color.a, 128);
            }
            other => panic!("unexpected call {other:?}"),
        }
    }
}
