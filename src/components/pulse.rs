//! Ping-pong alpha used for blinking prompts.
//!
//! [`Pulse`] moves its value linearly between `min` and `max` at `speed`
//! units per second and reverses direction when it reaches either end.

/// Slowest alpha a prompt fades down to.
pub const PROMPT_MIN_ALPHA: f32 = 0.3;
pub const PROMPT_MAX_ALPHA: f32 = 1.0;
/// Alpha units per second.
pub const PROMPT_FADE_SPEED: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    pub value: f32,
    pub min: f32,
    pub max: f32,
    pub speed: f32,
    /// `1.0` while rising, `-1.0` while falling.
    direction: f32,
}

impl Pulse {
    /// Starts at `max`, falling.
    pub fn new(min: f32, max: f32, speed: f32) -> Self {
        Self {
            value: max,
            min,
            max,
            speed,
            direction: -1.0,
        }
    }

    /// The "press any key" prompt pulse.
    pub fn prompt() -> Self {
        Self::new(PROMPT_MIN_ALPHA, PROMPT_MAX_ALPHA, PROMPT_FADE_SPEED)
    }

    pub fn reset(&mut self) {
        self.value = self.max;
        self.direction = -1.0;
    }

    pub fn update(&mut self, dt: f32) -> f32 {
        self.value += self.direction * self.speed * dt;
        if self.value <= self.min {
            self.value = self.min;
            self.direction = 1.0;
        } else if self.value >= self.max {
            self.value = self.max;
            self.direction = -1.0;
        }
        self.value
    }

    pub fn is_rising(&self) -> bool {
        self.direction > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_stays_in_range_and_bounces() {
        let mut pulse = Pulse::prompt();
        assert!(!pulse.is_rising());
        let mut saw_rise = false;
        for _ in 0..200 {
            let v = pulse.update(1.0 / 60.0);
            assert!((PROMPT_MIN_ALPHA..=PROMPT_MAX_ALPHA).contains(&v));
            saw_rise |= pulse.is_rising();
        }
        assert!(saw_rise);
    }

    #[test]
    fn test_pulse_hits_floor_then_reverses() {
        let mut pulse = Pulse::new(0.3, 1.0, 1.0);
        pulse.update(1.0);
        assert_eq!(pulse.value, 0.3);
        assert!(pulse.is_rising());
        pulse.update(0.5);
        assert!((pulse.value - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_reset_returns_to_max() {
        let mut pulse = Pulse::prompt();
        pulse.update(0.2);
        pulse.reset();
        assert_eq!(pulse.value, PROMPT_MAX_ALPHA);
        assert!(!pulse.is_rising());
    }
}
