//! Simulation time.

/// Largest delta handed to the simulation in one frame, in seconds. A frame
/// that took longer (window dragged, tab backgrounded, debugger pause) is
/// simulated as if it took this long.
pub const MAX_FRAME_DELTA: f32 = 0.1;

#[derive(Debug, Clone, Copy)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}

/// Turns host timestamps into clamped frame deltas.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_time: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the loop's starting timestamp (seconds).
    pub fn reset(&mut self, now: f64) {
        self.last_time = Some(now);
    }

    /// Seconds since the previous tick, clamped to `[0, MAX_FRAME_DELTA]`.
    /// The first tick after construction returns 0.
    pub fn tick(&mut self, now: f64) -> f32 {
        let raw = match self.last_time {
            Some(last) => (now - last) as f32,
            None => 0.0,
        };
        self.last_time = Some(now);
        crate::systems::time::clamp_delta(raw)
    }
}
