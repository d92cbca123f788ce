//! Time update helpers.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! once per frame, applying `time_scale` to the provided delta.

use crate::resources::worldtime::{MAX_FRAME_DELTA, WorldTime};

/// Clamp a raw frame delta to `[0, MAX_FRAME_DELTA]`.
///
/// Keeps one long stall from being integrated as a single huge physics step
/// (which would launch bodies through platforms).
pub fn clamp_delta(raw: f32) -> f32 {
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, MAX_FRAME_DELTA)
}

/// Update elapsed and delta seconds on `WorldTime`.
///
/// `dt` is expected to be the already clamped, unscaled frame delta in
/// seconds. Returns the scaled delta the simulation should use.
pub fn update_world_time(wt: &mut WorldTime, dt: f32) -> f32 {
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
    scaled_dt
}
