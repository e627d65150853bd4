// SPDX-License-Identifier: MPL-2.0
//! Time-based animation helpers shared by the chrome and carousel state.

use std::time::{Duration, Instant};

/// Linear progress in `[0, 1]` of an animation started at `started`.
///
/// A zero duration is always complete.
#[must_use]
pub fn progress(started: Instant, duration: Duration, now: Instant) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(started);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Quadratic ease-out: fast start, slow settle.
#[must_use]
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}
