use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::primitives::clamp_unit;
use crate::core::types::TimeWindow;

/// Angular progress of "now" inside a time window.
///
/// `target_angle_deg` follows the clock and geometry; `animation_fraction`
/// only moves through the animation session.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressState {
    pub target_angle_deg: f64,
    pub animation_fraction: f64,
}

impl ProgressState {
    /// Angle travelled so far, measured from the rise anchor.
    #[must_use]
    pub fn offset_angle_deg(self) -> f64 {
        self.target_angle_deg * self.animation_fraction
    }
}

/// Maps `now_ms` onto `[0, sweep_angle_deg]`.
///
/// Before rise the target is 0, after set it is the full sweep, and in between
/// it grows linearly. A window with `set <= rise` never divides and yields 0.
#[must_use]
pub fn target_angle_deg(window: TimeWindow, sweep_angle_deg: f64, now_ms: i64) -> f64 {
    if !window.is_well_formed() {
        warn!(
            rise_ms = window.rise_ms,
            set_ms = window.set_ms,
            "time window has non-positive span; clamping progress to 0"
        );
        return 0.0;
    }
    if now_ms <= window.rise_ms {
        return 0.0;
    }
    if now_ms >= window.set_ms {
        return sweep_angle_deg;
    }

    let elapsed = (i128::from(now_ms) - i128::from(window.rise_ms)) as f64;
    let span = window.span_ms() as f64;
    elapsed / span * sweep_angle_deg
}

/// Duration of a marker run covering `target_angle_deg`.
///
/// The full sweep takes `total_animation_ms`; shorter targets scale down so the
/// marker keeps the same angular speed.
#[must_use]
pub fn session_duration_ms(
    total_animation_ms: u64,
    target_angle_deg: f64,
    sweep_angle_deg: f64,
) -> u64 {
    if sweep_angle_deg.is_nan() || sweep_angle_deg <= 0.0 {
        return 0;
    }
    let ratio = clamp_unit(target_angle_deg / sweep_angle_deg);
    (ratio * total_animation_ms as f64).round() as u64
}
