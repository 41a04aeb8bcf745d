use serde::{Deserialize, Serialize};

use crate::core::clamp_unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimationState {
    /// No run requested yet, or reset after the host surface went away.
    #[default]
    Idle,
    Running,
    /// Stopped explicitly; progress snapped to the end of the run.
    Cancelled,
    Completed,
}

impl AnimationState {
    #[must_use]
    pub fn is_running(self) -> bool {
        self == Self::Running
    }
}

/// Linear marker run from fraction 0 to 1 over a precomputed duration.
///
/// The run anchors its start instant on the first tick after `start`, so the
/// host never has to pass a clock reading when requesting a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSession {
    state: AnimationState,
    fraction: f64,
    duration_ms: u64,
    started_at_ms: Option<i64>,
}

impl Default for AnimationSession {
    fn default() -> Self {
        Self {
            state: AnimationState::Idle,
            fraction: 0.0,
            duration_ms: 0,
            started_at_ms: None,
        }
    }
}

impl AnimationSession {
    #[must_use]
    pub fn state(self) -> AnimationState {
        self.state
    }

    #[must_use]
    pub fn fraction(self) -> f64 {
        self.fraction
    }

    #[must_use]
    pub fn duration_ms(self) -> u64 {
        self.duration_ms
    }

    /// Sets the duration used by the next run.
    ///
    /// While running, the new duration applies to the remaining ticks without
    /// moving the start instant.
    pub fn set_duration_ms(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
    }

    /// Begins a run from fraction 0.
    ///
    /// Returns `false` without touching the session when a run is already
    /// in flight.
    pub fn start(&mut self, duration_ms: u64) -> bool {
        if self.state.is_running() {
            return false;
        }
        self.state = AnimationState::Running;
        self.fraction = 0.0;
        self.duration_ms = duration_ms;
        self.started_at_ms = None;
        true
    }

    /// Cancels an in-flight run, snapping the fraction to 1.
    ///
    /// Returns `false` when nothing was running.
    pub fn cancel(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }
        self.state = AnimationState::Cancelled;
        self.fraction = 1.0;
        self.started_at_ms = None;
        true
    }

    /// Drops back to `Idle`, keeping the last fraction for redraws.
    pub fn reset(&mut self) {
        self.state = AnimationState::Idle;
        self.started_at_ms = None;
    }

    /// Advances the run to `now_ms` and returns the current fraction.
    ///
    /// Outside of `Running` this only reports the pinned fraction.
    pub fn tick(&mut self, now_ms: i64) -> f64 {
        if !self.state.is_running() {
            return self.fraction;
        }

        let started_at = *self.started_at_ms.get_or_insert(now_ms);
        let elapsed_ms = now_ms.saturating_sub(started_at).max(0);
        let fraction = if self.duration_ms == 0 {
            1.0
        } else {
            clamp_unit(elapsed_ms as f64 / self.duration_ms as f64)
        };

        // Monotonic even if the duration grows mid-run.
        self.fraction = self.fraction.max(fraction);
        if self.fraction >= 1.0 {
            self.fraction = 1.0;
            self.state = AnimationState::Completed;
            self.started_at_ms = None;
        }
        self.fraction
    }
}
