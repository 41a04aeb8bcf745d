use serde::{Deserialize, Serialize};

use crate::animation::AnimationState;
use crate::clock::Clock;
use crate::core::{ArcGeometry, BoundingBox, ProgressState, TimeWindow};
use crate::render::Renderer;

use super::{ProgressFrame, SunMoonEngine};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub bounds: Option<BoundingBox>,
    pub geometry: Option<ArcGeometry>,
    pub time_window: Option<TimeWindow>,
    pub progress: ProgressState,
    pub animation_state: AnimationState,
    pub session_duration_ms: u64,
    pub marker: Option<ProgressFrame>,
    pub rise_label: String,
    pub set_label: String,
}

impl<R: Renderer, C: Clock> SunMoonEngine<R, C> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            bounds: self.bounds,
            geometry: self.geometry,
            time_window: self.time_window,
            progress: self.progress,
            animation_state: self.session.state(),
            session_duration_ms: self.session.duration_ms(),
            marker: self.current_frame(),
            rise_label: self.labels.rise.clone(),
            set_label: self.labels.set.clone(),
        }
    }
}
