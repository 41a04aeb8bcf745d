use crate::animation::AnimationState;
use crate::clock::Clock;
use crate::core::{ArcGeometry, BoundingBox, ProgressState, TimeWindow};
use crate::render::Renderer;

use super::{SunMoonConfig, SunMoonEngine};

impl<R: Renderer, C: Clock> SunMoonEngine<R, C> {
    #[must_use]
    pub fn config(&self) -> &SunMoonConfig {
        &self.config
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.bounds
    }

    #[must_use]
    pub fn geometry(&self) -> Option<ArcGeometry> {
        self.geometry
    }

    #[must_use]
    pub fn time_window(&self) -> Option<TimeWindow> {
        self.time_window
    }

    #[must_use]
    pub fn progress(&self) -> ProgressState {
        self.progress
    }

    #[must_use]
    pub fn animation_state(&self) -> AnimationState {
        self.session.state()
    }

    /// Duration of the current (or next) marker run.
    #[must_use]
    pub fn session_duration_ms(&self) -> u64 {
        self.session.duration_ms()
    }

    #[must_use]
    pub fn rise_label(&self) -> &str {
        &self.labels.rise
    }

    #[must_use]
    pub fn set_label(&self) -> &str {
        &self.labels.set
    }

    /// Whether state changed since the last successful render.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    /// Returns and clears the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}
