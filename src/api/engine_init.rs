use crate::animation::AnimationSession;
use crate::clock::{Clock, SystemClock};
use crate::core::ProgressState;
use crate::error::SunMoonResult;
use crate::render::Renderer;

use super::{SunMoonConfig, SunMoonEngine, frame_builder::FrameLabelTexts};

impl<R: Renderer> SunMoonEngine<R, SystemClock> {
    /// Creates an engine that reads "now" from the system clock.
    pub fn new(renderer: R, config: SunMoonConfig) -> SunMoonResult<Self> {
        Self::with_clock(renderer, SystemClock, config)
    }
}

impl<R: Renderer, C: Clock> SunMoonEngine<R, C> {
    /// Creates an engine with an explicit wall clock.
    ///
    /// No geometry exists until the first `on_layout`.
    pub fn with_clock(renderer: R, clock: C, config: SunMoonConfig) -> SunMoonResult<Self> {
        config.validate()?;

        let labels = FrameLabelTexts::new(&config, None);
        Ok(Self {
            renderer,
            clock,
            config,
            bounds: None,
            geometry: None,
            time_window: None,
            labels,
            progress: ProgressState::default(),
            session: AnimationSession::default(),
            redraw_requested: false,
        })
    }
}
