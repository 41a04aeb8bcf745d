use tracing::debug;

use crate::clock::Clock;
use crate::core::{ArcGeometry, BoundingBox, TimeWindow, session_duration_ms, target_angle_deg};
use crate::error::SunMoonResult;
use crate::render::Renderer;

use super::{SunMoonConfig, SunMoonEngine, frame_builder::FrameLabelTexts};

impl<R: Renderer, C: Clock> SunMoonEngine<R, C> {
    /// Resolves geometry for a new host size and re-derives progress.
    ///
    /// A running animation keeps its start instant and is retargeted to the
    /// fresh angle and duration. On failure the previous geometry is dropped so
    /// ticks stay inert until a feasible layout arrives.
    pub fn on_layout(&mut self, bounds: BoundingBox) -> SunMoonResult<ArcGeometry> {
        let geometry = match ArcGeometry::resolve(bounds, self.config.size) {
            Ok(geometry) => geometry,
            Err(err) => {
                self.bounds = None;
                self.geometry = None;
                return Err(err);
            }
        };

        self.bounds = Some(bounds);
        self.geometry = Some(geometry);
        self.refresh_target(geometry);
        self.redraw_requested = true;

        debug!(
            width = bounds.width,
            height = bounds.height,
            radius = geometry.radius(),
            sweep_angle_deg = geometry.sweep_angle_deg(),
            target_angle_deg = self.progress.target_angle_deg,
            duration_ms = self.session.duration_ms(),
            "arc layout resolved"
        );
        Ok(geometry)
    }

    /// Stores the rise/set window and lays out again with the last known size.
    ///
    /// Without a previous layout, progress is derived on the first
    /// `on_layout`. The window itself is not validated.
    pub fn set_time_window(&mut self, window: TimeWindow) -> SunMoonResult<()> {
        debug!(
            rise_ms = window.rise_ms,
            set_ms = window.set_ms,
            "time window updated"
        );
        self.time_window = Some(window);
        self.labels = FrameLabelTexts::new(&self.config, Some(window));
        self.relayout()
    }

    /// Replaces the configuration and lays out again with the last known size.
    pub fn set_config(&mut self, config: SunMoonConfig) -> SunMoonResult<()> {
        config.validate()?;
        self.labels = FrameLabelTexts::new(&config, self.time_window);
        self.config = config;
        self.relayout()
    }

    fn relayout(&mut self) -> SunMoonResult<()> {
        self.redraw_requested = true;
        match self.bounds {
            Some(bounds) => self.on_layout(bounds).map(|_| ()),
            None => Ok(()),
        }
    }

    /// Recomputes target angle and run duration from the wall clock.
    pub(super) fn refresh_target(&mut self, geometry: ArcGeometry) {
        let sweep = geometry.sweep_angle_deg();
        let target = match self.time_window {
            Some(window) => target_angle_deg(window, sweep, self.clock.now_ms()),
            None => 0.0,
        };
        self.progress.target_angle_deg = target;
        self.session.set_duration_ms(session_duration_ms(
            self.config.total_animation_ms,
            target,
            sweep,
        ));
    }
}
