use crate::animation::AnimationSession;
use crate::clock::{Clock, SystemClock};
use crate::core::{ArcGeometry, BoundingBox, ProgressState, TimeWindow};
use crate::error::SunMoonResult;
use crate::render::Renderer;

use super::{SunMoonConfig, frame_builder::FrameLabelTexts};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `SunMoonEngine` owns the resolved arc geometry, the rise/set window and the
/// marker animation, and hands finished frames to its renderer. Host layout
/// and animation clocks push events in (`on_layout`, `on_tick`, `on_detach`).
pub struct SunMoonEngine<R: Renderer, C: Clock = SystemClock> {
    pub(super) renderer: R,
    pub(super) clock: C,
    pub(super) config: SunMoonConfig,
    pub(super) bounds: Option<BoundingBox>,
    pub(super) geometry: Option<ArcGeometry>,
    pub(super) time_window: Option<TimeWindow>,
    pub(super) labels: FrameLabelTexts,
    pub(super) progress: ProgressState,
    pub(super) session: AnimationSession,
    pub(super) redraw_requested: bool,
}

impl<R: Renderer, C: Clock> SunMoonEngine<R, C> {
    /// Builds the current frame and hands it to the renderer.
    ///
    /// Does nothing until a layout has produced geometry.
    pub fn render(&mut self) -> SunMoonResult<()> {
        let Some(frame) = self.build_frame() else {
            return Ok(());
        };
        self.renderer.render(&frame)?;
        self.redraw_requested = false;
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> SunMoonResult<()>
    where
        R: CairoContextRenderer,
    {
        let Some(frame) = self.build_frame() else {
            return Ok(());
        };
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.redraw_requested = false;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
