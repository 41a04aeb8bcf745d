mod frame;
mod null_renderer;
mod primitives;

pub use frame::{FrameLabels, SunMoonFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    ArcPrimitive, CirclePrimitive, Color, GradientStops, IconPrimitive, LinePrimitive,
    LinearGradient, Paint, TextPrimitive, WedgePrimitive,
};

use crate::error::SunMoonResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `SunMoonFrame`, so drawing code (and
/// marker asset loading) stays isolated from geometry and animation logic.
pub trait Renderer {
    fn render(&mut self, frame: &SunMoonFrame) -> SunMoonResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
