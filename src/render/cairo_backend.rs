use std::f64::consts::TAU;
use std::io::Cursor;
use std::sync::Arc;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::Point;
use crate::error::{SunMoonError, SunMoonResult};
use crate::render::{
    Color, IconPrimitive, Paint, Renderer, SunMoonFrame, WedgePrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub strokes_drawn: usize,
    pub fills_drawn: usize,
    pub icons_drawn: usize,
    pub texts_drawn: usize,
    pub icon_decodes: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &SunMoonFrame,
    ) -> SunMoonResult<()>;
}

/// PNG marker asset with a droppable decoded surface.
///
/// The encoded bytes are kept; the decoded surface can be evicted under memory
/// pressure and is decoded again on the next draw.
#[derive(Debug, Clone)]
struct MarkerIcon {
    png: Arc<[u8]>,
    decoded: Option<ImageSurface>,
}

impl MarkerIcon {
    fn surface(&mut self, stats: &mut CairoRenderStats) -> SunMoonResult<&ImageSurface> {
        if self.decoded.is_none() {
            let surface = ImageSurface::create_from_png(&mut Cursor::new(&self.png[..]))
                .map_err(|err| {
                    SunMoonError::InvalidData(format!("failed to decode marker icon: {err}"))
                })?;
            stats.icon_decodes += 1;
            self.decoded = Some(surface);
        }
        self.decoded.as_ref().ok_or_else(|| {
            SunMoonError::InvalidData("marker icon surface unavailable".to_owned())
        })
    }
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
///
/// Without a marker icon the marker slot is filled with a plain disc.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Option<Color>,
    marker_fallback_color: Color,
    marker_icon: Option<MarkerIcon>,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> SunMoonResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(SunMoonError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: None,
            marker_fallback_color: Color::rgb(1.0, 0.86, 0.28),
            marker_icon: None,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Background painted before each frame; `None` leaves the target untouched.
    pub fn set_clear_color(&mut self, color: Option<Color>) -> SunMoonResult<()> {
        if let Some(color) = color {
            color.validate()?;
        }
        self.clear_color = color;
        Ok(())
    }

    pub fn set_marker_fallback_color(&mut self, color: Color) -> SunMoonResult<()> {
        color.validate()?;
        self.marker_fallback_color = color;
        Ok(())
    }

    /// Uses the given PNG as marker asset; decoding happens on first draw.
    pub fn set_marker_icon_png(&mut self, png: impl Into<Arc<[u8]>>) {
        self.marker_icon = Some(MarkerIcon {
            png: png.into(),
            decoded: None,
        });
    }

    /// Drops the decoded marker surface while keeping its source bytes.
    pub fn evict_marker_icon(&mut self) {
        if let Some(icon) = &mut self.marker_icon {
            icon.decoded = None;
        }
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(
        &mut self,
        context: &Context,
        frame: &SunMoonFrame,
    ) -> SunMoonResult<()> {
        frame.validate()?;

        let mut stats = CairoRenderStats {
            icon_decodes: self.last_stats.icon_decodes,
            ..CairoRenderStats::default()
        };

        if let Some(color) = self.clear_color {
            context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
            context
                .paint()
                .map_err(|err| map_backend_error("failed to clear surface", err))?;
        }

        let baseline = frame.baseline;
        apply_paint(context, baseline.paint)?;
        context.set_line_width(baseline.stroke_width);
        context.move_to(baseline.from.x, baseline.from.y);
        context.line_to(baseline.to.x, baseline.to.y);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke baseline", err))?;
        stats.strokes_drawn += 1;

        let arc = frame.arc;
        apply_paint(context, arc.paint)?;
        context.set_line_width(arc.stroke_width);
        context.new_path();
        context.arc(
            arc.center.x,
            arc.center.y,
            arc.radius,
            arc.start_angle_deg.to_radians(),
            (arc.start_angle_deg + arc.sweep_angle_deg).to_radians(),
        );
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke arc", err))?;
        stats.strokes_drawn += 1;

        for anchor in [frame.rise_anchor, frame.set_anchor] {
            apply_paint(context, anchor.paint)?;
            fill_disc(context, anchor.center, anchor.radius)?;
            stats.fills_drawn += 1;
        }

        if let Some(wedge) = frame.elapsed_wedge {
            fill_wedge(context, wedge)?;
            stats.fills_drawn += 1;
        }

        self.draw_marker(context, frame.marker, &mut stats)?;

        for text in &frame.labels {
            let layout = pangocairo::functions::create_layout(context);
            let font_description =
                FontDescription::from_string(&format!("Sans {}", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, text_height) = layout.pixel_size();
            let x = text.position.x - f64::from(text_width) / 2.0;
            let y = text.position.y - f64::from(text_height) / 2.0;

            let color = text.color;
            context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
            context.move_to(x, y);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }

    fn draw_marker(
        &mut self,
        context: &Context,
        marker: IconPrimitive,
        stats: &mut CairoRenderStats,
    ) -> SunMoonResult<()> {
        if marker.size <= 0.0 {
            return Ok(());
        }

        let Some(icon) = &mut self.marker_icon else {
            let color = self.marker_fallback_color;
            context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
            fill_disc(context, marker.center, marker.size / 2.0)?;
            stats.icons_drawn += 1;
            return Ok(());
        };

        let surface = icon.surface(stats)?;
        let (width, height) = (surface.width(), surface.height());
        if width <= 0 || height <= 0 {
            return Err(SunMoonError::InvalidData(
                "marker icon has an empty surface".to_owned(),
            ));
        }

        let origin = marker.origin();
        context
            .save()
            .map_err(|err| map_backend_error("failed to save cairo state", err))?;
        context.translate(origin.x, origin.y);
        context.scale(
            marker.size / f64::from(width),
            marker.size / f64::from(height),
        );
        context
            .set_source_surface(surface, 0.0, 0.0)
            .map_err(|err| map_backend_error("failed to use marker icon", err))?;
        context
            .paint()
            .map_err(|err| map_backend_error("failed to paint marker icon", err))?;
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
        stats.icons_drawn += 1;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &SunMoonFrame) -> SunMoonResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &SunMoonFrame,
    ) -> SunMoonResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_paint(context: &Context, paint: Paint) -> SunMoonResult<()> {
    match paint {
        Paint::Solid(color) => {
            context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
            Ok(())
        }
        Paint::Gradient(gradient) => {
            let pattern = cairo::LinearGradient::new(
                gradient.from.x,
                gradient.from.y,
                gradient.to.x,
                gradient.to.y,
            );
            for (offset, color) in [(0.0, gradient.start_color), (1.0, gradient.end_color)] {
                pattern.add_color_stop_rgba(offset, color.red, color.green, color.blue, color.alpha);
            }
            context
                .set_source(&pattern)
                .map_err(|err| map_backend_error("failed to set gradient source", err))
        }
    }
}

fn fill_disc(context: &Context, center: Point, radius: f64) -> SunMoonResult<()> {
    context.new_path();
    context.arc(center.x, center.y, radius, 0.0, TAU);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill disc", err))
}

fn fill_wedge(context: &Context, wedge: WedgePrimitive) -> SunMoonResult<()> {
    apply_paint(context, wedge.paint)?;
    context.new_path();
    context.move_to(wedge.start_point.x, wedge.start_point.y);
    context.arc(
        wedge.center.x,
        wedge.center.y,
        wedge.radius,
        wedge.start_angle_deg.to_radians(),
        (wedge.start_angle_deg + wedge.sweep_angle_deg).to_radians(),
    );
    context.line_to(wedge.foot_point.x, wedge.foot_point.y);
    context.close_path();
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill elapsed wedge", err))
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> SunMoonError {
    SunMoonError::InvalidData(format!("{prefix}: {err}"))
}
