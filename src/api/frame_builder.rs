use crate::clock::Clock;
use crate::core::{ArcGeometry, BoundingBox, Point, ProgressState, TimeWindow};
use crate::render::{
    ArcPrimitive, CirclePrimitive, FrameLabels, GradientStops, IconPrimitive, LinePrimitive, Paint,
    Renderer, SunMoonFrame, TextPrimitive, WedgePrimitive,
};

use super::{SunMoonConfig, SunMoonEngine};

/// Label strings resolved once per time-window or config change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct FrameLabelTexts {
    pub(super) rise: String,
    pub(super) set: String,
    pub(super) left_caption: Option<String>,
    pub(super) right_caption: Option<String>,
}

impl FrameLabelTexts {
    pub(super) fn new(config: &SunMoonConfig, window: Option<TimeWindow>) -> Self {
        let format = |instant_ms: i64| {
            config
                .label_format
                .format_instant(instant_ms)
                .unwrap_or_default()
        };
        let (rise, set) = match window {
            Some(window) => (format(window.rise_ms), format(window.set_ms)),
            None => (String::new(), String::new()),
        };
        Self {
            rise,
            set,
            left_caption: config.left_text.clone().filter(|text| !text.is_empty()),
            right_caption: config.right_text.clone().filter(|text| !text.is_empty()),
        }
    }
}

impl<R: Renderer, C: Clock> SunMoonEngine<R, C> {
    /// Materializes the draw primitives for the current state.
    ///
    /// Returns `None` until a layout has produced geometry.
    #[must_use]
    pub fn build_frame(&self) -> Option<SunMoonFrame> {
        let geometry = self.geometry?;
        let bounds = self.bounds?;
        Some(build_scene(
            bounds,
            geometry,
            self.progress,
            &self.config,
            &self.labels,
        ))
    }
}

fn build_scene(
    bounds: BoundingBox,
    geometry: ArcGeometry,
    progress: ProgressState,
    config: &SunMoonConfig,
    labels: &FrameLabelTexts,
) -> SunMoonFrame {
    let size = config.size;
    let style = config.style;
    let baseline_y = geometry.baseline_y();
    let (left, _, right, bottom) = geometry.bounding_square();
    let across_circle = |stops: GradientStops| {
        stops.between(Point::new(left, bottom), Point::new(right, bottom))
    };

    let (baseline_start_x, baseline_end_x) = geometry.baseline_span();
    let baseline = LinePrimitive {
        from: Point::new(baseline_start_x, baseline_y),
        to: Point::new(baseline_end_x, baseline_y),
        stroke_width: size.line_thickness,
        paint: Paint::Solid(style.baseline_color),
    };

    let arc = ArcPrimitive {
        center: geometry.center(),
        radius: geometry.radius(),
        start_angle_deg: geometry.start_angle_deg(),
        sweep_angle_deg: geometry.sweep_angle_deg(),
        stroke_width: size.arc_line_thickness,
        paint: across_circle(style.arc_gradient),
    };

    let anchor_radius = size.anchor_size / 2.0;
    let anchor = |center: Point, stops: GradientStops| CirclePrimitive {
        center,
        radius: anchor_radius,
        paint: stops.between(
            Point::new(center.x, center.y - anchor_radius),
            Point::new(center.x, center.y + anchor_radius),
        ),
    };

    let offset_angle_deg = progress.offset_angle_deg();
    let marker_point = geometry.point_at_offset(offset_angle_deg);
    let elapsed_wedge = (offset_angle_deg > 0.0).then(|| WedgePrimitive {
        start_point: geometry.start_point(),
        center: geometry.center(),
        radius: geometry.radius(),
        start_angle_deg: geometry.start_angle_deg(),
        sweep_angle_deg: offset_angle_deg,
        foot_point: Point::new(marker_point.x, baseline_y),
        paint: across_circle(style.wedge_gradient),
    });

    SunMoonFrame {
        bounds,
        baseline,
        arc,
        rise_anchor: anchor(geometry.start_point(), style.rise_anchor_gradient),
        set_anchor: anchor(geometry.end_point(), style.set_anchor_gradient),
        elapsed_wedge,
        marker: IconPrimitive {
            center: marker_point,
            size: size.marker_size,
        },
        labels: build_labels(geometry, config, labels),
    }
}

fn build_labels(
    geometry: ArcGeometry,
    config: &SunMoonConfig,
    labels: &FrameLabelTexts,
) -> FrameLabels {
    let size = config.size;
    let style = config.style;
    let first_line_y = geometry.baseline_y() + size.text_margin + size.arc_line_thickness;
    let second_line_y = first_line_y + size.text_block_height;

    let mut out = FrameLabels::new();
    for (x, time_text, caption) in [
        (geometry.start_point().x, &labels.rise, &labels.left_caption),
        (geometry.end_point().x, &labels.set, &labels.right_caption),
    ] {
        if !time_text.is_empty() {
            out.push(TextPrimitive::centered(
                time_text.clone(),
                Point::new(x, first_line_y),
                style.text_size_px,
                style.text_color,
            ));
        }
        if let Some(caption) = caption {
            out.push(TextPrimitive::centered(
                caption.clone(),
                Point::new(x, second_line_y),
                style.text_size_px,
                style.text_color,
            ));
        }
    }
    out
}
