use serde::{Deserialize, Serialize};

use crate::core::primitives::point_on_arc;
use crate::core::types::{BoundingBox, Point, SizeParameters};
use crate::error::{SunMoonError, SunMoonResult};

/// Resolved placement of the rise/set arc for one layout pass.
///
/// Built through [`ArcGeometry::resolve`]; a new layout produces a new value
/// instead of patching fields. Deserialized values go through the same
/// invariant checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ArcGeometryRecord")]
pub struct ArcGeometry {
    center: Point,
    radius: f64,
    start_angle_deg: f64,
    sweep_angle_deg: f64,
    start_point: Point,
    end_point: Point,
    baseline_y: f64,
    baseline_start_x: f64,
    baseline_end_x: f64,
}

/// Wire form of [`ArcGeometry`], checked before it becomes one.
#[derive(Deserialize)]
struct ArcGeometryRecord {
    center: Point,
    radius: f64,
    start_angle_deg: f64,
    sweep_angle_deg: f64,
    start_point: Point,
    end_point: Point,
    baseline_y: f64,
    baseline_start_x: f64,
    baseline_end_x: f64,
}

// Tolerance for anchors sitting on the circle after radius rounding.
const ANCHOR_TOLERANCE_PX: f64 = 1.0;
const ANGLE_TOLERANCE_DEG: f64 = 1e-6;

impl TryFrom<ArcGeometryRecord> for ArcGeometry {
    type Error = SunMoonError;

    fn try_from(record: ArcGeometryRecord) -> SunMoonResult<Self> {
        let invalid = |what: &str| SunMoonError::InvalidData(format!("arc geometry: {what}"));

        let scalars = [
            record.radius,
            record.start_angle_deg,
            record.sweep_angle_deg,
            record.baseline_y,
            record.baseline_start_x,
            record.baseline_end_x,
        ];
        if scalars.iter().any(|value| !value.is_finite())
            || !record.center.is_finite()
            || !record.start_point.is_finite()
            || !record.end_point.is_finite()
        {
            return Err(invalid("values must be finite"));
        }
        if record.radius <= 0.0 {
            return Err(invalid("radius must be > 0"));
        }
        if record.sweep_angle_deg <= 0.0 || record.sweep_angle_deg >= 180.0 {
            return Err(invalid("sweep must lie strictly between 0 and 180 degrees"));
        }
        let expected_start = (180.0 - record.sweep_angle_deg) / 2.0 - 180.0;
        if (record.start_angle_deg - expected_start).abs() > ANGLE_TOLERANCE_DEG {
            return Err(invalid("start angle must center the sweep above the baseline"));
        }
        if record.start_point.y != record.baseline_y || record.end_point.y != record.baseline_y {
            return Err(invalid("anchors must sit on the baseline"));
        }
        if record.center.y <= record.baseline_y {
            return Err(invalid("circle center must lie below the baseline"));
        }
        for anchor in [record.start_point, record.end_point] {
            if (anchor.distance_to(record.center) - record.radius).abs() > ANCHOR_TOLERANCE_PX {
                return Err(invalid("anchors must lie on the circle"));
            }
        }
        if record.baseline_start_x > record.baseline_end_x {
            return Err(invalid("baseline span must run left to right"));
        }

        Ok(Self {
            center: record.center,
            radius: record.radius,
            start_angle_deg: record.start_angle_deg,
            sweep_angle_deg: record.sweep_angle_deg,
            start_point: record.start_point,
            end_point: record.end_point,
            baseline_y: record.baseline_y,
            baseline_start_x: record.baseline_start_x,
            baseline_end_x: record.baseline_end_x,
        })
    }
}

impl ArcGeometry {
    /// Places the arc inside `bounds`.
    ///
    /// Two label lines plus `text_margin` are reserved under the baseline. The
    /// arc's top touches the upper padding (inset by the arc stroke) and its
    /// diameter is `arc_ratio` of the usable width, so the circle center sits
    /// below the baseline and only the upper segment is visible.
    pub fn resolve(bounds: BoundingBox, params: SizeParameters) -> SunMoonResult<Self> {
        if !bounds.is_valid() {
            return Err(SunMoonError::InvalidBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }
        params.validate()?;

        let pad_left = f64::from(bounds.padding_left);
        let pad_top = f64::from(bounds.padding_top);
        let usable_width = bounds.usable_width();

        let baseline_y = f64::from(bounds.height)
            - f64::from(bounds.padding_bottom)
            - params.text_block_height * 2.0
            - params.text_margin;
        let arc_height = baseline_y - pad_top - params.arc_line_thickness;
        let radius = (usable_width * params.arc_ratio / 2.0).round();
        let vertical_offset = radius - arc_height;

        if radius <= 0.0 || arc_height <= 0.0 || vertical_offset <= 0.0 || vertical_offset >= radius
        {
            return Err(SunMoonError::InfeasibleGeometry {
                radius,
                vertical_offset,
            });
        }

        let half_chord = (radius * radius - vertical_offset * vertical_offset).sqrt();
        let line_offset = (usable_width - half_chord * 2.0) / 2.0;
        let start_point = Point::new(pad_left + line_offset, baseline_y);
        let end_point = Point::new(pad_left + usable_width - line_offset, baseline_y);

        let sweep_angle_deg = (vertical_offset / radius).acos().to_degrees() * 2.0;
        let start_angle_deg = (180.0 - sweep_angle_deg) / 2.0 - 180.0;
        let center = Point::new(
            pad_left + usable_width / 2.0,
            radius + pad_top + params.arc_line_thickness,
        );

        Ok(Self {
            center,
            radius,
            start_angle_deg,
            sweep_angle_deg,
            start_point,
            end_point,
            baseline_y,
            baseline_start_x: pad_left,
            baseline_end_x: pad_left + usable_width,
        })
    }

    #[must_use]
    pub fn center(self) -> Point {
        self.center
    }

    #[must_use]
    pub fn radius(self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn start_angle_deg(self) -> f64 {
        self.start_angle_deg
    }

    #[must_use]
    pub fn sweep_angle_deg(self) -> f64 {
        self.sweep_angle_deg
    }

    #[must_use]
    pub fn end_angle_deg(self) -> f64 {
        self.start_angle_deg + self.sweep_angle_deg
    }

    /// Rise anchor, where the arc leaves the baseline on the left.
    #[must_use]
    pub fn start_point(self) -> Point {
        self.start_point
    }

    /// Set anchor, where the arc meets the baseline on the right.
    #[must_use]
    pub fn end_point(self) -> Point {
        self.end_point
    }

    #[must_use]
    pub fn baseline_y(self) -> f64 {
        self.baseline_y
    }

    /// Horizontal extent of the full baseline (the usable width).
    #[must_use]
    pub fn baseline_span(self) -> (f64, f64) {
        (self.baseline_start_x, self.baseline_end_x)
    }

    /// Point on the arc `offset_angle_deg` past the rise anchor.
    #[must_use]
    pub fn point_at_offset(self, offset_angle_deg: f64) -> Point {
        point_on_arc(
            self.center,
            self.radius,
            self.start_angle_deg + offset_angle_deg,
        )
    }

    /// Square enclosing the full circle, as `(left, top, right, bottom)`.
    #[must_use]
    pub fn bounding_square(self) -> (f64, f64, f64, f64) {
        (
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }
}
