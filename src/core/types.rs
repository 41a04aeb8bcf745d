use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::datetime_to_unix_millis;
use crate::error::{SunMoonError, SunMoonResult};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Layout region handed over by the host on every size change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub padding_top: u32,
    #[serde(default)]
    pub padding_bottom: u32,
    #[serde(default)]
    pub padding_left: u32,
    #[serde(default)]
    pub padding_right: u32,
}

impl BoundingBox {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_padding(mut self, top: u32, bottom: u32, left: u32, right: u32) -> Self {
        self.padding_top = top;
        self.padding_bottom = bottom;
        self.padding_left = left;
        self.padding_right = right;
        self
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0
            && self.height > 0
            && u64::from(self.padding_left) + u64::from(self.padding_right)
                < u64::from(self.width)
            && u64::from(self.padding_top) + u64::from(self.padding_bottom)
                < u64::from(self.height)
    }

    /// Width left after horizontal padding.
    #[must_use]
    pub fn usable_width(self) -> f64 {
        f64::from(self.width) - f64::from(self.padding_left) - f64::from(self.padding_right)
    }
}

/// Size constants that shape the arc layout.
///
/// Colors and text styling live in `SunMoonStyle`; only values that move
/// geometry are kept here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeParameters {
    /// Stroke width of the baseline.
    pub line_thickness: f64,
    /// Stroke width of the arc; also reserved above the arc's top.
    pub arc_line_thickness: f64,
    /// Edge length of the square marker icon.
    pub marker_size: f64,
    /// Diameter of the rise/set anchor dots.
    #[serde(default = "default_anchor_size")]
    pub anchor_size: f64,
    /// Arc diameter relative to the usable width, in `(0, 1]`.
    pub arc_ratio: f64,
    /// Height of one line of label text.
    pub text_block_height: f64,
    /// Gap between the baseline and the first label line.
    pub text_margin: f64,
}

impl Default for SizeParameters {
    fn default() -> Self {
        Self {
            line_thickness: 2.0,
            arc_line_thickness: 1.0,
            marker_size: 50.0,
            anchor_size: default_anchor_size(),
            arc_ratio: DEFAULT_ARC_RATIO,
            text_block_height: 14.0,
            text_margin: 10.0,
        }
    }
}

pub const DEFAULT_ARC_RATIO: f64 = 0.86;

fn default_anchor_size() -> f64 {
    8.0
}

impl SizeParameters {
    #[must_use]
    pub fn with_arc_ratio(mut self, arc_ratio: f64) -> Self {
        self.arc_ratio = arc_ratio;
        self
    }

    #[must_use]
    pub fn with_text_block(mut self, text_block_height: f64, text_margin: f64) -> Self {
        self.text_block_height = text_block_height;
        self.text_margin = text_margin;
        self
    }

    pub fn validate(self) -> SunMoonResult<()> {
        for (field, value) in [
            ("line_thickness", self.line_thickness),
            ("arc_line_thickness", self.arc_line_thickness),
            ("marker_size", self.marker_size),
            ("anchor_size", self.anchor_size),
            ("text_block_height", self.text_block_height),
            ("text_margin", self.text_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SunMoonError::InvalidData(format!(
                    "size parameter `{field}` must be finite and >= 0"
                )));
            }
        }
        if !self.arc_ratio.is_finite() || self.arc_ratio <= 0.0 || self.arc_ratio > 1.0 {
            return Err(SunMoonError::InvalidData(
                "arc ratio must be finite and in (0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Rise and set instants in epoch milliseconds.
///
/// `set_ms > rise_ms` is expected but not enforced here; progress
/// computation treats a non-positive span as "not yet risen".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub rise_ms: i64,
    pub set_ms: i64,
}

impl TimeWindow {
    #[must_use]
    pub const fn new(rise_ms: i64, set_ms: i64) -> Self {
        Self { rise_ms, set_ms }
    }

    #[must_use]
    pub fn from_datetimes(rise: DateTime<Utc>, set: DateTime<Utc>) -> Self {
        Self {
            rise_ms: datetime_to_unix_millis(rise),
            set_ms: datetime_to_unix_millis(set),
        }
    }

    /// Exact span; widened so windows across the whole `i64` range never overflow.
    #[must_use]
    pub fn span_ms(self) -> i128 {
        i128::from(self.set_ms) - i128::from(self.rise_ms)
    }

    #[must_use]
    pub fn is_well_formed(self) -> bool {
        self.set_ms > self.rise_ms
    }
}
