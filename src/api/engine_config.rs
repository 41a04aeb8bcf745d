use serde::{Deserialize, Serialize};

use crate::core::SizeParameters;
use crate::error::{SunMoonError, SunMoonResult};
use crate::render::{Color, GradientStops};

use super::TimeLabelFormat;

pub const DEFAULT_TOTAL_ANIMATION_MS: u64 = 5000;

/// Colors and text styling of the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunMoonStyle {
    pub baseline_color: Color,
    /// Arc stroke, left to right.
    pub arc_gradient: GradientStops,
    /// Rise dot, top to bottom.
    pub rise_anchor_gradient: GradientStops,
    /// Set dot, top to bottom.
    pub set_anchor_gradient: GradientStops,
    /// Elapsed wedge fill, left to right.
    pub wedge_gradient: GradientStops,
    pub text_color: Color,
    pub text_size_px: f64,
}

impl Default for SunMoonStyle {
    fn default() -> Self {
        Self {
            baseline_color: Color::from_argb8(0x80, 0x59, 0x57, 0x6B),
            arc_gradient: GradientStops::new(
                Color::from_argb8(0xFF, 0xFF, 0xDB, 0x48),
                Color::from_argb8(0xFF, 0x2C, 0x39, 0x81),
            ),
            rise_anchor_gradient: GradientStops::new(
                Color::from_argb8(0xFF, 0xFF, 0x87, 0x12),
                Color::from_argb8(0xFF, 0xFF, 0xD2, 0x28),
            ),
            set_anchor_gradient: GradientStops::new(
                Color::from_argb8(0xFF, 0xFF, 0x87, 0x12),
                Color::from_argb8(0xFF, 0x51, 0x59, 0x8F),
            ),
            wedge_gradient: GradientStops::new(
                Color::from_argb8(0x80, 0xFF, 0xDB, 0x48),
                Color::from_argb8(0x80, 0x2C, 0x39, 0x81),
            ),
            text_color: Color::from_argb8(0xFF, 0xA3, 0xA1, 0xB0),
            text_size_px: 10.0,
        }
    }
}

impl SunMoonStyle {
    pub fn validate(self) -> SunMoonResult<()> {
        self.baseline_color.validate()?;
        self.arc_gradient.validate()?;
        self.rise_anchor_gradient.validate()?;
        self.set_anchor_gradient.validate()?;
        self.wedge_gradient.validate()?;
        self.text_color.validate()?;
        if !self.text_size_px.is_finite() || self.text_size_px <= 0.0 {
            return Err(SunMoonError::InvalidData(
                "text size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load the
/// indicator setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunMoonConfig {
    #[serde(default)]
    pub size: SizeParameters,
    #[serde(default)]
    pub style: SunMoonStyle,
    /// Duration of a run across the full sweep.
    #[serde(default = "default_total_animation_ms")]
    pub total_animation_ms: u64,
    #[serde(default)]
    pub label_format: TimeLabelFormat,
    /// Caption under the rise time.
    #[serde(default)]
    pub left_text: Option<String>,
    /// Caption under the set time.
    #[serde(default)]
    pub right_text: Option<String>,
}

impl Default for SunMoonConfig {
    fn default() -> Self {
        Self {
            size: SizeParameters::default(),
            style: SunMoonStyle::default(),
            total_animation_ms: default_total_animation_ms(),
            label_format: TimeLabelFormat::default(),
            left_text: None,
            right_text: None,
        }
    }
}

fn default_total_animation_ms() -> u64 {
    DEFAULT_TOTAL_ANIMATION_MS
}

impl SunMoonConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_size_parameters(mut self, size: SizeParameters) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: SunMoonStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_total_animation_ms(mut self, total_animation_ms: u64) -> Self {
        self.total_animation_ms = total_animation_ms;
        self
    }

    #[must_use]
    pub fn with_label_format(mut self, label_format: TimeLabelFormat) -> Self {
        self.label_format = label_format;
        self
    }

    /// Sets the captions drawn under the rise and set times.
    #[must_use]
    pub fn with_captions(
        mut self,
        left_text: impl Into<String>,
        right_text: impl Into<String>,
    ) -> Self {
        self.left_text = Some(left_text.into());
        self.right_text = Some(right_text.into());
        self
    }

    pub fn validate(&self) -> SunMoonResult<()> {
        self.size.validate()?;
        if self.size.line_thickness <= 0.0 || self.size.arc_line_thickness <= 0.0 {
            return Err(SunMoonError::InvalidData(
                "baseline and arc stroke widths must be > 0".to_owned(),
            ));
        }
        self.style.validate()
    }

    pub fn to_json_pretty(&self) -> SunMoonResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SunMoonError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> SunMoonResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| SunMoonError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
