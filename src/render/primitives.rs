use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::error::{SunMoonError, SunMoonResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels, alpha first.
    #[must_use]
    pub const fn from_argb8(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha as f64 / 255.0,
        )
    }

    /// Parses `#RRGGBB` or `#AARRGGBB` (alpha first).
    pub fn from_hex(input: &str) -> SunMoonResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        let invalid = || SunMoonError::InvalidData(format!("invalid hex color `{input}`"));
        if !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |offset: usize| -> SunMoonResult<f64> {
            let byte =
                u8::from_str_radix(&digits[offset..offset + 2], 16).map_err(|_| invalid())?;
            Ok(f64::from(byte) / 255.0)
        };

        match digits.len() {
            6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Self::rgba(channel(2)?, channel(4)?, channel(6)?, channel(0)?)),
            _ => Err(invalid()),
        }
    }

    pub fn validate(self) -> SunMoonResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SunMoonError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Two-stop linear gradient between `from` and `to`, clamped at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub from: Point,
    pub to: Point,
    pub start_color: Color,
    pub end_color: Color,
}

/// Fill or stroke source for a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    Solid(Color),
    Gradient(LinearGradient),
}

impl Paint {
    pub fn validate(self) -> SunMoonResult<()> {
        match self {
            Self::Solid(color) => color.validate(),
            Self::Gradient(gradient) => {
                if !gradient.from.is_finite() || !gradient.to.is_finite() {
                    return Err(SunMoonError::InvalidData(
                        "gradient endpoints must be finite".to_owned(),
                    ));
                }
                gradient.start_color.validate()?;
                gradient.end_color.validate()
            }
        }
    }
}

/// Gradient colors without placement; the frame builder anchors them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStops {
    pub start: Color,
    pub end: Color,
}

impl GradientStops {
    #[must_use]
    pub const fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn between(self, from: Point, to: Point) -> Paint {
        Paint::Gradient(LinearGradient {
            from,
            to,
            start_color: self.start,
            end_color: self.end,
        })
    }

    pub fn validate(self) -> SunMoonResult<()> {
        self.start.validate()?;
        self.end.validate()
    }
}

fn validate_stroke_width(stroke_width: f64, what: &str) -> SunMoonResult<()> {
    if !stroke_width.is_finite() || stroke_width <= 0.0 {
        return Err(SunMoonError::InvalidData(format!(
            "{what} stroke width must be finite and > 0"
        )));
    }
    Ok(())
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub from: Point,
    pub to: Point,
    pub stroke_width: f64,
    pub paint: Paint,
}

impl LinePrimitive {
    pub fn validate(self) -> SunMoonResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(SunMoonError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width, "line")?;
        self.paint.validate()
    }
}

/// Stroked circular arc; angles in degrees, clockwise from +x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPrimitive {
    pub center: Point,
    pub radius: f64,
    pub start_angle_deg: f64,
    pub sweep_angle_deg: f64,
    pub stroke_width: f64,
    pub paint: Paint,
}

impl ArcPrimitive {
    pub fn validate(self) -> SunMoonResult<()> {
        if !self.center.is_finite() || !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(SunMoonError::InvalidData(
                "arc center must be finite and radius > 0".to_owned(),
            ));
        }
        if !self.start_angle_deg.is_finite() || !self.sweep_angle_deg.is_finite() {
            return Err(SunMoonError::InvalidData(
                "arc angles must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width, "arc")?;
        self.paint.validate()
    }
}

/// Filled circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub center: Point,
    pub radius: f64,
    pub paint: Paint,
}

impl CirclePrimitive {
    pub fn validate(self) -> SunMoonResult<()> {
        if !self.center.is_finite() || !self.radius.is_finite() || self.radius < 0.0 {
            return Err(SunMoonError::InvalidData(
                "circle center must be finite and radius >= 0".to_owned(),
            ));
        }
        self.paint.validate()
    }
}

/// Filled region covering the elapsed part of the arc.
///
/// Path: move to `start_point`, follow the arc from `start_angle_deg` for
/// `sweep_angle_deg`, drop to `foot_point` on the baseline, close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WedgePrimitive {
    pub start_point: Point,
    pub center: Point,
    pub radius: f64,
    pub start_angle_deg: f64,
    pub sweep_angle_deg: f64,
    pub foot_point: Point,
    pub paint: Paint,
}

impl WedgePrimitive {
    pub fn validate(self) -> SunMoonResult<()> {
        if !self.start_point.is_finite()
            || !self.center.is_finite()
            || !self.foot_point.is_finite()
            || !self.radius.is_finite()
            || !self.start_angle_deg.is_finite()
            || !self.sweep_angle_deg.is_finite()
        {
            return Err(SunMoonError::InvalidData(
                "wedge geometry must be finite".to_owned(),
            ));
        }
        self.paint.validate()
    }
}

/// Square slot where the renderer paints its marker asset (sun or moon).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconPrimitive {
    pub center: Point,
    pub size: f64,
}

impl IconPrimitive {
    pub fn validate(self) -> SunMoonResult<()> {
        if !self.center.is_finite() || !self.size.is_finite() || self.size < 0.0 {
            return Err(SunMoonError::InvalidData(
                "icon slot must be finite with size >= 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Top-left corner of the slot.
    #[must_use]
    pub fn origin(self) -> Point {
        Point::new(self.center.x - self.size / 2.0, self.center.y - self.size / 2.0)
    }
}

/// Draw command for one label, centered on `position` in both axes.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub position: Point,
    pub font_size_px: f64,
    pub color: Color,
}

impl TextPrimitive {
    #[must_use]
    pub fn centered(
        text: impl Into<String>,
        position: Point,
        font_size_px: f64,
        color: Color,
    ) -> Self {
        Self {
            text: text.into(),
            position,
            font_size_px,
            color,
        }
    }

    pub fn validate(&self) -> SunMoonResult<()> {
        if self.text.is_empty() {
            return Err(SunMoonError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.position.is_finite() {
            return Err(SunMoonError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(SunMoonError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn hex_parsing_reads_alpha_first() {
        let color = Color::from_hex("#80FFDB48").expect("valid hex");
        assert!((color.alpha - 128.0 / 255.0).abs() <= 1e-12);
        assert_eq!(color.red, 1.0);
        assert!((color.green - 219.0 / 255.0).abs() <= 1e-12);

        let opaque = Color::from_hex("#2C3981").expect("valid hex");
        assert_eq!(opaque.alpha, 1.0);
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
        assert!(Color::from_hex("#ÿÿÿ").is_err());
    }
}
