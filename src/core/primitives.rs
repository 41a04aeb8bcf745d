use chrono::{DateTime, Utc};

use crate::core::types::Point;

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> i64 {
    time.timestamp_millis()
}

/// Point on the circle at `angle_deg`.
///
/// Angles follow the arc-drawing convention of a y-down surface: 0° points
/// along +x and angles grow clockwise.
#[must_use]
pub fn point_on_arc(center: Point, radius: f64, angle_deg: f64) -> Point {
    let radians = angle_deg.to_radians();
    Point::new(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}

/// Clamps to `[0, 1]`; NaN maps to 0.
#[must_use]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::{clamp_unit, point_on_arc};
    use crate::core::Point;

    #[test]
    fn point_on_arc_follows_clockwise_y_down_convention() {
        let center = Point::new(100.0, 100.0);
        let right = point_on_arc(center, 10.0, 0.0);
        let down = point_on_arc(center, 10.0, 90.0);
        let up = point_on_arc(center, 10.0, -90.0);

        assert!((right.x - 110.0).abs() <= 1e-9 && (right.y - 100.0).abs() <= 1e-9);
        assert!((down.x - 100.0).abs() <= 1e-9 && (down.y - 110.0).abs() <= 1e-9);
        assert!((up.x - 100.0).abs() <= 1e-9 && (up.y - 90.0).abs() <= 1e-9);
    }

    #[test]
    fn clamp_unit_pins_out_of_range_and_nan() {
        assert_eq!(clamp_unit(-0.5), 0.0);
        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
    }
}
