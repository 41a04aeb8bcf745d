use serde::{Deserialize, Serialize};

use crate::animation::AnimationState;
use crate::core::{ArcGeometry, Point, ProgressState};

/// Marker position emitted for one animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressFrame {
    /// Absolute arc angle of the marker (`start_angle + offset`).
    pub angle_deg: f64,
    /// Angle travelled from the rise anchor.
    pub offset_angle_deg: f64,
    pub point: Point,
    pub fraction_complete: f64,
    pub state: AnimationState,
}

impl ProgressFrame {
    #[must_use]
    pub fn resolve(geometry: ArcGeometry, progress: ProgressState, state: AnimationState) -> Self {
        let offset_angle_deg = progress.offset_angle_deg();
        Self {
            angle_deg: geometry.start_angle_deg() + offset_angle_deg,
            offset_angle_deg,
            point: geometry.point_at_offset(offset_angle_deg),
            fraction_complete: progress.animation_fraction,
            state,
        }
    }
}

/// Outline of the filled "elapsed" region.
///
/// Bounded by the rise anchor, the arc up to the marker, and the marker's foot
/// on the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElapsedWedge {
    pub start_point: Point,
    pub start_angle_deg: f64,
    pub offset_angle_deg: f64,
    pub marker_point: Point,
    pub foot_point: Point,
}

impl ElapsedWedge {
    #[must_use]
    pub fn resolve(geometry: ArcGeometry, frame: ProgressFrame) -> Self {
        Self {
            start_point: geometry.start_point(),
            start_angle_deg: geometry.start_angle_deg(),
            offset_angle_deg: frame.offset_angle_deg,
            marker_point: frame.point,
            foot_point: Point::new(frame.point.x, geometry.baseline_y()),
        }
    }
}
