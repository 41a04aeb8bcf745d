pub mod arc_geometry;
pub mod primitives;
pub mod progress;
pub mod types;

pub use arc_geometry::ArcGeometry;
pub use primitives::{clamp_unit, datetime_to_unix_millis, point_on_arc};
pub use progress::{ProgressState, session_duration_ms, target_angle_deg};
pub use types::{BoundingBox, DEFAULT_ARC_RATIO, Point, SizeParameters, TimeWindow};
