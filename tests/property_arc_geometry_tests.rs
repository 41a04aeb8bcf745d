use proptest::prelude::*;
use sunmoon_rs::core::{ArcGeometry, BoundingBox, SizeParameters, point_on_arc};

proptest! {
    #[test]
    fn feasible_geometry_keeps_anchors_on_baseline_and_circle(
        width in 50u32..4000,
        height in 50u32..2000,
        pad_top in 0u32..40,
        pad_bottom in 0u32..40,
        pad_left in 0u32..40,
        pad_right in 0u32..40,
        arc_ratio in 0.05f64..=1.0,
    ) {
        let bounds = BoundingBox::new(width, height)
            .with_padding(pad_top, pad_bottom, pad_left, pad_right);
        let params = SizeParameters::default().with_arc_ratio(arc_ratio);

        // Infeasible combinations are rejected; only feasible ones are checked.
        if let Ok(geometry) = ArcGeometry::resolve(bounds, params) {
            let center = geometry.center();
            let start = geometry.start_point();
            let end = geometry.end_point();

            prop_assert_eq!(start.y, geometry.baseline_y());
            prop_assert_eq!(end.y, geometry.baseline_y());
            prop_assert!((start.distance_to(center) - geometry.radius()).abs() <= 1.0);
            prop_assert!((end.distance_to(center) - geometry.radius()).abs() <= 1.0);
            prop_assert!(((center.x - start.x) - (end.x - center.x)).abs() <= 1e-6);
            prop_assert!(geometry.sweep_angle_deg() > 0.0);
            prop_assert!(geometry.sweep_angle_deg() < 180.0);
            prop_assert!(geometry.radius() > 0.0);
        }
    }

    #[test]
    fn angle_conversion_round_trips_to_anchors(
        width in 200u32..3000,
        arc_ratio in 0.3f64..=1.0,
        height_share in 0.05f64..0.95,
    ) {
        // Pick a height whose arc rises a share of the radius, so the
        // configuration is always feasible.
        let params = SizeParameters::default().with_arc_ratio(arc_ratio);
        let radius = (f64::from(width) * arc_ratio / 2.0).round();
        let reserved = params.text_block_height * 2.0 + params.text_margin
            + params.arc_line_thickness;
        let arc_height = (radius * height_share).floor().max(1.0);
        let height = (arc_height + reserved) as u32;
        let bounds = BoundingBox::new(width, height);

        let geometry = ArcGeometry::resolve(bounds, params).expect("feasible by construction");
        let start = point_on_arc(geometry.center(), geometry.radius(), geometry.start_angle_deg());
        let end = point_on_arc(geometry.center(), geometry.radius(), geometry.end_angle_deg());

        prop_assert!(start.distance_to(geometry.start_point()) <= 1e-6);
        prop_assert!(end.distance_to(geometry.end_point()) <= 1e-6);
    }
}
