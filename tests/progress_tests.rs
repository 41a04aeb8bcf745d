use sunmoon_rs::core::{ArcGeometry, BoundingBox, SizeParameters, TimeWindow};
use sunmoon_rs::core::{session_duration_ms, target_angle_deg};

const RISE_MS: i64 = 1_591_999_200_000;
const SET_MS: i64 = 1_592_046_000_000;

fn sweep() -> f64 {
    ArcGeometry::resolve(BoundingBox::new(1000, 400), SizeParameters::default())
        .expect("feasible geometry")
        .sweep_angle_deg()
}

#[test]
fn midpoint_of_window_maps_to_half_sweep_exactly() {
    let sweep = sweep();
    let window = TimeWindow::new(RISE_MS, SET_MS);
    let now = RISE_MS + (SET_MS - RISE_MS) / 2;

    assert_eq!(target_angle_deg(window, sweep, now), sweep / 2.0);
}

#[test]
fn window_edges_map_to_zero_and_full_sweep_exactly() {
    let sweep = sweep();
    let window = TimeWindow::new(RISE_MS, SET_MS);

    assert_eq!(target_angle_deg(window, sweep, RISE_MS), 0.0);
    assert_eq!(target_angle_deg(window, sweep, SET_MS), sweep);
}

#[test]
fn target_is_non_decreasing_across_the_day() {
    let sweep = sweep();
    let window = TimeWindow::new(RISE_MS, SET_MS);
    let step = 15 * 60 * 1000;

    let mut previous = f64::NEG_INFINITY;
    let mut now = RISE_MS - 2 * step;
    while now <= SET_MS + 2 * step {
        let target = target_angle_deg(window, sweep, now);
        assert!(target >= previous);
        assert!((0.0..=sweep).contains(&target));
        previous = target;
        now += step;
    }
}

#[test]
fn half_target_halves_the_default_run_time() {
    let sweep = sweep();
    assert_eq!(session_duration_ms(5000, sweep / 2.0, sweep), 2500);
}

#[test]
fn window_built_from_datetimes_matches_millis() {
    let rise = chrono::DateTime::from_timestamp_millis(RISE_MS).expect("valid instant");
    let set = chrono::DateTime::from_timestamp_millis(SET_MS).expect("valid instant");
    let window = TimeWindow::from_datetimes(rise, set);

    assert_eq!(window, TimeWindow::new(RISE_MS, SET_MS));
    assert_eq!(window.span_ms(), 46_800_000);
    assert!(window.is_well_formed());
}
