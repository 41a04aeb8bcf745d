use proptest::prelude::*;
use sunmoon_rs::core::{TimeWindow, session_duration_ms, target_angle_deg};

proptest! {
    #[test]
    fn target_angle_is_monotonic_and_bounded(
        rise in -1_000_000_000i64..1_000_000_000,
        span in 1i64..200_000_000,
        a in -300_000_000i64..300_000_000,
        b in -300_000_000i64..300_000_000,
        sweep in 1.0f64..179.0,
    ) {
        let window = TimeWindow::new(rise, rise + span);
        let (early, late) = if a <= b { (a, b) } else { (b, a) };

        let early_target = target_angle_deg(window, sweep, rise + early);
        let late_target = target_angle_deg(window, sweep, rise + late);

        prop_assert!(early_target <= late_target);
        prop_assert!((0.0..=sweep).contains(&early_target));
        prop_assert!((0.0..=sweep).contains(&late_target));
    }

    #[test]
    fn run_duration_never_exceeds_total(
        total in 0u64..60_000,
        sweep in 1.0f64..179.0,
        share in 0.0f64..=1.0,
    ) {
        let duration = session_duration_ms(total, sweep * share, sweep);
        prop_assert!(duration <= total);
    }

    #[test]
    fn extreme_windows_stay_bounded_and_monotonic(
        rise in i64::MIN..=0,
        set in 1i64..=i64::MAX,
        a in any::<i64>(),
        b in any::<i64>(),
        sweep in 1.0f64..179.0,
    ) {
        let window = TimeWindow::new(rise, set);
        let (early, late) = if a <= b { (a, b) } else { (b, a) };

        let early_target = target_angle_deg(window, sweep, early);
        let late_target = target_angle_deg(window, sweep, late);

        prop_assert!(early_target.is_finite());
        prop_assert!(early_target <= late_target);
        prop_assert!((0.0..=sweep).contains(&early_target));
        prop_assert!((0.0..=sweep).contains(&late_target));
    }
}

#[test]
fn half_width_window_around_extremes_maps_without_overflow() {
    let window = TimeWindow::new(i64::MIN / 2 - 10, i64::MAX / 2 + 10);
    let target = target_angle_deg(window, 160.0, i64::MAX / 2);

    assert!(target > 159.0 && target <= 160.0);
    assert_eq!(
        window.span_ms(),
        i128::from(i64::MAX / 2 + 10) - i128::from(i64::MIN / 2 - 10)
    );
    assert_eq!(
        target_angle_deg(TimeWindow::new(i64::MIN, i64::MAX), 160.0, i64::MAX),
        160.0
    );
}
