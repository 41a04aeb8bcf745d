use approx::assert_abs_diff_eq;
use sunmoon_rs::SunMoonEngine;
use sunmoon_rs::api::{SunMoonConfig, TimeLabelFormat};
use sunmoon_rs::clock::ManualClock;
use sunmoon_rs::core::{BoundingBox, Point, SizeParameters, TimeWindow};
use sunmoon_rs::render::{Color, NullRenderer, Paint, SunMoonFrame};

const RISE_MS: i64 = 1_591_999_200_000;
const SET_MS: i64 = 1_592_046_000_000;
const MIDDAY_MS: i64 = RISE_MS + (SET_MS - RISE_MS) / 2;

fn engine_with(config: SunMoonConfig) -> SunMoonEngine<NullRenderer, ManualClock> {
    let mut engine =
        SunMoonEngine::with_clock(NullRenderer::default(), ManualClock::new(MIDDAY_MS), config)
            .expect("engine init");
    engine
        .on_layout(BoundingBox::new(1000, 400))
        .expect("feasible layout");
    engine
        .set_time_window(TimeWindow::new(RISE_MS, SET_MS))
        .expect("time window");
    engine
}

fn completed_frame(engine: &mut SunMoonEngine<NullRenderer, ManualClock>) -> SunMoonFrame {
    engine.start();
    engine.on_tick(0);
    engine.on_tick(60_000);
    engine.build_frame().expect("frame after layout")
}

#[test]
fn idle_frame_has_no_wedge_and_marker_on_rise_anchor() {
    let engine = engine_with(SunMoonConfig::default());
    let geometry = engine.geometry().expect("geometry");
    let frame = engine.build_frame().expect("frame after layout");

    assert!(frame.elapsed_wedge.is_none());
    assert_eq!(frame.marker.center, geometry.start_point());
    assert_eq!(frame.marker.size, 50.0);
    assert_eq!(frame.rise_anchor.center, geometry.start_point());
    assert_eq!(frame.set_anchor.center, geometry.end_point());
    assert_eq!(frame.rise_anchor.radius, 4.0);
    assert_eq!(frame.primitive_count(), 7);
}

#[test]
fn baseline_spans_usable_width_at_baseline() {
    let engine = engine_with(SunMoonConfig::default());
    let frame = engine.build_frame().expect("frame");

    assert_eq!(frame.baseline.from, Point::new(0.0, 362.0));
    assert_eq!(frame.baseline.to, Point::new(1000.0, 362.0));
    assert_eq!(frame.baseline.stroke_width, 2.0);
    assert_eq!(
        frame.baseline.paint,
        Paint::Solid(Color::from_hex("#8059576B").expect("valid hex"))
    );
}

#[test]
fn arc_gradient_runs_across_bottom_of_circle() {
    let engine = engine_with(SunMoonConfig::default());
    let frame = engine.build_frame().expect("frame");

    assert_eq!(frame.arc.radius, 430.0);
    assert_eq!(frame.arc.stroke_width, 1.0);
    let Paint::Gradient(gradient) = frame.arc.paint else {
        panic!("arc should be painted with a gradient");
    };
    assert_eq!(gradient.from, Point::new(70.0, 861.0));
    assert_eq!(gradient.to, Point::new(930.0, 861.0));
    assert_eq!(
        gradient.start_color,
        Color::from_hex("#FFDB48").expect("valid hex")
    );
    assert_eq!(
        gradient.end_color,
        Color::from_hex("#2C3981").expect("valid hex")
    );
}

#[test]
fn completed_frame_fills_wedge_down_to_marker_foot() {
    let mut engine = engine_with(SunMoonConfig::default());
    let geometry = engine.geometry().expect("geometry");
    let frame = completed_frame(&mut engine);
    let target = geometry.sweep_angle_deg() / 2.0;

    let wedge = frame.elapsed_wedge.expect("wedge once marker has moved");
    assert_eq!(wedge.start_point, geometry.start_point());
    assert_eq!(wedge.start_angle_deg, geometry.start_angle_deg());
    assert_eq!(wedge.sweep_angle_deg, target);
    assert_eq!(wedge.foot_point.x, frame.marker.center.x);
    assert_eq!(wedge.foot_point.y, geometry.baseline_y());

    // Half the sweep is the apex of the arc.
    assert_abs_diff_eq!(frame.marker.center.x, 500.0, epsilon = 1e-9);
    assert_abs_diff_eq!(frame.marker.center.y, 1.0, epsilon = 1e-9);
    assert_eq!(frame.primitive_count(), 8);

    let wedge_outline = engine.elapsed_wedge().expect("wedge outline");
    assert_eq!(wedge_outline.foot_point, wedge.foot_point);
    assert_eq!(wedge_outline.marker_point, frame.marker.center);
}

#[test]
fn time_labels_sit_under_anchors() {
    let engine = engine_with(SunMoonConfig::default());
    let geometry = engine.geometry().expect("geometry");
    let frame = engine.build_frame().expect("frame");

    assert_eq!(engine.rise_label(), "22:00");
    assert_eq!(engine.set_label(), "11:00");
    assert_eq!(frame.labels.len(), 2);

    let rise = &frame.labels[0];
    assert_eq!(rise.text, "22:00");
    assert_eq!(rise.position, Point::new(geometry.start_point().x, 373.0));
    assert_eq!(rise.font_size_px, 10.0);
    assert_eq!(rise.color, Color::from_hex("#A3A1B0").expect("valid hex"));

    let set = &frame.labels[1];
    assert_eq!(set.text, "11:00");
    assert_eq!(set.position, Point::new(geometry.end_point().x, 373.0));
}

#[test]
fn captions_render_on_second_line() {
    let config = SunMoonConfig::default()
        .with_label_format(TimeLabelFormat::Hour12)
        .with_captions("Sunrise", "Sunset");
    let engine = engine_with(config);
    let frame = engine.build_frame().expect("frame");

    let texts: Vec<&str> = frame.labels.iter().map(|label| label.text.as_str()).collect();
    assert_eq!(texts, ["10:00 PM", "Sunrise", "11:00 AM", "Sunset"]);
    assert_eq!(frame.labels[1].position.y, 387.0);
    assert_eq!(frame.labels[3].position.y, 387.0);
    assert_eq!(frame.primitive_count(), 9);
}

#[test]
fn empty_captions_are_skipped() {
    let config = SunMoonConfig::default().with_captions("", "Moonset");
    let engine = engine_with(config);
    let frame = engine.build_frame().expect("frame");

    let texts: Vec<&str> = frame.labels.iter().map(|label| label.text.as_str()).collect();
    assert_eq!(texts, ["22:00", "11:00", "Moonset"]);
}

#[test]
fn frame_without_time_window_has_no_time_labels() {
    let mut engine = SunMoonEngine::with_clock(
        NullRenderer::default(),
        ManualClock::new(MIDDAY_MS),
        SunMoonConfig::default(),
    )
    .expect("engine init");
    engine
        .on_layout(BoundingBox::new(1000, 400))
        .expect("feasible layout");

    let frame = engine.build_frame().expect("frame");
    assert!(frame.labels.is_empty());
    assert_eq!(frame.primitive_count(), 5);
    assert_eq!(engine.progress().target_angle_deg, 0.0);
}

#[test]
fn render_hands_built_frame_to_renderer() {
    let mut engine = engine_with(SunMoonConfig::default());
    let expected = completed_frame(&mut engine);

    engine.render().expect("render");
    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_label_count, 2);
    assert_eq!(renderer.last_frame.as_ref(), Some(&expected));
}

#[test]
fn padded_layout_offsets_every_primitive() {
    let mut engine = engine_with(SunMoonConfig::default());
    engine
        .on_layout(BoundingBox::new(1040, 420).with_padding(10, 10, 20, 20))
        .expect("feasible layout");
    let frame = engine.build_frame().expect("frame");

    assert_eq!(frame.baseline.from, Point::new(20.0, 372.0));
    assert_eq!(frame.baseline.to, Point::new(1020.0, 372.0));
    assert_eq!(frame.arc.center.x, 520.0);
    assert_eq!(frame.labels[0].position.y, 383.0);
}

#[test]
fn taller_text_block_moves_label_lines() {
    let config = SunMoonConfig::default()
        .with_size_parameters(SizeParameters::default().with_text_block(20.0, 6.0))
        .with_captions("Rise", "Set");
    let engine = engine_with(config);
    let geometry = engine.geometry().expect("geometry");
    let frame = engine.build_frame().expect("frame");

    assert_eq!(geometry.baseline_y(), 354.0);
    assert_eq!(frame.labels[0].position.y, 361.0);
    assert_eq!(frame.labels[1].position.y, 381.0);
}

#[test]
fn set_config_relayouts_with_new_parameters() {
    let mut engine = engine_with(SunMoonConfig::default());
    let wide = engine.geometry().expect("geometry");

    engine
        .set_config(
            SunMoonConfig::default()
                .with_size_parameters(SizeParameters::default().with_arc_ratio(0.8))
                .with_captions("Moonrise", "Moonset"),
        )
        .expect("valid config");

    let narrow = engine.geometry().expect("geometry");
    assert_eq!(narrow.radius(), 400.0);
    assert!(narrow.sweep_angle_deg() > wide.sweep_angle_deg());
    assert_eq!(engine.build_frame().expect("frame").labels.len(), 4);

    let invalid = SunMoonConfig::default()
        .with_size_parameters(SizeParameters::default().with_arc_ratio(0.0));
    assert!(engine.set_config(invalid).is_err());
    assert_eq!(engine.geometry(), Some(narrow));
}
