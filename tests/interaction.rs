//! End-to-end gesture and scroll scenarios against the public API.

use std::f64::consts::TAU;

use tonewheel::{
  CircleSide, Float, LogWheel, NoteCircles, Point, TuningMode, WheelConfig,
};

fn init_logger() {
  let _ = env_logger::builder().is_test(true).try_init();
}

fn pt(x: Float, y: Float) -> Point {
  Point { x, y }
}

fn assert_close(a: Float, b: Float) {
  assert!((a - b).abs() < 1e-9, "expected {a} ≈ {b}");
}

#[test]
fn scrolling_the_wheel_migrates_marks_from_ruler_to_wheel() {
  init_logger();
  let mut wheel = LogWheel::new(WheelConfig::octave());
  let viewport = 1200.0;

  // at rest, the value-1/2 mark is on the ruler and off the wheel
  let half = wheel
    .marks()
    .iter()
    .find(|m| (m.value - 0.5).abs() < 1e-12)
    .cloned()
    .expect("a mark at 1/2");
  assert!(wheel.ruler_visible(&half));
  assert!(!wheel.wheel_visible(&half));

  // scroll until the string has stretched past 2: the mark has wound onto
  // the wheel
  let radius = viewport * wheel.geometry().radius_percent() / 100.0;
  wheel.on_scroll(1.1 * TAU * radius, viewport);
  assert!(wheel.stretch() > 2.0);
  assert!(!wheel.ruler_visible(&half));
  assert!(wheel.wheel_visible(&half));

  // and far enough out, it falls off the wheel's far side
  wheel.on_scroll(2.5 * TAU * radius, viewport);
  assert!(wheel.stretch() > 4.0);
  assert!(!wheel.wheel_visible(&half));
}

#[test]
fn mark_rebuilds_track_tier_changes_not_scroll_samples() {
  init_logger();
  let mut wheel = LogWheel::new(WheelConfig::octave());
  let viewport = 1000.0;

  let level_before = wheel.density_level();
  let marks_before = wheel.marks().to_vec();

  // many small scroll samples within one tier: the mark array is stable
  for i in 1..=50 {
    wheel.on_scroll(Float::from(i) * 0.25, viewport);
  }
  assert_eq!(wheel.density_level(), level_before);
  assert_eq!(wheel.marks(), &marks_before[..]);

  // one big jump across several tiers rebuilds to the new level
  let radius = viewport * wheel.geometry().radius_percent() / 100.0;
  wheel.on_scroll(3.0 * TAU * radius, viewport);
  assert!(wheel.density_level() > level_before);
  assert_ne!(wheel.marks(), &marks_before[..]);
}

#[test]
fn dragging_the_log_wheel_does_not_snap_on_release() {
  init_logger();
  let mut wheel = LogWheel::new(WheelConfig::octave());
  let center = pt(200.0, 200.0);

  wheel.on_press(pt(300.0, 200.0), center);
  wheel.on_move(pt(200.0 + 100.0 * 0.37f64.cos(), 200.0 + 100.0 * 0.37f64.sin()));
  wheel.on_release();

  assert_close(wheel.angle(), 0.37);
  assert_close(wheel.stretch(), (-0.37 * wheel.geometry().circle_factor()).exp());
}

#[test]
fn a_zero_movement_drag_on_a_resting_wheel_is_a_click() {
  init_logger();
  let mut circles = NoteCircles::new(TuningMode::EqualTempered, 0.8).unwrap();
  let center = pt(180.0, 180.0);

  // press and release at the same point, pointer a bit clockwise of east
  let press = pt(180.0 + 100.0 * 0.2f64.cos(), 180.0 + 100.0 * 0.2f64.sin());
  circles.on_press(CircleSide::Chromatic, press, center);
  circles.on_release(CircleSide::Chromatic);

  // snapped relative to the press angle, not wherever the angle sat before
  let step = TAU / 12.0;
  let expected = std::f64::consts::FRAC_PI_2 + (0.2f64 / step).round() * step;
  assert_close(circles.chromatic_angle(), expected);
}

#[test]
fn turning_one_circle_a_full_turn_leaves_both_on_the_grid() {
  init_logger();
  let mut circles = NoteCircles::new(TuningMode::JustRatio, 0.8).unwrap();
  let center = pt(180.0, 180.0);

  circles.on_press(CircleSide::Chromatic, pt(280.0, 180.0), center);
  // walk the pointer most of the way around in small steps, then release
  for i in 1..=100 {
    let a = TAU * 0.9 * Float::from(i) / 100.0;
    circles.on_move(
      CircleSide::Chromatic,
      pt(180.0 + 100.0 * a.cos(), 180.0 + 100.0 * a.sin()),
    );
  }
  circles.on_release(CircleSide::Chromatic);

  let step = TAU / 12.0;
  let chromatic_steps = circles.chromatic_angle() / step;
  assert_close(chromatic_steps, chromatic_steps.round());
  // the drag stayed continuous: no sample jumped by more than half a turn,
  // so the released angle is a bit less than one full turn, not re-wrapped
  assert!(circles.chromatic_angle() > TAU / 2.0);

  let fifths_steps = circles.fifths_angle() / step;
  assert_close(fifths_steps, fifths_steps.round());
}
