//! The "wheel of logarithms": a circular wheel that winds up an elastic
//! string as it turns.
//!
//! If the string is stretched so that the left-most number is t, then:
//! - the circle has wrapped integral (1 -> t) of L/x, i.e. L·ln(t).
//! - let circle factor r = R / L
//! - with radius R, that's angle = ln(t) / r radians.
//! - therefore stretch t is exp(angle · r)
//! - mark m is at angle ln(m) / r radians.
//! - for one turn per doubling, want ln(1/2)/r = 2π ⇒ r = ln2/2π = R/L.
//!   R+L = 100% ⇒ R = 100%/(1+1/r) = 100%/(1+2π/ln2)
//!
//! The same radius share calibrates scrolling: one turn of the wheel
//! corresponds to scrolling exactly one wheel-circumference's worth of
//! pixels.

pub mod marks;

use std::f64::consts::TAU;

use error_stack::{report, Report, Result};
use serde::{Deserialize, Serialize};

use crate::drawing::{Float, Point};
use crate::error::TonewheelError;
use crate::gesture::DragRotate;
use marks::{Mark, MarkSet};

/// Immutable wheel parameters. The experimental variants of the original
/// are presets of this one model, not separate subsystems.
///
/// Fields are private so every instance, including deserialized ones, has
/// passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WheelConfigParams", into = "WheelConfigParams")]
pub struct WheelConfig {
  /// Ratio of stretch at which the wheel completes one full rotation
  /// (2 for octave-doubling semantics, 10 for decade semantics).
  factor: Float,
  /// Calibration constant shifting which stretch triggers a new density
  /// tier.
  level_step: Float,
  /// Marks emitted for the densest tier.
  samples_per_tier: usize,
  /// Cadence of labeled (major) ticks within a tier.
  label_every: usize,
}

/// Wire shape of [WheelConfig]; deserialization funnels through the
/// validating constructors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct WheelConfigParams {
  factor: Float,
  level_step: Float,
  samples_per_tier: usize,
  label_every: usize,
}

impl TryFrom<WheelConfigParams> for WheelConfig {
  type Error = Report<TonewheelError>;

  fn try_from(params: WheelConfigParams) -> Result<Self, TonewheelError> {
    WheelConfig::new(params.factor, params.level_step)?
      .with_sampling(params.samples_per_tier, params.label_every)
  }
}

impl From<WheelConfig> for WheelConfigParams {
  fn from(config: WheelConfig) -> Self {
    WheelConfigParams {
      factor: config.factor,
      level_step: config.level_step,
      samples_per_tier: config.samples_per_tier,
      label_every: config.label_every,
    }
  }
}

impl WheelConfig {
  pub fn new(factor: Float, level_step: Float) -> Result<Self, TonewheelError> {
    if !factor.is_finite() || factor <= 1.0 {
      return Err(report!(TonewheelError::InvalidFactor(factor)));
    }
    if !level_step.is_finite() || level_step <= 0.0 {
      return Err(report!(TonewheelError::InvalidLevelStep(level_step)));
    }
    Ok(WheelConfig {
      factor,
      level_step,
      samples_per_tier: 100,
      label_every: 10,
    })
  }

  /// Overrides the tier sample count and label cadence; both must be
  /// nonzero.
  pub fn with_sampling(
    self,
    samples_per_tier: usize,
    label_every: usize,
  ) -> Result<Self, TonewheelError> {
    if samples_per_tier == 0 {
      return Err(report!(TonewheelError::InvalidSampleCount(samples_per_tier)));
    }
    if label_every == 0 {
      return Err(report!(TonewheelError::InvalidSampleCount(label_every)));
    }
    Ok(WheelConfig {
      samples_per_tier,
      label_every,
      ..self
    })
  }

  pub fn factor(&self) -> Float {
    self.factor
  }

  pub fn level_step(&self) -> Float {
    self.level_step
  }

  pub fn samples_per_tier(&self) -> usize {
    self.samples_per_tier
  }

  pub fn label_every(&self) -> usize {
    self.label_every
  }

  /// One turn per doubling; the default.
  pub fn octave() -> Self {
    WheelConfig {
      factor: 2.0,
      level_step: 3.0,
      samples_per_tier: 100,
      label_every: 10,
    }
  }

  /// One turn per seven octaves, with an early first tier change.
  pub fn seven_octaves() -> Self {
    WheelConfig {
      factor: 2f64.powi(7),
      level_step: 1.5,
      samples_per_tier: 100,
      label_every: 10,
    }
  }

  /// One turn per decade.
  pub fn decade() -> Self {
    WheelConfig {
      factor: 10.0,
      level_step: 20.0,
      samples_per_tier: 100,
      label_every: 10,
    }
  }
}

impl Default for WheelConfig {
  fn default() -> Self {
    WheelConfig::octave()
  }
}

/// Pure bidirectional conversions between wheel angle, string stretch, and
/// scroll offset, derived from a [WheelConfig].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
  factor: Float,
  /// Radians-per-natural-log-unit conversion constant: `ln(factor) / 2π`.
  circle_factor: Float,
  /// The wheel's radius as a percentage of total layout width; also the
  /// scroll-speed calibration constant.
  radius_percent: Float,
}

impl WheelGeometry {
  pub fn new(config: &WheelConfig) -> Self {
    let circle_factor = config.factor.ln() / TAU;
    WheelGeometry {
      factor: config.factor,
      circle_factor,
      radius_percent: 100.0 / (1.0 + 1.0 / circle_factor),
    }
  }

  pub fn circle_factor(&self) -> Float {
    self.circle_factor
  }

  pub fn radius_percent(&self) -> Float {
    self.radius_percent
  }

  pub fn angle_to_stretch(&self, angle: Float) -> Float {
    (-angle * self.circle_factor).exp()
  }

  pub fn stretch_to_angle(&self, stretch: Float) -> Float {
    -stretch.ln() / self.circle_factor
  }

  /// The wheel angle at which a mark value sits once it has wound onto the
  /// wheel.
  pub fn mark_angle(&self, value: Float) -> Float {
    -value.ln() / self.circle_factor
  }

  /// Radius of the wheel in pixels for a given viewport width.
  fn radius_px(&self, viewport_width: Float) -> Float {
    viewport_width * self.radius_percent / 100.0
  }

  pub fn scroll_to_angle(&self, scroll_offset: Float, viewport_width: Float) -> Float {
    -scroll_offset / self.radius_px(viewport_width)
  }

  pub fn angle_to_scroll(&self, angle: Float, viewport_width: Float) -> Float {
    -angle * self.radius_px(viewport_width)
  }
}

/// A guide message anchored to the scroll position where the ruler's
/// leading value (1/stretch) first reaches `start`. Prose and rendering
/// live outside the crate; this only carries the anchor and an opaque
/// text token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
  pub start: Float,
  pub text: String,
}

impl Message {
  pub fn scroll_position(&self, geometry: &WheelGeometry, viewport_width: Float) -> Float {
    let start_stretch = 1.0 / self.start;
    geometry.angle_to_scroll(geometry.stretch_to_angle(start_stretch), viewport_width)
  }
}

/// One logarithmic ruler/wheel view: owns its angle, its geometry, a
/// density-keyed mark cache, and a (non-snapping) drag resolver.
///
/// Every angle change flows through [`set_angle`](LogWheel::set_angle),
/// which refreshes the mark cache before the next event is handled.
#[derive(Debug, Clone, PartialEq)]
pub struct LogWheel {
  config: WheelConfig,
  geometry: WheelGeometry,
  gesture: DragRotate,
  angle: Float,
  marks: MarkSet,
}

impl LogWheel {
  pub fn new(config: WheelConfig) -> Self {
    let geometry = WheelGeometry::new(&config);
    let mut wheel = LogWheel {
      config,
      geometry,
      gesture: DragRotate::new(),
      angle: 0.0,
      marks: MarkSet::new(),
    };
    wheel.marks.refresh(&wheel.config, wheel.stretch());
    wheel
  }

  pub fn config(&self) -> &WheelConfig {
    &self.config
  }

  pub fn geometry(&self) -> &WheelGeometry {
    &self.geometry
  }

  /// Current rotation in radians, unbounded.
  pub fn angle(&self) -> Float {
    self.angle
  }

  /// Current stretch of the string, derived from the angle.
  pub fn stretch(&self) -> Float {
    self.geometry.angle_to_stretch(self.angle)
  }

  pub fn density_level(&self) -> i32 {
    marks::density_level(&self.config, self.stretch())
  }

  pub fn marks(&self) -> &[Mark] {
    self.marks.marks()
  }

  pub fn set_angle(&mut self, angle: Float) {
    self.angle = angle;
    self.marks.refresh(&self.config, self.stretch());
  }

  /// Scroll-container event: offset in pixels, viewport extent in pixels.
  pub fn on_scroll(&mut self, scroll_offset: Float, viewport_width: Float) {
    let angle = self.geometry.scroll_to_angle(scroll_offset, viewport_width);
    self.set_angle(angle);
  }

  pub fn on_press(&mut self, point: Point, center: Point) {
    if let Some(angle) = self.gesture.press(point, center, self.angle) {
      self.set_angle(angle);
    }
  }

  pub fn on_move(&mut self, point: Point) {
    if let Some(angle) = self.gesture.drag(point) {
      self.set_angle(angle);
    }
  }

  pub fn on_release(&mut self) {
    if let Some(angle) = self.gesture.release() {
      self.set_angle(angle);
    }
  }

  pub fn wheel_visible(&self, mark: &Mark) -> bool {
    marks::wheel_visible(&self.config, mark.value, self.stretch())
  }

  pub fn ruler_visible(&self, mark: &Mark) -> bool {
    marks::ruler_visible(mark.value, self.stretch())
  }

  pub fn ruler_offset_percent(&self, mark: &Mark) -> Float {
    marks::ruler_offset_percent(mark.value, self.stretch())
  }

  /// Rotation to apply to a wheel-visible mark.
  pub fn mark_rotation(&self, mark: &Mark) -> Float {
    self.geometry.mark_angle(mark.value)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn assert_close(a: Float, b: Float) {
    assert!((a - b).abs() < 1e-9, "expected {a} ≈ {b}");
  }

  #[test]
  fn config_rejects_degenerate_parameters() {
    assert!(WheelConfig::new(1.0, 3.0).is_err());
    assert!(WheelConfig::new(0.5, 3.0).is_err());
    assert!(WheelConfig::new(Float::NAN, 3.0).is_err());
    assert!(WheelConfig::new(2.0, 0.0).is_err());
    assert!(WheelConfig::new(2.0, -1.0).is_err());
    assert!(WheelConfig::new(2.0, 3.0).is_ok());
  }

  #[test]
  fn sampling_parameters_must_be_nonzero() {
    let config = WheelConfig::octave();
    assert!(config.with_sampling(0, 10).is_err());
    assert!(config.with_sampling(100, 0).is_err());

    let custom = config.with_sampling(50, 5).unwrap();
    assert_eq!(custom.samples_per_tier(), 50);
    assert_eq!(custom.label_every(), 5);
    assert_close(custom.factor(), 2.0);
  }

  #[test]
  fn deserialized_configs_go_through_validation() {
    let bad = r#"{"factor":2.0,"level_step":3.0,"samples_per_tier":100,"label_every":0}"#;
    assert!(serde_json::from_str::<WheelConfig>(bad).is_err());

    let good = r#"{"factor":10.0,"level_step":20.0,"samples_per_tier":100,"label_every":10}"#;
    let config: WheelConfig = serde_json::from_str(good).unwrap();
    assert_eq!(config, WheelConfig::decade());
  }

  #[test]
  fn stretch_angle_conversions_round_trip() {
    let geometry = WheelGeometry::new(&WheelConfig::octave());
    for &s in &[0.001, 0.5, 1.0, 3.0, 1000.0] {
      assert_close(geometry.angle_to_stretch(geometry.stretch_to_angle(s)), s);
    }
    for &a in &[-50.0, -1.0, 0.0, 2.0, 75.0] {
      assert_close(geometry.stretch_to_angle(geometry.angle_to_stretch(a)), a);
    }
  }

  #[test]
  fn one_full_turn_multiplies_stretch_by_factor() {
    for config in [WheelConfig::octave(), WheelConfig::decade()] {
      let geometry = WheelGeometry::new(&config);
      let s0 = geometry.angle_to_stretch(-1.0);
      let s1 = geometry.angle_to_stretch(-1.0 - TAU);
      assert_close(s1 / s0, config.factor);
    }
  }

  #[test]
  fn scroll_conversions_round_trip_and_match_circumference() {
    let geometry = WheelGeometry::new(&WheelConfig::octave());
    let viewport = 1280.0;
    for &offset in &[0.0, 10.0, -333.3, 4096.0] {
      let angle = geometry.scroll_to_angle(offset, viewport);
      assert_close(geometry.angle_to_scroll(angle, viewport), offset);
    }

    // scrolling one wheel circumference turns the wheel exactly once
    let radius = viewport * geometry.radius_percent() / 100.0;
    let angle = geometry.scroll_to_angle(TAU * radius, viewport);
    assert_close(angle, -TAU);
  }

  #[test]
  fn radius_percent_matches_the_derivation() {
    let geometry = WheelGeometry::new(&WheelConfig::octave());
    let expected = 100.0 / (1.0 + TAU / 2f64.ln());
    assert_close(geometry.radius_percent(), expected);
  }

  #[test]
  fn mark_angle_inverts_stretch_of_the_mark_value() {
    let geometry = WheelGeometry::new(&WheelConfig::octave());
    // a mark at value v reaches the wheel seam when v·stretch = 1, i.e.
    // when the wheel angle equals the mark's own angle
    for &v in &[0.125, 0.5, 1.0] {
      let angle = geometry.mark_angle(v);
      assert_close(geometry.angle_to_stretch(angle) * v, 1.0);
    }
  }

  #[test]
  fn message_anchors_at_the_scroll_for_its_start_value() {
    let geometry = WheelGeometry::new(&WheelConfig::octave());
    let msg = Message {
      start: 0.75,
      text: String::from("keep scrolling"),
    };
    let viewport = 1000.0;
    let scroll = msg.scroll_position(&geometry, viewport);
    let stretch = geometry.angle_to_stretch(geometry.scroll_to_angle(scroll, viewport));
    assert_close(1.0 / stretch, 0.75);
  }

  #[test]
  fn new_wheel_starts_at_rest_with_marks_ready() {
    let wheel = LogWheel::new(WheelConfig::octave());
    assert_close(wheel.angle(), 0.0);
    assert_close(wheel.stretch(), 1.0);
    assert_eq!(wheel.density_level(), 1);
    assert_eq!(wheel.marks().len(), 200);
  }

  #[test]
  fn extreme_angles_are_total_and_yield_no_visible_marks() {
    let mut wheel = LogWheel::new(WheelConfig::octave());

    // far enough clockwise the stretch underflows to zero; the wheel must
    // still settle on a (saturated) density level instead of panicking
    wheel.set_angle(7000.0);
    assert_eq!(wheel.stretch(), 0.0);
    assert!(wheel.marks().iter().all(|m| !wheel.wheel_visible(m)));

    wheel.set_angle(-7000.0);
    assert!(wheel.stretch().is_infinite());
    assert!(wheel.marks().iter().all(|m| !wheel.wheel_visible(m)));
    assert!(wheel.marks().iter().all(|m| !wheel.ruler_visible(m)));
  }

  #[test]
  fn scrolling_grows_the_stretch_and_steps_the_density_level() {
    let mut wheel = LogWheel::new(WheelConfig::octave());
    let viewport = 1000.0;
    let radius = viewport * wheel.geometry().radius_percent() / 100.0;

    // scroll down by one circumference: angle -(-TAU)... scrollTop grows
    // positive, angle goes negative, stretch doubles
    wheel.on_scroll(TAU * radius, viewport);
    assert_close(wheel.stretch(), 2.0);
    assert_eq!(wheel.density_level(), 2);
  }
}
