//! The density-tiered tick-mark generator for the logarithmic ruler/wheel.
//!
//! Mark density scales with zoom without unbounded growth: an integer
//! density level steps up each time the stretch crosses a power-of-`factor`
//! threshold, and the mark array is rebuilt only on those steps. Three
//! adjacent tiers are always generated so a tier fading out and a tier
//! fading in both remain available during the transition; between rebuilds
//! only the continuous stretch value moves marks around.

use lazy_static::lazy_static;
use log::debug;

use super::WheelConfig;
use crate::drawing::Float;

/// One tick on the ruler/wheel. `value` is the position along the
/// unstretched axis; labeled marks render as major ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
  pub value: Float,
  pub label: Option<String>,
}

/// Renders a mark value the way the original labels read: fixed to eight
/// decimal places, trailing zeros dropped.
pub fn format_value(value: Float) -> String {
  let s = format!("{value:.8}");
  let s = s.trim_end_matches('0').trim_end_matches('.');
  s.to_string()
}

/// The tier index of the densest visible tier for a given stretch:
/// `floor(log(level_step × stretch) / log(factor))`.
///
/// Non-decreasing in `stretch`; total for every stretch, including the
/// extremes where the stretch itself has under- or overflowed: the tier
/// index saturates so the tier loop in [build_marks] always has two
/// coarser levels below it.
pub fn density_level(config: &WheelConfig, stretch: Float) -> i32 {
  let raw = ((config.level_step * stretch).ln() / config.factor.ln()).floor();
  raw.clamp(Float::from(i32::MIN + 2), Float::from(i32::MAX)) as i32
}

/// Builds the full mark array for a density level, densest tier first.
///
/// Tier `d` covers values up to `factor^(1 − d)`. The current tier emits
/// the full sample count; the two coarser tiers skip the leading portion
/// already covered by a denser tier, so they contribute `N − N/factor`
/// marks each, starting where the denser tier ended. Every
/// `label_every`-th mark of a tier carries a label.
pub fn build_marks(config: &WheelConfig, level: i32) -> Vec<Mark> {
  let n = config.samples_per_tier as Float;
  let older_count = (n - n / config.factor).ceil() as usize;

  let mut marks = Vec::new();
  let mut start: Float = 0.0;
  for d in (level.saturating_sub(2)..=level).rev() {
    let max_tick = config.factor.powf(1.0 - Float::from(d));
    let count = if d == level {
      config.samples_per_tier
    } else {
      older_count
    };
    for i in 0..count {
      let value = start + max_tick * (i as Float) / n;
      let label = if i % config.label_every == 0 {
        Some(format_value(value))
      } else {
        None
      };
      marks.push(Mark { value, label });
    }
    start = max_tick;
  }
  debug!("built {} marks for density level {level}", marks.len());
  marks
}

/// A mark is on the wheel while its stretched position has wrapped past the
/// ruler's origin but not yet around a full tier: `1 ≤ value·stretch < factor`,
/// and only for values at or below the unstretched end.
pub fn wheel_visible(config: &WheelConfig, value: Float, stretch: Float) -> bool {
  let k = value * stretch;
  (1.0..config.factor).contains(&k) && value <= 1.0
}

/// A mark stays on the flat ruler until its stretched position reaches the
/// wheel: `value·stretch < 1`.
pub fn ruler_visible(value: Float, stretch: Float) -> bool {
  value * stretch < 1.0
}

/// Offset of a ruler-visible mark from the wheel end of the ruler, as a
/// percentage of the ruler's length.
pub fn ruler_offset_percent(value: Float, stretch: Float) -> Float {
  value * stretch * 100.0
}

/// The current mark array, memoized by density level so that continuous
/// stretch changes between tier crossings cost nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarkSet {
  level: Option<i32>,
  marks: Vec<Mark>,
}

impl MarkSet {
  pub fn new() -> Self {
    MarkSet::default()
  }

  /// Recomputes the density level for `stretch` and rebuilds the mark array
  /// if it changed. Returns true when a rebuild happened.
  pub fn refresh(&mut self, config: &WheelConfig, stretch: Float) -> bool {
    let level = density_level(config, stretch);
    if self.level == Some(level) {
      return false;
    }
    self.marks = build_marks(config, level);
    self.level = Some(level);
    true
  }

  pub fn level(&self) -> Option<i32> {
    self.level
  }

  pub fn marks(&self) -> &[Mark] {
    &self.marks
  }
}

lazy_static! {
  /// Note names placed at their Pythagorean string-length positions: fifths
  /// up from D at `(2/3)^n / 16`, fifths down at `(3/2)^n / 16`.
  pub static ref PYTHAGOREAN_MARKS: Vec<Mark> = pythagorean_marks();
}

fn pythagorean_marks() -> Vec<Mark> {
  let fifth: Float = 2.0 / 3.0;
  let f: Float = (2.0 as Float).powi(-4);
  let ups = ["D", "A", "E", "B", "F#", "C#", "G#", "D#"];
  let downs = ["G", "C", "F", "Bb", "Eb", "Ab"];

  let mut marks = Vec::new();
  for (n, name) in ups.iter().enumerate() {
    marks.push(Mark {
      value: fifth.powi(n as i32) * f,
      label: Some((*name).to_string()),
    });
  }
  for (n, name) in downs.iter().enumerate() {
    marks.push(Mark {
      value: fifth.powi(-(n as i32 + 1)) * f,
      label: Some((*name).to_string()),
    });
  }
  marks
}
