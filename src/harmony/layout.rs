//! Maps pitch-class slots onto a circle.
//!
//! Two placements are supported: equal temperament divides the circle into
//! twelve equal arcs, while just (Pythagorean) placement puts each note at
//! an angle proportional to the base-2 logarithm of its frequency ratio
//! under the (3/2)^n fifths-generated, octave-reduced scheme. In both
//! cases slot 0 sits at the top of the circle and angles grow clockwise.

use std::f64::consts::TAU;

use error_stack::{report, Result};
use serde::{Deserialize, Serialize};

use super::{fifths_index, NoteName, PitchClassIndex, MAJOR_START, MINOR_START, SCALE_PATTERN};
use crate::drawing::{frac, polar_to_cartesian, Angle, Float, Point};
use crate::error::TonewheelError;

/// How pitch-class indices map to angles around the circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuningMode {
  /// Twelve equal divisions of the circle.
  EqualTempered,
  /// Pythagorean log-ratio placement: the spiral of fifths flattened onto
  /// a circle.
  JustRatio,
}

/// Which note each slot displays. Placement is shared between orderings;
/// only the content is reindexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteOrdering {
  Chromatic,
  Fifths,
}

/// Immutable per-circle configuration, constructed once and passed to each
/// view instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleConfig {
  pub tuning: TuningMode,
  pub ordering: NoteOrdering,
  /// Fraction of the circle radius at which note centers sit.
  pub scale_radius: Float,
}

impl CircleConfig {
  pub fn new(
    tuning: TuningMode,
    ordering: NoteOrdering,
    scale_radius: Float,
  ) -> Result<Self, TonewheelError> {
    if !scale_radius.is_finite() || scale_radius <= 0.0 || scale_radius > 1.0 {
      return Err(report!(TonewheelError::InvalidScaleRadius(scale_radius)));
    }
    Ok(CircleConfig {
      tuning,
      ordering,
      scale_radius,
    })
  }
}

impl Default for CircleConfig {
  fn default() -> Self {
    CircleConfig {
      tuning: TuningMode::JustRatio,
      ordering: NoteOrdering::Chromatic,
      scale_radius: 0.8,
    }
  }
}

/// The angle (radians, in [0, 2π)) at which a slot sits, measured clockwise
/// from the top of the circle.
pub fn note_angle(slot: PitchClassIndex, tuning: TuningMode) -> Float {
  match tuning {
    TuningMode::EqualTempered => TAU * Float::from(slot.get()) / 12.0,
    TuningMode::JustRatio => {
      // n fifths up from the tonic lands at frac(n·log2(3/2)) of an octave.
      // The number of fifths for a slot is its fifths-order index.
      let n = Float::from(fifths_index(slot).get());
      frac(n * (1.5 as Float).log2()) * TAU
    }
  }
}

/// Unit-square position of a slot center: `(1 + sin·r, 1 − cos·r)` with
/// both coordinates in [0, 2]. The renderer scales this into its own
/// coordinate space (the original multiplies by 50 for percentages).
pub fn note_position(slot: PitchClassIndex, config: &CircleConfig) -> Point {
  let angle = Angle::Radians(note_angle(slot, config.tuning));
  let center = Point { x: 1.0, y: 1.0 };
  polar_to_cartesian(center, config.scale_radius, angle)
}

/// Marks a slot as the entry point of the major or minor scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMarker {
  MajorStart,
  MinorStart,
}

/// Everything the renderer needs to draw one slot: which note it shows,
/// whether that note is in the diatonic scale (an "open hole" in the
/// overlay), and whether it carries a scale-start marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotAppearance {
  pub note: NoteName,
  pub in_scale: bool,
  pub marker: Option<ScaleMarker>,
}

pub fn slot_appearance(slot: PitchClassIndex, ordering: NoteOrdering) -> SlotAppearance {
  let idx = match ordering {
    NoteOrdering::Chromatic => slot,
    NoteOrdering::Fifths => fifths_index(slot),
  };
  let marker = if idx.get() == MAJOR_START {
    Some(ScaleMarker::MajorStart)
  } else if idx.get() == MINOR_START {
    Some(ScaleMarker::MinorStart)
  } else {
    None
  };
  SlotAppearance {
    note: NoteName::from(idx),
    in_scale: SCALE_PATTERN[idx.get() as usize],
    marker,
  }
}
