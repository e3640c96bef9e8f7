//! The pair of rotary note circles: half-tones in order, and the circle of
//! fifths.
//!
//! Both circles draw the same twelve pitch classes; the fifths circle just
//! reindexes which note each slot shows. Their rotations are coupled at the
//! fifths-generator ratio, so turning one by a note turns the other by
//! seven notes. Each circle has its own drag resolver snapping to the
//! twelve-note grid; all cross-circle writes go through the coupling
//! engine.

use error_stack::Result;

use crate::coupling::CoupledAngles;
use crate::drawing::{Float, Point};
use crate::error::TonewheelError;
use crate::gesture::DragRotate;
use crate::harmony::layout::{
  note_position, slot_appearance, CircleConfig, NoteOrdering, SlotAppearance, TuningMode,
};
use crate::harmony::PitchClassIndex;

/// Which of the two coupled circles a gesture landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleSide {
  Chromatic,
  Fifths,
}

/// Owner of the coupled pair of note circles. The only writer of either
/// angle; gesture resolvers feed it raw angles and it propagates the
/// partner rotation through the coupling engine.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteCircles {
  chromatic: CircleConfig,
  fifths: CircleConfig,
  angles: CoupledAngles,
  chromatic_gesture: DragRotate,
  fifths_gesture: DragRotate,
}

impl NoteCircles {
  pub fn new(tuning: TuningMode, scale_radius: Float) -> Result<Self, TonewheelError> {
    let chromatic = CircleConfig::new(tuning, NoteOrdering::Chromatic, scale_radius)?;
    let fifths = CircleConfig::new(tuning, NoteOrdering::Fifths, scale_radius)?;
    Ok(NoteCircles {
      chromatic,
      fifths,
      angles: CoupledAngles::new(),
      chromatic_gesture: DragRotate::with_snap(12),
      fifths_gesture: DragRotate::with_snap(12),
    })
  }

  pub fn chromatic_angle(&self) -> Float {
    self.angles.primary()
  }

  pub fn fifths_angle(&self) -> Float {
    self.angles.secondary()
  }

  /// Slot placement, shared by both circles.
  pub fn position(&self, slot: PitchClassIndex) -> Point {
    note_position(slot, &self.chromatic)
  }

  /// What a slot displays on the given circle.
  pub fn appearance(&self, side: CircleSide, slot: PitchClassIndex) -> SlotAppearance {
    let ordering = match side {
      CircleSide::Chromatic => NoteOrdering::Chromatic,
      CircleSide::Fifths => NoteOrdering::Fifths,
    };
    slot_appearance(slot, ordering)
  }

  pub fn on_press(&mut self, side: CircleSide, point: Point, center: Point) {
    let current = self.angle_of(side);
    let update = self.gesture_mut(side).press(point, center, current);
    if let Some(angle) = update {
      self.set_angle(side, angle);
    }
  }

  pub fn on_move(&mut self, side: CircleSide, point: Point) {
    if let Some(angle) = self.gesture_mut(side).drag(point) {
      self.set_angle(side, angle);
    }
  }

  pub fn on_release(&mut self, side: CircleSide) {
    if let Some(angle) = self.gesture_mut(side).release() {
      self.set_angle(side, angle);
    }
  }

  fn angle_of(&self, side: CircleSide) -> Float {
    match side {
      CircleSide::Chromatic => self.angles.primary(),
      CircleSide::Fifths => self.angles.secondary(),
    }
  }

  fn gesture_mut(&mut self, side: CircleSide) -> &mut DragRotate {
    match side {
      CircleSide::Chromatic => &mut self.chromatic_gesture,
      CircleSide::Fifths => &mut self.fifths_gesture,
    }
  }

  fn set_angle(&mut self, side: CircleSide, angle: Float) {
    match side {
      CircleSide::Chromatic => self.angles.set_primary(angle),
      CircleSide::Fifths => self.angles.set_secondary(angle),
    }
  }
}
