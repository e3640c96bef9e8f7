//! Keeps two rotation angles locked in the fifths-generator ratio.
//!
//! Advancing the chromatic circle by one note (1/12 turn) advances the
//! circle of fifths by seven notes, and vice versa, so the two views stay
//! in a fixed `secondary = 7 × primary` relationship. Because multiplying
//! an angle by 7 can land the raw product many turns away from where the
//! partner view currently points, every recomputed angle is re-homed with
//! [`closest_turn`] so the visual rotation never jumps further than it
//! has to.

use log::trace;

use crate::drawing::{closest_turn, Float};

/// The circle-of-fifths generator: seven semitone steps per fifth.
pub const FIFTHS_GENERATOR: Float = 7.0;

/// A pair of unbounded rotation angles (radians) held at the generator
/// ratio. Angles are not reduced mod 2π, so multi-turn rotations animate
/// smoothly.
///
/// Note that `set_secondary` also multiplies by 7: since 7 × 7 = 49 ≡ 1
/// (mod 12), the generator is its own inverse on the 1/12-turn grid, and
/// the closest-turn re-homing absorbs the whole-turn difference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoupledAngles {
  primary: Float,
  secondary: Float,
}

impl Default for CoupledAngles {
  fn default() -> Self {
    CoupledAngles {
      primary: 0.0,
      secondary: 0.0,
    }
  }
}

impl CoupledAngles {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn primary(&self) -> Float {
    self.primary
  }

  pub fn secondary(&self) -> Float {
    self.secondary
  }

  /// Sets the primary (chromatic) angle and recomputes the secondary from it.
  pub fn set_primary(&mut self, value: Float) {
    self.primary = value;
    self.secondary = closest_turn(value * FIFTHS_GENERATOR, self.secondary);
    trace!(
      "recoupled from primary: primary={} secondary={}",
      self.primary,
      self.secondary
    );
  }

  /// Sets the secondary (fifths) angle and recomputes the primary from it.
  pub fn set_secondary(&mut self, value: Float) {
    self.secondary = value;
    self.primary = closest_turn(value * FIFTHS_GENERATOR, self.primary);
    trace!(
      "recoupled from secondary: primary={} secondary={}",
      self.primary,
      self.secondary
    );
  }
}
