use serde::{Deserialize, Serialize};

use error_stack::Context;
use std::fmt::Display;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum TonewheelError {
  /// The tier ratio of a wheel config must be finite and greater than 1.
  InvalidFactor(f64),

  /// The density calibration constant must be finite and positive.
  InvalidLevelStep(f64),

  /// Per-tier sample count and label cadence must be nonzero.
  InvalidSampleCount(usize),

  /// The visual radius fraction for note placement must be in (0, 1].
  InvalidScaleRadius(f64),
}

impl Context for TonewheelError {}

impl Display for TonewheelError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use TonewheelError::*;
    match self {
      InvalidFactor(v) => write!(f, "wheel factor must be finite and > 1, got {v}"),

      InvalidLevelStep(v) => write!(f, "level step must be finite and > 0, got {v}"),

      InvalidSampleCount(v) => write!(f, "mark sampling counts must be > 0, got {v}"),

      InvalidScaleRadius(v) => write!(f, "scale radius must be in (0, 1], got {v}"),
    }
  }
}
