//! Shared geometry types and angle helpers used by the circle and wheel models.

use std::f64::consts::TAU;

/// Just a typedef for the floating point type used for angles, stretches, etc.
/// This only exists to make it a bit easier to change to f32 if that's ever
/// needed.
pub type Float = f64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
  pub x: Float,
  pub y: Float,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Angle {
  Degrees(Float),
  Radians(Float),
}

impl Angle {
  pub fn as_degrees(&self) -> Float {
    match self {
      Angle::Degrees(d) => *d,
      Angle::Radians(r) => r.to_degrees(),
    }
  }
}

/// Convert polar coordinates in the form of (center, radius, angle) to
/// Cartesian (x,y) coordinates.
pub fn polar_to_cartesian(center: Point, radius: Float, angle: Angle) -> Point {
  let a = (angle.as_degrees() - 90.0).to_radians();
  Point {
    x: center.x + (radius * a.cos()),
    y: center.y + (radius * a.sin()),
  }
}

/// Add whole turns to `angle` to land it as close to `reference` as possible.
///
/// Whenever an angle is recomputed from scratch (a fresh `atan2` sample, or a
/// coupled angle multiplied by the generator ratio), the raw result can sit
/// many turns away from where the view currently points. Re-homing it with
/// `closest_turn` keeps every rotation continuous: the returned value is
/// congruent to `angle` mod 2π and within π of `reference`.
pub fn closest_turn(angle: Float, reference: Float) -> Float {
  angle + ((reference - angle) / TAU).round() * TAU
}

/// Fractional part wrapped into [0, 1).
pub fn frac(x: Float) -> Float {
  x - x.floor()
}
