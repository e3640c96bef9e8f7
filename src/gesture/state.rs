use std::fmt::Display;

use log::debug;

use crate::drawing::{closest_turn, Float, Point};

/// One of the possible states a drag-to-rotate gesture can be in.
#[derive(Debug, Clone, PartialEq)]
pub enum State {
  /// No pointer is down on the rotatable element.
  Idle,

  /// The pointer is down and every move sample steers the rotation.
  Dragging {
    /// Visual center of the element, fixed at press time.
    center: Point,
    /// Pointer angle at press time, relative to `center`.
    press_angle: Float,
    /// Difference between the element's rotation and the pointer angle at
    /// press time; added to every subsequent sample.
    angle_offset: Float,
    /// The rotation angle as of the latest qualifying sample.
    angle: Float,
    /// Whether any qualifying move sample arrived. A press-and-release with
    /// no movement is a click, which snaps differently.
    moved: bool,
  },
}

/// A pointer event applied to the gesture state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
  Press {
    point: Point,
    center: Point,
    /// The element's rotation angle at press time.
    current_angle: Float,
  },
  Move {
    point: Point,
  },
  Release,
}

/// Emitted when an action changes the rotation the view should show.
/// Snapping policy is applied by the resolver, not here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Update {
  /// A move sample rotated the element to this angle.
  Rotate(Float),
  /// The pointer was released after dragging; the angle may still settle
  /// onto a grid.
  Settled(Float),
  /// The pointer was released without ever moving: a click.
  Tapped { press_angle: Float, angle: Float },
}

/// Pointer angle of `point` around `center`, or `None` for a degenerate
/// sample.
///
/// The zero vector has no angle; JS surfaces that as `NaN` from `atan2`,
/// but Rust's `atan2(0, 0)` returns 0, so the check is explicit here.
/// Non-finite coordinates are degenerate for the same reason.
fn sample_angle(point: Point, center: Point) -> Option<Float> {
  let dx = point.x - center.x;
  let dy = point.y - center.y;
  if !dx.is_finite() || !dy.is_finite() || (dx == 0.0 && dy == 0.0) {
    return None;
  }
  Some(dy.atan2(dx))
}

impl Display for State {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use State::*;
    match self {
      Idle => write!(f, "Idle"),
      Dragging { angle, moved, .. } => write!(f, "Dragging(angle: {angle}, moved: {moved})"),
    }
  }
}

impl State {
  /// Applies an [Action] to the current [State], returning the new State and
  /// any [Update] the view should apply.
  ///
  /// Degenerate samples and actions that don't apply to the current state
  /// leave the state unchanged and emit nothing; per the error-handling
  /// policy there are no failure transitions.
  pub(crate) fn next(self, action: Action) -> (State, Option<Update>) {
    use Action::*;
    use State::*;

    match (action, self) {
      (
        Press {
          point,
          center,
          current_angle,
        },
        Idle,
      ) => match sample_angle(point, center) {
        // A press exactly on the center has no angle: ignore the whole
        // gesture, not just the sample.
        None => (Idle, None),
        Some(press_angle) => {
          debug!("drag start at pointer angle {press_angle}");
          (
            Dragging {
              center,
              press_angle,
              angle_offset: current_angle - press_angle,
              angle: current_angle,
              moved: false,
            },
            None,
          )
        }
      },

      (
        Move { point },
        Dragging {
          center,
          press_angle,
          angle_offset,
          angle,
          moved,
        },
      ) => match sample_angle(point, center) {
        // Degenerate sample: retain the prior angle, stay dragging.
        None => (
          Dragging {
            center,
            press_angle,
            angle_offset,
            angle,
            moved,
          },
          None,
        ),
        Some(pointer_angle) => {
          // Add turns to minimize the rotation amount, so the transition
          // stays smooth.
          let new_angle = closest_turn(angle_offset + pointer_angle, angle);
          (
            Dragging {
              center,
              press_angle,
              angle_offset,
              angle: new_angle,
              moved: true,
            },
            Some(Update::Rotate(new_angle)),
          )
        }
      },

      (
        Release,
        Dragging {
          press_angle,
          angle,
          moved,
          ..
        },
      ) => {
        debug!("drag end at angle {angle} (moved: {moved})");
        let update = if moved {
          Update::Settled(angle)
        } else {
          Update::Tapped { press_angle, angle }
        };
        (Idle, Some(update))
      }

      // A move or release with no press in flight, or a second press while
      // already dragging, does not apply.
      (_, state) => (state, None),
    }
  }
}
