//! Converts pointer press/move/release sequences on a rotatable element into
//! angle updates, using a small finite state machine.
//!
//! ## Public API
//!
//! [DragRotate] owns the machine for one rotatable surface. Feed it events
//! from the rendering boundary ([`press`](DragRotate::press),
//! [`drag`](DragRotate::drag), [`release`](DragRotate::release)); each call
//! returns the new rotation angle when the event changed it.
//!
//! ## State machine internals
//!
//! State machine design follows the pattern of a `State` consumed by a
//! `next(action)` transition function that returns the successor state plus
//! an emitted update.
//!
//! Rough flow:
//!
//! ```text
//!             ┌──────┐
//!      ┌──────► Idle │◄─────────────────────┐
//!      │      └──┬───┘                      │
//!      │         │ Press                    │ Release
//!      │         │ (degenerate press       ┌┴──────────┐
//!      │         │  is ignored)            │           │
//!      │      ┌──▼────────┐    Move        │ snap to   │
//!      └──────┤ Dragging  ├───────────────►│ 1/12 grid │
//!   Release   └───────────┘  (rotate, mark │ (click vs │
//!   (no move: a click)        "not a       │  settle)  │
//!                              click")     └───────────┘
//! ```
//!
//! A click (press and release with no qualifying move) snaps to the grid
//! position nearest the *press* angle, a "tap to jump to the nearest note"
//! affordance. A drag release settles the current angle onto the nearest
//! grid position directly. Surfaces without a grid (the logarithmic wheel)
//! use a resolver constructed with [DragRotate::new], which passes release
//! angles through untouched.

pub mod state;

use std::f64::consts::FRAC_PI_2;
use std::f64::consts::TAU;

use crate::drawing::{closest_turn, Float, Point};
use state::{Action, State, Update};

/// Gesture resolver for one rotatable view.
#[derive(Debug, Clone, PartialEq)]
pub struct DragRotate {
  snap_divisions: Option<u32>,
  state: State,
}

impl Default for DragRotate {
  fn default() -> Self {
    DragRotate::new()
  }
}

impl DragRotate {
  /// A resolver whose released angles are left where the drag put them.
  pub fn new() -> Self {
    DragRotate {
      snap_divisions: None,
      state: State::Idle,
    }
  }

  /// A resolver that snaps released angles to a grid of `divisions` equal
  /// steps per turn (12 for the note circles).
  pub fn with_snap(divisions: u32) -> Self {
    DragRotate {
      snap_divisions: Some(divisions),
      state: State::Idle,
    }
  }

  pub fn is_dragging(&self) -> bool {
    matches!(self.state, State::Dragging { .. })
  }

  /// Pointer-down at `point` on an element centered at `center`, currently
  /// rotated to `current_angle`.
  pub fn press(&mut self, point: Point, center: Point, current_angle: Float) -> Option<Float> {
    self.apply(Action::Press {
      point,
      center,
      current_angle,
    })
  }

  /// Pointer-move; returns the new rotation angle for a qualifying sample.
  pub fn drag(&mut self, point: Point) -> Option<Float> {
    self.apply(Action::Move { point })
  }

  /// Pointer-up; returns the final (possibly snapped) rotation angle.
  pub fn release(&mut self) -> Option<Float> {
    self.apply(Action::Release)
  }

  fn apply(&mut self, action: Action) -> Option<Float> {
    let state = std::mem::replace(&mut self.state, State::Idle);
    let (next, update) = state.next(action);
    self.state = next;
    update.map(|u| self.resolve(u))
  }

  fn resolve(&self, update: Update) -> Float {
    // TODO: snapping assumes equally spaced notes; with just-ratio tuning
    // the grid positions land slightly off the drawn notes.
    match (update, self.snap_divisions) {
      (Update::Rotate(angle), _) => angle,
      (Update::Settled(angle), None) => angle,
      (Update::Settled(angle), Some(divisions)) => {
        let step = TAU / Float::from(divisions);
        (angle / step).round() * step
      }
      (Update::Tapped { angle, .. }, None) => angle,
      (Update::Tapped { press_angle, angle }, Some(divisions)) => {
        let step = TAU / Float::from(divisions);
        closest_turn(FRAC_PI_2 + (press_angle / step).round() * step, angle)
      }
    }
  }
}
