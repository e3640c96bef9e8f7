//! tonewheel: the math behind a pair of interactive pitch-circle toys.
//!
//! Two subsystems share the same shape. The [circles] module couples a
//! chromatic note circle to a circle of fifths, rotating at the 7×
//! fifths-generator ratio, with drag-to-rotate gestures that snap to the
//! twelve-note grid. The [wheel] module maps a continuous "stretch" ratio
//! onto a rotating logarithmic wheel and generates its density-tiered tick
//! marks.
//!
//! The crate is a pure in-memory transform library: the rendering boundary
//! feeds it pointer and scroll events and reads back angles, stretches, and
//! mark sets. No presentation objects cross the boundary in either
//! direction.

pub mod circles;
pub mod coupling;
pub mod drawing;
pub mod error;
pub mod gesture;
pub mod harmony;
pub mod wheel;

pub use circles::{CircleSide, NoteCircles};
pub use coupling::CoupledAngles;
pub use drawing::{closest_turn, Float, Point};
pub use error::TonewheelError;
pub use gesture::DragRotate;
pub use harmony::layout::{NoteOrdering, TuningMode};
pub use harmony::PitchClassIndex;
pub use wheel::marks::Mark;
pub use wheel::{LogWheel, WheelConfig, WheelGeometry};
