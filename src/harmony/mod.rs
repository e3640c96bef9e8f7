//! The fixed pitch-class model: twelve chromatic notes, their circle-of-fifths
//! reindexing, and the diatonic scale-membership pattern.

pub mod layout;

use bounded_integer::bounded_integer;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

bounded_integer! {
  /// A zero-indexed pitch class, in the range 0 ..= 11.
  ///
  /// Use `PitchClassIndex::default()` for index 0 (C).
  ///
  /// When converting from untrusted / arbitrary input, use `PitchClassIndex::new`,
  /// which returns an `Option`. If you know for sure it's in range, use
  /// `PitchClassIndex::new_unchecked`.
  pub struct PitchClassIndex { 0..=11 }
}

/// The twelve chromatic note names, C at index 0.
#[derive(Debug, FromPrimitive, PartialEq, Eq, Clone, Copy)]
pub enum NoteName {
  C = 0,
  CSharp,
  D,
  DSharp,
  E,
  F,
  FSharp,
  G,
  GSharp,
  A,
  ASharp,
  B,
}

impl NoteName {
  pub fn label(&self) -> &'static str {
    use NoteName::*;
    match self {
      C => "C",
      CSharp => "C#",
      D => "D",
      DSharp => "D#",
      E => "E",
      F => "F",
      FSharp => "F#",
      G => "G",
      GSharp => "G#",
      A => "A",
      ASharp => "A#",
      B => "B",
    }
  }
}

impl From<PitchClassIndex> for NoteName {
  fn from(i: PitchClassIndex) -> Self {
    // safe: both types cover exactly 0..=11
    NoteName::from_u8(i.get()).unwrap()
  }
}

/// Which chromatic indices belong to the C-major diatonic scale.
pub const SCALE_PATTERN: [bool; 12] = [
  true, false, true, false, true, true, false, true, false, true, false, true,
];

/// Chromatic index of the first note of the major scale.
pub const MAJOR_START: u8 = 0;

/// Chromatic index of the first note of the (relative) minor scale.
pub const MINOR_START: u8 = 9;

/// Reindexes a chromatic position by the fifths generator: `(i × 7) mod 12`.
///
/// Iterating slots 0..12 through this map walks the circle of fifths
/// (C, G, D, A, ...); applying it twice is the identity, since 7 × 7 ≡ 1
/// (mod 12).
pub fn fifths_index(i: PitchClassIndex) -> PitchClassIndex {
  PitchClassIndex::new((i.get() * 7) % 12).unwrap()
}
