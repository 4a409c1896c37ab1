//! Error types.

use crate::region::IndexRegion;

/// Why an orientation code was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CodeError {
    /// Input was not exactly three characters long.
    #[error("expected 3 letters, got {len}")]
    WrongLength { len: usize },
    /// A character is not one of `R L A P S I`.
    #[error("unknown letter {letter:?}")]
    UnknownLetter { letter: char },
    /// Two letters come from the same anatomical axis pair (e.g. `L` and `R`).
    #[error("letter {letter:?} repeats an axis pair already used")]
    RepeatedAxis { letter: char },
    /// A packed numeric code does not decode to one of the 48 valid codes.
    #[error("packed value {bits:#x} is not a valid orientation")]
    UnknownBits { bits: u32 },
}

/// Reorientation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum OrientError {
    /// Malformed or incomplete orientation code.
    #[error("invalid orientation code: {0}")]
    InvalidCode(#[from] CodeError),
    /// Requested output region extends past the output grid.
    #[error("region {requested:?} exceeds output extent {extent:?}")]
    RegionOutOfBounds {
        /// The offending request, in output index space.
        requested: IndexRegion,
        /// Output grid size.
        extent: [u32; 3],
    },
}
