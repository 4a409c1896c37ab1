//! Anatomical reorientation of 3D volumes by axis permutation and flipping.
//!
//! Pure geometry: no voxel copies, no resampling, no allocations, `no_std` compatible.
//! The host owns the data; this crate tells it how the grid metadata changes
//! and which input region to read for each output region it needs.
//!
//! # Modules
//!
//! - [`orientation`] — Orientation codes (`LPS`, `RAS`, ...), parsing, packed encoding
//! - [`direction`] — Direction-cosine matrices and code analysis in both directions
//! - [`transform`] — Permute/flip resolution between two codes, group operations
//! - [`grid`] — Grid metadata and its reorientation
//! - [`region`] — Output-to-input region mapping for streamed evaluation
//! - [`plan`] — One-shot planning and the memoizing [`Reorienter`]
//!
//! # Example
//!
//! ```
//! use zenorient::{GridDescription, IndexRegion, OrientationCode, Reorienter};
//!
//! let input = GridDescription::with_size([5, 6, 7]);
//! let mut stage = Reorienter::new().with_desired("RIP".parse().unwrap());
//!
//! let output = stage.update_output_information(&input);
//! assert_eq!(output.size, [5, 7, 6]);
//! assert_eq!(output.orientation(), OrientationCode::parse("RIP").unwrap());
//!
//! let required = stage
//!     .input_requested_region(&IndexRegion::new([0, 0, 0], [1, 2, 3]))
//!     .unwrap();
//! assert_eq!(required, IndexRegion::new([4, 0, 5], [1, 3, 2]));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod grid;
pub mod orientation;
pub mod plan;
pub mod region;
pub mod transform;

pub use direction::DirectionMatrix;
pub use error::{CodeError, OrientError};
pub use grid::{GridDescription, reorient};
pub use orientation::{Axis, Coordinate, OrientationCode};
pub use plan::{Reorientation, Reorienter, plan, plan_from};
pub use region::{IndexRegion, map_to_input, map_to_output};
pub use transform::{AxisTransform, FlipFlags, PermuteOrder};
