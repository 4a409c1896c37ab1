//! Index regions and output-to-input region mapping for streamed evaluation.

use crate::error::OrientError;
use crate::grid::GridDescription;
use crate::transform::AxisTransform;

/// Axis-aligned box of voxel indices.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IndexRegion {
    /// First index on each axis.
    pub origin: [u32; 3],
    /// Number of voxels on each axis.
    pub size: [u32; 3],
}

impl IndexRegion {
    /// Create a new region.
    pub const fn new(origin: [u32; 3], size: [u32; 3]) -> Self {
        Self { origin, size }
    }

    /// Region covering a whole grid of `size`.
    pub const fn full(size: [u32; 3]) -> Self {
        Self::new([0; 3], size)
    }

    /// Whether the region holds no voxels.
    pub fn is_empty(&self) -> bool {
        self.size.contains(&0)
    }

    /// Number of voxels in the region.
    pub fn voxel_count(&self) -> u64 {
        self.size.iter().map(|&s| s as u64).product()
    }

    /// Whether the region lies inside `[0, extent)` on every axis.
    pub fn fits_within(&self, extent: [u32; 3]) -> bool {
        (0..3).all(|k| (self.origin[k] as u64 + self.size[k] as u64) <= (extent[k] as u64))
    }

    /// Whether this region covers exactly `[0, extent)`.
    pub fn is_full(&self, extent: [u32; 3]) -> bool {
        self.origin == [0; 3] && self.size == extent
    }
}

/// Input region that must be read to produce `requested` in the output.
///
/// Pure re-indexing of the bounding box: output axis `k` comes from input axis
/// `permute[k]`, mirrored about its midpoint when flipped. Holds for every
/// sub-region, so a host can tile a large volume through the reorientation
/// without materializing it.
///
/// ```text
///     output axis k (flipped)      input axis permute[k], size n
///     [o, o + s)              ───▶  [n - o - s, n - o)
/// ```
///
/// Fails with [`OrientError::RegionOutOfBounds`] when `requested` extends past
/// the output extent (the input size in output-axis order).
pub fn map_to_input(
    requested: &IndexRegion,
    input: &GridDescription,
    transform: &AxisTransform,
) -> Result<IndexRegion, OrientError> {
    map_back(requested, input.size, transform)
}

/// Output region produced from `required` in the input.
///
/// Inverse of [`map_to_input`]; fails when `required` lies outside the input grid.
pub fn map_to_output(
    required: &IndexRegion,
    input: &GridDescription,
    transform: &AxisTransform,
) -> Result<IndexRegion, OrientError> {
    let output_size = transform.permute_axes(input.size);
    map_back(required, output_size, &transform.inverse())
}

/// Map `requested` (in the transform's output space) back onto a source grid
/// of `source_size`.
fn map_back(
    requested: &IndexRegion,
    source_size: [u32; 3],
    transform: &AxisTransform,
) -> Result<IndexRegion, OrientError> {
    let extent = transform.permute_axes(source_size);
    if !requested.fits_within(extent) {
        return Err(OrientError::RegionOutOfBounds {
            requested: *requested,
            extent,
        });
    }

    let permute = transform.permute();
    let flip = transform.flip();
    let mut required = IndexRegion::default();
    for k in 0..3 {
        let j = permute[k];
        let (o, s) = (requested.origin[k], requested.size[k]);
        // In bounds: o + s <= source_size[j].
        required.origin[j] = if flip[k] { source_size[j] - o - s } else { o };
        required.size[j] = s;
    }
    Ok(required)
}
