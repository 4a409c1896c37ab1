//! Grid metadata (size, spacing, origin, direction) and its reorientation.

use crate::direction::DirectionMatrix;
use crate::orientation::OrientationCode;
use crate::region::IndexRegion;
use crate::transform::AxisTransform;

/// Voxel-to-physical mapping of a 3D volume.
///
/// Physical position of index `i` is `origin + direction · (spacing ⊙ i)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridDescription {
    /// Voxels per axis.
    pub size: [u32; 3],
    /// Physical distance between voxel centers, per axis. Positive.
    pub spacing: [f64; 3],
    /// Physical position of voxel `(0, 0, 0)`.
    pub origin: [f64; 3],
    /// Voxel-axis directions in physical space.
    pub direction: DirectionMatrix,
}

impl GridDescription {
    /// Create a new grid description.
    pub const fn new(
        size: [u32; 3],
        spacing: [f64; 3],
        origin: [f64; 3],
        direction: DirectionMatrix,
    ) -> Self {
        Self {
            size,
            spacing,
            origin,
            direction,
        }
    }

    /// Unit spacing, zero origin, identity direction.
    pub const fn with_size(size: [u32; 3]) -> Self {
        Self::new(size, [1.0; 3], [0.0; 3], DirectionMatrix::IDENTITY)
    }

    /// Anatomical orientation of the grid's direction matrix.
    pub fn orientation(&self) -> OrientationCode {
        OrientationCode::from_direction(&self.direction)
    }

    /// The whole grid as an index region.
    pub fn largest_region(&self) -> IndexRegion {
        IndexRegion::full(self.size)
    }

    /// Physical position of a (possibly fractional) voxel index.
    pub fn index_to_physical(&self, index: [f64; 3]) -> [f64; 3] {
        let scaled = [
            index[0] * self.spacing[0],
            index[1] * self.spacing[1],
            index[2] * self.spacing[2],
        ];
        let offset = self.direction.apply(scaled);
        [
            self.origin[0] + offset[0],
            self.origin[1] + offset[1],
            self.origin[2] + offset[2],
        ]
    }
}

/// Output grid metadata after permuting and flipping `input`'s axes.
///
/// Size and spacing follow the permutation. The direction becomes the
/// canonical axis-aligned matrix of `desired`, however oblique the input was.
/// The origin is the physical position, under the input's own mapping, of the
/// input voxel that lands at output index `(0, 0, 0)`: the last voxel along
/// every flipped axis, the first along the rest. Zero-size axes use index 0.
///
/// No voxel data is touched.
pub fn reorient(
    input: &GridDescription,
    transform: &AxisTransform,
    desired: OrientationCode,
) -> GridDescription {
    let permute = transform.permute();
    let flip = transform.flip();

    let mut corner = [0.0; 3];
    for k in 0..3 {
        if flip[k] {
            let j = permute[k];
            corner[j] = input.size[j].saturating_sub(1) as f64;
        }
    }

    GridDescription {
        size: transform.permute_axes(input.size),
        spacing: transform.permute_axes(input.spacing),
        origin: input.index_to_physical(corner),
        direction: desired.to_direction(),
    }
}
