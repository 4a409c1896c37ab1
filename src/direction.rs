//! Direction-cosine matrices and their anatomical orientation codes.

use crate::orientation::{Axis, Coordinate, OrientationCode};

/// 3×3 direction-cosine matrix.
///
/// Rows are physical axes (x, y, z); column `i` is the unit direction of
/// voxel-index axis `i` in physical space. Columns are assumed orthonormal;
/// nothing here re-validates that.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DirectionMatrix {
    /// Row-major entries: `rows[physical][voxel_axis]`.
    pub rows: [[f64; 3]; 3],
}

impl DirectionMatrix {
    /// Identity: voxel axes aligned with +x, +y, +z (`LPS`).
    pub const IDENTITY: Self = Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// Create from row-major entries.
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Create from the three voxel-axis direction vectors.
    pub const fn from_columns(columns: [[f64; 3]; 3]) -> Self {
        let [a, b, c] = columns;
        Self::from_rows([[a[0], b[0], c[0]], [a[1], b[1], c[1]], [a[2], b[2], c[2]]])
    }

    /// Diagonal matrix.
    pub const fn diagonal(d: [f64; 3]) -> Self {
        Self::from_rows([[d[0], 0.0, 0.0], [0.0, d[1], 0.0], [0.0, 0.0, d[2]]])
    }

    /// Direction of voxel axis `axis` in physical space.
    pub fn column(&self, axis: usize) -> [f64; 3] {
        [self.rows[0][axis], self.rows[1][axis], self.rows[2][axis]]
    }

    /// Matrix–vector product.
    pub fn apply(&self, v: [f64; 3]) -> [f64; 3] {
        self.rows
            .map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2])
    }
}

impl Default for DirectionMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl OrientationCode {
    /// Anatomical code of a direction matrix.
    ///
    /// Each voxel axis takes the letter of the physical axis its column is most
    /// aligned with; a positive component yields `L`/`P`/`S`, anything else
    /// `R`/`A`/`I`. The identity is `LPS` and `diag(-1, -1, 1)` is `RAS`.
    ///
    /// Oblique frames where two columns share a dominant row are resolved
    /// greedily: the column with the strongest component claims its row first,
    /// and later columns take the strongest row still free. The result is
    /// always a valid code, but for such input it is only a best effort.
    pub fn from_direction(direction: &DirectionMatrix) -> Self {
        let m = &direction.rows;
        let peak = |col: usize| {
            m.iter()
                .map(|row| row[col].abs())
                .fold(0.0_f64, f64::max)
        };

        let mut order = [0usize, 1, 2];
        order.sort_unstable_by(|&a, &b| peak(b).total_cmp(&peak(a)).then(a.cmp(&b)));

        let mut used = [false; 3];
        let mut coordinates = [Coordinate::Left; 3];
        for col in order {
            // Ties keep the lower physical row.
            let mut best: Option<usize> = None;
            for row in (0..3).filter(|&r| !used[r]) {
                match best {
                    Some(b) if m[row][col].abs() <= m[b][col].abs() => {}
                    _ => best = Some(row),
                }
            }
            let Some(row) = best else { continue };
            used[row] = true;
            coordinates[col] = Coordinate::along(Axis::ALL[row], m[row][col] > 0.0);
        }
        Self::from_coordinates_unchecked(coordinates)
    }

    /// Canonical axis-aligned direction matrix for this code.
    ///
    /// Inverse of [`from_direction`](Self::from_direction): column `k` has a
    /// single ±1 in the row of letter `k`'s physical axis.
    pub fn to_direction(self) -> DirectionMatrix {
        let mut rows = [[0.0; 3]; 3];
        for (col, c) in self.coordinates().into_iter().enumerate() {
            rows[c.axis().index()][col] = if c.is_positive() { 1.0 } else { -1.0 };
        }
        DirectionMatrix::from_rows(rows)
    }
}
