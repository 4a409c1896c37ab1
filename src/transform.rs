//! Axis permutation and flip between two orientation codes.

use crate::orientation::OrientationCode;

/// `permute[k]` is the input axis that supplies output axis `k`.
pub type PermuteOrder = [usize; 3];

/// `flip[k]` reverses index order along output axis `k`.
pub type FlipFlags = [bool; 3];

/// Axis-aligned reorientation: a permutation of the three voxel axes followed
/// by per-axis flips. These are the 48 elements of the octahedral group.
///
/// Output index `o` reads input index `i` where, for each output axis `k`,
/// `i[permute[k]] = if flip[k] { n - 1 - o[k] } else { o[k] }` and `n` is the
/// input size along `permute[k]`.
///
/// Only constructible through [`resolve`](Self::resolve),
/// [`from_parts`](Self::from_parts), or the group operations, so `permute`
/// is always a true permutation of `{0, 1, 2}`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AxisTransform {
    permute: PermuteOrder,
    flip: FlipFlags,
}

impl AxisTransform {
    /// No permutation, no flips.
    pub const IDENTITY: Self = Self {
        permute: [0, 1, 2],
        flip: [false; 3],
    };

    /// Transform taking data laid out as `current` to `desired`.
    ///
    /// Output axis `k` is fed by the input axis whose letter lies on the same
    /// anatomical pair as `desired[k]`, and is flipped when the two letters
    /// have opposite polarity.
    pub fn resolve(current: OrientationCode, desired: OrientationCode) -> Self {
        let have = current.coordinates();
        let want = desired.coordinates();
        let positions = current.axis_positions();

        let mut t = Self::IDENTITY;
        for (k, letter) in want.into_iter().enumerate() {
            let j = positions[letter.axis().index()];
            t.permute[k] = j;
            t.flip[k] = letter != have[j];
        }
        t
    }

    /// Build from raw parts. Returns `None` unless `permute` is a permutation
    /// of `{0, 1, 2}`.
    pub fn from_parts(permute: PermuteOrder, flip: FlipFlags) -> Option<Self> {
        let mut seen = [false; 3];
        for &p in &permute {
            if p > 2 || seen[p] {
                return None;
            }
            seen[p] = true;
        }
        Some(Self { permute, flip })
    }

    /// Output-axis to input-axis mapping.
    pub fn permute(&self) -> PermuteOrder {
        self.permute
    }

    /// Per-output-axis flips.
    pub fn flip(&self) -> FlipFlags {
        self.flip
    }

    /// Whether any axis moves.
    pub fn needs_permute(&self) -> bool {
        self.permute != Self::IDENTITY.permute
    }

    /// Whether any axis is reversed.
    pub fn needs_flip(&self) -> bool {
        self.flip.contains(&true)
    }

    /// Whether this transform leaves data untouched.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Reorder per-input-axis values into output-axis order.
    pub fn permute_axes<T: Copy>(&self, values: [T; 3]) -> [T; 3] {
        self.permute.map(|j| values[j])
    }

    /// Compose: apply `self` first, then `then`.
    pub fn compose(self, then: Self) -> Self {
        let mut t = Self::IDENTITY;
        for k in 0..3 {
            let mid = then.permute[k];
            t.permute[k] = self.permute[mid];
            t.flip[k] = then.flip[k] ^ self.flip[mid];
        }
        t
    }

    /// The inverse transform: `self.compose(self.inverse()) == IDENTITY`.
    pub fn inverse(self) -> Self {
        let mut t = Self::IDENTITY;
        for (k, &j) in self.permute.iter().enumerate() {
            t.permute[j] = k;
            t.flip[j] = self.flip[k];
        }
        t
    }

    /// Orientation of the output when the input is laid out as `code`.
    ///
    /// `AxisTransform::resolve(a, b).apply(a) == b` for every pair of codes.
    pub fn apply(&self, code: OrientationCode) -> OrientationCode {
        let have = code.coordinates();
        let mut out = have;
        for k in 0..3 {
            let c = have[self.permute[k]];
            out[k] = if self.flip[k] { c.opposite() } else { c };
        }
        // A permutation of a valid code covers each pair once.
        OrientationCode::from_coordinates_unchecked(out)
    }
}

impl Default for AxisTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
