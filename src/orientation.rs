//! Anatomical orientation codes (`LPS`, `RAS`, ...), parsing, and packed encoding.

use core::fmt;
use core::str::FromStr;

use crate::error::{CodeError, OrientError};

/// Physical patient axis, each carrying one anatomical letter pair.
///
/// ```text
///     X: Right ↔ Left
///     Y: Anterior ↔ Posterior
///     Z: Inferior ↔ Superior
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Right/Left.
    X,
    /// Anterior/Posterior.
    Y,
    /// Inferior/Superior.
    Z,
}

impl Axis {
    /// All three axes, in physical row order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Row of this axis in a direction matrix.
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// One anatomical direction letter.
///
/// The discriminants are the packed 4-bit terms used by [`OrientationCode::to_bits`]:
/// bits 1..3 select the axis pair, bit 0 the polarity within the pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Coordinate {
    Right = 2,
    Left = 3,
    Posterior = 4,
    Anterior = 5,
    Inferior = 8,
    Superior = 9,
}

impl Coordinate {
    /// Parse a single letter, case-insensitively.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'R' => Some(Self::Right),
            'L' => Some(Self::Left),
            'P' => Some(Self::Posterior),
            'A' => Some(Self::Anterior),
            'I' => Some(Self::Inferior),
            'S' => Some(Self::Superior),
            _ => None,
        }
    }

    /// Canonical uppercase letter.
    pub const fn letter(self) -> char {
        match self {
            Self::Right => 'R',
            Self::Left => 'L',
            Self::Posterior => 'P',
            Self::Anterior => 'A',
            Self::Inferior => 'I',
            Self::Superior => 'S',
        }
    }

    /// Physical axis this letter lies on.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Right | Self::Left => Axis::X,
            Self::Posterior | Self::Anterior => Axis::Y,
            Self::Inferior | Self::Superior => Axis::Z,
        }
    }

    /// Whether this letter names the direction of increasing physical
    /// coordinate (`L`, `P`, `S`: the patient LPS frame).
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Left | Self::Posterior | Self::Superior)
    }

    /// The other letter of the same pair.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
            Self::Posterior => Self::Anterior,
            Self::Anterior => Self::Posterior,
            Self::Inferior => Self::Superior,
            Self::Superior => Self::Inferior,
        }
    }

    /// Letter pointing along `axis`, towards increasing coordinate when `positive`.
    pub const fn along(axis: Axis, positive: bool) -> Self {
        match (axis, positive) {
            (Axis::X, true) => Self::Left,
            (Axis::X, false) => Self::Right,
            (Axis::Y, true) => Self::Posterior,
            (Axis::Y, false) => Self::Anterior,
            (Axis::Z, true) => Self::Superior,
            (Axis::Z, false) => Self::Inferior,
        }
    }

    fn from_term(term: u32) -> Option<Self> {
        match term {
            2 => Some(Self::Right),
            3 => Some(Self::Left),
            4 => Some(Self::Posterior),
            5 => Some(Self::Anterior),
            8 => Some(Self::Inferior),
            9 => Some(Self::Superior),
            _ => None,
        }
    }
}

/// Three-letter anatomical orientation, one letter per voxel-index axis.
///
/// Letter `k` names the anatomical direction that voxel axis `k` increases
/// towards. Each axis pair (`R/L`, `A/P`, `I/S`) appears exactly once, which
/// gives 48 valid codes. Construction always validates, so every value of this
/// type upholds that invariant.
///
/// ```
/// use zenorient::OrientationCode;
///
/// let code: OrientationCode = "ras".parse().unwrap();
/// assert_eq!(code, OrientationCode::RAS);
/// assert_eq!(code.to_string(), "RAS");
/// assert!("LRS".parse::<OrientationCode>().is_err());
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct OrientationCode([Coordinate; 3]);

impl OrientationCode {
    /// Left, Posterior, Superior. DICOM patient frame, and the identity direction.
    pub const LPS: Self = Self([Coordinate::Left, Coordinate::Posterior, Coordinate::Superior]);
    /// Right, Anterior, Superior. NIfTI/RAS+ world frame.
    pub const RAS: Self = Self([Coordinate::Right, Coordinate::Anterior, Coordinate::Superior]);
    /// Right, Anterior, Inferior.
    pub const RAI: Self = Self([Coordinate::Right, Coordinate::Anterior, Coordinate::Inferior]);
    /// Left, Anterior, Superior.
    pub const LAS: Self = Self([Coordinate::Left, Coordinate::Anterior, Coordinate::Superior]);

    /// Build a code from three letters, rejecting repeated axis pairs.
    pub fn new(
        primary: Coordinate,
        secondary: Coordinate,
        tertiary: Coordinate,
    ) -> Result<Self, OrientError> {
        let coordinates = [primary, secondary, tertiary];
        let mut seen = [false; 3];
        for c in coordinates {
            let axis = c.axis().index();
            if seen[axis] {
                return Err(CodeError::RepeatedAxis { letter: c.letter() }.into());
            }
            seen[axis] = true;
        }
        Ok(Self(coordinates))
    }

    /// Caller guarantees the three letters cover distinct axis pairs.
    pub(crate) const fn from_coordinates_unchecked(coordinates: [Coordinate; 3]) -> Self {
        Self(coordinates)
    }

    /// Parse a 3-letter code such as `"LPS"` or `"rai"`.
    pub fn parse(s: &str) -> Result<Self, OrientError> {
        let len = s.chars().count();
        if len != 3 {
            return Err(CodeError::WrongLength { len }.into());
        }
        let mut coordinates = [Coordinate::Left; 3];
        for (slot, letter) in coordinates.iter_mut().zip(s.chars()) {
            *slot = Coordinate::from_letter(letter).ok_or(CodeError::UnknownLetter { letter })?;
        }
        Self::new(coordinates[0], coordinates[1], coordinates[2])
    }

    /// The three letters, in voxel-axis order.
    pub const fn coordinates(self) -> [Coordinate; 3] {
        self.0
    }

    /// The three letters as uppercase characters.
    pub fn letters(self) -> [char; 3] {
        self.0.map(Coordinate::letter)
    }

    /// For each physical axis, the voxel-axis position holding its letter.
    pub fn axis_positions(self) -> [usize; 3] {
        let mut positions = [0; 3];
        for (position, c) in self.0.iter().enumerate() {
            positions[c.axis().index()] = position;
        }
        positions
    }

    /// Iterate all 48 valid codes.
    ///
    /// Ordered by axis-pair permutation, then by polarity (bit `k` of the
    /// inner counter set means letter `k` is the negative one).
    pub fn all() -> impl Iterator<Item = Self> {
        const ORDERS: [[Axis; 3]; 6] = [
            [Axis::X, Axis::Y, Axis::Z],
            [Axis::X, Axis::Z, Axis::Y],
            [Axis::Y, Axis::X, Axis::Z],
            [Axis::Y, Axis::Z, Axis::X],
            [Axis::Z, Axis::X, Axis::Y],
            [Axis::Z, Axis::Y, Axis::X],
        ];
        ORDERS.into_iter().flat_map(|order| {
            (0u8..8).map(move |signs| {
                let mut k = 0;
                Self(order.map(|axis| {
                    let negative = signs & (1 << k) != 0;
                    k += 1;
                    Coordinate::along(axis, !negative)
                }))
            })
        })
    }

    /// Packed numeric form: `primary | secondary << 8 | tertiary << 16`.
    pub fn to_bits(self) -> u32 {
        let [a, b, c] = self.0;
        (a as u32) | (b as u32) << 8 | (c as u32) << 16
    }

    /// Decode [`to_bits`](Self::to_bits) output.
    pub fn from_bits(bits: u32) -> Result<Self, OrientError> {
        let invalid = || OrientError::from(CodeError::UnknownBits { bits });
        if bits >> 24 != 0 {
            return Err(invalid());
        }
        let term = |shift: u32| Coordinate::from_term((bits >> shift) & 0xFF).ok_or_else(invalid);
        Self::new(term(0)?, term(8)?, term(16)?).map_err(|_| invalid())
    }
}

impl Default for OrientationCode {
    fn default() -> Self {
        Self::LPS
    }
}

impl fmt::Display for OrientationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0 {
            fmt::Write::write_char(f, c.letter())?;
        }
        Ok(())
    }
}

impl fmt::Debug for OrientationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OrientationCode")
            .field(&format_args!("{self}"))
            .finish()
    }
}

impl FromStr for OrientationCode {
    type Err = OrientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for OrientationCode {
    type Error = OrientError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonical() {
        let code = OrientationCode::parse("LPS").unwrap();
        assert_eq!(code, OrientationCode::LPS);
        assert_eq!(
            code.coordinates(),
            [Coordinate::Left, Coordinate::Posterior, Coordinate::Superior]
        );
        assert_eq!(code.letters(), ['L', 'P', 'S']);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(OrientationCode::parse("ras").unwrap(), OrientationCode::RAS);
        assert_eq!(OrientationCode::parse("rAi").unwrap(), OrientationCode::RAI);
        assert_eq!(OrientationCode::parse("rAi").unwrap().to_string(), "RAI");
    }

    #[test]
    fn parse_rejects_unknown_letters() {
        assert_eq!(
            OrientationCode::parse("XYZ"),
            Err(OrientError::InvalidCode(CodeError::UnknownLetter { letter: 'X' }))
        );
        assert_eq!(
            OrientationCode::parse("LPQ"),
            Err(OrientError::InvalidCode(CodeError::UnknownLetter { letter: 'Q' }))
        );
    }

    #[test]
    fn parse_rejects_same_pair() {
        assert_eq!(
            OrientationCode::parse("LRS"),
            Err(OrientError::InvalidCode(CodeError::RepeatedAxis { letter: 'R' }))
        );
        assert!(OrientationCode::parse("LPA").is_err());
        assert!(OrientationCode::parse("SSS").is_err());
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            OrientationCode::parse(""),
            Err(OrientError::InvalidCode(CodeError::WrongLength { len: 0 }))
        );
        assert_eq!(
            OrientationCode::parse("LP"),
            Err(OrientError::InvalidCode(CodeError::WrongLength { len: 2 }))
        );
        assert_eq!(
            OrientationCode::parse("LPSI"),
            Err(OrientError::InvalidCode(CodeError::WrongLength { len: 4 }))
        );
        // Multi-byte characters count once.
        assert_eq!(
            OrientationCode::parse("LPé"),
            Err(OrientError::InvalidCode(CodeError::UnknownLetter { letter: 'é' }))
        );
    }

    #[test]
    fn equality_is_order_sensitive() {
        assert_ne!(
            OrientationCode::parse("LPS").unwrap(),
            OrientationCode::parse("PLS").unwrap()
        );
    }

    #[test]
    fn all_has_48_distinct_valid_codes() {
        let all: Vec<_> = OrientationCode::all().collect();
        assert_eq!(all.len(), 48);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
            let [x, y, z] = a.coordinates();
            assert!(OrientationCode::new(x, y, z).is_ok(), "{a:?} violates pair invariant");
        }
        assert_eq!(all[0], OrientationCode::LPS);
    }

    #[test]
    fn string_round_trip_all() {
        for code in OrientationCode::all() {
            let s = code.to_string();
            assert_eq!(s.len(), 3);
            assert_eq!(s.parse::<OrientationCode>().unwrap(), code, "round-trip failed for {s}");
        }
    }

    #[test]
    fn bits_match_packed_terms() {
        // L=3, P=4, S=9
        assert_eq!(OrientationCode::LPS.to_bits(), 0x09_04_03);
        // R=2, A=5, S=9
        assert_eq!(OrientationCode::RAS.to_bits(), 0x09_05_02);
        for code in OrientationCode::all() {
            assert_eq!(OrientationCode::from_bits(code.to_bits()).unwrap(), code);
        }
    }

    #[test]
    fn bits_invalid() {
        let bad = [0, 0x09_03_03, 0x09_04_01, 0x01_09_04_03, 0x0F_04_03];
        for bits in bad {
            assert_eq!(
                OrientationCode::from_bits(bits),
                Err(OrientError::InvalidCode(CodeError::UnknownBits { bits })),
                "{bits:#x}"
            );
        }
    }

    #[test]
    fn axis_positions_invert_letters() {
        let code = OrientationCode::parse("SLA").unwrap();
        // X (L) at 1, Y (A) at 2, Z (S) at 0
        assert_eq!(code.axis_positions(), [1, 2, 0]);
    }

    #[test]
    fn coordinate_helpers() {
        for axis in Axis::ALL {
            for positive in [true, false] {
                let c = Coordinate::along(axis, positive);
                assert_eq!(c.axis(), axis);
                assert_eq!(c.is_positive(), positive);
                assert_eq!(c.opposite().axis(), axis);
                assert_ne!(c.opposite(), c);
                assert_eq!(Coordinate::from_letter(c.letter()), Some(c));
                assert_eq!(Coordinate::from_term(c as u32), Some(c));
            }
        }
        assert_eq!(Coordinate::from_letter('x'), None);
    }

    #[test]
    fn debug_shows_letters() {
        assert_eq!(format!("{:?}", OrientationCode::LPS), "OrientationCode(LPS)");
    }
}
