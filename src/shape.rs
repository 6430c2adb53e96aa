//! Skill shapes: square boolean masks anchored on their center cell.

use core::fmt;
use core::str::FromStr;

use crate::bitboard::BitBoard;
use crate::common::ShapeError;

/// Storage for skill masks. Holds matrices up to 11×11.
pub type SkillMask<const N: usize> = BitBoard<u128, N>;

/// The attack shapes a skill can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum ShapeKind {
    /// Apex on the top row, widening by one cell per side on each row below.
    Cone,
    /// Plus sign through the center.
    Cross,
    /// Rotated square: every cell within Manhattan radius `N/2` of the center.
    Diamond,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Cone, ShapeKind::Cross, ShapeKind::Diamond];

    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Cone => "cone",
            ShapeKind::Cross => "cross",
            ShapeKind::Diamond => "diamond",
        }
    }

    /// Build the N×N matrix for this shape.
    pub fn build<const N: usize>(self) -> SkillMatrix<N> {
        match self {
            ShapeKind::Cone => build_cone(),
            ShapeKind::Cross => build_cross(),
            ShapeKind::Diamond => build_diamond(),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(ShapeError::UnknownShape)
    }
}

/// An immutable N×N skill matrix. Cell `(center, center)` is the anchor that
/// lines up with the origin when the skill is overlaid on a board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SkillMatrix<const N: usize> {
    kind: ShapeKind,
    mask: SkillMask<N>,
}

impl<const N: usize> SkillMatrix<N> {
    const VALID_SIZE: () = assert!(
        N % 2 == 1 && N * N <= 128,
        "skill matrix size must be odd and fit in a u128 mask"
    );

    fn from_predicate<F>(kind: ShapeKind, marked: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_SIZE;
        SkillMatrix {
            kind,
            mask: SkillMask::<N>::from_fn(marked),
        }
    }

    /// Index of the anchor row and column.
    pub const fn center() -> usize {
        N / 2
    }

    pub const fn size() -> usize {
        N
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn mask(&self) -> SkillMask<N> {
        self.mask
    }

    /// Whether `(row, col)` is part of the shape; false outside the matrix.
    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col).unwrap_or(false)
    }

    /// Marked cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        self.mask.iter_set_bits()
    }

    pub fn count(&self) -> usize {
        self.mask.count_ones()
    }

    pub fn row_count(&self, row: usize) -> usize {
        self.mask.row_count(row)
    }
}

impl<const N: usize> fmt::Debug for SkillMatrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SkillMatrix {{ kind: {:?}, size: {}, mask: {:?} }}", self.kind, N, self.mask)
    }
}

impl<const N: usize> fmt::Display for SkillMatrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.mask, f)
    }
}

/// Cone: row `r` marks columns `center - r ..= center + r`.
pub fn build_cone<const N: usize>() -> SkillMatrix<N> {
    let center = SkillMatrix::<N>::center();
    SkillMatrix::from_predicate(ShapeKind::Cone, |r, c| c.abs_diff(center) <= r)
}

/// Cross: the center row and the center column.
pub fn build_cross<const N: usize>() -> SkillMatrix<N> {
    let center = SkillMatrix::<N>::center();
    SkillMatrix::from_predicate(ShapeKind::Cross, |r, c| r == center || c == center)
}

/// Diamond: Manhattan distance from the center at most `N/2`.
pub fn build_diamond<const N: usize>() -> SkillMatrix<N> {
    let center = SkillMatrix::<N>::center();
    let radius = N / 2;
    SkillMatrix::from_predicate(ShapeKind::Diamond, |r, c| {
        r.abs_diff(center) + c.abs_diff(center) <= radius
    })
}
