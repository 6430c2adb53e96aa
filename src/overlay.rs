//! Projection of skill matrices onto the board.
//!
//! A skill's center cell is placed on the origin; every other marked cell is
//! translated by its offset from the center. Projected cells that land off
//! the board are dropped without error, so a skill may be cast right up to
//! (or past) an edge.

use log::trace;

use crate::bitboard::BitBoard;
use crate::board::Board;
use crate::config::BOARD_SIZE;
use crate::shape::SkillMatrix;

/// Mask with one bit per board cell.
pub type BoardMask = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Board coordinate the skill's center is aligned on. May lie off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Origin {
    pub row: isize,
    pub col: isize,
}

impl Origin {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }
}

/// Translate skill cell `(i, j)` to board coordinates, or `None` when the
/// target falls outside the board or outside the range of `isize`.
fn target<const N: usize>(origin: Origin, i: usize, j: usize) -> Option<(usize, usize)> {
    let center = SkillMatrix::<N>::center() as isize;
    let row = origin.row.checked_add(i as isize - center)?;
    let col = origin.col.checked_add(j as isize - center)?;
    let size = BOARD_SIZE as isize;
    if (0..size).contains(&row) && (0..size).contains(&col) {
        Some((row as usize, col as usize))
    } else {
        None
    }
}

/// On-board cells covered by `skill` centered at `origin`.
pub fn project<const N: usize>(
    skill: &SkillMatrix<N>,
    origin: Origin,
) -> impl Iterator<Item = (usize, usize)> {
    skill
        .cells()
        .filter_map(move |(i, j)| target::<N>(origin, i, j))
}

/// Projected cells collected into a board mask.
pub fn footprint<const N: usize>(skill: &SkillMatrix<N>, origin: Origin) -> BoardMask {
    let center = SkillMatrix::<N>::center() as isize;
    // board cell (r, c) maps back to skill cell (r - origin.row + center, ...)
    let source = |cell: usize, anchor: isize| -> Option<usize> {
        (cell as isize)
            .checked_sub(anchor)?
            .checked_add(center)
            .and_then(|v| usize::try_from(v).ok())
    };
    BoardMask::from_fn(|r, c| match (source(r, origin.row), source(c, origin.col)) {
        (Some(i), Some(j)) => skill.is_marked(i, j),
        _ => false,
    })
}

/// Overlay `skill` on `board` centered at `origin`, striking every covered
/// cell. Cells projected outside the board are skipped.
pub fn apply<const N: usize>(board: &mut Board, skill: &SkillMatrix<N>, origin: Origin) {
    let mut clipped = 0usize;
    for (i, j) in skill.cells() {
        match target::<N>(origin, i, j) {
            Some((r, c)) => board.strike(r, c),
            None => {
                clipped += 1;
                trace!(
                    "{} cell ({}, {}) clipped at origin ({}, {})",
                    skill.kind(),
                    i,
                    j,
                    origin.row,
                    origin.col
                );
            }
        }
    }
    trace!(
        "{} at ({}, {}): {} cells struck, {} clipped",
        skill.kind(),
        origin.row,
        origin.col,
        skill.count() - clipped,
        clipped
    );
}
