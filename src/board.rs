//! The naval board: a fixed grid of cell states mutated only by skill overlays.

use core::fmt;

use crate::cell::CellState;
use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use crate::overlay::{self, Origin};
use crate::shape::SkillMatrix;

const N: usize = BOARD_SIZE as usize;

/// Row-major grid of cell states.
pub type Cells = [[CellState; N]; N];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: Cells,
}

impl Board {
    /// Create an all-water board.
    pub fn new() -> Self {
        Board {
            cells: [[CellState::Water; N]; N],
        }
    }

    /// Create a board with ships seeded at each `(row, col)`.
    pub fn with_ships<I>(ships: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Board::new();
        for (r, c) in ships {
            board.place_ship(r, c)?;
        }
        Ok(board)
    }

    /// Seed a ship on an untouched water cell.
    pub fn place_ship(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        match self.get(row, col)? {
            CellState::Water => {
                self.cells[row][col] = CellState::Ship;
                Ok(())
            }
            CellState::Ship => Err(BoardError::ShipOverlaps { row, col }),
            CellState::Affected | CellState::ShipAffected => {
                Err(BoardError::CellAlreadyStruck { row, col })
            }
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<CellState, BoardError> {
        if row >= N || col >= N {
            return Err(BoardError::InvalidIndex { row, col });
        }
        Ok(self.cells[row][col])
    }

    /// Immutable view of the whole grid.
    pub fn rows(&self) -> &Cells {
        &self.cells
    }

    /// Every cell as `(row, col, state)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &s)| (r, c, s)))
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells().filter(|&(_, _, s)| s == state).count()
    }

    /// Legacy numeric grid (0 water, 3 ship, 5 affected, 8 ship affected).
    pub fn codes(&self) -> [[u8; N]; N] {
        self.cells.map(|row| row.map(CellState::code))
    }

    /// Overlay `skill` centered at `origin`. See [`overlay::apply`].
    pub fn apply<const S: usize>(&mut self, skill: &SkillMatrix<S>, origin: Origin) {
        overlay::apply(self, skill, origin);
    }

    /// Apply the hit transition to an in-bounds cell.
    pub(crate) fn strike(&mut self, row: usize, col: usize) {
        let cell = &mut self.cells[row][col];
        *cell = cell.hit();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Column header line followed by one line per row, e.g. `"2  . S X * ..."`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..N {
            write!(f, " {}", c)?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{} ", r)?;
            for cell in row {
                write!(f, " {}", cell.symbol())?;
            }
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
