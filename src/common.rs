//! Error types for board seeding, cell decoding and shape lookup.

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column lies outside the board.
    InvalidIndex { row: usize, col: usize },
    /// A ship already occupies this cell.
    ShipOverlaps { row: usize, col: usize },
    /// Ships can only be seeded onto untouched water.
    CellAlreadyStruck { row: usize, col: usize },
    /// Numeric code does not name a cell state.
    UnknownCellCode(u8),
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidIndex { row, col } => {
                write!(f, "Cell ({}, {}) is outside the board", row, col)
            }
            BoardError::ShipOverlaps { row, col } => {
                write!(f, "Cell ({}, {}) already holds a ship", row, col)
            }
            BoardError::CellAlreadyStruck { row, col } => {
                write!(f, "Cell ({}, {}) was already struck by a skill", row, col)
            }
            BoardError::UnknownCellCode(code) => write!(f, "Unknown cell code {}", code),
        }
    }
}

/// Errors returned when naming a skill shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    UnknownShape,
}

impl core::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShapeError::UnknownShape => write!(f, "Unknown skill shape (expected cone, cross or diamond)"),
        }
    }
}
