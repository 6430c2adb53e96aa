//! Board cell states and the hit transition applied by skill overlays.

use crate::common::BoardError;

/// State of a single board cell.
///
/// `Water` and `Ship` are seeded before any skill lands. A hit moves them to
/// `Affected` and `ShipAffected` respectively, and neither of those ever
/// reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum CellState {
    #[default]
    Water,
    Ship,
    Affected,
    ShipAffected,
}

impl CellState {
    pub const ALL: [CellState; 4] = [
        CellState::Water,
        CellState::Ship,
        CellState::Affected,
        CellState::ShipAffected,
    ];

    /// State after a skill cell lands here. Idempotent.
    #[inline]
    pub const fn hit(self) -> CellState {
        match self {
            CellState::Ship | CellState::ShipAffected => CellState::ShipAffected,
            CellState::Water | CellState::Affected => CellState::Affected,
        }
    }

    pub const fn has_ship(self) -> bool {
        matches!(self, CellState::Ship | CellState::ShipAffected)
    }

    pub const fn is_struck(self) -> bool {
        matches!(self, CellState::Affected | CellState::ShipAffected)
    }

    /// Snake-case name, matching the serde representation.
    pub const fn name(self) -> &'static str {
        match self {
            CellState::Water => "water",
            CellState::Ship => "ship",
            CellState::Affected => "affected",
            CellState::ShipAffected => "ship_affected",
        }
    }

    /// Character used by the text renderer.
    pub const fn symbol(self) -> char {
        match self {
            CellState::Water => '.',
            CellState::Ship => 'S',
            CellState::Affected => '*',
            CellState::ShipAffected => 'X',
        }
    }

    /// Legacy numeric encoding of the state.
    pub const fn code(self) -> u8 {
        match self {
            CellState::Water => 0,
            CellState::Ship => 3,
            CellState::Affected => 5,
            CellState::ShipAffected => 8,
        }
    }
}

impl TryFrom<u8> for CellState {
    type Error = BoardError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        CellState::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or(BoardError::UnknownCellCode(code))
    }
}

/// Render a legacy numeric cell code, falling back to `?` for codes outside
/// the four known states.
pub fn symbol_for_code(code: u8) -> char {
    CellState::try_from(code).map_or('?', CellState::symbol)
}
