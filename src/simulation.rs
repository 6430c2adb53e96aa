//! Top-level owner of the board and the skill matrices cast onto it.

use log::{debug, info};

use crate::board::Board;
use crate::cell::CellState;
use crate::common::BoardError;
use crate::config::{DEMO_CASTS, DEMO_SHIPS, SKILL_SIZE};
use crate::overlay::{self, BoardMask, Origin};
use crate::shape::{build_cone, build_cross, build_diamond, ShapeKind, SkillMatrix};

/// Skill matrix at the configured size.
pub type Skill = SkillMatrix<{ SKILL_SIZE as usize }>;

/// A skill kind paired with the origin it is cast at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillCast {
    pub kind: ShapeKind,
    pub origin: Origin,
}

impl SkillCast {
    pub const fn new(kind: ShapeKind, origin: Origin) -> Self {
        Self { kind, origin }
    }
}

/// One matrix per shape kind, built once and shared by every cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillSet {
    cone: Skill,
    cross: Skill,
    diamond: Skill,
}

impl SkillSet {
    pub fn new() -> Self {
        Self {
            cone: build_cone(),
            cross: build_cross(),
            diamond: build_diamond(),
        }
    }

    pub fn get(&self, kind: ShapeKind) -> &Skill {
        match kind {
            ShapeKind::Cone => &self.cone,
            ShapeKind::Cross => &self.cross,
            ShapeKind::Diamond => &self.diamond,
        }
    }

    /// All matrices in [`ShapeKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &Skill> + '_ {
        ShapeKind::ALL.into_iter().map(move |k| self.get(k))
    }
}

impl Default for SkillSet {
    fn default() -> Self {
        Self::new()
    }
}

const MAX_CASTS: usize = 16;

/// Board plus skill matrices, with a bounded history of applied casts.
#[derive(Debug, Clone)]
pub struct Simulation {
    board: Board,
    skills: SkillSet,
    casts: [Option<SkillCast>; MAX_CASTS],
    cast_count: usize,
    footprint: BoardMask,
}

impl Simulation {
    /// Seed a board with ships at the given cells.
    pub fn new<I>(ships: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let board = Board::with_ships(ships)?;
        debug!("board seeded with {} ship cells", board.count(CellState::Ship));
        Ok(Self {
            board,
            skills: SkillSet::new(),
            casts: [None; MAX_CASTS],
            cast_count: 0,
            footprint: BoardMask::new(),
        })
    }

    /// Seed the demonstration ships and cast every demonstration skill.
    pub fn demo() -> Result<Self, BoardError> {
        let mut sim = Self::new(DEMO_SHIPS)?;
        for cast in DEMO_CASTS {
            sim.cast(cast.kind, cast.origin);
        }
        Ok(sim)
    }

    /// Overlay the `kind` skill centered at `origin`.
    pub fn cast(&mut self, kind: ShapeKind, origin: Origin) {
        info!("casting {} at ({}, {})", kind, origin.row, origin.col);
        let skill = self.skills.get(kind);
        self.board.apply(skill, origin);
        self.footprint = self.footprint | overlay::footprint(skill, origin);
        if self.cast_count < MAX_CASTS {
            self.casts[self.cast_count] = Some(SkillCast::new(kind, origin));
        }
        self.cast_count += 1;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    /// Recorded casts in the order applied. Only the first 16 casts are
    /// kept; later ones still land on the board and in [`Self::footprint`].
    pub fn casts(&self) -> impl Iterator<Item = SkillCast> + '_ {
        self.casts.iter().flatten().copied()
    }

    /// Union of every cell any cast has reached.
    pub fn footprint(&self) -> BoardMask {
        self.footprint
    }

    /// Total number of casts applied, including any beyond the recorded history.
    pub fn cast_count(&self) -> usize {
        self.cast_count
    }
}
