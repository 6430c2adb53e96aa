use crate::overlay::Origin;
use crate::shape::ShapeKind;
use crate::simulation::SkillCast;

pub const BOARD_SIZE: u8 = 10;
/// Side length of every skill matrix. Must stay odd so the matrix has a center cell.
pub const SKILL_SIZE: u8 = 7;

/// Environment variable holding the log level filter.
pub const LOG_ENV_VAR: &str = "SKILLBOARD_LOG";

pub const NUM_DEMO_SHIPS: usize = 6;
/// Ship cells seeded on the demonstration board, as (row, col).
pub const DEMO_SHIPS: [(usize, usize); NUM_DEMO_SHIPS] =
    [(2, 2), (2, 3), (2, 4), (4, 5), (7, 7), (6, 7)];

/// Skills cast on the demonstration board, applied in this order.
pub const DEMO_CASTS: [SkillCast; ShapeKind::ALL.len()] = [
    SkillCast::new(ShapeKind::Cone, Origin::new(1, 4)),
    SkillCast::new(ShapeKind::Cross, Origin::new(5, 2)),
    SkillCast::new(ShapeKind::Diamond, Origin::new(7, 7)),
];
