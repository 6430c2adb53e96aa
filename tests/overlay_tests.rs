use skillboard::overlay::{self, footprint, project};
use skillboard::{
    build_cone, build_cross, build_diamond, Board, BoardError, CellState, Origin, ShapeKind,
    Simulation, BOARD_SIZE, DEMO_CASTS, DEMO_SHIPS,
};

fn symbol_rows(board: &Board) -> Vec<String> {
    board
        .rows()
        .iter()
        .map(|row| row.iter().map(|c| c.symbol()).collect())
        .collect()
}

#[test]
fn test_hit_transitions_per_state() {
    let mut board = Board::with_ships([(5, 5)]).unwrap();
    let cross = build_cross::<3>();
    board.apply(&cross, Origin::new(5, 5));
    assert_eq!(board.get(5, 5).unwrap(), CellState::ShipAffected);
    assert_eq!(board.get(4, 5).unwrap(), CellState::Affected);
    assert_eq!(board.get(5, 6).unwrap(), CellState::Affected);
    // unmarked corner of the cross stays water
    assert_eq!(board.get(4, 4).unwrap(), CellState::Water);

    // second hit leaves both struck states alone
    board.apply(&cross, Origin::new(5, 5));
    assert_eq!(board.get(5, 5).unwrap(), CellState::ShipAffected);
    assert_eq!(board.get(4, 5).unwrap(), CellState::Affected);
}

#[test]
fn test_apply_twice_is_idempotent() {
    let mut once = Board::with_ships(DEMO_SHIPS).unwrap();
    let diamond = build_diamond::<7>();
    once.apply(&diamond, Origin::new(4, 4));
    let mut twice = once;
    twice.apply(&diamond, Origin::new(4, 4));
    assert_eq!(once, twice);
}

#[test]
fn test_fully_off_board_projection_is_noop() {
    let before = Board::with_ships(DEMO_SHIPS).unwrap();
    let mut board = before;
    let cone = build_cone::<7>();
    for origin in [
        Origin::new(-4, 5),
        Origin::new(5, -4),
        Origin::new(BOARD_SIZE as isize + 3, 5),
        Origin::new(5, BOARD_SIZE as isize + 3),
        Origin::new(-100, -100),
    ] {
        board.apply(&cone, origin);
        assert!(footprint(&cone, origin).is_empty());
    }
    assert_eq!(board, before);
}

#[test]
fn test_extreme_origins_are_clipped() {
    let before = Board::with_ships(DEMO_SHIPS).unwrap();
    let mut board = before;
    let cross = build_cross::<7>();
    for origin in [
        Origin::new(isize::MAX, 0),
        Origin::new(0, isize::MAX),
        Origin::new(isize::MIN, 4),
        Origin::new(4, isize::MIN),
        Origin::new(isize::MAX, isize::MIN),
        Origin::new(isize::MIN, isize::MAX),
    ] {
        board.apply(&cross, origin);
        assert_eq!(project(&cross, origin).count(), 0);
        assert!(footprint(&cross, origin).is_empty());
    }
    assert_eq!(board, before);
}

#[test]
fn test_partial_clipping_at_corner() {
    let mut board = Board::new();
    let cross = build_cross::<7>();
    board.apply(&cross, Origin::new(0, 0));
    // only the non-negative arms survive: row 0 cols 0..=3 and col 0 rows 1..=3
    assert_eq!(board.count(CellState::Affected), 7);
    assert_eq!(project(&cross, Origin::new(0, 0)).count(), 7);
    for c in 0..=3 {
        assert_eq!(board.get(0, c).unwrap(), CellState::Affected);
    }
    assert_eq!(board.get(0, 4).unwrap(), CellState::Water);
}

#[test]
fn test_origin_off_board_still_reaches_edge() {
    let mut board = Board::new();
    let cross = build_cross::<7>();
    // center lies one row above the board; the vertical arm reaches rows 0..=2
    board.apply(&cross, Origin::new(-1, 4));
    assert_eq!(board.count(CellState::Affected), 3);
    for r in 0..=2 {
        assert_eq!(board.get(r, 4).unwrap(), CellState::Affected);
    }
    assert_eq!(board.get(3, 4).unwrap(), CellState::Water);
}

#[test]
fn test_footprint_matches_struck_cells() {
    let mut board = Board::new();
    let cone = build_cone::<7>();
    let origin = Origin::new(1, 4);
    overlay::apply(&mut board, &cone, origin);
    let mask = footprint(&cone, origin);
    for (r, c, state) in board.cells() {
        assert_eq!(mask.get(r, c).unwrap(), state == CellState::Affected);
    }
}

#[test]
fn test_casts_commute() {
    let ships = [(2, 3), (5, 5), (9, 0)];
    let cone = build_cone::<7>();
    let diamond = build_diamond::<7>();

    let mut a = Board::with_ships(ships).unwrap();
    a.apply(&cone, Origin::new(3, 3));
    a.apply(&diamond, Origin::new(6, 2));

    let mut b = Board::with_ships(ships).unwrap();
    b.apply(&diamond, Origin::new(6, 2));
    b.apply(&cone, Origin::new(3, 3));

    assert_eq!(a, b);
}

#[test]
fn test_ship_seeding_errors() {
    let mut board = Board::new();
    board.place_ship(0, 0).unwrap();
    assert_eq!(
        board.place_ship(0, 0).unwrap_err(),
        BoardError::ShipOverlaps { row: 0, col: 0 }
    );
    assert_eq!(
        board.place_ship(10, 0).unwrap_err(),
        BoardError::InvalidIndex { row: 10, col: 0 }
    );
    board.apply(&build_cross::<3>(), Origin::new(5, 5));
    assert_eq!(
        board.place_ship(5, 5).unwrap_err(),
        BoardError::CellAlreadyStruck { row: 5, col: 5 }
    );
    assert_eq!(
        Board::with_ships([(1, 1), (1, 1)]).unwrap_err(),
        BoardError::ShipOverlaps { row: 1, col: 1 }
    );
}

#[test]
fn test_demo_scenario_golden_board() {
    let sim = Simulation::demo().unwrap();
    let board = sim.board();

    assert_eq!(board.get(2, 4).unwrap(), CellState::ShipAffected);
    assert_eq!(board.get(5, 2).unwrap(), CellState::Affected);
    assert_eq!(board.get(7, 7).unwrap(), CellState::ShipAffected);

    assert_eq!(
        symbol_rows(board),
        [
            "..*****...",
            ".*******..",
            ".*XXX***..",
            ".*******..",
            ".****X**..",
            "*********.",
            "..*..**X**",
            "..*.***X**",
            "..*..*****",
            "......***.",
        ]
    );
    assert_eq!(board.count(CellState::Affected), 58);
    assert_eq!(board.count(CellState::ShipAffected), 6);
    assert_eq!(board.count(CellState::Ship), 0);
    assert_eq!(board.count(CellState::Water), 36);
}

#[test]
fn test_demo_records_casts_in_order() {
    let sim = Simulation::demo().unwrap();
    let casts: Vec<_> = sim.casts().collect();
    assert_eq!(casts, DEMO_CASTS);
    assert_eq!(sim.cast_count(), 3);
    let kinds: Vec<_> = casts.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, ShapeKind::ALL);
}

#[test]
fn test_skill_set_reuses_one_matrix_per_kind() {
    let mut sim = Simulation::new([(0, 0)]).unwrap();
    let before = *sim.skills();
    sim.cast(ShapeKind::Cross, Origin::new(0, 0));
    sim.cast(ShapeKind::Cross, Origin::new(9, 9));
    assert_eq!(*sim.skills(), before);
    assert_eq!(sim.skills().get(ShapeKind::Cross).count(), 13);
    assert_eq!(sim.board().get(0, 0).unwrap(), CellState::ShipAffected);
    assert_eq!(sim.board().get(9, 9).unwrap(), CellState::Affected);
}

#[test]
fn test_simulation_footprint_covers_every_struck_cell() {
    let sim = Simulation::demo().unwrap();
    let footprint = sim.footprint();
    assert_eq!(footprint.count_ones(), 64);
    for (r, c, state) in sim.board().cells() {
        assert_eq!(footprint.get(r, c).unwrap(), state.is_struck());
    }
}

#[test]
fn test_history_is_bounded_but_casts_still_land() {
    let mut sim = Simulation::new(std::iter::empty()).unwrap();
    for col in 0..20 {
        sim.cast(ShapeKind::Cross, Origin::new(-3, col % 10));
    }
    assert_eq!(sim.cast_count(), 20);
    assert_eq!(sim.casts().count(), 16);
    // casts 16..20 hit columns 6..=9 in row 0
    for col in 6..10 {
        assert_eq!(sim.board().get(0, col).unwrap(), CellState::Affected);
    }
    assert_eq!(sim.footprint().count_ones(), 10);
}
