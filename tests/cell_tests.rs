use skillboard::{symbol_for_code, BoardError, CellState};

#[test]
fn test_hit_transition_table() {
    assert_eq!(CellState::Water.hit(), CellState::Affected);
    assert_eq!(CellState::Affected.hit(), CellState::Affected);
    assert_eq!(CellState::Ship.hit(), CellState::ShipAffected);
    assert_eq!(CellState::ShipAffected.hit(), CellState::ShipAffected);
}

#[test]
fn test_hit_never_drops_a_ship() {
    for state in CellState::ALL {
        assert_eq!(state.hit().has_ship(), state.has_ship());
        assert!(state.hit().is_struck());
        assert_eq!(state.hit().hit(), state.hit());
    }
}

#[test]
fn test_symbols_and_codes() {
    let symbols: String = CellState::ALL.iter().map(|s| s.symbol()).collect();
    assert_eq!(symbols, ".S*X");
    let codes: Vec<u8> = CellState::ALL.iter().map(|s| s.code()).collect();
    assert_eq!(codes, vec![0, 3, 5, 8]);
    for state in CellState::ALL {
        assert_eq!(CellState::try_from(state.code()), Ok(state));
        assert_eq!(symbol_for_code(state.code()), state.symbol());
    }
}

#[test]
fn test_unknown_codes() {
    assert_eq!(CellState::try_from(1), Err(BoardError::UnknownCellCode(1)));
    assert_eq!(symbol_for_code(1), '?');
    assert_eq!(symbol_for_code(255), '?');
}

#[test]
fn test_default_is_water() {
    assert_eq!(CellState::default(), CellState::Water);
}
