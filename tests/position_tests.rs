//! Public-API integration tests.

use cadence::position::{Color, MoveKind, Position, STARTING_FEN};

#[test]
fn new_position_is_the_starting_position() {
    let position = Position::new();
    assert_eq!(position.to_fen(), STARTING_FEN);
    assert_eq!(position.active_color(), Color::White);
}

#[test]
fn a_short_game_plays_out_through_the_public_api() {
    let mut position = Position::new();

    for notation in ["e2e4", "e7e5", "g1f3", "b8c6"] {
        let m = position
            .generate_legal_moves()
            .iter()
            .find(|m| m.to_string() == notation)
            .unwrap_or_else(|| panic!("{notation} should be legal"));
        position.make_move(m);
    }

    assert_eq!(
        position.to_fen(),
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3"
    );
}

#[test]
fn perft_of_the_starting_position() {
    let mut position = Position::new();
    assert_eq!(position.perft(3), 8_902);
}

#[test]
fn parse_errors_carry_readable_messages() {
    let err = Position::from_fen("not a fen").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn kind_of_the_double_step_is_exposed() {
    let mut position = Position::new();
    let m = position
        .generate_legal_moves()
        .iter()
        .find(|m| m.to_string() == "d2d4")
        .unwrap();
    assert_eq!(m.kind(), MoveKind::PawnDouble);
}
