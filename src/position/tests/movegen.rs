//! Move generation and legality filter tests.

use crate::position::square::{A7, A8, C1, E1, G1, G8};
use crate::position::{Move, MoveKind, Piece, PieceType, Position};

#[test]
fn twenty_legal_moves_from_the_starting_position() {
    let mut position = Position::new();
    assert_eq!(position.generate_legal_moves().len(), 20);
}

#[test]
fn promotion_square_yields_four_promotions_plus_king_moves() {
    let mut position = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let moves = position.generate_legal_moves();

    let promotions: Vec<Move> = moves.iter().filter(|m| m.promotion().is_some()).collect();
    assert_eq!(promotions.len(), 4);
    for m in &promotions {
        assert_eq!(m.kind(), MoveKind::PawnPromotion);
        assert_eq!(m.from(), A7);
        assert_eq!(m.to(), A8);
    }
    let kinds: Vec<PieceType> = promotions.iter().filter_map(|m| m.promotion()).collect();
    assert_eq!(
        kinds,
        vec![
            PieceType::Queen,
            PieceType::Rook,
            PieceType::Bishop,
            PieceType::Knight
        ]
    );

    // The king on e1 contributes its five steps.
    assert_eq!(moves.len(), 9);
}

#[test]
fn blocked_pawns_do_not_move() {
    // White pawn e4 faces a black pawn e5 head-on: no push, no capture.
    let mut position = Position::from_fen("4k3/8/8/4p3/4P3/8/8/4K3 w - - 0 1").unwrap();
    let moves = position.generate_legal_moves();
    assert!(moves.iter().all(|m| m.piece() != Piece::WhitePawn));
}

#[test]
fn double_moves_need_both_squares_empty() {
    let mut position = Position::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").unwrap();
    let moves = position.generate_legal_moves();
    assert!(!moves.iter().any(|m| m.to_string() == "e2e3"));
    assert!(!moves.iter().any(|m| m.to_string() == "e2e4"));

    let mut position = Position::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").unwrap();
    let moves = position.generate_legal_moves();
    assert!(moves.iter().any(|m| m.to_string() == "e2e3"));
    assert!(!moves.iter().any(|m| m.to_string() == "e2e4"));
}

#[test]
fn sliders_stop_at_blockers_and_capture_enemies() {
    let mut position = Position::from_fen("4k3/8/8/3p4/8/3R4/3P4/4K3 w - - 0 1").unwrap();
    let moves = position.generate_legal_moves();
    let rook_targets: Vec<String> = moves
        .iter()
        .filter(|m| m.piece() == Piece::WhiteRook)
        .map(|m| m.to().to_string())
        .collect();

    assert!(rook_targets.contains(&"d4".to_string()));
    assert!(rook_targets.contains(&"d5".to_string())); // capture
    assert!(!rook_targets.contains(&"d6".to_string())); // beyond the pawn
    assert!(!rook_targets.contains(&"d2".to_string())); // own pawn
}

#[test]
fn both_castling_moves_are_generated_when_clear() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let moves = position.generate_legal_moves();
    assert!(moves.iter().any(|m| m.kind() == MoveKind::Castling && m.to() == G1));
    assert!(moves.iter().any(|m| m.kind() == MoveKind::Castling && m.to() == C1));

    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
    let moves = position.generate_legal_moves();
    assert!(moves.iter().any(|m| m.kind() == MoveKind::Castling && m.to() == G8));
}

#[test]
fn castling_is_skipped_without_the_right() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1").unwrap();
    let moves = position.generate_legal_moves();
    assert!(!moves.iter().any(|m| m.kind() == MoveKind::Castling && m.to() == G1));
    assert!(moves.iter().any(|m| m.kind() == MoveKind::Castling && m.to() == C1));
}

#[test]
fn castling_is_skipped_through_an_attacked_transit_square() {
    // A black rook on f2 covers f1: kingside is out, queenside stays in.
    let mut position = Position::from_fen("4k3/8/8/8/8/8/5r2/R3K2R w KQ - 0 1").unwrap();
    let moves = position.generate_legal_moves();
    assert!(!moves.iter().any(|m| m.kind() == MoveKind::Castling && m.to() == G1));
    assert!(moves.iter().any(|m| m.kind() == MoveKind::Castling && m.to() == C1));
}

#[test]
fn castling_into_check_is_removed_by_the_legality_filter() {
    // A black rook on g8 covers g1. The pseudo-legal generator leaves the
    // king's destination untested; the filter must catch it.
    let mut position = Position::from_fen("4k1r1/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();

    let pseudo = position.generate_moves();
    assert!(pseudo.iter().any(|m| m.kind() == MoveKind::Castling && m.to() == G1));

    let legal = position.generate_legal_moves();
    assert!(!legal.iter().any(|m| m.kind() == MoveKind::Castling && m.to() == G1));
    assert!(legal.iter().any(|m| m.kind() == MoveKind::Castling && m.to() == C1));
}

#[test]
fn no_castling_while_in_check() {
    let mut position = Position::from_fen("4k3/8/8/8/8/8/4r3/R3K2R w KQ - 0 1").unwrap();
    assert!(position.is_check());
    let moves = position.generate_legal_moves();
    assert!(!moves.iter().any(|m| m.kind() == MoveKind::Castling));
}

#[test]
fn legal_moves_never_leave_the_mover_in_check() {
    // The e2 bishop is pinned to the king by the e8 rook.
    let mut position = Position::from_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1").unwrap();
    let moves = position.generate_legal_moves();
    assert!(moves.iter().all(|m| m.piece() != Piece::WhiteBishop));
}

#[test]
fn legal_equals_pseudo_filtered_by_self_check() {
    for fen in [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
    ] {
        let mut position = Position::from_fen(fen).unwrap();
        let mover = position.active_color();

        let mut filtered = Vec::new();
        for m in &position.generate_moves() {
            position.make_move(m);
            if !position.is_attacked(position.king_square(mover), mover.opposite()) {
                filtered.push(m);
            }
            position.undo_move(m);
        }

        let legal: Vec<Move> = position.generate_legal_moves().iter().collect();
        assert_eq!(legal, filtered, "mismatch for {fen}");
    }
}

#[test]
fn quiescent_moves_are_captures_when_not_in_check() {
    let mut position = Position::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    )
    .unwrap();
    assert!(!position.is_check());

    let quiescent = position.generate_quiescent_moves();
    assert!(!quiescent.is_empty());
    assert!(quiescent.iter().all(|m| m.is_capture()));

    // Every quiescent move also appears in the pseudo-legal list.
    let pseudo = position.generate_moves();
    assert!(quiescent.iter().all(|m| pseudo.contains(m)));
}

#[test]
fn quiescent_moves_include_evasions_when_in_check() {
    let position = Position::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1").unwrap();
    assert!(position.is_check());
    let quiescent = position.generate_quiescent_moves();
    assert!(quiescent.iter().any(|m| !m.is_capture()));
}

#[test]
fn en_passant_is_generated_when_available() {
    let mut position =
        Position::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3")
            .unwrap();
    let moves = position.generate_legal_moves();
    let ep: Vec<Move> = moves
        .iter()
        .filter(|m| m.kind() == MoveKind::EnPassant)
        .collect();
    assert_eq!(ep.len(), 1);
    assert_eq!(ep[0].to_string(), "e5f6");
}

#[test]
fn checkmate_and_stalemate() {
    // Fool's mate.
    let mut mated =
        Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .unwrap();
    assert!(mated.is_checkmate());
    assert!(!mated.is_stalemate());

    // Queen on f7 smothers the h8 king without checking it.
    let mut stale = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(stale.is_stalemate());
    assert!(!stale.is_checkmate());

    let mut ongoing = Position::new();
    assert!(!ongoing.is_checkmate());
    assert!(!ongoing.is_stalemate());
}

#[test]
fn kingside_castling_target_squares_keep_the_right_piece_home() {
    // Regression guard: after generating moves the position is unchanged.
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let before = position.clone();
    let _ = position.generate_legal_moves();
    assert_eq!(position, before);
    assert_eq!(position.get(E1), Some(Piece::WhiteKing));
}
