//! Making and unmaking moves.

use super::moves::{Move, MoveKind};
use super::piece::{Piece, PieceType};
use super::square::{self, behind, Square};
use super::state::{
    Position, StateEntry, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q,
};

impl Position {
    /// Play `m`, pushing the irreversible state onto the undo stack.
    pub fn make_move(&mut self, m: Move) {
        self.push_state();

        let kind = m.kind();
        let from = m.from();
        let to = m.to();
        let pc = m.piece();
        let us = pc.color();

        if m.captured().is_some() {
            let capture_sq = if kind == MoveKind::EnPassant {
                behind(to, us)
            } else {
                to
            };
            self.remove(capture_sq);
            // Capturing a rook on its original square forfeits that right.
            self.clear_castling(capture_sq);
        }

        self.remove(from);
        if kind == MoveKind::PawnPromotion {
            let promotion = m.promotion().expect("promotion move carries a piece type");
            self.put(Piece::of(us, promotion), to);
        } else {
            self.put(pc, to);
        }

        if kind == MoveKind::Castling {
            let (rook_from, rook_to) = rook_move(to);
            let rook = self.remove(rook_from);
            self.put(rook, rook_to);
        }

        self.clear_castling(from);

        self.en_passant = if kind == MoveKind::PawnDouble {
            Some(behind(to, us))
        } else {
            None
        };

        self.active_color = self.active_color.opposite();

        if pc.kind() == PieceType::Pawn || m.captured().is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        self.halfmove_number += 1;
    }

    /// Reverse `m`. Must be the most recently made move still on the stack.
    pub fn undo_move(&mut self, m: Move) {
        let kind = m.kind();
        let from = m.from();
        let to = m.to();
        let pc = m.piece();
        let us = pc.color();

        self.halfmove_number -= 1;
        self.active_color = self.active_color.opposite();

        if kind == MoveKind::Castling {
            let (rook_from, rook_to) = rook_move(to);
            let rook = self.remove(rook_to);
            self.put(rook, rook_from);
        }

        self.remove(to);
        self.put(pc, from);

        if let Some(captured) = m.captured() {
            let capture_sq = if kind == MoveKind::EnPassant {
                behind(to, us)
            } else {
                to
            };
            self.put(captured, capture_sq);
        }

        self.pop_state();
    }

    fn push_state(&mut self) {
        self.states.push(StateEntry {
            castling_rights: self.castling_rights,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
        });
    }

    fn pop_state(&mut self) {
        let entry = self.states.pop().expect("undo without a matching make");
        self.castling_rights = entry.castling_rights;
        self.en_passant = entry.en_passant;
        self.halfmove_clock = entry.halfmove_clock;
    }

    /// Castling rights lost when the piece on `sq` moves away or is captured.
    fn clear_castling(&mut self, sq: Square) {
        match sq {
            square::A1 => self.castling_rights &= !CASTLE_WHITE_Q,
            square::H1 => self.castling_rights &= !CASTLE_WHITE_K,
            square::E1 => self.castling_rights &= !(CASTLE_WHITE_K | CASTLE_WHITE_Q),
            square::A8 => self.castling_rights &= !CASTLE_BLACK_Q,
            square::H8 => self.castling_rights &= !CASTLE_BLACK_K,
            square::E8 => self.castling_rights &= !(CASTLE_BLACK_K | CASTLE_BLACK_Q),
            _ => {}
        }
    }
}

/// Rook relocation for a castling move, keyed by the king's target square.
fn rook_move(king_to: Square) -> (Square, Square) {
    match king_to {
        square::G1 => (square::H1, square::F1),
        square::C1 => (square::A1, square::D1),
        square::G8 => (square::H8, square::F8),
        square::C8 => (square::A8, square::D8),
        _ => unreachable!("{king_to} is not a castling target"),
    }
}
