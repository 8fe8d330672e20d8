//! Pseudo-legal move generation, the legality filter, and perft.

use super::moves::{Move, MoveKind, MoveList};
use super::piece::{Color, PieceType, PROMOTION_PIECE_TYPES};
use super::square::{
    self, behind, Direction, Square, BISHOP_DIRECTIONS, KING_DIRECTIONS, KNIGHT_DIRECTIONS,
    PAWN_CAPTURE_DIRECTIONS, PAWN_MOVE_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};
use super::state::{Position, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q};

impl Position {
    /// Pseudo-legal moves for the side to move, rated and sorted by MVV-LVA.
    /// Castling is included only when not in check.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mut list = MoveList::new();
        self.add_all_moves(&mut list);
        if !self.is_check() {
            self.add_castling_moves(&mut list, self.king_square(self.active_color));
        }
        list.rate_mvv_lva();
        list.sort();
        list
    }

    /// The subset of [`Position::generate_moves`] that does not leave the
    /// mover's king attacked, in the same order.
    pub fn generate_legal_moves(&mut self) -> MoveList {
        let pseudo = self.generate_moves();
        let mover = self.active_color;
        let mut legal = MoveList::new();
        for m in &pseudo {
            self.make_move(m);
            if !self.is_check_against(mover) {
                legal.push(m);
            }
            self.undo_move(m);
        }
        legal
    }

    /// Moves worth searching past the horizon: captures only, unless the side
    /// to move is in check, in which case every pseudo-legal move qualifies.
    #[must_use]
    pub fn generate_quiescent_moves(&self) -> MoveList {
        let mut list = MoveList::new();
        self.add_all_moves(&mut list);
        if !self.is_check() {
            let mut captures = MoveList::new();
            for m in &list {
                if m.is_capture() {
                    captures.push(m);
                }
            }
            list = captures;
        }
        list.rate_mvv_lva();
        list.sort();
        list
    }

    /// Side to move is in check with no legal move.
    pub fn is_checkmate(&mut self) -> bool {
        self.is_check() && self.generate_legal_moves().is_empty()
    }

    /// Side to move has no legal move but is not in check.
    pub fn is_stalemate(&mut self) -> bool {
        !self.is_check() && self.generate_legal_moves().is_empty()
    }

    fn add_all_moves(&self, list: &mut MoveList) {
        let us = self.active_color;
        for from in self.piece_bitboard(us, PieceType::Pawn) {
            self.add_pawn_moves(list, from);
        }
        for from in self.piece_bitboard(us, PieceType::Knight) {
            self.add_piece_moves(list, from, &KNIGHT_DIRECTIONS);
        }
        for from in self.piece_bitboard(us, PieceType::Bishop) {
            self.add_piece_moves(list, from, &BISHOP_DIRECTIONS);
        }
        for from in self.piece_bitboard(us, PieceType::Rook) {
            self.add_piece_moves(list, from, &ROOK_DIRECTIONS);
        }
        for from in self.piece_bitboard(us, PieceType::Queen) {
            self.add_piece_moves(list, from, &QUEEN_DIRECTIONS);
        }
        self.add_piece_moves(list, self.king_square(us), &KING_DIRECTIONS);
    }

    fn add_pawn_moves(&self, list: &mut MoveList, from: Square) {
        let pawn = self.get(from).expect("pawn square is occupied");
        let us = pawn.color();

        for &dir in &PAWN_CAPTURE_DIRECTIONS[us.index()] {
            let Some(to) = from.offset(dir) else { continue };
            match self.get(to) {
                Some(target) if target.color() != us => {
                    if on_promotion_rank(to, us) {
                        for promotion in PROMOTION_PIECE_TYPES {
                            list.push(Move::new(
                                MoveKind::PawnPromotion,
                                from,
                                to,
                                pawn,
                                Some(target),
                                Some(promotion),
                            ));
                        }
                    } else {
                        list.push(Move::new(
                            MoveKind::Normal,
                            from,
                            to,
                            pawn,
                            Some(target),
                            None,
                        ));
                    }
                }
                Some(_) => {}
                None => {
                    if Some(to) == self.en_passant {
                        let captured =
                            self.get(behind(to, us)).expect("en passant pawn present");
                        list.push(Move::new(
                            MoveKind::EnPassant,
                            from,
                            to,
                            pawn,
                            Some(captured),
                            None,
                        ));
                    }
                }
            }
        }

        let dir = PAWN_MOVE_DIRECTIONS[us.index()];
        let Some(to) = from.offset(dir) else { return };
        if self.get(to).is_some() {
            return;
        }
        if on_promotion_rank(to, us) {
            for promotion in PROMOTION_PIECE_TYPES {
                list.push(Move::new(
                    MoveKind::PawnPromotion,
                    from,
                    to,
                    pawn,
                    None,
                    Some(promotion),
                ));
            }
            return;
        }
        list.push(Move::new(MoveKind::Normal, from, to, pawn, None, None));

        if let Some(two) = to.offset(dir) {
            if self.get(two).is_none() && on_double_move_rank(two, us) {
                list.push(Move::new(MoveKind::PawnDouble, from, two, pawn, None, None));
            }
        }
    }

    fn add_piece_moves(&self, list: &mut MoveList, from: Square, directions: &[Direction]) {
        let pc = self.get(from).expect("origin square is occupied");
        let sliding = pc.kind().is_sliding();
        let us = pc.color();

        for &dir in directions {
            let mut current = from.offset(dir);
            while let Some(to) = current {
                match self.get(to) {
                    Some(target) => {
                        if target.color() != us {
                            list.push(Move::new(
                                MoveKind::Normal,
                                from,
                                to,
                                pc,
                                Some(target),
                                None,
                            ));
                        }
                        break;
                    }
                    None => {
                        list.push(Move::new(MoveKind::Normal, from, to, pc, None, None));
                        if !sliding {
                            break;
                        }
                        current = to.offset(dir);
                    }
                }
            }
        }
    }

    // The king's destination square is not tested for attacks here; the
    // legality filter replays the move and tests it anyway.
    fn add_castling_moves(&self, list: &mut MoveList, king_sq: Square) {
        let king = self.get(king_sq).expect("king square is occupied");
        if king.color() == Color::White {
            if self.castling_rights & CASTLE_WHITE_K != 0
                && self.get(square::F1).is_none()
                && self.get(square::G1).is_none()
                && !self.is_attacked(square::F1, Color::Black)
            {
                list.push(Move::new(
                    MoveKind::Castling,
                    king_sq,
                    square::G1,
                    king,
                    None,
                    None,
                ));
            }
            if self.castling_rights & CASTLE_WHITE_Q != 0
                && self.get(square::B1).is_none()
                && self.get(square::C1).is_none()
                && self.get(square::D1).is_none()
                && !self.is_attacked(square::D1, Color::Black)
            {
                list.push(Move::new(
                    MoveKind::Castling,
                    king_sq,
                    square::C1,
                    king,
                    None,
                    None,
                ));
            }
        } else {
            if self.castling_rights & CASTLE_BLACK_K != 0
                && self.get(square::F8).is_none()
                && self.get(square::G8).is_none()
                && !self.is_attacked(square::F8, Color::White)
            {
                list.push(Move::new(
                    MoveKind::Castling,
                    king_sq,
                    square::G8,
                    king,
                    None,
                    None,
                ));
            }
            if self.castling_rights & CASTLE_BLACK_Q != 0
                && self.get(square::B8).is_none()
                && self.get(square::C8).is_none()
                && self.get(square::D8).is_none()
                && !self.is_attacked(square::D8, Color::White)
            {
                list.push(Move::new(
                    MoveKind::Castling,
                    king_sq,
                    square::C8,
                    king,
                    None,
                    None,
                ));
            }
        }
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.generate_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for m in &moves {
            self.make_move(m);
            nodes += self.perft(depth - 1);
            self.undo_move(m);
        }
        nodes
    }

    /// Per-root-move subtree counts; their sum equals `perft(depth)`.
    pub fn perft_divide(&mut self, depth: u32) -> Vec<(Move, u64)> {
        let moves = self.generate_legal_moves();
        let mut counts = Vec::with_capacity(moves.len());
        for m in &moves {
            self.make_move(m);
            counts.push((m, self.perft(depth.saturating_sub(1))));
            self.undo_move(m);
        }
        counts
    }
}

fn on_promotion_rank(sq: Square, color: Color) -> bool {
    match color {
        Color::White => sq.rank() == 7,
        Color::Black => sq.rank() == 0,
    }
}

fn on_double_move_rank(sq: Square, color: Color) -> bool {
    match color {
        Color::White => sq.rank() == 3,
        Color::Black => sq.rank() == 4,
    }
}
