//! The mutable position.
//!
//! Two redundant representations are kept deliberately: the 0x88 board array
//! gives O(1) square reads for attack walks, the per-(color, piece) bitboards
//! give O(popcount) iteration for move generation. They change in exactly two
//! places, [`Position::put`] and [`Position::remove`].

use arrayvec::ArrayVec;

use super::bitboard::Bitboard;
use super::fen::STARTING_FEN;
use super::moves::MAX_PLY;
use super::piece::{Color, Piece, PieceType};
use super::square::Square;

pub const CASTLE_WHITE_K: u8 = 1 << 0;
pub const CASTLE_WHITE_Q: u8 = 1 << 1;
pub const CASTLE_BLACK_K: u8 = 1 << 2;
pub const CASTLE_BLACK_Q: u8 = 1 << 3;
pub const CASTLE_ALL: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// The irreversible state saved before every make and restored on undo.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct StateEntry {
    pub(crate) castling_rights: u8,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Position {
    pub(crate) board: [Option<Piece>; 128],
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) active_color: Color,
    pub(crate) castling_rights: u8,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) halfmove_number: u32,
    pub(crate) states: ArrayVec<StateEntry, MAX_PLY>,
}

impl Position {
    /// An empty board: no pieces, no rights, White to move, clocks at zero.
    #[must_use]
    pub fn empty() -> Self {
        Position {
            board: [None; 128],
            pieces: [[Bitboard::EMPTY; 6]; 2],
            active_color: Color::White,
            castling_rights: 0,
            en_passant: None,
            halfmove_clock: 0,
            halfmove_number: 0,
            states: ArrayVec::new(),
        }
    }

    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_fen(STARTING_FEN).expect("starting FEN parses")
    }

    /// The piece on `sq`, if any.
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.board[sq.board_index()]
    }

    /// Place a piece on an empty square, keeping board and bitboards in sync.
    pub fn put(&mut self, pc: Piece, sq: Square) {
        debug_assert!(
            self.board[sq.board_index()].is_none(),
            "put {pc:?} on occupied {sq}"
        );
        self.board[sq.board_index()] = Some(pc);
        self.pieces[pc.color().index()][pc.kind().index()].add(sq);
    }

    /// Take the piece off `sq` and return it. An empty square is a programmer
    /// error.
    pub fn remove(&mut self, sq: Square) -> Piece {
        let pc = self.board[sq.board_index()]
            .unwrap_or_else(|| panic!("remove from empty square {sq}"));
        self.board[sq.board_index()] = None;
        self.pieces[pc.color().index()][pc.kind().index()].remove(sq);
        pc
    }

    /// Grant a castling right (one of the `CASTLE_*` bits).
    pub fn set_castling_right(&mut self, castling: u8) {
        self.castling_rights |= castling;
    }

    #[must_use]
    pub fn active_color(&self) -> Color {
        self.active_color
    }

    #[must_use]
    pub fn castling_rights(&self) -> u8 {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant
    }

    /// Plies since the last pawn move or capture, for the fifty-move rule.
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Total plies since the start of the game.
    #[must_use]
    pub fn halfmove_number(&self) -> u32 {
        self.halfmove_number
    }

    /// Moves made and not yet undone.
    #[must_use]
    pub fn ply(&self) -> usize {
        self.states.len()
    }

    pub(crate) fn piece_bitboard(&self, color: Color, kind: PieceType) -> Bitboard {
        self.pieces[color.index()][kind.index()]
    }

    /// Square of `color`'s king. Each side having exactly one king is a
    /// structural invariant; a missing king is a programmer error.
    pub(crate) fn king_square(&self, color: Color) -> Square {
        self.piece_bitboard(color, PieceType::King)
            .first_square()
            .unwrap_or_else(|| panic!("no {color:?} king on the board"))
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
