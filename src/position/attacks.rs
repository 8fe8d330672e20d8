//! Attack detection.

use super::piece::{Color, Piece, PieceType};
use super::square::{
    Direction, Square, BISHOP_DIRECTIONS, KING_DIRECTIONS, KNIGHT_DIRECTIONS,
    PAWN_CAPTURE_DIRECTIONS, ROOK_DIRECTIONS,
};
use super::state::Position;

impl Position {
    /// True when the side to move is in check.
    #[must_use]
    pub fn is_check(&self) -> bool {
        self.is_check_against(self.active_color)
    }

    /// True when `color`'s king is attacked.
    pub(crate) fn is_check_against(&self, color: Color) -> bool {
        self.is_attacked(self.king_square(color), color.opposite())
    }

    /// True when any piece of `attacker` attacks `target`.
    #[must_use]
    pub fn is_attacked(&self, target: Square, attacker: Color) -> bool {
        self.attacked_by_pawn(target, attacker)
            || self.attacked_by_leaper(
                target,
                Piece::of(attacker, PieceType::Knight),
                &KNIGHT_DIRECTIONS,
            )
            || self.attacked_by_slider(
                target,
                Piece::of(attacker, PieceType::Bishop),
                Piece::of(attacker, PieceType::Queen),
                &BISHOP_DIRECTIONS,
            )
            || self.attacked_by_slider(
                target,
                Piece::of(attacker, PieceType::Rook),
                Piece::of(attacker, PieceType::Queen),
                &ROOK_DIRECTIONS,
            )
            || self.attacked_by_leaper(
                target,
                Piece::of(attacker, PieceType::King),
                &KING_DIRECTIONS,
            )
    }

    // A pawn attacks `target` if it stands one capture-step before it, so
    // probe backwards along the attacker's capturing directions.
    fn attacked_by_pawn(&self, target: Square, attacker: Color) -> bool {
        let pawn = Piece::of(attacker, PieceType::Pawn);
        PAWN_CAPTURE_DIRECTIONS[attacker.index()]
            .iter()
            .any(|&dir| {
                target
                    .offset(-dir)
                    .is_some_and(|sq| self.get(sq) == Some(pawn))
            })
    }

    fn attacked_by_leaper(
        &self,
        target: Square,
        attacker_pc: Piece,
        directions: &[Direction],
    ) -> bool {
        directions.iter().any(|&dir| {
            target
                .offset(dir)
                .is_some_and(|sq| self.get(sq) == Some(attacker_pc))
        })
    }

    fn attacked_by_slider(
        &self,
        target: Square,
        attacker_pc: Piece,
        attacker_queen: Piece,
        directions: &[Direction],
    ) -> bool {
        for &dir in directions {
            let mut current = target.offset(dir);
            while let Some(sq) = current {
                match self.get(sq) {
                    Some(pc) => {
                        if pc == attacker_pc || pc == attacker_queen {
                            return true;
                        }
                        break;
                    }
                    None => current = sq.offset(dir),
                }
            }
        }
        false
    }
}
