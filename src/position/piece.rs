#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

// Piece values as defined by Larry Kaufman.
pub(crate) const PAWN_VALUE: i32 = 100;
pub(crate) const KNIGHT_VALUE: i32 = 325;
pub(crate) const BISHOP_VALUE: i32 = 325;
pub(crate) const ROOK_VALUE: i32 = 500;
pub(crate) const QUEEN_VALUE: i32 = 975;
pub(crate) const KING_VALUE: i32 = 20000;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Promotion choices in the order the generator emits them.
pub(crate) const PROMOTION_PIECE_TYPES: [PieceType; 4] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
];

impl PieceType {
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        match index {
            0 => PieceType::Pawn,
            1 => PieceType::Knight,
            2 => PieceType::Bishop,
            3 => PieceType::Rook,
            4 => PieceType::Queen,
            5 => PieceType::King,
            _ => panic!("piece type index out of range"),
        }
    }

    /// Bishops, rooks and queens move along rays until blocked.
    #[inline]
    pub(crate) const fn is_sliding(self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Rook | PieceType::Queen)
    }

    #[inline]
    pub(crate) const fn value(self) -> i32 {
        match self {
            PieceType::Pawn => PAWN_VALUE,
            PieceType::Knight => KNIGHT_VALUE,
            PieceType::Bishop => BISHOP_VALUE,
            PieceType::Rook => ROOK_VALUE,
            PieceType::Queen => QUEEN_VALUE,
            PieceType::King => KING_VALUE,
        }
    }

    #[inline]
    pub(crate) const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }

    #[inline]
    pub(crate) const fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }
}

/// A colored piece. The discriminant doubles as the code packed into moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    WhitePawn,
    WhiteKnight,
    WhiteBishop,
    WhiteRook,
    WhiteQueen,
    WhiteKing,
    BlackPawn,
    BlackKnight,
    BlackBishop,
    BlackRook,
    BlackQueen,
    BlackKing,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn of(color: Color, kind: PieceType) -> Self {
        Self::from_index(color.index() * 6 + kind.index())
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        match index {
            0 => Piece::WhitePawn,
            1 => Piece::WhiteKnight,
            2 => Piece::WhiteBishop,
            3 => Piece::WhiteRook,
            4 => Piece::WhiteQueen,
            5 => Piece::WhiteKing,
            6 => Piece::BlackPawn,
            7 => Piece::BlackKnight,
            8 => Piece::BlackBishop,
            9 => Piece::BlackRook,
            10 => Piece::BlackQueen,
            11 => Piece::BlackKing,
            _ => panic!("piece index out of range"),
        }
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        if (self as usize) < 6 {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceType {
        PieceType::from_index(self as usize % 6)
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    #[inline]
    pub(crate) const fn from_char(c: char) -> Option<Self> {
        let kind = match PieceType::from_char(c) {
            Some(kind) => kind,
            None => return None,
        };
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::of(color, kind))
    }

    #[inline]
    pub(crate) const fn to_char(self) -> char {
        let c = self.kind().to_char();
        match self.color() {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_colors() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::White);
    }

    #[test]
    fn piece_of_color_and_kind_round_trips() {
        for color in [Color::White, Color::Black] {
            for kind_index in 0..6 {
                let kind = PieceType::from_index(kind_index);
                let piece = Piece::of(color, kind);
                assert_eq!(piece.color(), color);
                assert_eq!(piece.kind(), kind);
                assert_eq!(Piece::from_index(piece.index()), piece);
            }
        }
    }

    #[test]
    fn piece_chars_round_trip() {
        for (c, piece) in [
            ('P', Piece::WhitePawn),
            ('N', Piece::WhiteKnight),
            ('B', Piece::WhiteBishop),
            ('R', Piece::WhiteRook),
            ('Q', Piece::WhiteQueen),
            ('K', Piece::WhiteKing),
            ('p', Piece::BlackPawn),
            ('n', Piece::BlackKnight),
            ('b', Piece::BlackBishop),
            ('r', Piece::BlackRook),
            ('q', Piece::BlackQueen),
            ('k', Piece::BlackKing),
        ] {
            assert_eq!(Piece::from_char(c), Some(piece));
            assert_eq!(piece.to_char(), c);
        }
        assert_eq!(Piece::from_char('x'), None);
    }

    #[test]
    fn sliding_pieces() {
        assert!(PieceType::Bishop.is_sliding());
        assert!(PieceType::Rook.is_sliding());
        assert!(PieceType::Queen.is_sliding());
        assert!(!PieceType::Pawn.is_sliding());
        assert!(!PieceType::Knight.is_sliding());
        assert!(!PieceType::King.is_sliding());
    }
}
