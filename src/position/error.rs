//! Error types for position parsing.

use std::fmt;

/// Reasons a FEN string fails to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Wrong number of whitespace-separated fields (4 to 6 are valid).
    FieldCount { found: usize },
    /// Board field does not hold eight ranks.
    Board { text: String },
    /// A rank does not describe exactly eight files, or holds a bad character.
    Rank { text: String },
    /// Active color field is not "w" or "b".
    ActiveColor { text: String },
    /// Castling field holds something other than "-" or K/Q/k/q.
    CastlingRights { text: String },
    /// File letter outside a..h.
    File { found: char },
    /// En passant square is malformed or on the wrong rank for the side to move.
    EnPassant { text: String },
    /// Halfmove clock is not a non-negative integer.
    HalfmoveClock { text: String },
    /// Fullmove number is not a non-negative integer.
    FullmoveNumber { text: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::FieldCount { found } => {
                write!(f, "invalid FEN: expected 4 to 6 fields, found {found}")
            }
            FenError::Board { text } => write!(f, "invalid board: {text}"),
            FenError::Rank { text } => write!(f, "invalid rank: {text}"),
            FenError::ActiveColor { text } => write!(f, "invalid active color: {text}"),
            FenError::CastlingRights { text } => {
                write!(f, "invalid castling rights: {text}")
            }
            FenError::File { found } => write!(f, "invalid file: {found}"),
            FenError::EnPassant { text } => {
                write!(f, "invalid en passant square: {text}")
            }
            FenError::HalfmoveClock { text } => {
                write!(f, "invalid halfmove clock: {text}")
            }
            FenError::FullmoveNumber { text } => {
                write!(f, "invalid fullmove number: {text}")
            }
        }
    }
}

impl std::error::Error for FenError {}
