//! FEN parsing and serialization.

use std::fmt;
use std::str::FromStr;

use super::error::FenError;
use super::piece::{Color, Piece};
use super::square::Square;
use super::state::{
    Position, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q,
};

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a FEN string. The halfmove clock and fullmove number fields are
    /// optional; the fullmove number is folded into the halfmove number as
    /// `2 * fullmove + 1` when Black is to move, `2 * fullmove` otherwise.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&fields.len()) {
            return Err(FenError::FieldCount {
                found: fields.len(),
            });
        }

        let mut position = Position::empty();

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::Board {
                text: fields[0].to_string(),
            });
        }
        for (i, rank_text) in ranks.iter().enumerate() {
            parse_rank(&mut position, rank_text, 7 - i as u8)?;
        }

        position.active_color = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::ActiveColor {
                    text: other.to_string(),
                })
            }
        };

        if fields[2] != "-" {
            if fields[2].len() > 4 {
                return Err(FenError::CastlingRights {
                    text: fields[2].to_string(),
                });
            }
            for c in fields[2].chars() {
                let right = match c {
                    'K' => CASTLE_WHITE_K,
                    'Q' => CASTLE_WHITE_Q,
                    'k' => CASTLE_BLACK_K,
                    'q' => CASTLE_BLACK_Q,
                    _ => {
                        return Err(FenError::CastlingRights {
                            text: fields[2].to_string(),
                        })
                    }
                };
                position.set_castling_right(right);
            }
        }

        if fields[3] != "-" {
            position.en_passant = Some(parse_en_passant(fields[3], position.active_color)?);
        }

        if let Some(field) = fields.get(4) {
            position.halfmove_clock =
                field.parse().map_err(|_| FenError::HalfmoveClock {
                    text: (*field).to_string(),
                })?;
        }

        if let Some(field) = fields.get(5) {
            let fullmove: u32 = field.parse().map_err(|_| FenError::FullmoveNumber {
                text: (*field).to_string(),
            })?;
            position.halfmove_number =
                2 * fullmove + u32::from(position.active_color == Color::Black);
        }

        Ok(position)
    }

    /// Serialize to FEN. The fullmove field is `halfmove_number / 2`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in (0u8..8).rev() {
            let mut empty = 0;
            for file in 0u8..8 {
                match self.get(Square::new(file, rank)) {
                    Some(pc) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(pc.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.active_color {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        if self.castling_rights == 0 {
            fen.push('-');
        } else {
            for (right, c) in [
                (CASTLE_WHITE_K, 'K'),
                (CASTLE_WHITE_Q, 'Q'),
                (CASTLE_BLACK_K, 'k'),
                (CASTLE_BLACK_Q, 'q'),
            ] {
                if self.castling_rights & right != 0 {
                    fen.push(c);
                }
            }
        }

        match self.en_passant {
            Some(sq) => {
                fen.push(' ');
                fen.push_str(&sq.to_string());
            }
            None => fen.push_str(" -"),
        }

        fen.push_str(&format!(
            " {} {}",
            self.halfmove_clock,
            self.halfmove_number / 2
        ));

        fen
    }
}

fn parse_rank(position: &mut Position, rank_text: &str, rank: u8) -> Result<(), FenError> {
    let rank_error = || FenError::Rank {
        text: rank_text.to_string(),
    };

    let mut file = 0u8;
    for c in rank_text.chars() {
        if let Some(digit) = c.to_digit(10) {
            if digit == 0 || digit == 9 {
                return Err(rank_error());
            }
            file += digit as u8;
        } else if let Some(pc) = Piece::from_char(c) {
            if file >= 8 {
                return Err(rank_error());
            }
            position.put(pc, Square::new(file, rank));
            file += 1;
        } else {
            return Err(rank_error());
        }
        if file > 8 {
            return Err(rank_error());
        }
    }
    if file != 8 {
        return Err(rank_error());
    }
    Ok(())
}

fn parse_en_passant(text: &str, active_color: Color) -> Result<Square, FenError> {
    let mut chars = text.chars();
    let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
    else {
        return Err(FenError::EnPassant {
            text: text.to_string(),
        });
    };

    let file = match file_char {
        'a'..='h' => file_char as u8 - b'a',
        _ => return Err(FenError::File { found: file_char }),
    };
    let rank = match rank_char {
        '1'..='8' => rank_char as u8 - b'1',
        _ => {
            return Err(FenError::Rank {
                text: rank_char.to_string(),
            })
        }
    };

    // The square sits behind the pawn that just double-moved: rank 6 when
    // White is to move, rank 3 when Black is.
    let expected_rank = match active_color {
        Color::White => 5,
        Color::Black => 2,
    };
    if rank != expected_rank {
        return Err(FenError::EnPassant {
            text: text.to_string(),
        });
    }

    Ok(Square::new(file, rank))
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}
