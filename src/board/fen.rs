use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{CastlingRights, Color, CoordinateMove, Move, Piece, Position, Square};

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a position from its six-field FEN description.
    ///
    /// # Example
    /// ```
    /// use chess_core::Position;
    ///
    /// let position = Position::from_fen(chess_core::STARTING_FEN).unwrap();
    /// assert_eq!(position, Position::starting());
    /// ```
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let result = Self::decode(fen);
        if let Err(err) = &result {
            debug!("rejected FEN {fen:?}: {err}");
        }
        result
    }

    fn decode(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        let mut position = Position::empty();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += run as usize;
                } else {
                    let content = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file < 8 {
                        position.grid[rank][file] = Some(content);
                    }
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::BadRankLength {
                        rank: rank_idx,
                        squares: file,
                    });
                }
            }
            if file != 8 {
                return Err(FenError::BadRankLength {
                    rank: rank_idx,
                    squares: file,
                });
            }
        }

        position.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        position.castling_rights =
            CastlingRights::from_fen(parts[2]).ok_or_else(|| FenError::InvalidCastling {
                found: parts[2].to_string(),
            })?;

        position.en_passant_target = match parts[3] {
            "-" => None,
            field => {
                let invalid = || FenError::InvalidEnPassant {
                    found: field.to_string(),
                };
                let square: Square = field.parse().map_err(|_| invalid())?;
                // Only the square behind a pawn that just advanced two ranks.
                if square.rank() != 2 && square.rank() != 5 {
                    return Err(invalid());
                }
                Some(square)
            }
        };

        position.halfmove_clock = parse_clock(parts[4], "half-move clock")?;
        position.fullmove_number = parse_clock(parts[5], "full-move number")?;

        Ok(position)
    }

    /// Encode the position as FEN. Exact inverse of [`Position::from_fen`].
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.grid[rank][file] {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            self.side_to_move.fen_char(),
            self.castling_rights,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Find the legal move matching the given coordinates.
    ///
    /// Fills in the moved piece and any capture, castling or en passant flags.
    #[must_use]
    pub fn legal_move(&self, coords: CoordinateMove) -> Option<Move> {
        self.legal_moves_from(coords.from).find(coords)
    }

    /// Parse a move in coordinate notation (e.g., "e2e4", "e7e8q") and find
    /// the matching legal move.
    ///
    /// # Example
    /// ```
    /// use chess_core::Position;
    ///
    /// let position = Position::starting();
    /// let mv = position.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let coords: CoordinateMove = text.parse()?;
        self.legal_move(coords)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }
}

fn parse_clock(field: &str, name: &'static str) -> Result<u32, FenError> {
    // `u32::from_str` accepts a leading '+', which would not survive a round trip.
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FenError::InvalidClock {
            field: name,
            found: field.to_string(),
        });
    }
    field.parse().map_err(|_| FenError::InvalidClock {
        field: name,
        found: field.to_string(),
    })
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}
