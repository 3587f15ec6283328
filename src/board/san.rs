//! Standard Algebraic Notation (SAN) output.
//!
//! SAN is the standard human-readable chess notation used in scoresheets,
//! books, and GUIs. Examples: "e4", "Nf3", "Bxc6+", "O-O", "e8=Q#"
//!
//! # Examples
//! ```
//! use chess_core::Position;
//!
//! let position = Position::starting();
//! let mv = position.parse_move("g1f3").unwrap();
//! assert_eq!(position.to_algebraic(&mv).unwrap(), "Nf3");
//! ```

use super::error::MoveError;
use super::{Color, Move, MoveRecord, Piece, Position, Square};

impl Position {
    /// Format a move in Standard Algebraic Notation.
    ///
    /// Returns notation like "e4", "Nf3", "Bxc6+", "O-O-O", "e8=Q#".
    /// Fails only when the source square is empty.
    pub fn to_algebraic(&self, mv: &Move) -> Result<String, MoveError> {
        self.annotate(mv).map(|record| record.notation)
    }

    /// Play `mv` on a copy and report check, checkmate, stalemate and SAN.
    pub fn annotate(&self, mv: &Move) -> Result<MoveRecord, MoveError> {
        let mut notation = self.san_without_suffix(mv)?;
        let next = self.apply_move(mv)?;

        let check = next.is_in_check(next.side_to_move);
        let stuck = !next.has_legal_moves();
        let checkmate = check && stuck;
        if checkmate {
            notation.push('#');
        } else if check {
            notation.push('+');
        }

        Ok(MoveRecord {
            mv: *mv,
            check,
            checkmate,
            stalemate: !check && stuck,
            notation,
        })
    }

    fn san_without_suffix(&self, mv: &Move) -> Result<String, MoveError> {
        let (color, piece) = self
            .piece_at(mv.from)
            .ok_or(MoveError::NoPieceAtSource { square: mv.from })?;

        if let Some(side) = self.castling_side(mv) {
            return Ok(side.notation().to_string());
        }

        let capture = self.piece_at(mv.to).is_some() || self.is_en_passant_capture(mv);
        let mut san = String::new();

        if piece == Piece::Pawn {
            // Pawn captures include the file
            if capture {
                san.push(mv.from.file_char());
            }
        } else {
            san.push(piece.san_char());
            let (needs_file, needs_rank) = self.needs_disambiguation(mv, color, piece);
            if needs_file {
                san.push(mv.from.file_char());
            }
            if needs_rank {
                san.push(mv.from.rank_char());
            }
        }

        if capture {
            san.push('x');
        }
        san.push_str(&mv.to.to_string());

        if let (Piece::Pawn, Some(promo)) = (piece, mv.promotion) {
            san.push('=');
            san.push(promo.san_char());
        }

        Ok(san)
    }

    /// Determine if disambiguation is needed for a piece move.
    /// Returns (`needs_file`, `needs_rank`).
    ///
    /// Rivals are the other pieces of the same type and color with a legal
    /// move to the same destination.
    fn needs_disambiguation(&self, mv: &Move, color: Color, piece: Piece) -> (bool, bool) {
        let turned;
        let view = if color == self.side_to_move {
            self
        } else {
            turned = Position {
                side_to_move: color,
                ..self.clone()
            };
            &turned
        };

        let rivals: Vec<Square> = view
            .pieces(color)
            .filter(|&(from, p)| p == piece && from != mv.from)
            .filter(|&(from, _)| view.legal_moves_from(from).iter().any(|m| m.to == mv.to))
            .map(|(from, _)| from)
            .collect();

        if rivals.is_empty() {
            return (false, false);
        }

        let same_file = rivals.iter().any(|sq| sq.file() == mv.from.file());
        let same_rank = rivals.iter().any(|sq| sq.rank() == mv.from.rank());

        match (same_file, same_rank) {
            (false, _) => (true, false),    // File disambiguates
            (true, false) => (false, true), // Rank disambiguates
            (true, true) => (true, true),   // Need both
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn san(fen: &str, coords: &str) -> String {
        let position = Position::from_fen(fen).unwrap();
        let mv = position.parse_move(coords).unwrap();
        position.to_algebraic(&mv).unwrap()
    }

    #[test]
    fn test_pawn_push_and_piece_move() {
        assert_eq!(san(crate::STARTING_FEN, "e2e4"), "e4");
        assert_eq!(san(crate::STARTING_FEN, "b1c3"), "Nc3");
    }

    #[test]
    fn test_captures() {
        let fen = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2";
        assert_eq!(san(fen, "e4d5"), "exd5");
        let fen = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";
        assert_eq!(san(fen, "e5d6"), "exd6");
    }

    #[test]
    fn test_castling() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        assert_eq!(san(fen, "e1g1"), "O-O");
        assert_eq!(san(fen, "e1c1"), "O-O-O");
    }

    #[test]
    fn test_promotion_with_check() {
        assert_eq!(san("7k/P7/8/8/8/8/8/K7 w - - 0 1", "a7a8q"), "a8=Q+");
        assert_eq!(san("7k/P7/8/8/8/8/8/K7 w - - 0 1", "a7a8n"), "a8=N");
    }

    #[test]
    fn test_file_disambiguation() {
        // Knights on c3 and g3 both reach e4.
        let fen = "4k3/8/8/8/8/2N3N1/8/4K3 w - - 0 1";
        assert_eq!(san(fen, "c3e4"), "Nce4");
        assert_eq!(san(fen, "g3e4"), "Nge4");
    }

    #[test]
    fn test_rank_disambiguation() {
        let fen = "4k3/R7/8/8/8/8/R7/4K3 w - - 0 1";
        assert_eq!(san(fen, "a2a4"), "R2a4");
        assert_eq!(san(fen, "a7a4"), "R7a4");
    }

    #[test]
    fn test_full_square_disambiguation() {
        let fen = "6k1/8/8/8/Q2Q4/8/8/Q3K3 w - - 0 1";
        assert_eq!(san(fen, "a4d1"), "Qa4d1");
    }

    #[test]
    fn test_pinned_rival_needs_no_disambiguation() {
        // The e5 knight is pinned against the king.
        let fen = "4r1k1/8/8/2N1N3/8/8/8/4K3 w - - 0 1";
        assert_eq!(san(fen, "c5d7"), "Nd7");
        let unpinned = "6k1/8/8/2N1N3/8/8/8/4K3 w - - 0 1";
        assert_eq!(san(unpinned, "c5d7"), "Ncd7");
    }

    #[test]
    fn test_checkmate_suffix() {
        let fen = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4";
        assert_eq!(san(fen, "h5f7"), "Qxf7#");
    }

    #[test]
    fn test_annotate_flags() {
        let position = Position::from_fen("7k/8/4Q1K1/8/8/8/8/8 w - - 0 1").unwrap();
        let mv = position.parse_move("e6f7").unwrap();
        let record = position.annotate(&mv).unwrap();
        assert!(record.stalemate);
        assert!(!record.check);
        assert!(!record.checkmate);
        assert_eq!(record.notation, "Qf7");

        let mv = position.parse_move("e6e8").unwrap();
        let record = position.annotate(&mv).unwrap();
        assert!(record.check);
        assert!(record.checkmate);
        assert!(!record.stalemate);
        assert_eq!(record.notation, "Qe8#");
    }

    #[test]
    fn test_empty_source_is_an_error() {
        let position = Position::starting();
        let mv = Move::quiet(Square(3, 3), Square(4, 3), Piece::Queen);
        assert_eq!(
            position.to_algebraic(&mv),
            Err(MoveError::NoPieceAtSource {
                square: Square(3, 3)
            })
        );
    }
}
