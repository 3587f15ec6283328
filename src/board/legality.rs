//! Legality filter and check detection.
//!
//! Every candidate is checked by playing it on a private copy of the
//! position and asking whether the mover's king is attacked afterwards.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CastlingSide, Color, Move, MoveList, Piece, Position, Square};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
}

impl Outcome {
    /// Result string as written in game records: "1-0", "0-1" or "1/2-1/2".
    #[must_use]
    pub const fn result(self) -> &'static str {
        match self {
            Outcome::Checkmate {
                winner: Color::White,
            } => "1-0",
            Outcome::Checkmate {
                winner: Color::Black,
            } => "0-1",
            Outcome::Stalemate => "1/2-1/2",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            Outcome::Stalemate => write!(f, "Draw by stalemate"),
        }
    }
}

impl Position {
    /// Returns true if `color`'s king is attacked. A side without a king is
    /// never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }

    /// Whether `mv` is a castling move its king may make right now.
    ///
    /// Non-castling moves and moves from a square without a king return false.
    #[must_use]
    pub fn is_castling_legal(&self, mv: &Move) -> bool {
        match (self.piece_at(mv.from), self.castling_side(mv)) {
            (Some((color, Piece::King)), Some(side)) => self.can_castle(color, side),
            _ => false,
        }
    }

    /// Castling preconditions for `color` towards `side`: not in check, the
    /// right still held, king and rook on their home squares, nothing between
    /// them, and no attacked square on the king's path.
    pub(crate) fn can_castle(&self, color: Color, side: CastlingSide) -> bool {
        let rank = color.back_rank();
        let king_home = Square(rank, 4);
        let rook_home = Square(rank, side.rook_home_file());

        if !self.castling_rights.has(color, side) {
            trace!("{color} may not castle {side:?}: right already lost");
            return false;
        }
        if self.piece_at(king_home) != Some((color, Piece::King))
            || self.piece_at(rook_home) != Some((color, Piece::Rook))
        {
            trace!("{color} may not castle {side:?}: king or rook not at home");
            return false;
        }
        if self.is_in_check(color) {
            trace!("{color} may not castle {side:?}: in check");
            return false;
        }

        let (low, high) = if side.rook_home_file() < 4 {
            (side.rook_home_file(), 4)
        } else {
            (4, side.rook_home_file())
        };
        if (low + 1..high).any(|file| !self.is_empty(Square(rank, file))) {
            trace!("{color} may not castle {side:?}: path blocked");
            return false;
        }

        // The king's traversal, start and landing squares included.
        let target = side.king_target_file();
        let (from, to) = if target < 4 { (target, 4) } else { (4, target) };
        let opponent = color.opponent();
        if (from..=to).any(|file| self.is_square_attacked(Square(rank, file), opponent)) {
            trace!("{color} may not castle {side:?}: king passes an attacked square");
            return false;
        }
        true
    }

    /// Full legality check for an arbitrary move.
    ///
    /// The moving piece must exist, belong to the side to move, and match
    /// `mv.piece`; from, to and promotion must describe a move the generator
    /// produces for that piece; castling must pass
    /// [`Position::is_castling_legal`]; and the mover's king must not be left
    /// in check.
    ///
    /// `captured`, `castling` and `en_passant` may be left unset. When set,
    /// they must agree with the generated move.
    #[must_use]
    pub fn is_valid_move(&self, mv: &Move) -> bool {
        let Some((color, piece)) = self.piece_at(mv.from) else {
            return false;
        };
        if color != self.side_to_move || piece != mv.piece {
            return false;
        }
        if matches!(self.piece_at(mv.to), Some((c, _)) if c == color) {
            return false;
        }
        let Some(generated) = self.pseudo_legal_moves_from(mv.from).find(mv.coordinates()) else {
            return false;
        };
        if !flags_agree(mv, &generated) {
            trace!("{mv} carries flags that contradict the position");
            return false;
        }
        self.passes_legality_filter(&generated, color)
    }

    /// Legality of a move already known to be pseudo-legal for `color`.
    fn passes_legality_filter(&self, mv: &Move, color: Color) -> bool {
        if let Some(side) = mv.castling {
            if !self.can_castle(color, side) {
                return false;
            }
        }
        let mut next = self.clone();
        next.make_move(mv).is_ok() && !next.is_in_check(color)
    }

    /// Every legal move for the side to move, a1 first.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let color = self.side_to_move;
        let mut moves = match self.find_king(color) {
            // Only the king can answer two checkers at once.
            Some(king) if self.checkers(color).len() > 1 => self.pseudo_legal_moves_from(king),
            _ => self.pseudo_legal_moves(),
        };
        moves.retain(|mv| self.passes_legality_filter(mv, color));
        moves
    }

    /// Squares of the enemy pieces giving check to `color`'s king, a1 first.
    #[must_use]
    pub fn checkers(&self, color: Color) -> Vec<Square> {
        self.find_king(color)
            .map(|king| self.attackers_of(king, color.opponent()))
            .unwrap_or_default()
    }

    /// Legal moves of the piece on `from`; empty unless it belongs to the side to move.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square) -> MoveList {
        match self.piece_at(from) {
            Some((color, _)) if color == self.side_to_move => {
                let mut moves = self.pseudo_legal_moves_from(from);
                moves.retain(|mv| self.passes_legality_filter(mv, color));
                moves
            }
            _ => MoveList::new(),
        }
    }

    #[must_use]
    pub fn has_legal_moves(&self) -> bool {
        self.pieces(self.side_to_move)
            .any(|(from, _)| !self.legal_moves_from(from).is_empty())
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.side_to_move) && !self.has_legal_moves()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.side_to_move) && !self.has_legal_moves()
    }

    /// Checkmate or stalemate, if the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if self.has_legal_moves() {
            return None;
        }
        if self.is_in_check(self.side_to_move) {
            Some(Outcome::Checkmate {
                winner: self.side_to_move.opponent(),
            })
        } else {
            Some(Outcome::Stalemate)
        }
    }
}

/// Optional facts set on a caller's move match the generated one.
fn flags_agree(mv: &Move, generated: &Move) -> bool {
    (mv.captured.is_none() || mv.captured == generated.captured)
        && (mv.castling.is_none() || mv.castling == generated.castling)
        && (!mv.en_passant || generated.en_passant)
}
