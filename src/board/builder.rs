//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_core::{Color, Piece, PositionBuilder, Square};
//!
//! let e1: Square = "e1".parse().unwrap();
//! let e8: Square = "e8".parse().unwrap();
//! let a2: Square = "a2".parse().unwrap();
//!
//! let position = PositionBuilder::new()
//!     .piece(e1, Color::White, Piece::King)
//!     .piece(e8, Color::Black, Piece::King)
//!     .piece(a2, Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/P7/4K3 w - - 0 1");
//! ```

use super::{CastlingRights, CastlingSide, Color, Piece, Position, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    position: Position,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Start from an empty board, White to move, no castling rights.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            position: Position::empty(),
        }
    }

    /// Start from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        Self::from_position(Position::starting())
    }

    /// Start from an existing position.
    #[must_use]
    pub fn from_position(position: Position) -> Self {
        PositionBuilder { position }
    }

    /// Place a piece, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.position.set_piece(square, Some((color, piece)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.position.set_piece(square, None);
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.position.side_to_move = color;
        self
    }

    /// Replace all castling rights.
    #[must_use]
    pub fn castling(mut self, rights: CastlingRights) -> Self {
        self.position.castling_rights = rights;
        self
    }

    /// Grant one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, side: CastlingSide) -> Self {
        self.position.castling_rights.set(color, side);
        self
    }

    #[must_use]
    pub fn en_passant(mut self, target: Option<Square>) -> Self {
        self.position.en_passant_target = target;
        self
    }

    #[must_use]
    pub fn halfmove_clock(mut self, clock: u32) -> Self {
        self.position.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub fn fullmove_number(mut self, number: u32) -> Self {
        self.position.fullmove_number = number;
        self
    }

    /// Build the position.
    #[must_use]
    pub fn build(self) -> Position {
        self.position
    }
}
