//! Chess position representation and rules.
//!
//! A [`Position`] is an 8x8 mailbox plus the side to move, castling rights,
//! en passant target and move clocks. Positions are plain values: every
//! query works on `&self`, and [`Position::apply_move`] returns a new one.
//! Supports full chess rules including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use chess_core::board::Position;
//!
//! let position = Position::starting();
//! let moves = position.legal_moves();
//! assert_eq!(moves.len(), 20);
//!
//! let e4 = position.parse_move("e2e4").unwrap();
//! let next = position.apply_move(&e4).unwrap();
//! assert_eq!(
//!     next.to_fen(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
//! );
//! ```

mod apply;
mod attacks;
mod builder;
pub mod chess960;
mod error;
mod fen;
mod legality;
mod movegen;
mod perft;
mod san;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{Chess960Error, FenError, MoveError, MoveParseError, SquareError};
pub use fen::STARTING_FEN;
pub use legality::Outcome;
pub use state::{Position, SquareContent};
pub use types::{
    CastlingRights, CastlingSide, Color, CoordinateMove, Move, MoveList, MoveRecord, Piece, Square,
};

pub(crate) use types::PROMOTION_PIECES;
