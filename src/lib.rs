//! Chess rules core: positions, FEN, move generation, legality and SAN.
//!
//! ```
//! use chess_core::Position;
//!
//! let position = Position::from_fen(chess_core::STARTING_FEN).unwrap();
//! let mv = position.parse_move("g1f3").unwrap();
//! assert_eq!(position.to_algebraic(&mv).unwrap(), "Nf3");
//! ```

#[macro_use]
mod logging;

pub mod board;

pub use board::chess960;
pub use board::{
    CastlingRights, CastlingSide, Chess960Error, Color, CoordinateMove, FenError, Move, MoveError,
    MoveList, MoveParseError, MoveRecord, Outcome, Piece, Position, PositionBuilder, Square,
    SquareContent, SquareError, STARTING_FEN,
};
