//! Core chess types.
//!
//! This module contains the value types shared by every part of the crate:
//! - `Piece` and `Color` - piece types and colors
//! - `Square` - (rank, file) board coordinate
//! - `Move`, `CoordinateMove`, `MoveRecord` and `MoveList` - move representation
//! - `CastlingRights` and `CastlingSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastlingRights, CastlingSide};
pub use moves::{CoordinateMove, Move, MoveList, MoveRecord};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
