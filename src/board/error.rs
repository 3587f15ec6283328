//! Error types for position decoding, move parsing and move application.

use std::fmt;

use super::Square;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string does not have exactly six fields
    WrongFieldCount { found: usize },
    /// Placement field does not have exactly eight ranks
    WrongRankCount { found: usize },
    /// A rank does not describe exactly eight squares (rank 8 first, counted from 0)
    BadRankLength { rank: usize, squares: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Castling field is not "-" or a combination of "KQkq"
    InvalidCastling { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Half-move clock or full-move number is not a non-negative integer
    InvalidClock { field: &'static str, found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 6 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::BadRankLength { rank, squares } => {
                write!(
                    f,
                    "Rank {} of FEN placement covers {squares} squares, expected 8",
                    8 - rank
                )
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { found } => {
                write!(f, "Invalid castling field '{found}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidClock { field, found } => {
                write!(f, "Invalid {field} '{found}' in FEN")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Text does not match the coordinate pattern (e.g. "e2e4", "e7e8q")
    InvalidFormat { notation: String },
    /// Move is well formed but not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidFormat { notation } => {
                write!(
                    f,
                    "Invalid move format '{notation}', expected e.g. 'e2e4' or 'e7e8q'"
                )
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for applying a move whose preconditions do not hold.
///
/// This is a caller bug, distinct from a move merely being illegal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The source square of the move is empty
    NoPieceAtSource { square: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPieceAtSource { square } => {
                write!(f, "No piece at source square {square}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for shuffled-start position numbering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chess960Error {
    /// Index outside 0..960
    IndexOutOfRange { index: usize },
}

impl fmt::Display for Chess960Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chess960Error::IndexOutOfRange { index } => {
                write!(f, "Chess960 index {index} out of range (must be 0-959)")
            }
        }
    }
}

impl std::error::Error for Chess960Error {}
