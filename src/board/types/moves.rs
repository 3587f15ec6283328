//! Move types and move list.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastlingSide;
use super::piece::Piece;
use super::square::Square;
use crate::board::error::MoveParseError;

/// A fully described move.
///
/// Generated moves carry the moved piece type and any capture, castling or
/// en passant facts, so the applier and notation encoder never have to
/// rediscover them.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promotion: Option<Piece>,
    pub castling: Option<CastlingSide>,
    pub en_passant: bool,
}

impl Move {
    /// A plain move with no capture or special flags.
    #[must_use]
    pub const fn quiet(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            captured: None,
            promotion: None,
            castling: None,
            en_passant: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        self.castling.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// Returns true if this move is a pawn advancing two ranks
    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(&self) -> bool {
        matches!(self.piece, Piece::Pawn) && self.from.rank().abs_diff(self.to.rank()) == 2
    }

    /// The from/to/promotion triple in coordinate form.
    #[inline]
    #[must_use]
    pub const fn coordinates(&self) -> CoordinateMove {
        CoordinateMove {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({:?} {}{}", self.piece, self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.san_char())?;
        }
        if let Some(captured) = self.captured {
            write!(f, " x{captured:?}")?;
        }
        if let Some(side) = self.castling {
            write!(f, " {side:?}")?;
        }
        if self.en_passant {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

/// Coordinate form, e.g. "e2e4" or "e7e8q".
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.coordinates(), f)
    }
}

/// A move as written in coordinate notation: origin, destination and an
/// optional promotion piece, with nothing else known about it yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordinateMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl fmt::Display for CoordinateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Parses `[a-h][1-8][a-h][1-8][qrbn]?`; anything else is `InvalidFormat`.
impl FromStr for CoordinateMove {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MoveParseError::InvalidFormat {
            notation: s.to_string(),
        };
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(invalid());
        }
        let from: Square = s[0..2].parse().map_err(|_| invalid())?;
        let to: Square = s[2..4].parse().map_err(|_| invalid())?;
        let promotion = match s.as_bytes().get(4) {
            None => None,
            Some(b'q') => Some(Piece::Queen),
            Some(b'r') => Some(Piece::Rook),
            Some(b'b') => Some(Piece::Bishop),
            Some(b'n') => Some(Piece::Knight),
            Some(_) => return Err(invalid()),
        };
        Ok(CoordinateMove {
            from,
            to,
            promotion,
        })
    }
}

impl From<Move> for CoordinateMove {
    fn from(mv: Move) -> Self {
        mv.coordinates()
    }
}

/// A move together with the facts a game log records about it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub mv: Move,
    /// The opponent is in check after the move (also set on checkmate).
    pub check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
    /// Standard algebraic notation, including any "+" or "#" suffix.
    pub notation: String,
}

/// Growable list of moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(32),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub(crate) fn extend(&mut self, other: MoveList) {
        self.moves.extend(other.moves);
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(keep);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// First move matching the given coordinates.
    #[must_use]
    pub fn find(&self, coords: CoordinateMove) -> Option<Move> {
        self.moves
            .iter()
            .find(|m| m.coordinates() == coords)
            .copied()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}
