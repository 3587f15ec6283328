//! Castling rights and castling sides.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Which wing a castling move goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

impl CastlingSide {
    pub const BOTH: [CastlingSide; 2] = [CastlingSide::Kingside, CastlingSide::Queenside];

    /// File the rook starts on (h or a).
    #[inline]
    #[must_use]
    pub const fn rook_home_file(self) -> usize {
        match self {
            CastlingSide::Kingside => 7,
            CastlingSide::Queenside => 0,
        }
    }

    /// File the king lands on (g or c).
    #[inline]
    #[must_use]
    pub const fn king_target_file(self) -> usize {
        match self {
            CastlingSide::Kingside => 6,
            CastlingSide::Queenside => 2,
        }
    }

    /// File the rook lands on (f or d).
    #[inline]
    #[must_use]
    pub const fn rook_target_file(self) -> usize {
        match self {
            CastlingSide::Kingside => 5,
            CastlingSide::Queenside => 3,
        }
    }

    /// Notation for the move ("O-O" or "O-O-O").
    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            CastlingSide::Kingside => "O-O",
            CastlingSide::Queenside => "O-O-O",
        }
    }
}

/// Castling rights represented as a bitmask of the four independent flags
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastlingSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, side: CastlingSide) {
        self.0 |= Self::bit_for(color, side);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastlingSide) {
        self.0 &= !Self::bit_for(color, side);
    }

    /// Remove both rights of one color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastlingSide::Kingside);
        self.remove(color, CastlingSide::Queenside);
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Parse the FEN castling field ("-" or a subset of "KQkq").
    ///
    /// Returns `None` on any other character or on an empty field.
    #[must_use]
    pub fn from_fen(field: &str) -> Option<Self> {
        if field == "-" {
            return Some(CastlingRights::none());
        }
        if field.is_empty() {
            return None;
        }
        let mut rights = CastlingRights::none();
        for c in field.chars() {
            match c {
                'K' => rights.set(Color::White, CastlingSide::Kingside),
                'Q' => rights.set(Color::White, CastlingSide::Queenside),
                'k' => rights.set(Color::Black, CastlingSide::Kingside),
                'q' => rights.set(Color::Black, CastlingSide::Queenside),
                _ => return None,
            }
        }
        Some(rights)
    }

    #[inline]
    const fn bit_for(color: Color, side: CastlingSide) -> u8 {
        match (color, side) {
            (Color::White, CastlingSide::Kingside) => CASTLE_WHITE_K,
            (Color::White, CastlingSide::Queenside) => CASTLE_WHITE_Q,
            (Color::Black, CastlingSide::Kingside) => CASTLE_BLACK_K,
            (Color::Black, CastlingSide::Queenside) => CASTLE_BLACK_Q,
        }
    }
}

/// FEN form: "KQkq" order, or "-" when no rights remain.
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (color, side, c) in [
            (Color::White, CastlingSide::Kingside, 'K'),
            (Color::White, CastlingSide::Queenside, 'Q'),
            (Color::Black, CastlingSide::Kingside, 'k'),
            (Color::Black, CastlingSide::Queenside, 'q'),
        ] {
            if self.has(color, side) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
