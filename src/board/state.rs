use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CastlingRights, Color, Piece, Square};

/// Contents of one square.
pub type SquareContent = Option<(Color, Piece)>;

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// A chess position.
///
/// A plain value: cloning copies the whole 8x8 grid, and every operation
/// that produces a new position works on its own copy.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Indexed `[rank][file]`, rank 0 = rank "1".
    pub(crate) grid: [[SquareContent; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    /// An empty board, White to move, no castling rights, move 1.
    #[must_use]
    pub fn empty() -> Self {
        Position {
            grid: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The standard starting position.
    #[must_use]
    pub fn starting() -> Self {
        Self::with_back_rank(BACK_RANK)
    }

    /// Full pawn ranks behind the given white back rank, mirrored for Black,
    /// with all castling rights.
    pub(crate) fn with_back_rank(back_rank: [Piece; 8]) -> Self {
        let mut position = Position::empty();
        for (file, &piece) in back_rank.iter().enumerate() {
            position.grid[0][file] = Some((Color::White, piece));
            position.grid[1][file] = Some((Color::White, Piece::Pawn));
            position.grid[6][file] = Some((Color::Black, Piece::Pawn));
            position.grid[7][file] = Some((Color::Black, piece));
        }
        position.castling_rights = CastlingRights::all();
        position
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> SquareContent {
        self.grid[square.rank()][square.file()]
    }

    /// Place a piece on a square, or clear it with `None`.
    #[inline]
    pub fn set_piece(&mut self, square: Square, content: SquareContent) {
        self.grid[square.rank()][square.file()] = content;
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Every occupied square holding a piece of `color`, a1 first.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((c, piece)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// The first king of `color` found scanning from a1.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|&(_, piece)| piece == Piece::King)
            .map(|(sq, _)| sq)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting()
    }
}

/// Diagram with rank 8 at the top, '.' for empty squares.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = self.grid[rank][file].map_or('.', |(color, piece)| piece.to_fen_char(color));
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_layout() {
        let position = Position::starting();
        assert_eq!(
            position.piece_at(Square(0, 4)),
            Some((Color::White, Piece::King))
        );
        assert_eq!(
            position.piece_at(Square(7, 3)),
            Some((Color::Black, Piece::Queen))
        );
        assert!(position.is_empty(Square(3, 4)));
        assert_eq!(position.pieces(Color::White).count(), 16);
        assert_eq!(position.castling_rights(), CastlingRights::all());
        assert_eq!(position.fullmove_number(), 1);
        assert_eq!(Position::default(), position);
    }

    #[test]
    fn test_set_piece_only_touches_owned_copy() {
        let original = Position::starting();
        let mut copy = original.clone();
        copy.set_piece(Square(1, 4), None);
        copy.set_piece(Square(3, 4), Some((Color::White, Piece::Pawn)));
        assert!(copy.is_empty(Square(1, 4)));
        assert_eq!(
            original.piece_at(Square(1, 4)),
            Some((Color::White, Piece::Pawn))
        );
        assert!(original.is_empty(Square(3, 4)));
    }

    #[test]
    fn test_find_king() {
        let position = Position::starting();
        assert_eq!(position.find_king(Color::Black), Some(Square(7, 4)));
        assert_eq!(Position::empty().find_king(Color::White), None);
    }

    #[test]
    fn test_display_diagram() {
        let text = Position::starting().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[8], "   a b c d e f g h");
    }
}
