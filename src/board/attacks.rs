//! Attack detection.
//!
//! Uses the same movement geometry as the move generator, except that the
//! king only ever attacks its eight neighbours. Castling never attacks
//! anything, so nothing in here may reach castling logic: castling legality
//! is itself decided with these attack queries.

use super::{Color, Piece, Position, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = KING_OFFSETS;

impl Position {
    /// Returns true if any piece of `by` could capture on `square`.
    ///
    /// The occupant of `square` is ignored, so this also answers "would a
    /// king standing here be in check".
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        // Pawns capture forward, so an attacking pawn sits one rank behind.
        let back = -by.pawn_direction();
        if [-1, 1]
            .iter()
            .any(|&df| self.holds(square.offset(back, df), by, Piece::Pawn))
        {
            return true;
        }

        if KNIGHT_OFFSETS
            .iter()
            .any(|&(dr, df)| self.holds(square.offset(dr, df), by, Piece::Knight))
        {
            return true;
        }

        if KING_OFFSETS
            .iter()
            .any(|&(dr, df)| self.holds(square.offset(dr, df), by, Piece::King))
        {
            return true;
        }

        let ray_hits = |directions: &[(isize, isize)], slider: Piece| {
            directions.iter().any(|&dir| {
                matches!(
                    self.first_piece_along(square, dir),
                    Some((_, (color, piece))) if color == by && (piece == slider || piece == Piece::Queen)
                )
            })
        };

        ray_hits(&ROOK_DIRECTIONS, Piece::Rook) || ray_hits(&BISHOP_DIRECTIONS, Piece::Bishop)
    }

    /// Every square from which a piece of `by` attacks `square`, a1 first.
    #[must_use]
    pub fn attackers_of(&self, square: Square, by: Color) -> Vec<Square> {
        self.pieces(by)
            .filter(|&(from, piece)| self.attacks_from(from, by, piece, square))
            .map(|(from, _)| from)
            .collect()
    }

    /// Whether `piece` of `color` on `from` attacks `target` (capture geometry only).
    pub(crate) fn attacks_from(&self, from: Square, color: Color, piece: Piece, target: Square) -> bool {
        let dr = target.rank() as isize - from.rank() as isize;
        let df = target.file() as isize - from.file() as isize;
        match piece {
            Piece::Pawn => dr == color.pawn_direction() && df.abs() == 1,
            Piece::Knight => KNIGHT_OFFSETS.contains(&(dr, df)),
            Piece::King => KING_OFFSETS.contains(&(dr, df)),
            Piece::Bishop => dr.abs() == df.abs() && dr != 0 && self.ray_clear(from, target),
            Piece::Rook => (dr == 0) != (df == 0) && self.ray_clear(from, target),
            Piece::Queen => {
                ((dr == 0) != (df == 0) || (dr.abs() == df.abs() && dr != 0))
                    && self.ray_clear(from, target)
            }
        }
    }

    /// Squares strictly between `from` and `to` (on a shared line) are all empty.
    fn ray_clear(&self, from: Square, to: Square) -> bool {
        let step = |a: usize, b: usize| (b as isize - a as isize).signum();
        let dir = (step(from.rank(), to.rank()), step(from.file(), to.file()));
        let mut current = from.offset(dir.0, dir.1);
        while let Some(sq) = current {
            if sq == to {
                return true;
            }
            if !self.is_empty(sq) {
                return false;
            }
            current = sq.offset(dir.0, dir.1);
        }
        false
    }

    /// The first occupied square walking from `from` (exclusive) along `dir`.
    pub(crate) fn first_piece_along(
        &self,
        from: Square,
        (dr, df): (isize, isize),
    ) -> Option<(Square, (Color, Piece))> {
        let mut current = from.offset(dr, df);
        while let Some(sq) = current {
            if let Some(content) = self.piece_at(sq) {
                return Some((sq, content));
            }
            current = sq.offset(dr, df);
        }
        None
    }

    #[inline]
    fn holds(&self, square: Option<Square>, color: Color, piece: Piece) -> bool {
        square.is_some_and(|sq| self.piece_at(sq) == Some((color, piece)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(fen: &str) -> Position {
        Position::from_fen(fen).unwrap()
    }

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_pawn_attacks_forward_diagonals_only() {
        let p = position("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");
        assert!(p.is_square_attacked(sq("d5"), Color::White));
        assert!(p.is_square_attacked(sq("f5"), Color::White));
        assert!(!p.is_square_attacked(sq("e5"), Color::White));
        assert!(!p.is_square_attacked(sq("d3"), Color::White));

        let p = position("4k3/8/8/4p3/8/8/8/4K3 b - - 0 1");
        assert!(p.is_square_attacked(sq("d4"), Color::Black));
        assert!(!p.is_square_attacked(sq("d6"), Color::Black));
    }

    #[test]
    fn test_slider_blocked() {
        let p = position("4k3/8/8/8/8/8/R3P3/4K3 w - - 0 1");
        assert!(p.is_square_attacked(sq("d2"), Color::White));
        assert!(p.is_square_attacked(sq("a8"), Color::White));
        // e2 pawn blocks the rook's path along the second rank.
        assert!(!p.is_square_attacked(sq("g2"), Color::White));
    }

    #[test]
    fn test_queen_diagonal_and_straight() {
        let p = position("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1");
        assert!(p.is_square_attacked(sq("h8"), Color::White));
        assert!(p.is_square_attacked(sq("d8"), Color::White));
        assert!(!p.is_square_attacked(sq("e6"), Color::White));
    }

    #[test]
    fn test_knight_and_king() {
        let p = position("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1");
        assert!(p.is_square_attacked(sq("e6"), Color::White));
        assert!(p.is_square_attacked(sq("f2"), Color::White)); // king adjacency
        assert!(!p.is_square_attacked(sq("d5"), Color::White));
    }

    #[test]
    fn test_king_never_attacks_castling_squares() {
        let p = position("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        // Only the rooks reach the castling targets, never the king.
        assert_eq!(p.attackers_of(sq("g1"), Color::White), vec![sq("h1")]);
        assert_eq!(p.attackers_of(sq("c1"), Color::White), vec![sq("a1")]);
    }

    #[test]
    fn test_attackers_of_agrees_with_is_square_attacked() {
        let p = position("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        for target in Square::all() {
            for color in Color::BOTH {
                assert_eq!(
                    p.is_square_attacked(target, color),
                    !p.attackers_of(target, color).is_empty(),
                    "{target} by {color}"
                );
            }
        }
    }
}
