//! Shuffled starting arrangements (Chess960).
//!
//! Arrangements are numbered 0..960 with the standard scheme: the index
//! picks the light-squared bishop, the dark-squared bishop, the queen and
//! the knights in turn, and the rooks and king fill the remaining three
//! squares in rook-king-rook order. Index 518 is the classical setup.

use rand::Rng;

use super::error::Chess960Error;
use super::{Piece, Position};

/// Number of distinct arrangements.
pub const COUNT: usize = 960;

/// Index of the classical arrangement.
pub const CLASSICAL_INDEX: usize = 518;

/// Knight placements among the five squares left after bishops and queen.
const KNIGHT_PAIRS: [(usize, usize); 10] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (0, 4),
    (1, 2),
    (1, 3),
    (1, 4),
    (2, 3),
    (2, 4),
    (3, 4),
];

/// The starting position numbered `index`.
///
/// White's back rank follows the numbering, Black mirrors it, pawns fill
/// both second ranks and the castling field is "KQkq".
pub fn position(index: usize) -> Result<Position, Chess960Error> {
    if index >= COUNT {
        return Err(Chess960Error::IndexOutOfRange { index });
    }
    Ok(Position::with_back_rank(back_rank(index)))
}

/// A uniformly chosen starting position.
pub fn random_position<R: Rng + ?Sized>(rng: &mut R) -> Position {
    Position::with_back_rank(back_rank(rng.gen_range(0..COUNT)))
}

/// White's back rank, a-file first, for an index already known to be in range.
fn back_rank(index: usize) -> [Piece; 8] {
    let mut rank: [Option<Piece>; 8] = [None; 8];
    let mut n = index;

    // Light squares on the first rank are b, d, f, h; dark are a, c, e, g.
    rank[(n % 4) * 2 + 1] = Some(Piece::Bishop);
    n /= 4;
    rank[(n % 4) * 2] = Some(Piece::Bishop);
    n /= 4;

    place_in_nth_empty(&mut rank, n % 6, Piece::Queen);
    n /= 6;

    let (first, second) = KNIGHT_PAIRS[n % KNIGHT_PAIRS.len()];
    // Place the later knight first so the earlier empty index stays valid.
    place_in_nth_empty(&mut rank, second, Piece::Knight);
    place_in_nth_empty(&mut rank, first, Piece::Knight);

    for piece in [Piece::Rook, Piece::King, Piece::Rook] {
        place_in_nth_empty(&mut rank, 0, piece);
    }

    rank.map(|square| square.unwrap_or(Piece::Pawn))
}

fn place_in_nth_empty(rank: &mut [Option<Piece>; 8], n: usize, piece: Piece) {
    if let Some(slot) = rank.iter_mut().filter(|s| s.is_none()).nth(n) {
        *slot = Some(piece);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Square};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn white_rank(index: usize) -> String {
        back_rank(index)
            .iter()
            .map(|p| p.to_fen_char(Color::White))
            .collect()
    }

    #[test]
    fn test_classical_index() {
        assert_eq!(position(CLASSICAL_INDEX).unwrap(), Position::starting());
    }

    #[test]
    fn test_known_arrangements() {
        assert_eq!(white_rank(0), "BBQNNRKR");
        assert_eq!(white_rank(959), "RKRNNQBB");
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            position(960),
            Err(Chess960Error::IndexOutOfRange { index: 960 })
        );
    }

    #[test]
    fn test_every_arrangement_is_valid_and_distinct() {
        let mut seen = std::collections::HashSet::new();
        for index in 0..COUNT {
            let rank = back_rank(index);
            assert!(seen.insert(rank), "duplicate arrangement at {index}");

            let files_of = |piece: Piece| {
                rank.iter()
                    .enumerate()
                    .filter(move |&(_, &p)| p == piece)
                    .map(|(file, _)| file)
            };
            let bishops: Vec<usize> = files_of(Piece::Bishop).collect();
            assert_eq!(bishops.len(), 2);
            assert_ne!(bishops[0] % 2, bishops[1] % 2, "bishops share a color");

            let rooks: Vec<usize> = files_of(Piece::Rook).collect();
            let king: Vec<usize> = files_of(Piece::King).collect();
            assert_eq!(rooks.len(), 2);
            assert_eq!(king.len(), 1);
            assert!(rooks[0] < king[0] && king[0] < rooks[1]);
            assert_eq!(files_of(Piece::Knight).count(), 2);
            assert_eq!(files_of(Piece::Queen).count(), 1);
        }
    }

    #[test]
    fn test_black_mirrors_white() {
        let p = position(0).unwrap();
        for file in 0..8 {
            let white = p.piece_at(Square(0, file)).map(|(_, piece)| piece);
            let black = p.piece_at(Square(7, file)).map(|(_, piece)| piece);
            assert_eq!(white, black);
        }
        assert!(p.to_fen().ends_with(" w KQkq - 0 1"));
    }

    #[test]
    fn test_random_position_is_reproducible() {
        let a = random_position(&mut StdRng::seed_from_u64(7));
        let b = random_position(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(!a.legal_moves().is_empty());
    }
}
