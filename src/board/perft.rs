//! Leaf counting over the legal move tree.

use super::{Move, Position};

impl Position {
    /// Number of leaf nodes `depth` plies below this position.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .filter_map(|m| self.apply_move(m).ok())
            .map(|next| next.perft(depth - 1))
            .sum()
    }

    /// Perft split by root move, for tracking down generator bugs.
    #[must_use]
    pub fn perft_divide(&self, depth: u32) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        self.legal_moves()
            .into_iter()
            .filter_map(|m| self.apply_move(&m).ok().map(|next| (m, next.perft(depth - 1))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft_start_shallow() {
        let start = Position::starting();
        assert_eq!(start.perft(0), 1);
        assert_eq!(start.perft(1), 20);
        assert_eq!(start.perft(2), 400);
    }

    #[test]
    fn test_divide_sums_to_perft() {
        let start = Position::starting();
        let divide = start.perft_divide(2);
        assert_eq!(divide.len(), 20);
        assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 400);
        assert!(divide.iter().all(|&(_, n)| n == 20));
    }
}
