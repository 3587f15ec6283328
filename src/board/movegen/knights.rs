use super::super::attacks::KNIGHT_OFFSETS;
use super::super::{Color, MoveList, Piece, Position, Square};

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color) -> MoveList {
        self.generate_step_moves(from, color, Piece::Knight, &KNIGHT_OFFSETS)
    }

    /// One-step moves to each offset that is on the board and not held by `color`.
    pub(crate) fn generate_step_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        offsets: &[(isize, isize)],
    ) -> MoveList {
        offsets
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .filter(|&to| !matches!(self.piece_at(to), Some((c, _)) if c == color))
            .map(|to| self.create_move(from, to, piece))
            .collect()
    }
}
