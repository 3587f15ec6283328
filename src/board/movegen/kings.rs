use super::super::attacks::KING_OFFSETS;
use super::super::{CastlingSide, Color, Move, MoveList, Piece, Position, Square};

impl Position {
    /// Adjacent squares plus two-square castling candidates.
    ///
    /// Castling candidates are only geometric: a king on its home square with
    /// the matching right set. Everything else is left to the legality check.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = self.generate_step_moves(from, color, Piece::King, &KING_OFFSETS);

        let home = Square(color.back_rank(), 4);
        if from == home {
            for side in CastlingSide::BOTH {
                if self.castling_rights.has(color, side) {
                    let to = Square(home.rank(), side.king_target_file());
                    moves.push(Move {
                        castling: Some(side),
                        ..Move::quiet(from, to, Piece::King)
                    });
                }
            }
        }

        moves
    }
}
