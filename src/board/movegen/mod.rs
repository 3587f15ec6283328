//! Pseudo-legal move generation.
//!
//! Moves here follow each piece's movement geometry but may leave the
//! mover's own king in check; see `legality` for the filter.

mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Move, MoveList, Piece, Position, Square};

impl Position {
    /// Pseudo-legal moves for every piece of the side to move, a1 first.
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for (from, _) in self.pieces(self.side_to_move) {
            moves.extend(self.pseudo_legal_moves_from(from));
        }
        moves
    }

    /// Pseudo-legal moves for whatever piece stands on `from`, of either color.
    #[must_use]
    pub fn pseudo_legal_moves_from(&self, from: Square) -> MoveList {
        let Some((color, piece)) = self.piece_at(from) else {
            return MoveList::new();
        };
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color),
            Piece::Knight => self.generate_knight_moves(from, color),
            Piece::Bishop => self.generate_slider_moves(from, color, SliderType::Bishop),
            Piece::Rook => self.generate_slider_moves(from, color, SliderType::Rook),
            Piece::Queen => self.generate_slider_moves(from, color, SliderType::Queen),
            Piece::King => self.generate_king_moves(from, color),
        }
    }

    /// A move to `to` recording whatever piece it captures there.
    fn create_move(&self, from: Square, to: Square, piece: Piece) -> Move {
        Move {
            captured: self.piece_at(to).map(|(_, p)| p),
            ..Move::quiet(from, to, piece)
        }
    }
}
