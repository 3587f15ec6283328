use super::super::attacks::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::{Color, MoveList, Piece, Position, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    const fn piece(self) -> Piece {
        match self {
            SliderType::Bishop => Piece::Bishop,
            SliderType::Rook => Piece::Rook,
            SliderType::Queen => Piece::Queen,
        }
    }

    const fn directions(self) -> &'static [(isize, isize)] {
        match self {
            SliderType::Bishop => &BISHOP_DIRECTIONS,
            SliderType::Rook => &ROOK_DIRECTIONS,
            SliderType::Queen => &QUEEN_DIRECTIONS,
        }
    }
}

impl Position {
    /// Walk each ray until the edge or the first piece; an enemy piece is
    /// captured, a friendly one blocks.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
    ) -> MoveList {
        let mut moves = MoveList::new();
        for &(dr, df) in slider.directions() {
            let mut current = from.offset(dr, df);
            while let Some(to) = current {
                match self.piece_at(to) {
                    None => moves.push(self.create_move(from, to, slider.piece())),
                    Some((c, _)) => {
                        if c != color {
                            moves.push(self.create_move(from, to, slider.piece()));
                        }
                        break;
                    }
                }
                current = to.offset(dr, df);
            }
        }
        moves
    }
}
