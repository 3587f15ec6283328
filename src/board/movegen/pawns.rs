use super::super::{Color, Move, MoveList, Piece, Position, Square, PROMOTION_PIECES};

impl Position {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                self.push_pawn_move(&mut moves, from, forward, color);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = forward.offset(dir, 0) {
                        if self.is_empty(double) {
                            moves.push(Move::quiet(from, double, Piece::Pawn));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(target) {
                Some((target_color, _)) if target_color != color => {
                    self.push_pawn_move(&mut moves, from, target, color);
                }
                None => {
                    let mv = Move::quiet(from, target, Piece::Pawn);
                    if self.is_en_passant_capture(&mv) {
                        moves.push(Move {
                            captured: Some(Piece::Pawn),
                            en_passant: true,
                            ..mv
                        });
                    }
                }
                _ => {}
            }
        }

        moves
    }

    /// Push a single-step or capturing pawn move, expanded into the four
    /// promotions when it reaches the last rank.
    fn push_pawn_move(&self, moves: &mut MoveList, from: Square, to: Square, color: Color) {
        let base = self.create_move(from, to, Piece::Pawn);
        if to.rank() == color.pawn_promotion_rank() {
            for promo in PROMOTION_PIECES {
                moves.push(Move {
                    promotion: Some(promo),
                    ..base
                });
            }
        } else {
            moves.push(base);
        }
    }
}
