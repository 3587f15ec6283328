//! Producing successor positions.

use super::error::MoveError;
use super::{CastlingSide, Color, Move, Piece, Position, Square};

impl Position {
    /// The position after `mv`, leaving `self` untouched.
    ///
    /// Legality is not checked here; callers establish it first with
    /// [`Position::is_valid_move`] or by taking the move from
    /// [`Position::legal_moves`].
    ///
    /// # Example
    /// ```
    /// use chess_core::Position;
    ///
    /// let start = Position::starting();
    /// let mv = start.parse_move("e2e4").unwrap();
    /// let next = start.apply_move(&mv).unwrap();
    /// assert_eq!(
    ///     next.to_fen(),
    ///     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    /// );
    /// ```
    pub fn apply_move(&self, mv: &Move) -> Result<Position, MoveError> {
        let mut next = self.clone();
        next.make_move(mv)?;
        Ok(next)
    }

    /// Play `mv` on this position in place.
    ///
    /// Castling and en passant are recognised from the moving piece's
    /// geometry, so a hand-built move applies the same way as a generated one.
    /// On error the position is left unchanged.
    pub fn make_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        let (color, moving) = self
            .piece_at(mv.from)
            .ok_or(MoveError::NoPieceAtSource { square: mv.from })?;
        let castling = self.castling_side(mv);
        let en_passant = self.is_en_passant_capture(mv);
        let captured = self.piece_at(mv.to);

        let placed = match (moving, mv.promotion) {
            (Piece::Pawn, Some(promo)) => promo,
            _ => moving,
        };
        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some((color, placed)));

        if let Some(side) = castling {
            let rank = color.back_rank();
            let rook_from = Square(rank, side.rook_home_file());
            let rook_to = Square(rank, side.rook_target_file());
            let rook = self.piece_at(rook_from);
            self.set_piece(rook_from, None);
            self.set_piece(rook_to, rook);
        }

        if en_passant {
            // The captured pawn sits beside the mover, on the destination file.
            self.set_piece(Square(mv.from.rank(), mv.to.file()), None);
        }

        let double_push = moving == Piece::Pawn && mv.from.rank().abs_diff(mv.to.rank()) == 2;
        self.en_passant_target = if double_push {
            Some(Square((mv.from.rank() + mv.to.rank()) / 2, mv.from.file()))
        } else {
            None
        };

        self.update_castling_rights(color, moving, mv.from, captured, mv.to);

        if moving == Piece::Pawn || captured.is_some() || en_passant {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = color.opponent();

        trace!("applied {mv} by {color}");
        Ok(())
    }

    fn update_castling_rights(
        &mut self,
        color: Color,
        moving: Piece,
        from: Square,
        captured: Option<(Color, Piece)>,
        to: Square,
    ) {
        if moving == Piece::King {
            self.castling_rights.remove_color(color);
        }
        for side in CastlingSide::BOTH {
            if moving == Piece::Rook && from == Square(color.back_rank(), side.rook_home_file()) {
                self.castling_rights.remove(color, side);
            }
            if let Some((victim, Piece::Rook)) = captured {
                if to == Square(victim.back_rank(), side.rook_home_file()) {
                    self.castling_rights.remove(victim, side);
                }
            }
        }
    }

    /// The castling side of a king move from its home square two files sideways.
    pub(crate) fn castling_side(&self, mv: &Move) -> Option<CastlingSide> {
        let (color, piece) = self.piece_at(mv.from)?;
        let home = Square(color.back_rank(), 4);
        if piece != Piece::King || mv.from != home || mv.to.rank() != home.rank() {
            return None;
        }
        CastlingSide::BOTH
            .into_iter()
            .find(|side| mv.to.file() == side.king_target_file())
    }

    /// A pawn moving diagonally onto the en passant target, with an enemy
    /// pawn beside it on the destination file.
    pub(crate) fn is_en_passant_capture(&self, mv: &Move) -> bool {
        let Some((color, Piece::Pawn)) = self.piece_at(mv.from) else {
            return false;
        };
        mv.from.file() != mv.to.file()
            && self.is_empty(mv.to)
            && self.en_passant_target == Some(mv.to)
            && self.piece_at(Square(mv.from.rank(), mv.to.file()))
                == Some((color.opponent(), Piece::Pawn))
    }
}
