use super::*;

impl<const L: usize> Position<L> {
    /// Plays a move generated from this position.
    ///
    /// Everything the move overwrites is already in `mv.prev`, so
    /// [`Position::unmake_move`] restores the position exactly.
    pub fn make_move(&mut self, mv: Move) {
        debug_assert!(self.piece_at(mv.from).is_some(), "no piece on {}", mv.from);
        let Some(piece) = self.piece_at(mv.from) else { return };
        let mover = piece.color;

        if piece.piece_type == Type::King {
            if let Some((rook_from, rook_to)) = castling_rook(mv) {
                let rook = self.piece_at(rook_from);
                self.set_piece(rook_from, None);
                self.set_piece(rook_to, rook);
            }
            self.castling.clear(mover);
        }

        if mv.is_en_passant() {
            self.set_piece(mv.en_passant_victim(), None);
        }

        let placed = match mv.promotion {
            Some(promotion) => Piece::new(mover, promotion),
            None => piece,
        };
        self.set_piece(mv.to, Some(placed));
        self.set_piece(mv.from, None);

        self.en_passant = None;
        if piece.piece_type == Type::Pawn
            && mv.from.layer == mv.to.layer
            && mv.from.rank.abs_diff(mv.to.rank) == 2
        {
            let mid = (mv.from.rank + mv.to.rank) / 2;
            self.en_passant = Some(Square::new(mv.from.layer, mid, mv.from.file));
        }

        if piece.piece_type == Type::Rook {
            self.castling.clear_corner(mv.from);
        }
        if let Capture::Piece(Piece { piece_type: Type::Rook, .. }) = mv.prev.captured {
            self.castling.clear_corner(mv.to);
        }

        if piece.piece_type == Type::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if mover == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = mover.opposite();
    }

    /// Takes back `mv`, which must be the last move made on this position
    pub fn unmake_move(&mut self, mv: Move) {
        let mover = self.side_to_move.opposite();
        debug_assert!(self.is_color(mv.to, mover), "no {} piece on {}", mover, mv.to);

        let origin_piece = match mv.promotion {
            Some(_) => Some(Piece::new(mover, Type::Pawn)),
            None => self.piece_at(mv.to),
        };
        self.set_piece(mv.from, origin_piece);

        match mv.prev.captured {
            Capture::None => self.set_piece(mv.to, None),
            Capture::Piece(captured) => self.set_piece(mv.to, Some(captured)),
            Capture::EnPassant(captured) => {
                self.set_piece(mv.to, None);
                self.set_piece(mv.en_passant_victim(), Some(captured));
            }
        }

        if origin_piece.is_some_and(|p| p.piece_type == Type::King) {
            if let Some((rook_from, rook_to)) = castling_rook(mv) {
                let rook = self.piece_at(rook_to);
                self.set_piece(rook_to, None);
                self.set_piece(rook_from, rook);
            }
        }

        self.castling = mv.prev.castling;
        self.en_passant = mv.prev.en_passant;
        self.halfmove_clock = mv.prev.halfmove_clock;
        if mover == Color::Black {
            self.fullmove_number -= 1;
        }
        self.side_to_move = mover;
    }
}

/// Rook origin and destination of a king move spanning two files
fn castling_rook(mv: Move) -> Option<(Square, Square)> {
    if mv.from.layer != mv.to.layer || mv.from.rank != mv.to.rank || mv.from.file.abs_diff(mv.to.file) != 2 {
        return None;
    }
    let sq = |file| Square::new(mv.from.layer, mv.from.rank, file);
    if mv.to.file > mv.from.file {
        Some((sq(7), sq(5)))
    } else {
        Some((sq(0), sq(3)))
    }
}
