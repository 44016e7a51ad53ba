use crate::game_repr::{Color, MoveList, Piece, Position, Square, Type};

impl<const L: usize> Position<L> {
    /// Generate king moves, castling included, into a provided buffer.
    /// On layered boards the king also reaches the planar neighbours one
    /// layer up or down, but never the square straight above or below.
    pub fn king_moves_into(&self, from: Square, moves: &mut MoveList) {
        let Some(king) = self.piece_at(from) else { return };

        for &dl in self.layer_deltas() {
            for dr in -1..=1 {
                for df in -1..=1 {
                    if (dr, df) == (0, 0) {
                        continue;
                    }
                    let Some(to) = from.offset((dl, dr, df), L) else { continue };
                    if !self.is_color(to, king.color) {
                        self.push_move(from, to, None, moves);
                    }
                }
            }
        }

        self.castling_moves_into(from, king.color, moves);
    }

    /// Castling happens on layer 0 only. The king may not start on, cross
    /// or land on an attacked square; the b-file square only has to be empty.
    fn castling_moves_into(&self, from: Square, color: Color, moves: &mut MoveList) {
        let home = color.home_rank();
        if from != Square::flat(home, 4) {
            return;
        }

        let kingside = self.castling.kingside(color);
        let queenside = self.castling.queenside(color);
        if !kingside && !queenside {
            return;
        }

        let opponent = color.opposite();
        if self.is_square_attacked(from, opponent) {
            return;
        }

        let rook = Some(Piece::new(color, Type::Rook));
        let sq = |file: u8| Square::flat(home, file);

        // Try kingside castling
        if kingside
            && self.piece_at(sq(7)) == rook
            && self.is_empty(sq(5))
            && self.is_empty(sq(6))
            && !self.is_square_attacked(sq(5), opponent)
            && !self.is_square_attacked(sq(6), opponent)
        {
            self.push_move(from, sq(6), None, moves);
        }

        // Try queenside castling
        if queenside
            && self.piece_at(sq(0)) == rook
            && self.is_empty(sq(1))
            && self.is_empty(sq(2))
            && self.is_empty(sq(3))
            && !self.is_square_attacked(sq(3), opponent)
            && !self.is_square_attacked(sq(2), opponent)
        {
            self.push_move(from, sq(2), None, moves);
        }
    }
}
