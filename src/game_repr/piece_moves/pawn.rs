use crate::game_repr::{Capture, Move, MoveList, Position, Square, Type};

impl<const L: usize> Position<L> {
    /// Generate pawn moves into a provided buffer.
    ///
    /// In-layer moves follow the usual rules. On layered boards the pawn may
    /// also step or capture forward while changing layer by one; those moves
    /// never promote and are not generated onto the last rank.
    pub fn pawn_moves_into(&self, from: Square, moves: &mut MoveList) {
        let Some(pawn) = self.piece_at(from) else { return };
        let color = pawn.color;
        let dir = color.pawn_direction();

        // Forward steps
        if let Some(one) = from.offset((0, dir, 0), L) {
            if self.is_empty(one) {
                self.push_pawn_move(from, one, moves);

                if from.rank == color.pawn_start_rank() {
                    if let Some(two) = one.offset((0, dir, 0), L) {
                        if self.is_empty(two) {
                            self.push_move(from, two, None, moves);
                        }
                    }
                }
            }
        }

        // Captures, including en passant onto the stored target
        for df in [-1, 1] {
            let Some(to) = from.offset((0, dir, df), L) else { continue };
            match self.piece_at(to) {
                Some(target) if target.color != color => self.push_pawn_move(from, to, moves),
                Some(_) => {}
                None if self.en_passant == Some(to) => {
                    let victim_sq = Square::new(to.layer, from.rank, to.file);
                    if let Some(victim) = self.piece_at(victim_sq) {
                        if victim.color != color && victim.piece_type == Type::Pawn {
                            let prev = self.snapshot(Capture::EnPassant(victim));
                            moves.push(Move::new(from, to, None, prev));
                        }
                    }
                }
                None => {}
            }
        }

        if L == 1 {
            return;
        }

        for dl in [-1, 1] {
            if let Some(to) = from.offset((dl, dir, 0), L) {
                if to.rank != color.last_rank() && self.is_empty(to) {
                    self.push_move(from, to, None, moves);
                }
            }
            for df in [-1, 1] {
                if let Some(to) = from.offset((dl, dir, df), L) {
                    if to.rank != color.last_rank() && self.is_color(to, color.opposite()) {
                        self.push_move(from, to, None, moves);
                    }
                }
            }
        }
    }

    /// In-layer pawn move; reaching the last rank expands into the four promotions
    fn push_pawn_move(&self, from: Square, to: Square, moves: &mut MoveList) {
        let Some(pawn) = self.piece_at(from) else { return };
        if to.rank == pawn.color.last_rank() {
            for promotion in Type::PROMOTIONS {
                self.push_move(from, to, Some(promotion), moves);
            }
        } else {
            self.push_move(from, to, None, moves);
        }
    }
}
