use crate::game_repr::{MoveList, Position, Square};

impl<const L: usize> Position<L> {
    pub fn queen_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.bishop_moves_into(from, moves);
        self.rook_moves_into(from, moves);
    }
}
