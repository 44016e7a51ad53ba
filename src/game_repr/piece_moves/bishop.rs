use crate::game_repr::{MoveList, Position, Square};

use super::DIAGONALS;

impl<const L: usize> Position<L> {
    /// Generate bishop moves into a provided buffer
    pub fn bishop_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.slider_moves_into(from, &DIAGONALS, moves);
    }
}
