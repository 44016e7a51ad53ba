use crate::game_repr::{MoveList, Position, Square};

use super::ORTHOGONALS;

impl<const L: usize> Position<L> {
    /// Generate rook moves into a provided buffer.
    /// There is no straight up or down: a layer change always comes with a
    /// step along a file or rank.
    pub fn rook_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.slider_moves_into(from, &ORTHOGONALS, moves);
    }
}
