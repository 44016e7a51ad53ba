use crate::game_repr::{MoveList, Position, Square};

use super::KNIGHT_JUMPS;

impl<const L: usize> Position<L> {
    /// Generate knight moves into a provided buffer.
    /// On layered boards every planar jump may also land one layer up or down.
    pub fn knight_moves_into(&self, from: Square, moves: &mut MoveList) {
        let Some(knight) = self.piece_at(from) else { return };

        for &dl in self.layer_deltas() {
            for &(dr, df) in &KNIGHT_JUMPS {
                let Some(to) = from.offset((dl, dr, df), L) else { continue };
                if !self.is_color(to, knight.color) {
                    self.push_move(from, to, None, moves);
                }
            }
        }
    }
}
