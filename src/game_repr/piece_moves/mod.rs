pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use super::{Capture, Move, MoveList, Position, Square, Type};
use super::square::Dir;

pub(crate) const DIAGONALS: [Dir; 4] = [(0, 1, 1), (0, 1, -1), (0, -1, 1), (0, -1, -1)];

pub(crate) const ORTHOGONALS: [Dir; 4] = [(0, 1, 0), (0, -1, 0), (0, 0, 1), (0, 0, -1)];

pub(crate) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1), (2, -1), (-2, 1), (-2, -1),
    (1, 2), (1, -2), (-1, 2), (-1, -2),
];

/// Squares of a slider ray: the first step moves `shift` layers along with
/// the planar `dir`, every later step is planar
pub(crate) fn ray(from: Square, shift: i8, (_, dr, df): Dir, layers: usize) -> impl Iterator<Item = Square> {
    let first = from.offset((shift, dr, df), layers);
    std::iter::successors(first, move |sq| sq.offset((0, dr, df), layers))
}

impl<const L: usize> Position<L> {
    /// Layer deltas a knight, king, pawn or slider step can span
    pub(crate) fn layer_deltas(&self) -> &'static [i8] {
        if L > 1 { &[0, -1, 1] } else { &[0] }
    }

    /// Pushes a move from `from` to `to`, recording whatever stands on `to`
    pub(crate) fn push_move(&self, from: Square, to: Square, promotion: Option<Type>, moves: &mut MoveList) {
        let captured = match self.piece_at(to) {
            Some(p) => Capture::Piece(p),
            None => Capture::None,
        };
        moves.push(Move::new(from, to, promotion, self.snapshot(captured)));
    }

    /// Walks each planar ray, and on layered boards its copies that change
    /// layer once on the first step and then stay on the new layer. A ray
    /// stops at the first occupied square, which is included only when it
    /// holds an opponent piece.
    pub(crate) fn slider_moves_into(&self, from: Square, planar: &[Dir], moves: &mut MoveList) {
        let Some(piece) = self.piece_at(from) else { return };
        for &dir in planar {
            for &shift in self.layer_deltas() {
                for to in ray(from, shift, dir, L) {
                    match self.piece_at(to) {
                        None => self.push_move(from, to, None, moves),
                        Some(target) => {
                            if target.color != piece.color {
                                self.push_move(from, to, None, moves);
                            }
                            break;
                        }
                    }
                }
            }
        }
    }

    /// Pseudo-legal moves of the piece on `square`
    pub fn piece_moves_into(&self, square: Square, moves: &mut MoveList) {
        let Some(piece) = self.piece_at(square) else { return };
        match piece.piece_type {
            Type::Pawn   => self.pawn_moves_into(square, moves),
            Type::Knight => self.knight_moves_into(square, moves),
            Type::Bishop => self.bishop_moves_into(square, moves),
            Type::Rook   => self.rook_moves_into(square, moves),
            Type::Queen  => self.queen_moves_into(square, moves),
            Type::King   => self.king_moves_into(square, moves),
        }
    }

    /// Pseudo-legal moves for the side to move, in board order.
    /// The buffer is cleared first.
    pub fn pseudo_legal_moves_into(&self, moves: &mut MoveList) {
        moves.clear();
        let side = self.side_to_move;
        for layer in 0..L {
            for idx in 0..64 {
                if self.squares[layer][idx].is_some_and(|p| p.color == side) {
                    let square = Square::new(layer as u8, (idx / 8) as u8, (idx % 8) as u8);
                    self.piece_moves_into(square, moves);
                }
            }
        }
    }
}
