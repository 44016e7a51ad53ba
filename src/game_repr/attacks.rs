use super::piece_moves::{DIAGONALS, KNIGHT_JUMPS, ORTHOGONALS};
use super::square::Dir;
use super::*;

impl<const L: usize> Position<L> {
    /// Checks if a square is under attack by any piece of the given color
    pub fn is_square_attacked(&self, target: Square, by_color: Color) -> bool {
        let holds = |sq: Square, piece_type: Type| self.piece_at(sq) == Some(Piece::new(by_color, piece_type));

        // Pawns capture forward, so an attacker stands one rank behind the target
        let behind = -by_color.pawn_direction();
        for &dl in self.layer_deltas() {
            // Layer-changing pawn captures never reach the last rank
            if dl != 0 && target.rank == by_color.last_rank() {
                continue;
            }
            for df in [-1, 1] {
                if let Some(sq) = target.offset((dl, behind, df), L) {
                    if holds(sq, Type::Pawn) {
                        return true;
                    }
                }
            }
        }

        for &dl in self.layer_deltas() {
            for &(dr, df) in &KNIGHT_JUMPS {
                if let Some(sq) = target.offset((dl, dr, df), L) {
                    if holds(sq, Type::Knight) {
                        return true;
                    }
                }
            }
        }

        for &dl in self.layer_deltas() {
            for dr in -1..=1 {
                for df in -1..=1 {
                    if (dr, df) == (0, 0) {
                        continue;
                    }
                    if let Some(sq) = target.offset((dl, dr, df), L) {
                        if holds(sq, Type::King) {
                            return true;
                        }
                    }
                }
            }
        }

        DIAGONALS.iter().any(|&dir| self.slider_attacks_along(target, dir, Type::Bishop, by_color))
            || ORTHOGONALS.iter().any(|&dir| self.slider_attacks_along(target, dir, Type::Rook, by_color))
    }

    /// Walks the planar ray from `target` on its own layer. A slider changes
    /// layer on its first step only, so an attacker on an adjacent layer
    /// sits next to the walked squares, one step further along.
    fn slider_attacks_along(&self, target: Square, dir: Dir, piece_type: Type, by_color: Color) -> bool {
        let attacks = |piece: Option<Piece>| {
            matches!(piece, Some(p) if p.color == by_color && (p.piece_type == piece_type || p.piece_type == Type::Queen))
        };
        let (_, dr, df) = dir;

        let mut current = target;
        loop {
            for &dl in self.layer_deltas().iter().filter(|dl| **dl != 0) {
                if let Some(sq) = current.offset((dl, dr, df), L) {
                    if attacks(self.piece_at(sq)) {
                        return true;
                    }
                }
            }
            match current.offset((0, dr, df), L) {
                None => return false,
                Some(next) => match self.piece_at(next) {
                    None => current = next,
                    occupant => return attacks(occupant),
                },
            }
        }
    }

    /// Checks if the king of the given color is currently in check.
    /// A missing king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king) => self.is_square_attacked(king, color.opposite()),
            None => false,
        }
    }

    /// Plays the move, looks for check against the mover, takes it back
    pub fn is_move_legal(&mut self, mv: Move) -> bool {
        let mover = self.side_to_move;
        self.make_move(mv);
        let legal = !self.is_in_check(mover);
        self.unmake_move(mv);
        legal
    }

    /// Generate all legal moves for the side to move into a provided buffer.
    /// The buffer is cleared before adding moves.
    pub fn all_legal_moves_into(&mut self, moves: &mut MoveList) {
        self.pseudo_legal_moves_into(moves);
        moves.retain(|mv| self.is_move_legal(*mv));
    }

    pub fn all_legal_moves(&mut self) -> MoveList {
        let mut moves = MoveList::new();
        self.all_legal_moves_into(&mut moves);
        moves
    }

    /// Legal moves of the piece on `square`. Empty unless the square is on
    /// the board and holds a piece of the side to move.
    pub fn legal_moves_from(&mut self, square: Square) -> MoveList {
        let mut moves = MoveList::new();
        if !self.contains(square) || !self.is_color(square, self.side_to_move) {
            return moves;
        }
        self.piece_moves_into(square, &mut moves);
        moves.retain(|mv| self.is_move_legal(*mv));
        moves
    }

    /// Checks if the side to move has ANY legal move available
    pub fn has_legal_moves(&mut self) -> bool {
        let mut moves = MoveList::new();
        self.pseudo_legal_moves_into(&mut moves);
        moves.into_iter().any(|mv| self.is_move_legal(mv))
    }
}
