// Position evaluation function
// Returns score in centipawns, positive = good for White regardless of the side to move

use crate::game_repr::{Color, Position, Type};
use super::piece_square_tables::get_pst_value;

// Material values in centipawns
pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 330;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 20000;

/// Get material value for a piece type
pub fn piece_value(piece_type: Type) -> i32 {
    match piece_type {
        Type::Pawn => PAWN_VALUE,
        Type::Knight => KNIGHT_VALUE,
        Type::Bishop => BISHOP_VALUE,
        Type::Rook => ROOK_VALUE,
        Type::Queen => QUEEN_VALUE,
        Type::King => KING_VALUE,
    }
}

/// Material plus piece-square score of every piece, White minus Black
pub fn evaluate<const L: usize>(pos: &Position<L>) -> i32 {
    pos.pieces()
        .map(|(square, piece)| {
            let value = piece_value(piece.piece_type) + get_pst_value(piece.piece_type, square, piece.color);
            match piece.color {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::{Piece, Position3D, Square};

    #[test]
    fn test_starting_position_is_balanced() {
        assert_eq!(evaluate(&Position::<1>::new()), 0);
        assert_eq!(evaluate(&Position3D::new()), 0);
    }

    #[test]
    fn test_extra_queen_favors_owner() {
        let mut pos = Position::<1>::new();
        pos.set_piece(Square::flat(3, 3), Some(Piece::new(Color::White, Type::Queen)));
        assert!(evaluate(&pos) > 800);

        let mut pos = Position::<1>::new();
        pos.set_piece(Square::flat(4, 3), Some(Piece::new(Color::Black, Type::Queen)));
        assert!(evaluate(&pos) < -800);
    }

    #[test]
    fn test_score_ignores_side_to_move() {
        let mut pos = Position::<1>::new();
        pos.set_piece(Square::flat(1, 4), None);
        let white_to_move = evaluate(&pos);
        pos.side_to_move = Color::Black;
        assert_eq!(evaluate(&pos), white_to_move);
    }

    #[test]
    fn test_lone_kings_cancel_out() {
        let mut pos = Position::<1>::empty();
        pos.set_piece(Square::flat(0, 4), Some(Piece::new(Color::White, Type::King)));
        pos.set_piece(Square::flat(7, 4), Some(Piece::new(Color::Black, Type::King)));
        assert_eq!(evaluate(&pos), 0);
    }
}
