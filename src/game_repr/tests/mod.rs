use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Square from coordinate text, e.g. "e4" or "2e4"
pub fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

/// Helper function to create an empty standard board
pub fn empty_board() -> Position {
    Position::empty()
}

/// Helper function to place a piece
pub fn place_piece<const L: usize>(pos: &mut Position<L>, square: &str, color: Color, piece_type: Type) {
    pos.set_piece(sq(square), Some(Piece::new(color, piece_type)));
}

/// Places both kings somewhere out of the way
pub fn place_kings<const L: usize>(pos: &mut Position<L>, white: &str, black: &str) {
    place_piece(pos, white, Color::White, Type::King);
    place_piece(pos, black, Color::Black, Type::King);
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves.iter().any(|m| m.from == sq(from) && m.to == sq(to))
}

pub fn find_move(moves: &[Move], from: &str, to: &str, promotion: Option<Type>) -> Move {
    *moves
        .iter()
        .find(|m| m.matches(sq(from), sq(to), promotion))
        .unwrap_or_else(|| panic!("no move {}{} in list", from, to))
}

pub fn fen(text: &str) -> Position {
    Position::from_fen(text).unwrap()
}

/// Plays a legal move given by coordinates, panicking if it is not legal
pub fn play<const L: usize>(pos: &mut Position<L>, from: &str, to: &str) -> Move {
    let mv = find_move(&pos.all_legal_moves(), from, to, None);
    pos.make_move(mv);
    mv
}

// ==================== TEST MODULES ====================

mod promotion;
mod fen_parsing;
mod perft;
