mod attacks;
mod fen;
mod make_unmake;
mod moves;
mod perft;
mod piece;
mod position;
mod square;
pub mod piece_moves;

#[cfg(test)]
mod tests;

pub use fen::START_FEN;
pub use moves::*;
pub use piece::*;
pub use position::*;
pub use square::{Dir, Square};
