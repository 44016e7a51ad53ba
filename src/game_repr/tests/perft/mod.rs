use super::*;

/// Serial perft on a fresh copy of the position
pub fn perft_of(fen_str: &str, depth: u32) -> u64 {
    fen(fen_str).perft(depth)
}

mod starting_position;
mod kiwipete;
mod endgame;
mod middle_game;
mod complex_promotions;
mod symmetrical;
mod layered;
