//! Chess rules engine and alpha-beta player for standard chess and a
//! three-layer stacked variant.
//!
//! - [`game_repr`]: positions, move generation, make/unmake, FEN, perft
//! - [`agent`]: the `Player` trait, human input and the computer opponent
//! - [`board`]: the [`Board`](board::Board) facade a driver talks to
//! - [`orchestrator`]: a turn loop between two players

pub mod agent;
pub mod board;
pub mod config;
pub mod error;
pub mod game_repr;
pub mod orchestrator;
