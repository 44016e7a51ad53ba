//! Error types for the engine
//!
//! Covers rejected move input, malformed FEN or square text, and requests
//! that cannot be served because the game is already over.

use thiserror::Error;

use crate::game_repr::{GameStatus, Square};

/// Errors that can occur in the engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Move not present in the legal move set; the board is left untouched
    #[error("Illegal move: from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// FEN record that could not be parsed
    #[error("Invalid FEN: {0}")]
    InvalidFen(String),

    /// Square text that is not in coordinate notation
    #[error("Invalid square: {0:?}")]
    InvalidSquare(String),

    /// Move requested in a finished game
    #[error("Game is over: {0}")]
    GameOver(GameStatus),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
