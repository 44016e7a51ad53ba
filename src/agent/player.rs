//! Player trait and associated types for chess game agents.
//!
//! This module provides the core abstraction for entities that can provide chess moves.
//! Human and computer players implement the `Player` trait to take part in games run
//! by the [`Orchestrator`](crate::orchestrator::Orchestrator).
//!
//! # Design
//!
//! The trait covers behavior, not construction. A `HumanPlayer` needs an input
//! source while a `ComputerPlayer` needs a difficulty, so each implementation
//! provides its own constructor.
//!
//! `get_move()` is synchronous. A human player blocks on its input, a computer
//! player blocks for the length of its search, and the orchestrator simply waits.

use crate::board::Board;
use crate::game_repr::{Color, GameStatus, Move};

/// Result of a chess game.
///
/// Passed to players via `game_ended()` once the orchestrator stops the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// White won (Black was checkmated, resigned or lost its king)
    WhiteWins,
    /// Black won (White was checkmated, resigned or lost its king)
    BlackWins,
    /// Drawn by the 50-move rule
    Draw,
    /// Player to move has no legal moves but is not in check
    Stalemate,
    /// Stopped at the ply limit before reaching a result
    Adjourned,
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// Result for a finished game, `None` while it is still going
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Ongoing => None,
            GameStatus::Checkmate { winner } => Some(Self::from_winner(winner)),
            GameStatus::Stalemate => Some(GameResult::Stalemate),
            GameStatus::FiftyMoveRule => Some(GameResult::Draw),
            GameStatus::MissingKing(color) => Some(Self::from_winner(color.opposite())),
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw | GameResult::Stalemate => "1/2-1/2",
            GameResult::Adjourned => "*",
        };
        write!(f, "{}", text)
    }
}

/// Trait for entities that can provide chess moves.
///
/// Only `get_move()` must be implemented.
///
/// ## `get_move()`
/// - **Blocking**: may block until a move is available
/// - **Returns `None`**: the player resigns or its input is exhausted
/// - **Returns `Some(Move)`**: the chosen move. The orchestrator checks it
///   against the legal moves and asks again if it is not one of them
///
/// ## `opponent_moved()` / `game_ended()`
/// Notifications with empty default implementations.
pub trait Player<const L: usize = 1> {
    /// Request the next move for the side to move on `board`
    fn get_move(&mut self, board: &Board<L>) -> Option<Move>;

    /// Called after the opponent's move has been executed
    fn opponent_moved(&mut self, _mv: Move) {}

    /// Called once when the game stops
    fn game_ended(&mut self, _result: GameResult) {}

    /// Display name used in logs
    fn name(&self) -> &str {
        "Player"
    }
}
