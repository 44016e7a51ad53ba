//! ComputerPlayer - chess AI using minimax with alpha-beta pruning
//!
//! The player implements the [`Player`] trait and delegates move selection to
//! [`search_best_move`] at a fixed depth picked by its [`Difficulty`].
//!
//! # Difficulty Levels
//!
//! - **Easy**: Depth 2
//! - **Medium**: Depth 3
//! - **Hard**: Depth 4
//!
//! # Examples
//!
//! ```rust
//! use layered_chess::agent::ai::{ComputerPlayer, Difficulty};
//! use layered_chess::agent::player::Player;
//! use layered_chess::board::Board;
//!
//! let board = Board::<1>::new();
//! let mut ai = ComputerPlayer::with_difficulty(Difficulty::Easy);
//! let mv = ai.get_move(&board);
//! assert!(mv.is_some());
//! ```

use crate::agent::player::Player;
use crate::board::Board;
use crate::game_repr::Move;
use super::search::search_best_move;

/// AI difficulty levels, each mapped to a fixed search depth
///
/// Higher levels look further ahead and take longer per move. Search time
/// grows roughly by the branching factor with every extra ply, and the
/// layered variant branches far wider than standard chess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Difficulty {
    /// Depth 2: sees its own move and the reply
    Easy,
    /// Depth 3
    Medium,
    /// Depth 4: two full moves ahead
    Hard,
}

impl Difficulty {
    /// Number of plies (half-moves) to search
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    /// Get a human-readable name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Computer opponent searching a copy of the board it is shown
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    difficulty: Difficulty,
    name: String,
}

impl ComputerPlayer {
    pub fn new(difficulty: Difficulty, name: String) -> Self {
        Self { difficulty, name }
    }

    /// Player named after its difficulty, e.g. "Computer (Hard)"
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty, format!("Computer ({})", difficulty.name()))
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl<const L: usize> Player<L> for ComputerPlayer {
    fn get_move(&mut self, board: &Board<L>) -> Option<Move> {
        let mut position = board.position().clone();
        let result = search_best_move(&mut position, self.difficulty.max_depth());

        log::info!(
            "{}: {} (score {}, depth {}, {} nodes, {} ms)",
            self.name,
            result.best_move.map_or_else(|| "no move".to_string(), |mv| mv.to_string()),
            result.score,
            result.depth,
            result.nodes_searched,
            result.time_ms
        );

        result.best_move
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Square;

    #[test]
    fn test_difficulty_depths() {
        assert_eq!(Difficulty::Easy.max_depth(), 2);
        assert_eq!(Difficulty::Medium.max_depth(), 3);
        assert_eq!(Difficulty::Hard.max_depth(), 4);
    }

    #[test]
    fn test_default_name_mentions_difficulty() {
        let player = ComputerPlayer::with_difficulty(Difficulty::Medium);
        assert_eq!(Player::<1>::name(&player), "Computer (Medium)");
    }

    #[test]
    fn test_finds_back_rank_mate() {
        let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        let mut player = ComputerPlayer::with_difficulty(Difficulty::Easy);
        let mv = player.get_move(&board).unwrap();
        let a1 = Square::from_algebraic("a1").unwrap();
        let a8 = Square::from_algebraic("a8").unwrap();
        assert!(mv.matches(a1, a8, None));
    }

    #[test]
    fn test_no_move_when_game_is_over() {
        let board = Board::from_fen("7k/8/5KQ1/8/8/8/8/8 b - -").unwrap();
        let mut player = ComputerPlayer::with_difficulty(Difficulty::Hard);
        assert!(player.get_move(&board).is_none());
    }
}
