//! Game loop coordination.
//!
//! The [`Orchestrator`] owns a [`Board`] and one [`Player`] per side and runs
//! the turn cycle until the game ends:
//!
//! ```text
//! [Check End] -> [Request Move] -> [Player provides move] -> [Execute Move]
//!   -> [Notify opponent] -> [Check End] ...
//! ```
//!
//! A player returning `None` resigns. A move outside the legal move set is
//! refused by the board and forfeits the game for the side that sent it.

use crate::agent::ai::ComputerPlayer;
use crate::agent::human_player::HumanPlayer;
use crate::agent::player::{GameResult, Player};
use crate::board::Board;
use crate::config::{GameConfig, PlayerConfig};
use crate::game_repr::{Color, Move};

/// Runs one game between two players.
pub struct Orchestrator<const L: usize = 1> {
    board: Board<L>,
    white: Box<dyn Player<L>>,
    black: Box<dyn Player<L>>,
    /// Stop after this many plies with [`GameResult::Adjourned`]
    max_plies: Option<u32>,
    result: Option<GameResult>,
}

impl<const L: usize> Orchestrator<L> {
    pub fn new(board: Board<L>, white: Box<dyn Player<L>>, black: Box<dyn Player<L>>) -> Self {
        Self {
            board,
            white,
            black,
            max_plies: None,
            result: None,
        }
    }

    /// Players built from `config`; humans read stdin and prompt on stdout
    pub fn from_config(config: &GameConfig) -> Self {
        if config.variant.layers() != L {
            log::warn!("{:?} requested on a board with {} layer(s)", config.variant, L);
        }
        let white = build_player(config.white_player, Color::White);
        let black = build_player(config.black_player, Color::Black);
        Self::new(Board::new(), white, black)
    }

    pub fn with_max_plies(mut self, max_plies: u32) -> Self {
        self.max_plies = Some(max_plies);
        self
    }

    pub fn board(&self) -> &Board<L> {
        &self.board
    }

    /// The result once the game has stopped
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Plays until the game ends and returns the result
    pub fn run(&mut self) -> GameResult {
        log::info!(
            "{} (White) vs {} (Black)",
            self.white.name(),
            self.black.name()
        );

        loop {
            if let Some(result) = self.check_game_end() {
                return result;
            }
            self.request_move();
        }
    }

    /// Asks the side to move for a move and processes it
    pub fn request_move(&mut self) {
        if self.result.is_some() {
            return;
        }

        let color = self.board.side_to_move();
        let player = match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };

        match player.get_move(&self.board) {
            Some(mv) => self.process_move(mv),
            None => {
                log::info!("{} resigns", player.name());
                self.finish(GameResult::from_winner(color.opposite()));
            }
        }
    }

    /// Executes a player's move and notifies the opponent
    pub fn process_move(&mut self, mv: Move) {
        let color = self.board.side_to_move();
        match self.board.execute_move(mv) {
            Ok(played) => {
                let opponent = match color {
                    Color::White => &mut self.black,
                    Color::Black => &mut self.white,
                };
                opponent.opponent_moved(played);
            }
            Err(e) => {
                log::warn!("{} forfeits: {}", color, e);
                self.finish(GameResult::from_winner(color.opposite()));
            }
        }
    }

    /// Detects the end of the game, notifying both players once
    pub fn check_game_end(&mut self) -> Option<GameResult> {
        if self.result.is_some() {
            return self.result;
        }

        if let Some(result) = self.board.game_result() {
            log::info!("{}: {}", self.board.status(), result);
            self.finish(result);
        } else if let Some(max_plies) = self.max_plies {
            if self.board.history().len() >= max_plies as usize {
                log::info!("stopped after {} plies", max_plies);
                self.finish(GameResult::Adjourned);
            }
        }
        self.result
    }

    fn finish(&mut self, result: GameResult) {
        self.result = Some(result);
        self.white.game_ended(result);
        self.black.game_ended(result);
    }
}

fn build_player<const L: usize>(config: PlayerConfig, color: Color) -> Box<dyn Player<L>> {
    match config {
        PlayerConfig::Human => Box::new(HumanPlayer::new(
            std::io::stdin().lock(),
            std::io::stdout(),
            color.to_string(),
        )),
        PlayerConfig::Computer { difficulty } => Box::new(ComputerPlayer::with_difficulty(difficulty)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::ai::Difficulty;
    use crate::game_repr::Square;
    use std::io::Cursor;

    fn human(script: &'static str) -> Box<dyn Player> {
        Box::new(HumanPlayer::new(Cursor::new(script), std::io::sink(), "scripted".to_string()))
    }

    #[test]
    fn test_scripted_fools_mate() {
        let mut game = Orchestrator::new(Board::new(), human("f2f3\ng2g4\n"), human("e7e5\nd8h4\n"));
        assert_eq!(game.run(), GameResult::BlackWins);
        assert_eq!(game.board().history().len(), 4);
    }

    #[test]
    fn test_exhausted_input_resigns() {
        let mut game = Orchestrator::new(Board::new(), human("e2e4\n"), human(""));
        assert_eq!(game.run(), GameResult::WhiteWins);
        assert_eq!(game.result(), Some(GameResult::WhiteWins));
    }

    /// Always answers with a move that was never legal
    struct Cheater;

    impl Player for Cheater {
        fn get_move(&mut self, board: &Board) -> Option<Move> {
            let mut board = board.clone();
            let mut mv = board.legal_moves()[0];
            mv.to = Square::new(0, 4, 4);
            mv.from = Square::new(0, 0, 0);
            Some(mv)
        }
    }

    #[test]
    fn test_illegal_move_forfeits() {
        let mut game = Orchestrator::new(Board::new(), Box::new(Cheater), human(""));
        assert_eq!(game.run(), GameResult::BlackWins);
        assert!(game.board().history().is_empty());
    }

    #[test]
    fn test_ply_limit_adjourns() {
        let white = Box::new(ComputerPlayer::with_difficulty(Difficulty::Easy));
        let black = Box::new(ComputerPlayer::with_difficulty(Difficulty::Easy));
        let mut game = Orchestrator::new(Board::<1>::new(), white, black).with_max_plies(4);
        assert_eq!(game.run(), GameResult::Adjourned);
        assert_eq!(game.board().history().len(), 4);
    }
}
