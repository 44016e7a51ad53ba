use crate::agent::ai::{search_best_move, Difficulty};
use crate::agent::player::GameResult;
use crate::error::{EngineError, EngineResult};
use crate::game_repr::{Color, GameStatus, Move, MoveList, Piece, Position, Square, Type};

/// Board component: the game state a driver talks to.
///
/// The Board wraps the core game logic ([`Position`]) and keeps the list of
/// moves played so far. Every mutation goes through the legal move set, so a
/// rejected move never changes the position.
///
/// # Usage
///
/// ```rust
/// use layered_chess::board::Board;
/// use layered_chess::agent::ai::Difficulty;
/// use layered_chess::game_repr::Square;
///
/// let mut board = Board::<1>::new();
///
/// // Query the moves of the side to move
/// assert_eq!(board.legal_moves().len(), 20);
///
/// // Play a human move by coordinates
/// let e2 = Square::from_algebraic("e2").unwrap();
/// let e4 = Square::from_algebraic("e4").unwrap();
/// board.play(e2, e4, None).unwrap();
///
/// // Let the computer answer
/// let (reply, score) = board.play_computer_move(Difficulty::Easy).unwrap();
/// println!("computer played {} ({})", reply, score);
/// ```
///
/// # Ownership
///
/// The board owns its position outright. Searches run on that position
/// through nested make/unmake pairs and leave it as they found it; nothing
/// here is shared between threads.
#[derive(Debug, Clone)]
pub struct Board<const L: usize = 1> {
    /// The current position (game state)
    position: Position<L>,

    /// Moves played so far, oldest first
    history: Vec<Move>,
}

impl<const L: usize> Default for Board<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl Board<1> {
    /// Create a standard board from a FEN record
    pub fn from_fen(fen: &str) -> EngineResult<Self> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }
}

impl<const L: usize> Board<L> {
    /// Create a board in the starting position
    pub fn new() -> Self {
        Self::from_position(Position::new())
    }

    pub fn from_position(position: Position<L>) -> Self {
        Self {
            position,
            history: Vec::new(),
        }
    }

    pub fn position(&self) -> &Position<L> {
        &self.position
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    /// Piece on `square`; `None` for empty or off-board squares
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !self.position.contains(square) {
            return None;
        }
        self.position.piece_at(square)
    }

    /// All legal moves for the side to move
    pub fn legal_moves(&mut self) -> MoveList {
        self.position.all_legal_moves()
    }

    /// Legal moves of the piece on `square`, for highlighting
    pub fn legal_moves_from(&mut self, square: Square) -> MoveList {
        self.position.legal_moves_from(square)
    }

    /// Finds the legal move matching the given coordinates
    pub fn find_legal_move(&mut self, from: Square, to: Square, promotion: Option<Type>) -> Option<Move> {
        self.position
            .legal_moves_from(from)
            .into_iter()
            .find(|mv| mv.matches(from, to, promotion))
    }

    /// Plays a move given by coordinates.
    ///
    /// Anything outside the legal move set, an omitted promotion or an
    /// off-board square included, is rejected with [`EngineError::IllegalMove`].
    pub fn play(&mut self, from: Square, to: Square, promotion: Option<Type>) -> EngineResult<Move> {
        if !self.position.contains(from) || !self.position.contains(to) {
            return Err(EngineError::IllegalMove { from, to });
        }
        let mv = self
            .find_legal_move(from, to, promotion)
            .ok_or(EngineError::IllegalMove { from, to })?;
        self.apply(mv);
        Ok(mv)
    }

    /// Plays a move previously generated for the current position.
    ///
    /// The move is looked up again in the legal move set and the freshly
    /// generated record is the one applied.
    pub fn execute_move(&mut self, mv: Move) -> EngineResult<Move> {
        self.play(mv.from, mv.to, mv.promotion)
    }

    fn apply(&mut self, mv: Move) {
        log::info!("{} plays {}", self.position.side_to_move, mv);
        self.position.make_move(mv);
        self.history.push(mv);
    }

    /// Takes back the last move played, if any
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        self.position.unmake_move(mv);
        Some(mv)
    }

    /// Is the side to move in check
    pub fn is_in_check(&self) -> bool {
        self.position.is_in_check(self.position.side_to_move)
    }

    /// Current game status
    pub fn status(&mut self) -> GameStatus {
        self.position.status()
    }

    /// Final result, once the game is over
    pub fn game_result(&mut self) -> Option<GameResult> {
        GameResult::from_status(self.status())
    }

    /// Searches at the given difficulty, plays the chosen move and returns
    /// it with its score (positive = good for White).
    pub fn play_computer_move(&mut self, difficulty: Difficulty) -> EngineResult<(Move, i32)> {
        let status = self.status();
        if status.is_over() {
            return Err(EngineError::GameOver(status));
        }

        let result = search_best_move(&mut self.position, difficulty.max_depth());
        let mv = result.best_move.ok_or(EngineError::GameOver(status))?;
        log::debug!(
            "{} search: {} nodes in {} ms",
            difficulty.name(),
            result.nodes_searched,
            result.time_ms
        );
        self.apply(mv);
        Ok((mv, result.score))
    }
}
