//! Human player reading coordinate moves from a text stream.
//!
//! `HumanPlayer` prompts on a writer and reads one move per line from any
//! [`BufRead`] (stdin for the binary, an in-memory buffer in tests).
//!
//! # Input format
//!
//! - `e2e4`, `e7e8q`: compact form on a standard board
//! - `e2 e4`, `e7 e8 q`: the same with spaces
//! - `1e2 2e3`: layered squares carry a 1-based layer prefix
//! - `resign`: gives up the game
//!
//! A line that does not parse or names an illegal move is reported and the
//! player is asked again. End of input counts as resignation.

use std::io::{BufRead, Write};

use crate::agent::player::Player;
use crate::board::Board;
use crate::error::{EngineError, EngineResult};
use crate::game_repr::{Move, Square, Type};

/// Parsed move text: origin, destination and optional promotion piece
pub type MoveText = (Square, Square, Option<Type>);

/// Parses one line of move input.
pub fn parse_move_text(text: &str) -> EngineResult<MoveText> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [compact] => parse_compact(compact),
        [from, to] => Ok((from.parse()?, to.parse()?, None)),
        [from, to, promotion] => Ok((from.parse()?, to.parse()?, Some(parse_promotion(promotion)?))),
        _ => Err(EngineError::InvalidSquare(text.trim().to_string())),
    }
}

/// "e2e4" or "e7e8q"; squares with a layer prefix only parse spaced
fn parse_compact(token: &str) -> EngineResult<MoveText> {
    if !token.is_ascii() || !(4..=5).contains(&token.len()) {
        return Err(EngineError::InvalidSquare(format!(
            "{}: layered squares need the spaced form, like 1e2 2e3",
            token
        )));
    }
    let from = token[0..2].parse()?;
    let to = token[2..4].parse()?;
    let promotion = match token.get(4..) {
        Some(p) if !p.is_empty() => Some(parse_promotion(p)?),
        _ => None,
    };
    Ok((from, to, promotion))
}

fn parse_promotion(token: &str) -> EngineResult<Type> {
    let mut chars = token.chars();
    match (chars.next().and_then(Type::from_char), chars.next()) {
        (Some(piece_type), None) if Type::PROMOTIONS.contains(&piece_type) => Ok(piece_type),
        _ => Err(EngineError::InvalidSquare(token.to_string())),
    }
}

/// Player whose moves come from a line-oriented input stream
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
    name: String,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W, name: String) -> Self {
        Self { input, output, name }
    }

    fn prompt(&mut self, text: &str) {
        // A closed output only loses the prompt
        let _ = write!(self.output, "{}", text);
        let _ = self.output.flush();
    }

    /// Next non-empty line, `None` at end of input
    fn read_line(&mut self) -> Option<String> {
        loop {
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) if line.trim().is_empty() => continue,
                Ok(_) => return Some(line.trim().to_string()),
                Err(e) => {
                    log::warn!("{}: failed to read input: {}", self.name, e);
                    return None;
                }
            }
        }
    }
}

impl<const L: usize, R: BufRead, W: Write> Player<L> for HumanPlayer<R, W> {
    fn get_move(&mut self, board: &Board<L>) -> Option<Move> {
        let mut position = board.position().clone();
        loop {
            let prompt = format!("{}\n{} ({}) > ", position, self.name, position.side_to_move);
            self.prompt(&prompt);

            let line = self.read_line()?;
            if line.eq_ignore_ascii_case("resign") {
                return None;
            }

            match parse_move_text(&line) {
                Ok((from, to, promotion)) => {
                    let found = position
                        .legal_moves_from(from)
                        .into_iter()
                        .find(|mv| mv.matches(from, to, promotion));
                    match found {
                        Some(mv) => return Some(mv),
                        None => self.prompt(&format!("{}\n", EngineError::IllegalMove { from, to })),
                    }
                }
                Err(e) => self.prompt(&format!("{}\n", e)),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
