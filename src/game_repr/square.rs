use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

use super::LAYERED_BOARD_LAYERS;

/// Zero-based board coordinate. Rank 0 is White's home rank; `layer` is
/// always 0 on a single-layer board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub layer: u8,
    pub rank: u8,
    pub file: u8,
}

/// Step vector as (layer, rank, file) deltas
pub type Dir = (i8, i8, i8);

impl Square {
    pub const fn new(layer: u8, rank: u8, file: u8) -> Self {
        Self { layer, rank, file }
    }

    /// Square on the base layer
    pub const fn flat(rank: u8, file: u8) -> Self {
        Self { layer: 0, rank, file }
    }

    /// Index into a layer's 64-square array
    pub fn idx(&self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// Applies a step, returning `None` when it leaves a board of `layers` layers
    pub fn offset(&self, (dl, dr, df): Dir, layers: usize) -> Option<Square> {
        let layer = self.layer as i8 + dl;
        let rank = self.rank as i8 + dr;
        let file = self.file as i8 + df;
        if layer < 0 || layer as usize >= layers || !(0..8).contains(&rank) || !(0..8).contains(&file) {
            return None;
        }
        Some(Square::new(layer as u8, rank as u8, file as u8))
    }

    /// Parses "e4" (base layer) or "2e4" (1-based layer prefix, at most
    /// the layered board's layer count). Whether the square exists on a
    /// given board is checked with `Position::contains`.
    pub fn from_algebraic(s: &str) -> Result<Square, EngineError> {
        let invalid = || EngineError::InvalidSquare(s.to_string());
        let bytes = s.as_bytes();
        let (layer, rest) = match bytes.len() {
            2 => (0, bytes),
            3 => {
                let layer = bytes[0].wrapping_sub(b'1');
                if layer as usize >= LAYERED_BOARD_LAYERS {
                    return Err(invalid());
                }
                (layer, &bytes[1..])
            }
            _ => return Err(invalid()),
        };
        let file = rest[0].wrapping_sub(b'a');
        let rank = rest[1].wrapping_sub(b'1');
        if file > 7 || rank > 7 {
            return Err(invalid());
        }
        Ok(Square::new(layer, rank, file))
    }
}

impl FromStr for Square {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file) as char;
        let rank = (b'1' + self.rank) as char;
        if self.layer == 0 {
            write!(f, "{}{}", file, rank)
        } else {
            write!(f, "{}{}{}", self.layer + 1, file, rank)
        }
    }
}
