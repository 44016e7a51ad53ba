use crate::error::{EngineError, EngineResult};

use super::*;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position<1> {
    /// Parses a FEN record. Only the piece placement is mandatory; missing
    /// fields default to White to move, no castling, no en-passant target,
    /// clock 0 and move 1.
    pub fn from_fen(fen_str: &str) -> EngineResult<Position> {
        let invalid = |why: &str| EngineError::InvalidFen(format!("{}: {:?}", why, fen_str));
        let parts: Vec<&str> = fen_str.split_whitespace().collect();
        let mut pos = Self::empty();

        // Piece placement, rank 8 first
        let placement = parts.first().ok_or_else(|| invalid("empty record"))?;
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(invalid("expected 8 ranks"));
        }
        for (i, row) in rows.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file = 0u8;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file = file.saturating_add(skip as u8);
                } else {
                    let piece = Piece::from_char(c).ok_or_else(|| invalid("unknown piece letter"))?;
                    if file > 7 {
                        return Err(invalid("rank overflows"));
                    }
                    pos.set_piece(Square::flat(rank, file), Some(piece));
                    file += 1;
                }
            }
            if file != 8 {
                return Err(invalid("rank does not cover 8 files"));
            }
        }

        pos.side_to_move = match parts.get(1).copied() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(_) => return Err(invalid("side to move must be w or b")),
        };

        if let Some(castling) = parts.get(2).filter(|s| **s != "-") {
            for c in castling.chars() {
                match c {
                    'K' => pos.castling.white_kingside = true,
                    'Q' => pos.castling.white_queenside = true,
                    'k' => pos.castling.black_kingside = true,
                    'q' => pos.castling.black_queenside = true,
                    _ => return Err(invalid("bad castling field")),
                }
            }
        }

        if let Some(ep) = parts.get(3).filter(|s| **s != "-") {
            let square = Square::from_algebraic(ep).map_err(|_| invalid("bad en-passant square"))?;
            if square.layer != 0 {
                return Err(invalid("bad en-passant square"));
            }
            pos.en_passant = Some(square);
        }

        if let Some(clock) = parts.get(4) {
            pos.halfmove_clock = clock.parse().map_err(|_| invalid("bad halfmove clock"))?;
        }
        if let Some(number) = parts.get(5) {
            pos.fullmove_number = number
                .parse::<u32>()
                .ok()
                .filter(|n| (1..u32::MAX).contains(n))
                .ok_or_else(|| invalid("bad fullmove number"))?;
        }

        Ok(pos)
    }

    /// Converts the current position to FEN notation
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        // Piece placement (starting from rank 8 down to rank 1)
        for rank in (0..8u8).rev() {
            let mut empty_count = 0;
            for file in 0..8u8 {
                match self.piece_at(Square::flat(rank, file)) {
                    None => empty_count += 1,
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_char());
                    }
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        fen.push_str(&format!(" {}", side));

        let mut castling = String::new();
        for (flag, c) in [
            (self.castling.white_kingside, 'K'),
            (self.castling.white_queenside, 'Q'),
            (self.castling.black_kingside, 'k'),
            (self.castling.black_queenside, 'q'),
        ] {
            if flag {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        fen.push_str(&format!(" {}", castling));

        match self.en_passant {
            Some(square) => fen.push_str(&format!(" {}", square)),
            None => fen.push_str(" -"),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }
}
