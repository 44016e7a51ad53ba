use std::fmt;

use smallvec::SmallVec;

use super::{Color, Piece, Square, Type};

/// Move buffer used by generation and search; spills to the heap on
/// crowded layered boards.
pub type MoveList = SmallVec<[Move; 64]>;

/// What a move removes from the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capture {
    None,
    /// Piece standing on the destination
    Piece(Piece),
    /// Pawn taken en passant, standing behind the destination
    EnPassant(Piece),
}

impl Capture {
    pub fn piece(&self) -> Option<Piece> {
        match *self {
            Capture::None => None,
            Capture::Piece(p) | Capture::EnPassant(p) => Some(p),
        }
    }

    pub fn is_capture(&self) -> bool {
        !matches!(self, Capture::None)
    }
}

/// Castling rights for both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    pub fn kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    pub fn queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    /// Drops both rights of one side (its king moved)
    pub fn clear(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_kingside = false;
                self.white_queenside = false;
            }
            Color::Black => {
                self.black_kingside = false;
                self.black_queenside = false;
            }
        }
    }

    /// Drops the right tied to a rook corner; other squares are ignored
    pub fn clear_corner(&mut self, square: Square) {
        if square.layer != 0 {
            return;
        }
        match (square.rank, square.file) {
            (0, 0) => self.white_queenside = false,
            (0, 7) => self.white_kingside = false,
            (7, 0) => self.black_queenside = false,
            (7, 7) => self.black_kingside = false,
            _ => {}
        }
    }
}

/// State a move overwrites, captured when the move is generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Snapshot {
    pub captured: Capture,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
}

/// A move together with everything needed to take it back.
///
/// Castling is a king move of two files; en passant is flagged by the
/// capture record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Type>,
    pub prev: Snapshot,
}

impl Move {
    pub fn new(from: Square, to: Square, promotion: Option<Type>, prev: Snapshot) -> Move {
        Self { from, to, promotion, prev }
    }

    pub fn is_capture(&self) -> bool {
        self.prev.captured.is_capture()
    }

    pub fn is_en_passant(&self) -> bool {
        matches!(self.prev.captured, Capture::EnPassant(_))
    }

    /// Same origin, destination and promotion, ignoring the snapshot
    pub fn matches(&self, from: Square, to: Square, promotion: Option<Type>) -> bool {
        self.from == from && self.to == to && self.promotion == promotion
    }

    /// Square holding the pawn removed by an en-passant capture
    pub fn en_passant_victim(&self) -> Square {
        Square::new(self.to.layer, self.from.rank, self.to.file)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.to_char())?;
        }
        Ok(())
    }
}
