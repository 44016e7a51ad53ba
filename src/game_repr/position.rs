use std::fmt;

use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 */

/// Number of stacked boards in the layered variant
pub const LAYERED_BOARD_LAYERS: usize = 3;

/// Position on a board of `L` stacked 8x8 layers.
///
/// `Position<1>` is standard chess. Every rule that does not involve the
/// layer axis is shared between the two shapes; castling only ever
/// happens on layer 0.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position<const L: usize = 1> {
    /// Mailbox per layer, indexed by `rank * 8 + file`
    pub(crate) squares: [[Option<Piece>; 64]; L],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    /// Plies since the last pawn move or capture
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

pub type Position3D = Position<LAYERED_BOARD_LAYERS>;

/// Terminal condition of a position, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
    /// A side has no king on the board
    MissingKing(Color),
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "game ongoing"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::FiftyMoveRule => write!(f, "draw by the 50-move rule"),
            GameStatus::MissingKing(color) => write!(f, "the {} king is missing", color),
        }
    }
}

const BACK_RANK: [Type; 8] = [
    Type::Rook,
    Type::Knight,
    Type::Bishop,
    Type::Queen,
    Type::King,
    Type::Bishop,
    Type::Knight,
    Type::Rook,
];

impl<const L: usize> Default for Position<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const L: usize> Position<L> {
    /// Board with no pieces, White to move and no castling rights
    pub fn empty() -> Self {
        Self {
            squares: [[None; 64]; L],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Starting position: Black's army on the bottom layer and White's on
    /// the top one. On a single layer this is the standard setup.
    ///
    /// A side only gets castling rights when its king starts on layer 0.
    pub fn new() -> Self {
        let mut pos = Self::empty();
        pos.place_army(Color::Black, 0);
        pos.place_army(Color::White, L - 1);
        pos.castling = CastlingRights {
            white_kingside: L == 1,
            white_queenside: L == 1,
            black_kingside: true,
            black_queenside: true,
        };
        pos
    }

    fn place_army(&mut self, color: Color, layer: usize) {
        let home = color.home_rank();
        let pawns = color.pawn_start_rank();
        for (file, &piece_type) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            self.set_piece(Square::new(layer as u8, home, file), Some(Piece::new(color, piece_type)));
            self.set_piece(Square::new(layer as u8, pawns, file), Some(Piece::new(color, Type::Pawn)));
        }
    }

    pub fn layers(&self) -> usize {
        L
    }

    /// True if `square` lies on this board
    pub fn contains(&self, square: Square) -> bool {
        (square.layer as usize) < L && square.rank < 8 && square.file < 8
    }

    /// Piece on `square`, which must lie on the board
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.layer as usize][square.idx()]
    }

    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.layer as usize][square.idx()] = piece;
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// True if `square` holds a piece of `color`
    pub fn is_color(&self, square: Square, color: Color) -> bool {
        self.piece_at(square).is_some_and(|p| p.color == color)
    }

    /// Every occupied square with its piece, layer by layer
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(layer, board)| {
            board.iter().enumerate().filter_map(move |(idx, piece)| {
                piece.map(|p| (Square::new(layer as u8, (idx / 8) as u8, (idx % 8) as u8), p))
            })
        })
    }

    /// Scans every layer for the king of `color`
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.color == color && p.piece_type == Type::King)
            .map(|(sq, _)| sq)
    }

    /// Undo record for a move generated from this position
    pub(crate) fn snapshot(&self, captured: Capture) -> Snapshot {
        Snapshot {
            captured,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
        }
    }

    /// Classifies the position for the side to move.
    ///
    /// A missing king is reported before anything else, then positions
    /// without legal moves, then the 50-move rule.
    pub fn status(&mut self) -> GameStatus {
        for color in [Color::White, Color::Black] {
            if self.find_king(color).is_none() {
                log::warn!("{} king missing from the board", color);
                return GameStatus::MissingKing(color);
            }
        }

        if !self.has_legal_moves() {
            return if self.is_in_check(self.side_to_move) {
                GameStatus::Checkmate {
                    winner: self.side_to_move.opposite(),
                }
            } else {
                GameStatus::Stalemate
            };
        }

        if self.halfmove_clock >= 100 {
            return GameStatus::FiftyMoveRule;
        }

        GameStatus::Ongoing
    }

    /// Returns true if the side to move is checkmated
    pub fn is_checkmate(&mut self) -> bool {
        self.is_in_check(self.side_to_move) && !self.has_legal_moves()
    }

    /// Returns true if the side to move is stalemated
    pub fn is_stalemate(&mut self) -> bool {
        !self.is_in_check(self.side_to_move) && !self.has_legal_moves()
    }
}

impl<const L: usize> fmt::Display for Position<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for layer in 0..L {
            if L > 1 {
                writeln!(f, "Layer {}", layer + 1)?;
            }
            for rank in (0..8u8).rev() {
                write!(f, "{} ", rank + 1)?;
                for file in 0..8u8 {
                    let c = self
                        .piece_at(Square::new(layer as u8, rank, file))
                        .map_or('.', |p| p.to_char());
                    write!(f, "{} ", c)?;
                }
                writeln!(f)?;
            }
            writeln!(f, "  a b c d e f g h")?;
        }
        write!(f, "{} to move", self.side_to_move)
    }
}
