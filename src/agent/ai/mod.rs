// AI Agent - Minimax with Alpha-Beta Pruning
//
// Classical fixed-depth search over the legal move set, generic over the
// number of board layers.
//
// Key features:
// - Deterministic (same position always gives same move)
// - Material plus piece-square evaluation, always from White's point of view
// - Move ordering (promotions, then MVV-LVA captures) for better pruning
// - Exhaustive minimax kept alongside as a reference for the pruned search

mod alphabeta;
mod computer_player;
mod evaluation;
mod move_ordering;
mod piece_square_tables;
mod search;

pub use computer_player::{ComputerPlayer, Difficulty};

pub use alphabeta::{alpha_beta, is_mate_score, minimax, SearchStats, INFINITY, MATE_SCORE};
pub use evaluation::{evaluate, piece_value};
pub use move_ordering::{generate_all_ordered_moves, order_moves, score_move};
pub use piece_square_tables::get_pst_value;
pub use search::{search_best_move, search_best_move_exhaustive, SearchResult};
