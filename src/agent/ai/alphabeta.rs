// Minimax Search with Alpha-Beta Pruning
//
// Scores are always from White's point of view: White maximizes, Black
// minimizes. A node first looks for the end of the game (checkmate,
// stalemate, 50-move rule), then falls back to the static evaluation at
// depth 0, and otherwise recurses over the ordered legal moves.
//
// Mates found with more depth left score further from zero, so the search
// prefers the quickest mate and the slowest defeat.
//
// `minimax` is the same recursion without pruning. It visits every node and
// exists to check that pruning never changes the result.

use crate::game_repr::{Color, MoveList, Position};
use super::evaluation::evaluate;
use super::move_ordering::order_moves;

/// Bound wider than any reachable score
pub const INFINITY: i32 = 1_000_000;

/// Checkmate score before the remaining-depth bonus
pub const MATE_SCORE: i32 = INFINITY - 100;

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, root children included
    pub nodes: u64,
    /// Branches skipped because alpha met beta
    pub cutoffs: u64,
}

/// Checks whether a score is a mate score
pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_SCORE
}

/// Score of a node without legal moves, or of a drawn one, if the game is over here
fn terminal_score<const L: usize>(pos: &mut Position<L>, moves: &MoveList, depth: u8) -> Option<i32> {
    if moves.is_empty() {
        if !pos.is_in_check(pos.side_to_move) {
            return Some(0);
        }
        let mate = MATE_SCORE + depth as i32;
        return Some(match pos.side_to_move {
            Color::White => -mate,
            Color::Black => mate,
        });
    }
    if pos.halfmove_clock >= 100 {
        return Some(0);
    }
    None
}

/// Minimax search with alpha-beta pruning.
///
/// Returns the value of `pos` searched `depth` plies deep, exact whenever
/// it lies strictly inside `(alpha, beta)`.
pub fn alpha_beta<const L: usize>(
    pos: &mut Position<L>,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    let mut moves = MoveList::new();
    pos.all_legal_moves_into(&mut moves);

    if let Some(score) = terminal_score(pos, &moves, depth) {
        return score;
    }

    // Base case: reached maximum depth
    if depth == 0 {
        return evaluate(pos);
    }

    order_moves(pos, &mut moves);

    let maximizing = pos.side_to_move == Color::White;
    let mut best = if maximizing { -INFINITY - 1 } else { INFINITY + 1 };

    for mv in moves {
        pos.make_move(mv);
        let score = alpha_beta(pos, depth - 1, alpha, beta, stats);
        pos.unmake_move(mv);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }

        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }

    best
}

/// Exhaustive minimax with the same conventions as [`alpha_beta`]
pub fn minimax<const L: usize>(pos: &mut Position<L>, depth: u8, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;

    let mut moves = MoveList::new();
    pos.all_legal_moves_into(&mut moves);

    if let Some(score) = terminal_score(pos, &moves, depth) {
        return score;
    }
    if depth == 0 {
        return evaluate(pos);
    }

    let maximizing = pos.side_to_move == Color::White;
    let mut best = if maximizing { -INFINITY - 1 } else { INFINITY + 1 };

    for mv in moves {
        pos.make_move(mv);
        let score = minimax(pos, depth - 1, stats);
        pos.unmake_move(mv);

        best = if maximizing { best.max(score) } else { best.min(score) };
    }

    best
}
