// Root search
//
// Orders the root moves like any other node, searches each one and keeps the
// best for the side to move. On equal values the first move searched wins.

use std::time::Instant;

use crate::game_repr::{Color, Move, Position};
use super::alphabeta::{alpha_beta, minimax, SearchStats, INFINITY};
use super::move_ordering::generate_all_ordered_moves;

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// `None` when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Value of `best_move`, positive = good for White
    pub score: i32,
    pub depth: u8,
    pub nodes_searched: u64,
    pub cutoffs: u64,
    pub time_ms: u64,
}

/// Searches every root move with alpha-beta to `depth` plies
pub fn search_best_move<const L: usize>(pos: &mut Position<L>, depth: u8) -> SearchResult {
    root_search(pos, depth, |pos, depth, alpha, beta, stats| {
        alpha_beta(pos, depth, alpha, beta, stats)
    })
}

/// Same as [`search_best_move`] without any pruning
pub fn search_best_move_exhaustive<const L: usize>(pos: &mut Position<L>, depth: u8) -> SearchResult {
    root_search(pos, depth, |pos, depth, _, _, stats| minimax(pos, depth, stats))
}

fn root_search<const L: usize, F>(pos: &mut Position<L>, depth: u8, mut child_value: F) -> SearchResult
where
    F: FnMut(&mut Position<L>, u8, i32, i32, &mut SearchStats) -> i32,
{
    let start_time = Instant::now();
    let depth = depth.max(1);
    let mut stats = SearchStats::default();

    let moves = generate_all_ordered_moves(pos);
    let maximizing = pos.side_to_move == Color::White;

    let mut alpha = -INFINITY - 1;
    let mut beta = INFINITY + 1;
    let mut best_move = None;
    let mut best_score = if maximizing { alpha } else { beta };

    for mv in moves {
        pos.make_move(mv);
        let score = child_value(pos, depth - 1, alpha, beta, &mut stats);
        pos.unmake_move(mv);
        log::trace!("root move {} scored {}", mv, score);

        // Strict comparison keeps the first move on ties
        let improves = if maximizing { score > best_score } else { score < best_score };
        if improves || best_move.is_none() {
            best_score = score;
            best_move = Some(mv);
        }
        if maximizing {
            alpha = alpha.max(best_score);
        } else {
            beta = beta.min(best_score);
        }
    }

    let time_ms = start_time.elapsed().as_millis() as u64;
    log::debug!(
        "depth {}: best {:?} score {} ({} nodes, {} cutoffs, {} ms)",
        depth,
        best_move.map(|m| m.to_string()),
        best_score,
        stats.nodes,
        stats.cutoffs,
        time_ms
    );

    SearchResult {
        best_move,
        score: if best_move.is_some() { best_score } else { 0 },
        depth,
        nodes_searched: stats.nodes,
        cutoffs: stats.cutoffs,
        time_ms,
    }
}
