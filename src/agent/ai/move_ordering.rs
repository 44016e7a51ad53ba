// Move ordering: promotions, then captures by MVV-LVA, then quiet moves

use crate::game_repr::{Move, MoveList, Position, Type};
use smallvec::SmallVec;

/// Score for move ordering (higher = better)
#[derive(Debug, Clone, Copy)]
struct MoveScore {
    mov: Move,
    score: i32,
}

const PROMOTION_BONUS: i32 = 10000;
const CAPTURE_BONUS: i32 = 1000;

/// Get material value for MVV-LVA (Most Valuable Victim - Least Valuable Attacker).
/// The king is worth nothing here since it is never captured.
fn piece_value_for_mvv_lva(piece_type: Type) -> i32 {
    match piece_type {
        Type::Pawn => 100,
        Type::Knight => 320,
        Type::Bishop => 330,
        Type::Rook => 500,
        Type::Queen => 900,
        Type::King => 0,
    }
}

/// Score a single move for ordering purposes
pub fn score_move<const L: usize>(pos: &Position<L>, mov: &Move) -> i32 {
    // 1. Promotions, capturing or not
    if let Some(promotion) = mov.promotion {
        return PROMOTION_BONUS + piece_value_for_mvv_lva(promotion);
    }

    // 2. Captures (MVV-LVA: prefer capturing valuable pieces with less valuable pieces)
    if let Some(victim) = mov.prev.captured.piece() {
        let attacker = pos.piece_at(mov.from).map_or(0, |p| piece_value_for_mvv_lva(p.piece_type));
        return CAPTURE_BONUS + piece_value_for_mvv_lva(victim.piece_type) - attacker / 10;
    }

    // 3. Quiet moves
    0
}

/// Sorts moves best first. Equal scores keep their generation order.
pub fn order_moves<const L: usize>(pos: &Position<L>, moves: &mut MoveList) {
    let mut scored_moves: SmallVec<[MoveScore; 64]> = moves
        .iter()
        .map(|&mov| MoveScore {
            mov,
            score: score_move(pos, &mov),
        })
        .collect();

    // Stable sort, descending
    scored_moves.sort_by(|a, b| b.score.cmp(&a.score));

    moves.clear();
    moves.extend(scored_moves.into_iter().map(|ms| ms.mov));
}

/// Generate all legal moves with full ordering
pub fn generate_all_ordered_moves<const L: usize>(pos: &mut Position<L>) -> MoveList {
    let mut moves = pos.all_legal_moves();
    order_moves(pos, &mut moves);
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Square;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn test_all_ordered_moves_includes_everything() {
        let mut pos = Position::<1>::default();
        let ordered_moves = generate_all_ordered_moves(&mut pos);

        // Starting position has 20 legal moves
        assert_eq!(ordered_moves.len(), 20);
    }

    #[test]
    fn test_quiet_moves_keep_generation_order() {
        let mut pos = Position::<1>::default();
        let generated = pos.all_legal_moves();
        let ordered = generate_all_ordered_moves(&mut pos);
        assert_eq!(generated, ordered, "all quiet moves score 0 and must not be reordered");
    }

    #[test]
    fn test_promotions_come_first() {
        let mut pos = Position::from_fen("3r3k/4P3/8/8/8/8/8/4K3 w - -").unwrap();
        let ordered = generate_all_ordered_moves(&mut pos);

        // e8=Q and exd8=Q tie as queen promotions; the push is generated first
        assert_eq!(ordered[0].promotion, Some(Type::Queen));
        assert!(ordered[..8].iter().all(|m| m.promotion.is_some()), "all 8 promotions lead");
        assert_eq!(ordered[8].promotion, None);
    }

    #[test]
    fn test_mvv_lva_ordering() {
        // Both the pawn and the rook can take the queen on d5; the rook can also take the knight
        let mut pos = Position::from_fen("4k3/8/8/3q4/4P3/8/3R1n2/4K3 w - -").unwrap();
        let ordered = generate_all_ordered_moves(&mut pos);

        assert!(ordered[0].matches(sq("e4"), sq("d5"), None), "pawn takes queen first");
        assert!(ordered[1].matches(sq("d2"), sq("d5"), None), "rook takes queen second");
        assert!(ordered[2].matches(sq("e1"), sq("f2"), None), "king takes knight before rook does");
        assert!(ordered[3].matches(sq("d2"), sq("f2"), None));
        assert!(ordered[4..].iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn test_score_values() {
        let mut pos = Position::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - -").unwrap();
        let moves = pos.all_legal_moves();
        let capture = moves.iter().find(|m| m.is_capture()).unwrap();
        assert_eq!(score_move(&pos, capture), 1000 + 900 - 10);

        let quiet = moves.iter().find(|m| !m.is_capture()).unwrap();
        assert_eq!(score_move(&pos, quiet), 0);
    }

    #[test]
    fn test_en_passant_counts_as_pawn_capture() {
        let mut pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6").unwrap();
        let moves = pos.all_legal_moves();
        let ep = moves.iter().find(|m| m.is_en_passant()).unwrap();
        assert_eq!(score_move(&pos, ep), 1000 + 100 - 10);
    }
}
