use super::*;

// ==================== PROMOTION TESTS ====================

#[test]
fn test_push_to_last_rank_expands_to_four_moves() {
    let mut pos = fen("8/4P3/8/8/8/8/k7/7K w - - 0 1");
    let moves = pos.legal_moves_from(sq("e7"));

    assert_eq!(moves.len(), 4);
    let promotions: Vec<_> = moves.iter().map(|m| m.promotion).collect();
    assert_eq!(
        promotions,
        vec![Some(Type::Queen), Some(Type::Rook), Some(Type::Bishop), Some(Type::Knight)]
    );
}

#[test]
fn test_capture_promotion() {
    let mut pos = fen("3r3k/4P3/8/8/8/8/8/4K3 w - - 0 1");
    let moves = pos.legal_moves_from(sq("e7"));

    assert_eq!(moves.len(), 8, "four pushes and four captures");
    let capture = find_move(&moves, "e7", "d8", Some(Type::Queen));
    assert!(capture.is_capture());
}

#[test]
fn test_black_promotes_on_first_rank() {
    let mut pos = fen("7k/8/8/8/8/8/3p4/K7 b - - 0 1");
    let mv = find_move(&pos.all_legal_moves(), "d2", "d1", Some(Type::Knight));
    pos.make_move(mv);
    assert_eq!(pos.piece_at(sq("d1")), Some(Piece::new(Color::Black, Type::Knight)));
}

#[test]
fn test_promotion_make_unmake() {
    let mut pos = fen("3r3k/4P3/8/8/8/8/8/4K3 w - - 0 1");
    let before = pos.clone();
    let mv = find_move(&pos.all_legal_moves(), "e7", "d8", Some(Type::Rook));

    pos.make_move(mv);
    assert_eq!(pos.piece_at(sq("d8")), Some(Piece::new(Color::White, Type::Rook)));
    assert_eq!(pos.piece_at(sq("e7")), None);

    pos.unmake_move(mv);
    assert_eq!(pos, before, "pawn and captured rook come back");
}

#[test]
fn test_no_plain_move_to_last_rank() {
    let mut pos = fen("8/P7/8/8/8/8/k7/7K w - - 0 1");
    let moves = pos.all_legal_moves();
    assert!(moves
        .iter()
        .filter(|m| m.from == sq("a7"))
        .all(|m| m.promotion.is_some()));
}
