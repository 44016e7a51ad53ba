use super::*;
use crate::error::EngineError;

// ==================== FEN TESTS ====================

#[test]
fn test_start_fen_matches_new_position() {
    let pos = fen(START_FEN);
    assert_eq!(pos, Position::<1>::new());
    assert_eq!(pos.to_fen(), START_FEN);
}

#[test]
fn test_placement_only_defaults() {
    let pos = fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
    assert_eq!(pos.side_to_move, Color::White);
    assert_eq!(pos.castling, CastlingRights::NONE);
    assert_eq!(pos.en_passant, None);
    assert_eq!(pos.halfmove_clock, 0);
    assert_eq!(pos.fullmove_number, 1);
}

#[test]
fn test_all_fields_parsed() {
    let pos = fen("rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w Kq c6 0 2");
    assert_eq!(pos.side_to_move, Color::White);
    assert!(pos.castling.white_kingside);
    assert!(!pos.castling.white_queenside);
    assert!(!pos.castling.black_kingside);
    assert!(pos.castling.black_queenside);
    assert_eq!(pos.en_passant, Some(sq("c6")));
    assert_eq!(pos.fullmove_number, 2);
    assert_eq!(pos.piece_at(sq("c5")), Some(Piece::new(Color::Black, Type::Pawn)));
    assert_eq!(pos.piece_at(sq("e4")), Some(Piece::new(Color::White, Type::Pawn)));
}

#[test]
fn test_fen_survives_a_few_moves() {
    let mut pos = Position::<1>::new();
    play(&mut pos, "e2", "e4");
    assert_eq!(pos.to_fen(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    play(&mut pos, "g8", "f6");
    assert_eq!(pos.to_fen(), "rnbqkb1r/pppppppp/5n2/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 1 2");
    assert_eq!(fen(&pos.to_fen()), pos);
}

#[test]
fn test_malformed_records_are_rejected() {
    for bad in [
        "",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNRR",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KZ",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 4294967295",
    ] {
        assert!(
            matches!(Position::from_fen(bad), Err(EngineError::InvalidFen(_))),
            "{:?} should be rejected",
            bad
        );
    }
}
