use super::*;

// ==================== COMPLEX POSITION WITH PROMOTIONS PERFT TESTS ====================
// Position 5: Tests immediate promotion scenarios

const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

#[test]
fn test_perft_complex_promotions_depth_1() {
    assert_eq!(perft_of(POSITION_5, 1), 44);
}

#[test]
fn test_perft_complex_promotions_depth_2() {
    assert_eq!(perft_of(POSITION_5, 2), 1486);
}

#[test]
fn test_perft_complex_promotions_depth_3() {
    assert_eq!(perft_of(POSITION_5, 3), 62379);
}
