use super::*;

// ==================== STARTING POSITION PERFT TESTS ====================

#[test]
fn test_perft_starting_position_depth_1() {
    assert_eq!(Position::<1>::new().perft(1), 20);
}

#[test]
fn test_perft_starting_position_depth_2() {
    assert_eq!(Position::<1>::new().perft(2), 400);
}

#[test]
fn test_perft_starting_position_depth_3() {
    assert_eq!(Position::<1>::new().perft(3), 8902);
}

#[test]
fn test_perft_starting_position_depth_4() {
    assert_eq!(Position::<1>::new().perft(4), 197281);
}

#[test]
#[ignore = "slow; run with --ignored"]
fn test_perft_starting_position_depth_5() {
    assert_eq!(Position::<1>::new().perft_parallel(5), 4865609);
}

#[test]
fn test_parallel_perft_matches_serial() {
    let mut pos = Position::<1>::new();
    assert_eq!(pos.perft_parallel(3), pos.perft(3));
    assert_eq!(pos.perft_parallel(0), 1);
}

#[test]
fn test_divide_sums_to_perft() {
    let mut pos = Position::<1>::new();
    let divided = pos.divide(3);
    assert_eq!(divided.len(), 20);
    assert_eq!(divided.iter().map(|(_, n)| n).sum::<u64>(), 8902);

    let (mv, count) = divided.iter().find(|(m, _)| m.matches(sq("e2"), sq("e4"), None)).unwrap();
    assert_eq!(mv.to, sq("e4"));
    assert_eq!(*count, 600);
}

#[test]
fn test_perft_leaves_position_unchanged() {
    let mut pos = Position::<1>::new();
    pos.perft(3);
    assert_eq!(pos, Position::<1>::new());
}
