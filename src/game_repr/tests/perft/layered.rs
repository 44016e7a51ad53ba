use super::*;

// ==================== LAYERED BOARD PERFT TESTS ====================

#[test]
fn test_perft_layered_depth_1() {
    assert_eq!(Position3D::new().perft(1), 102);
}

#[test]
fn test_perft_layered_parallel_matches_serial() {
    let mut pos = Position3D::new();
    let serial = pos.perft(2);
    assert_eq!(pos.perft_parallel(2), serial);
    assert_eq!(pos, Position3D::new());
}

#[test]
fn test_layered_divide_covers_every_move() {
    let mut pos = Position3D::new();
    let divided = pos.divide(1);
    assert_eq!(divided.len(), 102);
    assert!(divided.iter().all(|(_, n)| *n == 1));
}
