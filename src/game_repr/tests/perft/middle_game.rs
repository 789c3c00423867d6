use super::*;

// ==================== MIDDLE GAME PERFT TESTS ====================
// FEN: rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8

const FEN: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

#[test]
fn test_perft_middle_game_depth_1() {
    assert_eq!(pos(FEN).perft(1), 44);
}

#[test]
fn test_perft_middle_game_depth_2() {
    assert_eq!(pos(FEN).perft(2), 1486);
}

#[test]
fn test_perft_middle_game_depth_3() {
    assert_eq!(pos(FEN).perft(3), 62379);
}

#[test]
#[ignore = "slow in debug builds"]
fn test_perft_middle_game_depth_4() {
    assert_eq!(pos(FEN).perft(4), 2103487);
}
