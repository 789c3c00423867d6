use super::*;

// ==================== STALEMATE TESTS ====================

#[test]
fn test_basic_stalemate() {
    // White king trapped in the corner, black queen covers every escape
    let p = pos("7k/8/8/8/8/8/2q5/K7 w - - 0 1");

    assert!(!p.is_in_check(), "King should not be in check");
    assert!(p.legal_moves().is_empty(), "Should have no legal moves");
    assert!(p.is_stalemate());
    assert_eq!(p.status(), GameStatus::Stalemate);
}

#[test]
fn test_not_stalemate_when_in_check() {
    let p = pos("7k/8/8/8/8/8/1q6/K7 w - - 0 1");
    assert!(p.is_in_check());
    assert!(!p.is_stalemate());
}

#[test]
fn test_not_stalemate_has_pawn_move() {
    let p = pos("7k/8/8/8/8/7P/2q5/K7 w - - 0 1");
    assert!(!p.is_stalemate(), "Not stalemate - pawn can move");
    assert_eq!(p.legal_moves().len(), 1);
    assert_eq!(p.status(), GameStatus::Ongoing);
}
