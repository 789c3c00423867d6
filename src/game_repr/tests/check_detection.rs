use super::*;

// ==================== CHECK DETECTION TESTS ====================

#[test]
fn test_check_by_each_piece_kind() {
    let cases = [
        ("4k3/8/8/8/8/8/3p4/4K3 w - - 0 1", "pawn"),
        ("4k3/8/8/8/8/3n4/8/4K3 w - - 0 1", "knight"),
        ("4k3/8/8/8/1b6/8/8/4K3 w - - 0 1", "bishop"),
        ("4k3/8/8/8/8/8/8/r3K3 w - - 0 1", "rook"),
        ("4k3/8/8/8/4q3/8/8/4K3 w - - 0 1", "queen"),
    ];
    for (fen, attacker) in cases {
        assert!(pos(fen).is_in_check(), "{} should give check", attacker);
    }
}

#[test]
fn test_blocked_slider_gives_no_check() {
    let p = pos("4k3/8/8/8/4q3/8/4P3/4K3 w - - 0 1");
    assert!(!p.is_in_check());
}

#[test]
fn test_pawn_does_not_check_straight_ahead() {
    let p = pos("4k3/8/8/8/8/8/4p3/4K3 w - - 0 1");
    assert!(!p.is_in_check());
}

#[test]
fn test_in_check_only_evasions_are_legal() {
    // Rook a1 checks along the first rank; the bishop can interpose on d1
    let p = pos("4k3/8/8/8/8/5B2/8/r3K3 w - - 0 1");
    assert!(p.is_in_check());
    for mv in p.legal_moves() {
        let mut board = *p.board();
        board.make_move(*mv);
        assert!(!board.is_in_check(Color::White), "{} leaves the king in check", mv);
    }
    assert!(has_move(p.legal_moves(), "f3", "d1"));
    assert!(!has_move(p.legal_moves(), "f3", "g4"));
}

#[test]
fn test_king_cannot_step_into_check() {
    let p = pos("4k3/8/8/8/8/8/8/3rK3 w - - 0 1");
    let king_moves = moves_from(&p, "e1");
    // d1 rook covers the first rank and the d-file, the king may capture it
    assert!(has_move(&king_moves, "e1", "d1"));
    assert!(!has_move(&king_moves, "e1", "f1"));
    assert!(!has_move(&king_moves, "e1", "d2"));
    assert!(has_move(&king_moves, "e1", "e2"));
}

#[test]
fn test_kings_never_touch() {
    let p = pos("8/8/8/3k4/8/3K4/8/8 w - - 0 1");
    let king_moves = moves_from(&p, "d3");
    for target in ["c4", "d4", "e4"] {
        assert!(!has_move(&king_moves, "d3", target), "d3-{} walks next to the king", target);
    }
}
