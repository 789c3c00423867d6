use super::*;

// ==================== PROMOTION TESTS ====================

#[test]
fn test_push_to_last_rank_offers_four_promotions() {
    let p = pos("4k3/6P1/8/8/8/8/8/4K3 w - - 0 1");
    let promotions: Vec<_> = p
        .legal_moves()
        .iter()
        .filter(|m| m.from == sq("g7") && m.to == sq("g8"))
        .collect();

    assert_eq!(promotions.len(), 4);
    for piece_type in Type::PROMOTIONS {
        assert!(promotions.iter().any(|m| m.promotion == Some(piece_type)));
    }
}

#[test]
fn test_promotion_execution() {
    let mut p = pos("4k3/6P1/8/8/8/8/8/4K3 w - - 0 1");
    play(&mut p, &["g7g8n"]);
    assert_eq!(p.piece_at(sq("g8")), Some(Piece::new(Color::White, Type::Knight)));
    assert_eq!(p.piece_at(sq("g7")), None);
}

#[test]
fn test_promotion_on_capture() {
    let p = pos("4k2r/6P1/8/8/8/8/8/4K3 w - - 0 1");
    let captures = p
        .legal_moves()
        .iter()
        .filter(|m| m.from == sq("g7") && m.to == sq("h8") && m.is_promotion())
        .count();
    assert_eq!(captures, 4, "Pawn should promote when capturing on back rank");
}

#[test]
fn test_blocked_pawn_does_not_promote() {
    let p = pos("6n1/6P1/8/8/8/k7/8/K7 w - - 0 1");
    assert!(moves_from(&p, "g7").is_empty());
}

#[test]
fn test_black_pawn_promotion() {
    let mut p = pos("4k3/8/8/8/8/8/1p6/4K3 b - - 0 1");
    assert_eq!(moves_from(&p, "b2").len(), 4);

    play(&mut p, &["b2b1q"]);
    assert_eq!(p.piece_at(sq("b1")), Some(Piece::new(Color::Black, Type::Queen)));
    assert!(p.is_in_check(), "queen on b1 checks along the first rank");
}
