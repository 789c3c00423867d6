use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Square index from its algebraic name
pub fn sq(name: &str) -> Square {
    from_algebraic(name).unwrap()
}

/// Position from a FEN record (trailing fields optional)
pub fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

/// Check if a move between the two named squares exists in the list
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves.iter().any(|m| m.from == sq(from) && m.to == sq(to))
}

/// Legal moves starting on the named square
pub fn moves_from(position: &Position, from: &str) -> Vec<Move> {
    position
        .legal_moves()
        .iter()
        .copied()
        .filter(|m| m.from == sq(from))
        .collect()
}

/// Applies a sequence of long-algebraic moves, panicking on the first illegal one
pub fn play(position: &mut Position, moves: &[&str]) {
    for text in moves {
        let mv = position
            .find_move_str(text)
            .unwrap_or_else(|| panic!("{} is not legal in {}", text, position.to_fen()));
        position.apply_move(mv).unwrap();
    }
}

// ==================== TEST MODULES ====================

mod check_detection;
mod perft;
mod promotion;
mod stalemate;
