// Attack detection and the king-safety filter that turns pseudo-legal moves
// into legal ones.

use super::bitboards::*;
use super::board::Board;
use super::moves::Move;
use super::piece::{Color, Type};

impl Board {
    /// Checks if a square is attacked by any piece of `by_color`
    pub fn is_square_attacked(&self, square: usize, by_color: Color) -> bool {
        let bb = &self.bitboards;
        let occupied = bb.all_occupied();

        // Reverse pawn lookup: a `by_color` pawn attacks `square` iff a pawn of the
        // other color standing on `square` would attack the pawn's square.
        let pawn_sources = PAWN_ATTACKS[by_color.opposite().index()][square];
        if pawn_sources & bb.pieces_of_type(by_color, Type::Pawn) != 0 {
            return true;
        }

        if KNIGHT_ATTACKS[square] & bb.pieces_of_type(by_color, Type::Knight) != 0 {
            return true;
        }

        if KING_ATTACKS[square] & bb.pieces_of_type(by_color, Type::King) != 0 {
            return true;
        }

        let queens = bb.pieces_of_type(by_color, Type::Queen);

        let diagonal = bb.pieces_of_type(by_color, Type::Bishop) | queens;
        if diagonal != 0 && bishop_attacks(square, occupied) & diagonal != 0 {
            return true;
        }

        let straight = bb.pieces_of_type(by_color, Type::Rook) | queens;
        straight != 0 && rook_attacks(square, occupied) & straight != 0
    }

    /// Checks if the king of the given color is currently in check
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_square_attacked(king as usize, color.opposite()),
            // No king (only in hand-built test boards)
            None => false,
        }
    }

    /// Plays `mv` on a copy and reports whether the mover's king survives
    pub fn is_move_legal(&self, mv: Move) -> bool {
        let mover = self.side_to_move;
        let mut scratch = *self;
        scratch.make_move(mv);
        !scratch.is_in_check(mover)
    }

    /// True if `mv` leaves the opponent in check
    pub fn gives_check(&self, mv: Move) -> bool {
        let mut scratch = *self;
        scratch.make_move(mv);
        scratch.is_in_check(scratch.side_to_move)
    }

    /// Legal moves for the side to move. The buffer is cleared first.
    pub fn legal_moves_into(&self, moves: &mut Vec<Move>) {
        moves.clear();
        self.pseudo_legal_moves_into(moves);
        moves.retain(|&mv| self.is_move_legal(mv));
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(48);
        self.legal_moves_into(&mut moves);
        moves
    }

    /// Legal captures only (en passant and capturing promotions included)
    pub fn legal_captures_into(&self, moves: &mut Vec<Move>) {
        moves.clear();
        self.pseudo_legal_moves_into(moves);
        moves.retain(|&mv| self.is_capture(mv) && self.is_move_legal(mv));
    }

    pub fn has_legal_moves(&self) -> bool {
        let mut moves = Vec::with_capacity(48);
        self.pseudo_legal_moves_into(&mut moves);
        moves.into_iter().any(|mv| self.is_move_legal(mv))
    }

    /// Side to move is in check and has no legal reply
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.side_to_move) && !self.has_legal_moves()
    }

    /// Side to move is not in check and has no legal move
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.side_to_move) && !self.has_legal_moves()
    }
}

#[cfg(test)]
mod tests {
    use crate::game_repr::board::Board;
    use crate::game_repr::piece::{Color, Piece};
    use crate::game_repr::square::from_algebraic;

    fn board_with(pieces: &[(char, &str)]) -> Board {
        let mut board = Board::empty();
        for &(c, name) in pieces {
            board.put_piece(Piece::from_char(c).unwrap(), from_algebraic(name).unwrap());
        }
        board
    }

    fn sq(name: &str) -> usize {
        from_algebraic(name).unwrap() as usize
    }

    #[test]
    fn test_pawn_attacks_point_forward() {
        let board = board_with(&[('P', "e4"), ('p', "d6")]);
        assert!(board.is_square_attacked(sq("d5"), Color::White));
        assert!(board.is_square_attacked(sq("f5"), Color::White));
        assert!(!board.is_square_attacked(sq("e5"), Color::White));
        assert!(!board.is_square_attacked(sq("d3"), Color::White));

        assert!(board.is_square_attacked(sq("e5"), Color::Black));
        assert!(board.is_square_attacked(sq("c5"), Color::Black));
        assert!(!board.is_square_attacked(sq("d7"), Color::Black));
    }

    #[test]
    fn test_slider_attack_is_blocked() {
        let board = board_with(&[('R', "a1"), ('N', "a4"), ('b', "h8"), ('p', "d4")]);
        assert!(board.is_square_attacked(sq("a4"), Color::White));
        assert!(!board.is_square_attacked(sq("a5"), Color::White));
        assert!(board.is_square_attacked(sq("e5"), Color::Black));
        assert!(board.is_square_attacked(sq("d4"), Color::Black));
        assert!(!board.is_square_attacked(sq("b2"), Color::Black));
    }

    #[test]
    fn test_pinned_piece_cannot_leave_the_line() {
        let board = board_with(&[('K', "e1"), ('N', "e2"), ('r', "e8"), ('k', "a8")]);
        let moves = board.legal_moves();
        assert!(moves.iter().all(|mv| mv.from != from_algebraic("e2").unwrap()));
    }

    #[test]
    fn test_gives_check() {
        let board = board_with(&[('K', "e1"), ('Q', "d1"), ('k', "d8")]);
        let check = crate::game_repr::Move::new(sq("d1") as u8, sq("d4") as u8);
        let quiet = crate::game_repr::Move::new(sq("d1") as u8, sq("c2") as u8);
        assert!(board.gives_check(check));
        assert!(!board.gives_check(quiet));
    }
}
