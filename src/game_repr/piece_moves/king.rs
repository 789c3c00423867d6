use super::push_targets;
use crate::game_repr::bitboards::KING_ATTACKS;
use crate::game_repr::board::*;
use crate::game_repr::moves::Move;
use crate::game_repr::piece::{Color, Piece, Type};
use crate::game_repr::square::*;

impl Board {
    pub(crate) fn king_moves_into(&self, idx: usize, moves: &mut Vec<Move>) {
        let us = self.side_to_move;
        let own = self.bitboards.occupied_by_color(us);
        push_targets(idx, KING_ATTACKS[idx] & !own, moves);

        let (home, kingside, queenside) = match us {
            Color::White => (E1, WHITE_KINGSIDE, WHITE_QUEENSIDE),
            Color::Black => (E8, BLACK_KINGSIDE, BLACK_QUEENSIDE),
        };
        if idx != home as usize {
            return;
        }
        if !self.castling[kingside] && !self.castling[queenside] {
            return;
        }
        // Can't castle out of check
        if self.is_in_check(us) {
            return;
        }

        let them = !us;
        let rook = Piece::new(us, Type::Rook);
        let occupied = self.bitboards.all_occupied();
        let empty = |squares: &[Square]| squares.iter().all(|&sq| occupied & (1u64 << sq) == 0);
        let safe = |squares: &[Square]| {
            squares
                .iter()
                .all(|&sq| !self.is_square_attacked(sq as usize, them))
        };

        // Kingside: f and g empty, king crosses f and lands on g
        if self.castling[kingside] {
            let (f, g, h) = (home + 1, home + 2, home + 3);
            if self.piece_at(h) == Some(rook) && empty(&[f, g]) && safe(&[f, g]) {
                moves.push(Move::castling(home, g));
            }
        }

        // Queenside: b, c and d empty, king crosses d and lands on c
        if self.castling[queenside] {
            let (d, c, b, a) = (home - 1, home - 2, home - 3, home - 4);
            if self.piece_at(a) == Some(rook) && empty(&[b, c, d]) && safe(&[d, c]) {
                moves.push(Move::castling(home, c));
            }
        }
    }
}
