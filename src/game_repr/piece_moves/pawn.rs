use crate::game_repr::bitboards::PAWN_ATTACKS;
use crate::game_repr::board::Board;
use crate::game_repr::moves::Move;
use crate::game_repr::piece::{Color, Type};
use crate::game_repr::square::{rank_of, Square};

impl Board {
    pub(crate) fn pawn_moves_into(&self, idx: usize, moves: &mut Vec<Move>) {
        let us = self.side_to_move;
        let occupied = self.bitboards.all_occupied();
        let enemies = self.bitboards.occupied_by_color(!us);
        let from = idx as Square;

        let (step, start_rank, last_rank): (isize, u8, u8) = match us {
            Color::White => (8, 1, 7),
            Color::Black => (-8, 6, 0),
        };

        let push_with_promotion = |to: Square, moves: &mut Vec<Move>| {
            if rank_of(to) == last_rank {
                for piece_type in Type::PROMOTIONS {
                    moves.push(Move::promotion(from, to, piece_type));
                }
            } else {
                moves.push(Move::new(from, to));
            }
        };

        // Pushes. A pawn on its last rank cannot exist, so one step is always on the board.
        let single = (idx as isize + step) as usize;
        if (0..64).contains(&single) && occupied & (1u64 << single) == 0 {
            push_with_promotion(single as Square, moves);

            if rank_of(from) == start_rank {
                let double = (single as isize + step) as usize;
                if occupied & (1u64 << double) == 0 {
                    moves.push(Move::new(from, double as Square));
                }
            }
        }

        // Captures
        let attacks = PAWN_ATTACKS[us.index()][idx];
        let mut captures = attacks & enemies;
        while captures != 0 {
            let to = captures.trailing_zeros() as Square;
            captures &= captures - 1;
            push_with_promotion(to, moves);
        }

        if let Some(ep) = self.en_passant {
            if attacks & (1u64 << ep) != 0 {
                moves.push(Move::en_passant(from, ep));
            }
        }
    }
}
