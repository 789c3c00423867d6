use super::push_targets;
use crate::game_repr::bitboards::KNIGHT_ATTACKS;
use crate::game_repr::board::Board;
use crate::game_repr::moves::Move;

impl Board {
    pub(crate) fn knight_moves_into(&self, idx: usize, moves: &mut Vec<Move>) {
        let own = self.bitboards.occupied_by_color(self.side_to_move);
        push_targets(idx, KNIGHT_ATTACKS[idx] & !own, moves);
    }
}
