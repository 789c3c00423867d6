use super::push_targets;
use crate::game_repr::bitboards::rook_attacks;
use crate::game_repr::board::Board;
use crate::game_repr::moves::Move;

impl Board {
    pub(crate) fn rook_moves_into(&self, idx: usize, moves: &mut Vec<Move>) {
        let own = self.bitboards.occupied_by_color(self.side_to_move);
        let attacks = rook_attacks(idx, self.bitboards.all_occupied());
        push_targets(idx, attacks & !own, moves);
    }
}
