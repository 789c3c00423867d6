// Pseudo-legal move generation, one file per piece kind.
// Nothing here checks king safety; `Board::legal_moves_into` filters.

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;

use super::bitboards::pop_lsb;
use super::board::Board;
use super::moves::Move;
use super::piece::Type;
use super::square::Square;

/// Pushes a plain move from `from` to every square set in `targets`
#[inline]
fn push_targets(from: usize, mut targets: u64, moves: &mut Vec<Move>) {
    while targets != 0 {
        let to = pop_lsb(&mut targets);
        moves.push(Move::new(from as Square, to as Square));
    }
}

impl Board {
    /// Every pseudo-legal move for the side to move, appended to `moves`
    pub fn pseudo_legal_moves_into(&self, moves: &mut Vec<Move>) {
        let us = self.side_to_move;

        for piece_type in Type::ALL {
            let mut pieces = self.bitboards.pieces_of_type(us, piece_type);
            while pieces != 0 {
                let square = pop_lsb(&mut pieces);
                match piece_type {
                    Type::Pawn => self.pawn_moves_into(square, moves),
                    Type::Knight => self.knight_moves_into(square, moves),
                    Type::Bishop => self.bishop_moves_into(square, moves),
                    Type::Rook => self.rook_moves_into(square, moves),
                    Type::Queen => self.queen_moves_into(square, moves),
                    Type::King => self.king_moves_into(square, moves),
                }
            }
        }
    }
}
