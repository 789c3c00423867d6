use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::bitboards::pop_lsb;
use super::board::Board;
use super::piece::Color;
use super::square::file_of;

/// Seed for the process-wide table, fixed so hashes are reproducible across runs
pub const DEFAULT_SEED: u64 = 0x517cc1b727220a95;

static SHARED: Lazy<ZobristKeys> = Lazy::new(|| ZobristKeys::new(DEFAULT_SEED));

/// Random keys for Zobrist hashing.
///
/// The table is immutable once built. Components that hash receive it by
/// reference; [`ZobristKeys::shared`] hands out the lazily built default one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZobristKeys {
    /// [piece bitboard index][square]
    pieces: [[u64; 64]; 12],
    /// Same order as [`Board::castling_rights`]
    castling: [u64; 4],
    /// [file] of the en-passant target
    en_passant: [u64; 8],
    /// XORed in when black is to move
    side_to_move: u64,
}

impl ZobristKeys {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut pieces = [[0u64; 64]; 12];
        for board in &mut pieces {
            for key in board.iter_mut() {
                *key = rng.gen();
            }
        }

        let mut castling = [0u64; 4];
        for key in &mut castling {
            *key = rng.gen();
        }

        let mut en_passant = [0u64; 8];
        for key in &mut en_passant {
            *key = rng.gen();
        }

        Self {
            pieces,
            castling,
            en_passant,
            side_to_move: rng.gen(),
        }
    }

    /// The process-wide table, built on first use
    pub fn shared() -> &'static ZobristKeys {
        &SHARED
    }

    #[inline]
    pub fn side_key(&self) -> u64 {
        self.side_to_move
    }

    /// Full recomputation over pieces, castling rights, en-passant file and side
    pub fn hash(&self, board: &Board) -> u64 {
        let mut hash = 0u64;

        for (idx, keys) in self.pieces.iter().enumerate() {
            let mut bb = board.bitboards.board(idx);
            while bb != 0 {
                hash ^= keys[pop_lsb(&mut bb)];
            }
        }

        for (held, key) in board.castling.iter().zip(self.castling) {
            if *held {
                hash ^= key;
            }
        }

        if let Some(ep) = board.en_passant {
            hash ^= self.en_passant[file_of(ep) as usize];
        }

        if board.side_to_move == Color::Black {
            hash ^= self.side_to_move;
        }

        hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::board::WHITE_QUEENSIDE;
    use crate::game_repr::piece::Piece;

    fn kings_and_pawn() -> Board {
        let mut board = Board::empty();
        board.put_piece(Piece::from_char('K').unwrap(), 4);
        board.put_piece(Piece::from_char('k').unwrap(), 60);
        board.put_piece(Piece::from_char('P').unwrap(), 12);
        board
    }

    #[test]
    fn test_same_seed_same_keys() {
        assert_eq!(ZobristKeys::new(7), ZobristKeys::new(7));
        assert_ne!(ZobristKeys::new(7), ZobristKeys::new(8));
    }

    #[test]
    fn test_shared_is_memoized() {
        assert!(std::ptr::eq(ZobristKeys::shared(), ZobristKeys::shared()));
        assert_eq!(*ZobristKeys::shared(), ZobristKeys::new(DEFAULT_SEED));
    }

    #[test]
    fn test_hash_is_deterministic() {
        let keys = ZobristKeys::shared();
        assert_eq!(keys.hash(&kings_and_pawn()), keys.hash(&kings_and_pawn()));
        assert_ne!(keys.hash(&kings_and_pawn()), 0);
    }

    #[test]
    fn test_side_to_move_flips_one_key() {
        let keys = ZobristKeys::shared();
        let white = kings_and_pawn();
        let mut black = white;
        black.side_to_move = Color::Black;
        assert_eq!(keys.hash(&white) ^ keys.hash(&black), keys.side_key());
    }

    #[test]
    fn test_castling_and_en_passant_change_hash() {
        let keys = ZobristKeys::shared();
        let base = kings_and_pawn();

        let mut no_castle = base;
        no_castle.castling[WHITE_QUEENSIDE] = false;
        assert_ne!(keys.hash(&base), keys.hash(&no_castle));

        let mut with_ep = base;
        with_ep.en_passant = Some(20);
        assert_ne!(keys.hash(&base), keys.hash(&with_ep));
    }

    #[test]
    fn test_placement_changes_hash() {
        let keys = ZobristKeys::shared();
        let base = kings_and_pawn();
        let mut moved = base;
        moved.make_move(crate::game_repr::Move::new(12, 20));
        moved.side_to_move = Color::White;
        assert_ne!(keys.hash(&base), keys.hash(&moved));
    }
}
