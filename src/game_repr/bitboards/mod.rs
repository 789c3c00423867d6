use super::piece::{Color, Piece, Type};

pub mod tables;
pub use tables::*;

/// Twelve piece bitboards plus the three aggregates derived from them.
///
/// Bit `n` is square `n` (a1 = 0). The piece boards are the source of truth;
/// `white`, `black` and `all` are caches rebuilt by [`Bitboards::update_aggregates`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bitboards {
    /// Indexed by [`Piece::bitboard_index`]: white pawn..king, then black pawn..king
    pieces: [u64; 12],
    white: u64,
    black: u64,
    all: u64,
}

#[inline(always)]
const fn bit(square: usize) -> u64 {
    1u64 << square
}

impl Bitboards {
    pub fn empty() -> Self {
        Self {
            pieces: [0; 12],
            white: 0,
            black: 0,
            all: 0,
        }
    }

    #[inline(always)]
    pub fn board(&self, piece_idx: usize) -> u64 {
        self.pieces[piece_idx]
    }

    #[inline(always)]
    pub fn pieces_of_type(&self, color: Color, piece_type: Type) -> u64 {
        self.pieces[Piece::new(color, piece_type).bitboard_index()]
    }

    #[inline(always)]
    pub fn occupied_by_color(&self, color: Color) -> u64 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline(always)]
    pub fn all_occupied(&self) -> u64 {
        self.all
    }

    /// Must run after any batch of `add_piece`/`remove_piece` calls
    pub fn update_aggregates(&mut self) {
        let (white, black) = self.pieces.split_at(6);
        self.white = white.iter().fold(0, |acc, bb| acc | bb);
        self.black = black.iter().fold(0, |acc, bb| acc | bb);
        self.all = self.white | self.black;
    }

    pub fn piece_at(&self, square: usize) -> Option<Piece> {
        if self.all & bit(square) == 0 {
            return None;
        }
        self.pieces
            .iter()
            .position(|bb| bb & bit(square) != 0)
            .map(Piece::from_bitboard_index)
    }

    #[inline]
    pub fn add_piece(&mut self, piece: Piece, square: usize) {
        self.pieces[piece.bitboard_index()] |= bit(square);
    }

    #[inline]
    pub fn remove_piece(&mut self, piece: Piece, square: usize) {
        self.pieces[piece.bitboard_index()] &= !bit(square);
    }

    /// Removes whatever stands on `square` and returns it
    pub fn take_piece_at(&mut self, square: usize) -> Option<Piece> {
        let piece = self.piece_at(square)?;
        self.remove_piece(piece, square);
        Some(piece)
    }
}

/// Clears the lowest set bit and returns its square
#[inline(always)]
pub fn pop_lsb(bb: &mut u64) -> usize {
    let sq = bb.trailing_zeros() as usize;
    *bb &= *bb - 1;
    sq
}

#[inline(always)]
pub fn bitscan_forward(bb: u64) -> usize {
    bb.trailing_zeros() as usize
}

#[inline]
pub fn popcount(bb: u64) -> u32 {
    bb.count_ones()
}

pub const FILE_A: u64 = 0x0101010101010101;

/// Every square on the given file (0 = a)
#[inline]
pub const fn file_mask(file: u8) -> u64 {
    FILE_A << file
}
