use super::bitboards::{bitscan_forward, Bitboards};
use super::moves::Move;
use super::piece::{Color, Piece, Type};
use super::square::*;

/// Indices into [`Board::castling_rights`]
pub const WHITE_KINGSIDE: usize = 0;
pub const WHITE_QUEENSIDE: usize = 1;
pub const BLACK_KINGSIDE: usize = 2;
pub const BLACK_QUEENSIDE: usize = 3;

/// The part of a game state that move generation and search need.
///
/// `Board` is `Copy`: legality checks and the reference search work on
/// throwaway copies, the main search mutates one instance through
/// [`Board::make_move`] / [`Board::unmake_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) bitboards: Bitboards,
    pub(crate) side_to_move: Color,
    /// Indexed by `WHITE_KINGSIDE` .. `BLACK_QUEENSIDE`. Only ever cleared.
    pub(crate) castling: [bool; 4],
    /// Square skipped by a two-square pawn advance on the previous move
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
}

/// What `make_move` destroys and `unmake_move` needs back
#[derive(Clone, Copy, Debug)]
pub struct UndoInfo {
    moved: Option<Piece>,
    captured: Option<Piece>,
    castling: [bool; 4],
    en_passant: Option<Square>,
    halfmove_clock: u32,
}

impl Board {
    /// Empty board, white to move, all castling rights held
    pub fn empty() -> Self {
        Self {
            bitboards: Bitboards::empty(),
            side_to_move: Color::White,
            castling: [true; 4],
            en_passant: None,
            halfmove_clock: 0,
        }
    }

    #[inline(always)]
    pub fn bitboards(&self) -> &Bitboards {
        &self.bitboards
    }

    #[inline(always)]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline(always)]
    pub fn castling_rights(&self) -> [bool; 4] {
        self.castling
    }

    #[inline(always)]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline(always)]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.bitboards.piece_at(square as usize)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let kings = self.bitboards.pieces_of_type(color, Type::King);
        if kings == 0 {
            None
        } else {
            Some(bitscan_forward(kings) as Square)
        }
    }

    /// True if `mv` removes an opponent piece (en passant included)
    #[inline]
    pub fn is_capture(&self, mv: Move) -> bool {
        mv.en_passant
            || self.bitboards.occupied_by_color(!self.side_to_move) & (1u64 << mv.to) != 0
    }

    /// Places `piece` and refreshes the aggregates. Setup helper for parsers
    /// and tests, never used while searching.
    pub fn put_piece(&mut self, piece: Piece, square: Square) {
        self.bitboards.take_piece_at(square as usize);
        self.bitboards.add_piece(piece, square as usize);
        self.bitboards.update_aggregates();
    }

    /// Plays `mv` without any legality check and returns what is needed to
    /// take it back. A move from an empty square leaves the board untouched.
    pub fn make_move(&mut self, mv: Move) -> UndoInfo {
        let from = mv.from as usize;
        let to = mv.to as usize;
        let moved = self.bitboards.piece_at(from);

        let mut undo = UndoInfo {
            moved,
            captured: None,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
        };

        let Some(piece) = moved else {
            return undo;
        };
        let us = piece.color;

        self.bitboards.remove_piece(piece, from);

        let captured_sq = if mv.en_passant {
            en_passant_victim(mv.to, us) as usize
        } else {
            to
        };
        let captured = self.bitboards.take_piece_at(captured_sq);

        let placed = match mv.promotion {
            Some(piece_type) => Piece::new(us, piece_type),
            None => piece,
        };
        self.bitboards.add_piece(placed, to);

        if mv.castling {
            if let Some((rook_from, rook_to)) = castling_rook_squares(mv.to) {
                let rook = Piece::new(us, Type::Rook);
                self.bitboards.remove_piece(rook, rook_from as usize);
                self.bitboards.add_piece(rook, rook_to as usize);
            }
        }

        self.bitboards.update_aggregates();

        self.en_passant = if piece.piece_type == Type::Pawn && from.abs_diff(to) == 16 {
            Some(((from + to) / 2) as Square)
        } else {
            None
        };

        revoke_castling(&mut self.castling, mv.from);
        revoke_castling(&mut self.castling, mv.to);

        if piece.piece_type == Type::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        self.side_to_move = !us;
        undo.captured = captured;
        undo
    }

    /// Exact inverse of [`Board::make_move`]
    pub fn unmake_move(&mut self, mv: Move, undo: UndoInfo) {
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;

        let Some(piece) = undo.moved else {
            return;
        };
        let us = piece.color;
        self.side_to_move = us;

        let placed = match mv.promotion {
            Some(piece_type) => Piece::new(us, piece_type),
            None => piece,
        };
        self.bitboards.remove_piece(placed, mv.to as usize);
        self.bitboards.add_piece(piece, mv.from as usize);

        if mv.castling {
            if let Some((rook_from, rook_to)) = castling_rook_squares(mv.to) {
                let rook = Piece::new(us, Type::Rook);
                self.bitboards.remove_piece(rook, rook_to as usize);
                self.bitboards.add_piece(rook, rook_from as usize);
            }
        }

        if let Some(captured) = undo.captured {
            let captured_sq = if mv.en_passant {
                en_passant_victim(mv.to, us)
            } else {
                mv.to
            };
            self.bitboards.add_piece(captured, captured_sq as usize);
        }

        self.bitboards.update_aggregates();
    }

    /// Leaf-node count of the legal move tree, make/unmake driven
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut moves = Vec::with_capacity(64);
        self.legal_moves_into(&mut moves);

        // Bulk counting at the last ply
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let undo = self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.unmake_move(mv, undo);
        }
        nodes
    }
}

/// Square of the pawn removed by an en-passant capture landing on `target`
#[inline]
pub fn en_passant_victim(target: Square, mover: Color) -> Square {
    match mover {
        Color::White => target - 8,
        Color::Black => target + 8,
    }
}

/// (rook from, rook to) for a castling king landing on `king_to`
pub fn castling_rook_squares(king_to: Square) -> Option<(Square, Square)> {
    match king_to {
        G1 => Some((H1, F1)),
        C1 => Some((A1, D1)),
        G8 => Some((H8, F8)),
        C8 => Some((A8, D8)),
        _ => None,
    }
}

fn revoke_castling(castling: &mut [bool; 4], square: Square) {
    match square {
        E1 => {
            castling[WHITE_KINGSIDE] = false;
            castling[WHITE_QUEENSIDE] = false;
        }
        H1 => castling[WHITE_KINGSIDE] = false,
        A1 => castling[WHITE_QUEENSIDE] = false,
        E8 => {
            castling[BLACK_KINGSIDE] = false;
            castling[BLACK_QUEENSIDE] = false;
        }
        H8 => castling[BLACK_KINGSIDE] = false,
        A8 => castling[BLACK_QUEENSIDE] = false,
        _ => {}
    }
}
