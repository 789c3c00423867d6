// Static evaluation
//
// Scores are centipawns. Material comes straight from popcounts, the rest is
// piece-square tables plus a handful of structural terms that are blended
// between middlegame and endgame weights by the remaining non-pawn material.

use super::piece_square_tables::pst_value;
use crate::game_repr::bitboards::{file_mask, offset_square, pop_lsb, popcount, Bitboards};
use crate::game_repr::{Board, Color, Piece, Square, Type};

// Phase weight per piece kind; the start position sums to TOTAL_PHASE
const KNIGHT_PHASE: i32 = 1;
const BISHOP_PHASE: i32 = 1;
const ROOK_PHASE: i32 = 2;
const QUEEN_PHASE: i32 = 4;
const TOTAL_PHASE: i32 = KNIGHT_PHASE * 4 + BISHOP_PHASE * 4 + ROOK_PHASE * 4 + QUEEN_PHASE * 2;

/// Full opening phase; 0 is a bare endgame
pub const OPENING_PHASE: i32 = 256;

/// Score with separate middlegame and endgame components
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaperedScore {
    pub mg: i32,
    pub eg: i32,
}

impl TaperedScore {
    pub const fn new(mg: i32, eg: i32) -> Self {
        Self { mg, eg }
    }

    /// Blend by `phase`, from 0 (endgame) to [`OPENING_PHASE`]
    pub fn interpolate(&self, phase: i32) -> i32 {
        (self.mg * phase + self.eg * (OPENING_PHASE - phase)) / OPENING_PHASE
    }

    pub fn add(&mut self, other: TaperedScore) {
        self.mg += other.mg;
        self.eg += other.eg;
    }

    pub fn sub(&mut self, other: TaperedScore) {
        self.mg -= other.mg;
        self.eg -= other.eg;
    }
}

const DOUBLED_PAWN_PENALTY: TaperedScore = TaperedScore::new(15, 20);
const ISOLATED_PAWN_PENALTY: TaperedScore = TaperedScore::new(20, 25);
const PASSED_PAWN_BONUS: TaperedScore = TaperedScore::new(40, 70);
const PAWN_SHIELD_BONUS: TaperedScore = TaperedScore::new(15, 5);
const BISHOP_PAIR_BONUS: TaperedScore = TaperedScore::new(40, 50);

/// Remaining non-pawn material scaled to 0..=[`OPENING_PHASE`]
pub fn game_phase(board: &Board) -> i32 {
    let bb = board.bitboards();
    let weight = |piece_type, per_piece| {
        let count = popcount(bb.pieces_of_type(Color::White, piece_type))
            + popcount(bb.pieces_of_type(Color::Black, piece_type));
        count as i32 * per_piece
    };

    let phase = weight(Type::Knight, KNIGHT_PHASE)
        + weight(Type::Bishop, BISHOP_PHASE)
        + weight(Type::Rook, ROOK_PHASE)
        + weight(Type::Queen, QUEEN_PHASE);

    ((phase * OPENING_PHASE + TOTAL_PHASE / 2) / TOTAL_PHASE).clamp(0, OPENING_PHASE)
}

pub fn is_endgame(board: &Board) -> bool {
    game_phase(board) < OPENING_PHASE / 2
}

/// Material plus piece-square values, white minus black
fn material_and_position(bb: &Bitboards, endgame: bool) -> i32 {
    let mut score = 0;

    for idx in 0..12 {
        let piece = Piece::from_bitboard_index(idx);
        let mut pieces = bb.board(idx);
        let mut side_total = popcount(pieces) as i32 * piece.piece_type.value();

        while pieces != 0 {
            let square = pop_lsb(&mut pieces) as Square;
            side_total += pst_value(piece, square, endgame);
        }

        match piece.color {
            Color::White => score += side_total,
            Color::Black => score -= side_total,
        }
    }

    score
}

/// Squares in front of a pawn on its own and both neighbouring files
fn passed_pawn_span(square: usize, color: Color) -> u64 {
    let file = square % 8;
    let rank = square / 8;

    let mut files = file_mask(file as u8);
    if file > 0 {
        files |= file_mask(file as u8 - 1);
    }
    if file < 7 {
        files |= file_mask(file as u8 + 1);
    }

    let ahead = match color {
        Color::White => u64::MAX.checked_shl(8 * (rank as u32 + 1)).unwrap_or(0),
        Color::Black => (1u64 << (8 * rank)) - 1,
    };

    files & ahead
}

fn pawn_structure(bb: &Bitboards, color: Color) -> TaperedScore {
    let mut score = TaperedScore::default();
    let own = bb.pieces_of_type(color, Type::Pawn);
    let enemy = bb.pieces_of_type(!color, Type::Pawn);

    let mut per_file = [0u32; 8];
    for (file, count) in per_file.iter_mut().enumerate() {
        *count = popcount(own & file_mask(file as u8));
    }

    let mut pawns = own;
    while pawns != 0 {
        let square = pop_lsb(&mut pawns);
        let file = square % 8;

        if per_file[file] > 1 {
            score.sub(DOUBLED_PAWN_PENALTY);
        }

        let left = file > 0 && per_file[file - 1] > 0;
        let right = file < 7 && per_file[file + 1] > 0;
        if !left && !right {
            score.sub(ISOLATED_PAWN_PENALTY);
        }

        if passed_pawn_span(square, color) & enemy == 0 {
            score.add(PASSED_PAWN_BONUS);
        }
    }

    score
}

/// Own pawns on the two ranks in front of the king, king file and neighbours
fn king_shield(board: &Board, color: Color) -> TaperedScore {
    let mut score = TaperedScore::default();
    let Some(king) = board.king_square(color) else {
        return score;
    };

    let forward: i8 = match color {
        Color::White => 1,
        Color::Black => -1,
    };
    let pawns = board.bitboards().pieces_of_type(color, Type::Pawn);

    for step in 1..=2 {
        for df in -1..=1 {
            if let Some(sq) = offset_square(king as usize, df, forward * step) {
                if pawns & (1u64 << sq) != 0 {
                    score.add(PAWN_SHIELD_BONUS);
                }
            }
        }
    }

    score
}

fn bishop_pair(bb: &Bitboards, color: Color) -> TaperedScore {
    if popcount(bb.pieces_of_type(color, Type::Bishop)) >= 2 {
        BISHOP_PAIR_BONUS
    } else {
        TaperedScore::default()
    }
}

/// Evaluation from White's point of view
pub fn evaluate_white(board: &Board) -> i32 {
    let bb = board.bitboards();
    let phase = game_phase(board);
    let material = material_and_position(bb, phase < OPENING_PHASE / 2);

    let mut structure = TaperedScore::default();
    for (color, sign) in [(Color::White, 1), (Color::Black, -1)] {
        let mut side = pawn_structure(bb, color);
        side.add(king_shield(board, color));
        side.add(bishop_pair(bb, color));
        structure.mg += sign * side.mg;
        structure.eg += sign * side.eg;
    }

    material + structure.interpolate(phase)
}

/// Evaluation from the side to move's point of view (positive = good for the mover)
pub fn evaluate(board: &Board) -> i32 {
    let score = evaluate_white(board);
    match board.side_to_move() {
        Color::White => score,
        Color::Black => -score,
    }
}
