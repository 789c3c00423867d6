// Attack masks. Leapers (knight, king, pawn) come from tables built at compile
// time; sliders are ray-cast against the current occupancy on every call.
//
// All geometry is expressed as (file, rank) deltas so that a step off the
// board is rejected by a bounds check instead of wrapping to the next rank.

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
    (1, -2),
    (-1, -2),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Diagonal step directions as (file, rank) deltas
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Orthogonal step directions as (file, rank) deltas
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// KNIGHT_ATTACKS[square] is every square a knight on `square` attacks
pub static KNIGHT_ATTACKS: [u64; 64] = generate_leaper_attacks(&KNIGHT_DELTAS);

/// KING_ATTACKS[square] is every square a king on `square` attacks
pub static KING_ATTACKS: [u64; 64] = generate_leaper_attacks(&KING_DELTAS);

/// PAWN_ATTACKS[color][square]: squares a pawn of `color` on `square` captures on.
/// Index 0 = White (captures toward rank 8), 1 = Black.
pub static PAWN_ATTACKS: [[u64; 64]; 2] = [
    generate_leaper_attacks(&[(-1, 1), (1, 1)]),
    generate_leaper_attacks(&[(-1, -1), (1, -1)]),
];

/// Target square of one (file, rank) step from `sq`, or `None` off the board
#[inline(always)]
pub const fn offset_square(sq: usize, df: i8, dr: i8) -> Option<usize> {
    let file = (sq % 8) as i8 + df;
    let rank = (sq / 8) as i8 + dr;
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        None
    } else {
        Some((rank * 8 + file) as usize)
    }
}

const fn generate_leaper_attacks(deltas: &[(i8, i8)]) -> [u64; 64] {
    let mut attacks = [0u64; 64];
    let mut sq = 0;

    while sq < 64 {
        let mut i = 0;
        while i < deltas.len() {
            let (df, dr) = deltas[i];
            if let Some(target) = offset_square(sq, df, dr) {
                attacks[sq] |= 1u64 << target;
            }
            i += 1;
        }
        sq += 1;
    }

    attacks
}

/// Casts a ray from `sq` in each direction, stopping at the first occupied
/// square. The blocker is included; callers mask out their own pieces.
#[inline]
pub fn slider_attacks(sq: usize, occupied: u64, directions: &[(i8, i8)]) -> u64 {
    let mut attacks = 0u64;

    for &(df, dr) in directions {
        let mut current = sq;
        while let Some(next) = offset_square(current, df, dr) {
            let bit = 1u64 << next;
            attacks |= bit;
            if occupied & bit != 0 {
                break;
            }
            current = next;
        }
    }

    attacks
}

#[inline]
pub fn bishop_attacks(sq: usize, occupied: u64) -> u64 {
    slider_attacks(sq, occupied, &BISHOP_DIRECTIONS)
}

#[inline]
pub fn rook_attacks(sq: usize, occupied: u64) -> u64 {
    slider_attacks(sq, occupied, &ROOK_DIRECTIONS)
}

#[inline]
pub fn queen_attacks(sq: usize, occupied: u64) -> u64 {
    bishop_attacks(sq, occupied) | rook_attacks(sq, occupied)
}
