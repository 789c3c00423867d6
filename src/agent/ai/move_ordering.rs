// Move ordering for alpha-beta
//
// Moves are scored once and sorted best-first. Priority, high to low:
// hash move, captures by MVV-LVA, promotions, checks, killers, history.
// The bands are wide enough that a lower category never overtakes a higher one.

use smallvec::SmallVec;

use crate::game_repr::{Board, Move, Type};

const HASH_MOVE_SCORE: i32 = 1_000_000;
const CAPTURE_BASE: i32 = 100_000;
const PROMOTION_BASE: i32 = 90_000;
const CHECK_BONUS: i32 = 20_000;
const PRIMARY_KILLER_BONUS: i32 = 9_000;
const SECONDARY_KILLER_BONUS: i32 = 8_000;

/// History scores are kept below the killer band
const HISTORY_LIMIT: i32 = 7_000;

/// Deepest ply the killer table tracks
pub const MAX_PLY: usize = 128;

#[derive(Debug, Clone, Copy)]
struct MoveScore {
    mv: Move,
    score: i32,
}

/// Two quiet moves per ply that recently caused a beta cutoff
pub struct KillerMoves {
    slots: [[Option<Move>; 2]; MAX_PLY],
}

impl KillerMoves {
    pub fn new() -> Self {
        Self {
            slots: [[None; 2]; MAX_PLY],
        }
    }

    /// Records `mv` as the newest killer at `ply`, demoting the previous one
    pub fn store(&mut self, ply: usize, mv: Move) {
        let Some(slot) = self.slots.get_mut(ply) else {
            return;
        };
        if slot[0] != Some(mv) {
            slot[1] = slot[0];
            slot[0] = Some(mv);
        }
    }

    /// 0 for the primary killer, 1 for the secondary, `None` otherwise
    pub fn rank(&self, ply: usize, mv: Move) -> Option<usize> {
        let slot = self.slots.get(ply)?;
        slot.iter().position(|&killer| killer == Some(mv))
    }

    pub fn clear(&mut self) {
        self.slots = [[None; 2]; MAX_PLY];
    }
}

impl Default for KillerMoves {
    fn default() -> Self {
        Self::new()
    }
}

/// Cutoff counts per (from, to), weighted by depth squared
pub struct HistoryTable {
    scores: Box<[[i32; 64]; 64]>,
}

impl HistoryTable {
    pub fn new() -> Self {
        Self {
            scores: Box::new([[0; 64]; 64]),
        }
    }

    pub fn update(&mut self, mv: Move, depth: u8) {
        let bonus = depth as i32 * depth as i32;
        let cell = &mut self.scores[mv.from as usize][mv.to as usize];
        *cell += bonus;

        if *cell > HISTORY_LIMIT {
            self.age();
        }
    }

    /// Halves every score so older cutoffs fade
    pub fn age(&mut self) {
        for row in self.scores.iter_mut() {
            for score in row.iter_mut() {
                *score /= 2;
            }
        }
    }

    #[inline]
    pub fn score(&self, mv: Move) -> i32 {
        self.scores[mv.from as usize][mv.to as usize]
    }

    pub fn clear(&mut self) {
        for row in self.scores.iter_mut() {
            row.fill(0);
        }
    }
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Most valuable victim, least valuable attacker
pub fn mvv_lva(board: &Board, mv: Move) -> i32 {
    let victim = if mv.en_passant {
        Type::Pawn.value()
    } else {
        board.piece_at(mv.to).map_or(0, |p| p.piece_type.value())
    };
    let attacker = board.piece_at(mv.from).map_or(0, |p| p.piece_type.value());
    // King's value would swamp the victim term
    10 * victim - attacker.min(Type::Queen.value())
}

/// Everything the ordering heuristics look at besides the board
pub struct OrderingContext<'a> {
    pub hash_move: Option<Move>,
    pub killers: &'a KillerMoves,
    pub history: &'a HistoryTable,
    pub ply: usize,
}

fn score_move(board: &Board, mv: Move, ctx: &OrderingContext) -> i32 {
    if ctx.hash_move == Some(mv) {
        return HASH_MOVE_SCORE;
    }

    let mut score = 0;
    let capture = board.is_capture(mv);

    if capture {
        score += CAPTURE_BASE + mvv_lva(board, mv);
    }

    if let Some(piece_type) = mv.promotion {
        score += PROMOTION_BASE + piece_type.value();
    }

    if board.gives_check(mv) {
        score += CHECK_BONUS;
    }

    if !capture && !mv.is_promotion() {
        match ctx.killers.rank(ctx.ply, mv) {
            Some(0) => score += PRIMARY_KILLER_BONUS,
            Some(_) => score += SECONDARY_KILLER_BONUS,
            None => score += ctx.history.score(mv).min(HISTORY_LIMIT),
        }
    }

    score
}

/// `moves` sorted best-first for the main search
pub fn order_moves(board: &Board, moves: &[Move], ctx: &OrderingContext) -> SmallVec<[Move; 64]> {
    let mut scored: SmallVec<[MoveScore; 64]> = moves
        .iter()
        .map(|&mv| MoveScore {
            mv,
            score: score_move(board, mv, ctx),
        })
        .collect();

    // Stable, so equal scores keep generator order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.into_iter().map(|ms| ms.mv).collect()
}

/// Captures sorted by MVV-LVA for quiescence
pub fn order_captures(board: &Board, captures: &[Move]) -> SmallVec<[Move; 32]> {
    let mut ordered: SmallVec<[Move; 32]> = captures.iter().copied().collect();
    ordered.sort_by_cached_key(|&mv| {
        let promotion = mv.promotion.map_or(0, |t| t.value());
        -(mvv_lva(board, mv) + promotion)
    });
    ordered
}
