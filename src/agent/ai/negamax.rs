// Negamax search with alpha-beta pruning
//
// Scores are always from the point of view of the side to move, so each
// recursion negates the child's score and swaps the window. The board is
// mutated in place through make/unmake; nothing else is shared between
// sibling branches except the tables in `SearchState`.

use super::move_ordering::{order_moves, HistoryTable, KillerMoves, OrderingContext};
use super::transposition_table::{Bound, TranspositionEntry, TranspositionTable};
use crate::game_repr::{Board, Move, ZobristKeys};

/// Score of being checkmated at the root; mates further away score closer to zero
pub const MATE_SCORE: i32 = 30000;

/// Outside any reachable score, safe to negate
pub const INFINITY: i32 = MATE_SCORE + 1000;

/// Scores this close to [`MATE_SCORE`] encode a forced mate
const MATE_THRESHOLD: i32 = MATE_SCORE - 1000;

pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_THRESHOLD
}

/// Full moves until mate: positive when the side to move mates,
/// negative when it gets mated, `None` for ordinary scores
pub fn mate_in(score: i32) -> Option<i32> {
    if !is_mate_score(score) {
        return None;
    }
    let plies = MATE_SCORE - score.abs();
    let moves = (plies + 1) / 2;
    Some(if score > 0 { moves } else { -moves })
}

// Mate scores are stored relative to the node, not the root, so that a
// transposition reached at another ply reads back the right distance.
fn score_to_tt(score: i32, ply: u8) -> i32 {
    if score >= MATE_THRESHOLD {
        score + ply as i32
    } else if score <= -MATE_THRESHOLD {
        score - ply as i32
    } else {
        score
    }
}

fn score_from_tt(score: i32, ply: u8) -> i32 {
    if score >= MATE_THRESHOLD {
        score - ply as i32
    } else if score <= -MATE_THRESHOLD {
        score + ply as i32
    } else {
        score
    }
}

/// Tables shared across one search tree, plus its node counter
pub struct SearchState {
    pub(crate) keys: &'static ZobristKeys,
    pub tt: TranspositionTable,
    pub killers: KillerMoves,
    pub history: HistoryTable,
    pub nodes: u64,
}

impl SearchState {
    pub fn new(keys: &'static ZobristKeys) -> Self {
        Self::with_table(keys, TranspositionTable::new())
    }

    pub fn with_table(keys: &'static ZobristKeys, tt: TranspositionTable) -> Self {
        Self {
            keys,
            tt,
            killers: KillerMoves::new(),
            history: HistoryTable::new(),
            nodes: 0,
        }
    }

    /// Prepares for a new root: the table and node count start empty,
    /// history is aged and killers are carried over as ordering hints.
    pub fn new_search(&mut self) {
        self.tt.clear();
        self.history.age();
        self.nodes = 0;
    }


    /// `moves` best-first, with `hash_move` (if legal) in front
    pub(crate) fn order(
        &self,
        board: &Board,
        moves: &[Move],
        hash_move: Option<Move>,
        ply: u8,
    ) -> smallvec::SmallVec<[Move; 64]> {
        let ctx = OrderingContext {
            hash_move,
            killers: &self.killers,
            history: &self.history,
            ply: ply as usize,
        };
        order_moves(board, moves, &ctx)
    }

    /// Negamax value of `board` searched `depth` plies deep inside (alpha, beta).
    ///
    /// `ply` is the distance from the root and only affects mate scores and
    /// killer slots. The board is returned unchanged.
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        ply: u8,
    ) -> i32 {
        if depth == 0 {
            return self.quiescence(board, alpha, beta, 0);
        }
        self.nodes += 1;

        let alpha_orig = alpha;
        let hash = self.keys.hash(board);
        let mut hash_move = None;

        if let Some(entry) = self.tt.probe(hash) {
            hash_move = entry.best_move;
            if entry.depth >= depth {
                let score = score_from_tt(entry.score, ply);
                match entry.bound {
                    Bound::Exact => return score,
                    Bound::LowerBound => alpha = alpha.max(score),
                    Bound::UpperBound => beta = beta.min(score),
                }
                if alpha >= beta {
                    return score;
                }
            }
        }

        let moves = board.legal_moves();
        if moves.is_empty() {
            return if board.is_in_check(board.side_to_move()) {
                -MATE_SCORE + ply as i32
            } else {
                0
            };
        }

        let ordered = self.order(board, &moves, hash_move, ply);

        let mut best_score = -INFINITY;
        let mut best_move = None;

        for mv in ordered {
            let quiet = !board.is_capture(mv) && !mv.is_promotion();

            let undo = board.make_move(mv);
            let score = -self.alpha_beta(board, depth - 1, -beta, -alpha, ply + 1);
            board.unmake_move(mv, undo);

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                if quiet {
                    self.killers.store(ply as usize, mv);
                    self.history.update(mv, depth);
                }
                break;
            }
        }

        let bound = if best_score <= alpha_orig {
            Bound::UpperBound
        } else if best_score >= beta {
            Bound::LowerBound
        } else {
            Bound::Exact
        };

        self.tt.store(TranspositionEntry {
            hash,
            depth,
            score: score_to_tt(best_score, ply),
            bound,
            best_move,
        });

        best_score
    }
}
