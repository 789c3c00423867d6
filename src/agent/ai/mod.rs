// Search engine: iterative-deepening negamax with alpha-beta pruning,
// a transposition table, move ordering heuristics and a quiescence extension.
//
// Everything below works on copies of `Board`; the live `Position` is only
// read at the root.

mod evaluation;
mod move_ordering;
mod negamax;
mod piece_square_tables;
mod quiescence;
mod search;
mod transposition_table;

#[cfg(test)]
mod tests;

pub use evaluation::{evaluate, evaluate_white, game_phase, is_endgame};
pub use move_ordering::{mvv_lva, HistoryTable, KillerMoves};
pub use negamax::{is_mate_score, mate_in, SearchState, INFINITY, MATE_SCORE};
pub use quiescence::MAX_QSEARCH_DEPTH;
pub use search::{SearchEngine, SearchResult};
pub use transposition_table::{Bound, TranspositionEntry, TranspositionTable};
