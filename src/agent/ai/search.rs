// Iterative deepening driver
//
// Searches depth 1, 2, 3, ... up to the configured limit, committing the best
// root move after every completed depth. The clock is only consulted between
// depths: a depth that has started always runs to completion.

use std::time::{Duration, Instant};

use log::debug;

use super::negamax::{is_mate_score, SearchState, INFINITY, MATE_SCORE};
use super::transposition_table::{Bound, TranspositionEntry};
use crate::config::SearchConfig;
use crate::game_repr::{Board, Move, Position, ZobristKeys};

/// Outcome of one call to [`SearchEngine::search`]
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// `None` only when the root has no legal move
    pub best_move: Option<Move>,
    /// Centipawns from the side to move's point of view
    pub score: i32,
    /// Deepest fully completed iteration
    pub depth: u8,
    pub nodes: u64,
    pub elapsed: Duration,
}

pub struct SearchEngine {
    config: SearchConfig,
    state: SearchState,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_keys(config, ZobristKeys::shared())
    }

    pub fn with_keys(config: SearchConfig, keys: &'static ZobristKeys) -> Self {
        Self {
            config,
            state: SearchState::new(keys),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Best move for the side to move in `position`
    pub fn search(&mut self, position: &Position) -> SearchResult {
        let start = Instant::now();
        self.state.new_search();

        let mut board = *position.board();
        let root_moves = position.legal_moves();

        let mut result = SearchResult {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            elapsed: Duration::ZERO,
        };

        if root_moves.is_empty() {
            if position.is_in_check() {
                result.score = -MATE_SCORE;
            }
            result.elapsed = start.elapsed();
            return result;
        }

        let max_depth = self.config.max_depth.max(1);
        let mut pv_move = None;

        for depth in 1..=max_depth {
            if depth > 1 && start.elapsed() >= self.config.time_budget {
                break;
            }

            let (best_move, score) = self.root_search(&mut board, root_moves, depth, pv_move);

            pv_move = Some(best_move);
            result.best_move = Some(best_move);
            result.score = score;
            result.depth = depth;
            result.nodes = self.state.nodes;
            result.elapsed = start.elapsed();

            debug!(
                "depth {} score {} move {} nodes {} time {}ms tt hits {:.1}%",
                depth,
                score,
                best_move,
                result.nodes,
                result.elapsed.as_millis(),
                self.state.tt.hit_rate() * 100.0
            );

            if is_mate_score(score) {
                break;
            }
        }

        result
    }

    /// One full-width iteration over the root moves. `pv_move` from the
    /// previous iteration is searched first.
    fn root_search(
        &mut self,
        board: &mut Board,
        root_moves: &[Move],
        depth: u8,
        pv_move: Option<Move>,
    ) -> (Move, i32) {
        let ordered = self.state.order(board, root_moves, pv_move, 0);

        let mut alpha = -INFINITY;
        let beta = INFINITY;
        let mut best = (ordered[0], -INFINITY);

        for mv in ordered {
            let undo = board.make_move(mv);
            let score = -self.state.alpha_beta(board, depth - 1, -beta, -alpha, 1);
            board.unmake_move(mv, undo);

            if score > best.1 {
                best = (mv, score);
            }
            alpha = alpha.max(score);
        }

        self.state.tt.store(TranspositionEntry {
            hash: self.state.keys.hash(board),
            depth,
            score: best.1,
            bound: Bound::Exact,
            best_move: Some(best.0),
        });

        best
    }
}
