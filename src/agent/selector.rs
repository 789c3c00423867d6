//! Move selectors: the things that choose a move for one side.
//!
//! The set is closed, so it is an enum rather than a trait object. Every
//! variant takes the position by shared reference and returns one move from
//! its legal-move list, or [`ChessError::NoLegalMoves`] when there is none.

use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::ai::{mate_in, SearchEngine};
use crate::config::{PlayerConfig, SearchConfig};
use crate::error::{ChessError, ChessResult};
use crate::game_repr::{Move, Position};

pub enum MoveSelector {
    /// Uniformly random legal move
    Random(StdRng),
    /// Iterative-deepening alpha-beta search
    Search(SearchEngine),
}

impl MoveSelector {
    /// Random selector seeded from the OS
    pub fn random() -> Self {
        MoveSelector::Random(StdRng::from_entropy())
    }

    /// Random selector with a fixed seed, for reproducible games
    pub fn seeded_random(seed: u64) -> Self {
        MoveSelector::Random(StdRng::seed_from_u64(seed))
    }

    pub fn search(config: SearchConfig) -> Self {
        MoveSelector::Search(SearchEngine::new(config.validated()))
    }

    pub fn from_config(config: &PlayerConfig) -> Self {
        match config {
            PlayerConfig::Random => Self::random(),
            PlayerConfig::Engine(search) => Self::search(*search),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MoveSelector::Random(_) => "random",
            MoveSelector::Search(_) => "negamax",
        }
    }

    pub fn select_move(&mut self, position: &Position) -> ChessResult<Move> {
        let moves = position.legal_moves();
        if moves.is_empty() {
            return Err(ChessError::NoLegalMoves);
        }

        match self {
            MoveSelector::Random(rng) => moves.choose(rng).copied().ok_or(ChessError::NoLegalMoves),
            MoveSelector::Search(engine) => {
                let result = engine.search(position);
                let mv = result.best_move.ok_or(ChessError::NoLegalMoves)?;

                match mate_in(result.score) {
                    Some(n) => info!(
                        "{:?} plays {} (mate in {}, depth {}, {} nodes, {}ms)",
                        position.side_to_move(),
                        mv,
                        n,
                        result.depth,
                        result.nodes,
                        result.elapsed.as_millis()
                    ),
                    None => info!(
                        "{:?} plays {} (score {}, depth {}, {} nodes, {}ms)",
                        position.side_to_move(),
                        mv,
                        result.score,
                        result.depth,
                        result.nodes,
                        result.elapsed.as_millis()
                    ),
                }

                Ok(mv)
            }
        }
    }
}
