//! Headless game runner.
//!
//! The [`Orchestrator`] owns the live [`Position`] and one [`MoveSelector`] per
//! side. It asks the side to move for a move, applies it, and checks for the
//! end of the game after every ply:
//!
//! ```text
//! [Build Position] -> [Ask side to move] -> [Apply move]
//!   -> [Check status] -> [Ask side to move] ... -> [GameOutcome]
//! ```
//!
//! Nothing is drawn; progress and the result are reported through `log`.

use log::info;

use crate::agent::MoveSelector;
use crate::config::GameConfig;
use crate::error::ChessResult;
use crate::game_repr::{Color, GameStatus, Move, Position};

/// How a finished (or abandoned) game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    /// Final status; `Ongoing` when the ply limit stopped the game
    pub status: GameStatus,
    /// Every move played, in order
    pub moves: Vec<Move>,
    pub final_fen: String,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

pub struct Orchestrator {
    position: Position,
    white: MoveSelector,
    black: MoveSelector,
    max_plies: u32,
    moves: Vec<Move>,
}

impl Orchestrator {
    pub fn new(position: Position, white: MoveSelector, black: MoveSelector, max_plies: u32) -> Self {
        Self {
            position,
            white,
            black,
            max_plies,
            moves: Vec::new(),
        }
    }

    /// Builds the start position and both selectors from `config`
    pub fn from_config(config: &GameConfig) -> ChessResult<Self> {
        let position = Position::new(&config.start_placement)?;
        Ok(Self::new(
            position,
            MoveSelector::from_config(&config.white),
            MoveSelector::from_config(&config.black),
            config.max_plies,
        ))
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Current status of the game
    pub fn check_game_end(&self) -> GameStatus {
        self.position.status()
    }

    /// Plays one half-move. Returns the move, or `None` if the game is already over.
    pub fn step(&mut self) -> ChessResult<Option<Move>> {
        if self.check_game_end().is_over() {
            return Ok(None);
        }

        let selector = match self.position.side_to_move() {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        let mv = selector.select_move(&self.position)?;
        self.position.apply_move(mv)?;
        self.moves.push(mv);
        Ok(Some(mv))
    }

    /// Plays until the game ends or the ply limit is reached
    pub fn play(mut self) -> ChessResult<GameOutcome> {
        info!(
            "New game: {} (white) vs {} (black) from {}",
            self.white.name(),
            self.black.name(),
            self.position.to_fen()
        );

        while (self.moves.len() as u32) < self.max_plies {
            if self.step()?.is_none() {
                break;
            }
        }

        let status = self.check_game_end();
        if status.is_over() {
            info!("Game over after {} plies: {}", self.moves.len(), status);
        } else {
            info!("Stopped after {} plies without a result", self.moves.len());
        }

        Ok(GameOutcome {
            status,
            moves: self.moves,
            final_fen: self.position.to_fen(),
        })
    }
}
