//! Bitboard chess: legal move generation, draw detection and an
//! alpha-beta search engine, with a headless game runner on top.

pub mod agent;
pub mod config;
pub mod error;
pub mod game_repr;
pub mod orchestrator;

pub use error::{ChessError, ChessResult, ParseError};
