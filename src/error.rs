//! Error types for position setup, move application and move selection.

use thiserror::Error;

use crate::game_repr::{to_algebraic, Move, Square};

/// Malformed placement string or FEN record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Character that is neither a piece letter, a digit 1-8, nor '/'
    #[error("Invalid character '{character}' in placement")]
    InvalidCharacter { character: char },

    /// A rank whose pieces and empty runs do not cover exactly 8 files
    #[error("Rank {rank} covers {squares} squares (must be 8)")]
    BadRankLength { rank: u8, squares: usize },

    #[error("Placement has {count} ranks (must be 8)")]
    WrongRankCount { count: usize },

    #[error("Invalid side to move: {0:?}")]
    InvalidSideToMove(String),

    #[error("Invalid castling field: {0:?}")]
    InvalidCastling(String),

    #[error("Invalid en passant field: {0:?}")]
    InvalidEnPassant(String),

    #[error("Invalid move counter: {0:?}")]
    InvalidClock(String),
}

/// Errors that can occur while playing a game
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Move whose start square holds no piece
    #[error("No piece at source square {}", to_algebraic(*square))]
    EmptySquare { square: Square },

    /// Move that is not in the current legal-move list
    #[error("Illegal move {mv}")]
    IllegalMove { mv: Move },

    /// A selector was asked to choose from an empty move list
    #[error("No legal moves available")]
    NoLegalMoves,
}

/// Result type alias for chess operations
pub type ChessResult<T> = Result<T, ChessError>;
