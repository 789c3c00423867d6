mod attacks;
mod board;
mod moves;
mod piece;
mod piece_moves;
mod position;
mod square;
mod zobrist;
pub mod bitboards;

#[cfg(test)]
mod tests;

pub use board::*;
pub use moves::*;
pub use piece::*;
pub use position::*;
pub use square::*;
pub use zobrist::*;
