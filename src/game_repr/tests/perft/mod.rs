use super::*;

mod complex_promotions;
mod endgame;
mod kiwipete;
mod middle_game;
mod starting_position;
mod symmetrical;
