//! Core Connect Four game logic: board representation, player identities, and
//! the placement state machine.

mod board;
mod engine;
mod player;

#[cfg(test)]
mod tests_props;

pub use board::{
    Board, Cell, Dimensions, DropSpot, InvalidColumn, Line, CONNECT, DEFAULT_COLS, DEFAULT_ROWS,
};
pub use engine::{GameEngine, GameStatus, Placement, PlacementError};
pub use player::{Player, Seat};
