//! Board engine: grid representation, gravity drops, win detection through the
//! last placed cell, and the turn/draw state machine.

mod board;
mod player;
mod state;

pub use board::{Axis, Board, Cell};
pub use player::Player;
pub use state::{validate_dimensions, Game, GameStatus, MoveOutcome};
