//! Core Connect Four game logic: board representation, player types, and the
//! turn state machine. No rendering and no I/O; the UI layer drives this
//! through [`GameState::drop_piece`] and reads the results back.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, DimensionError, DEFAULT_HEIGHT, DEFAULT_WIDTH, WIN_LENGTH};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError, Outcome};
