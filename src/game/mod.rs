//! Game state engine for tic-tac-toe.
//!
//! The engine owns the board, the player to move, and the derived outcome.
//! It is pure and synchronous; the UI layer consumes it exclusively through
//! [`GameState::place`], [`GameState::place_index`], and [`GameState::reset`].

mod position;
mod rules;
mod state;
mod types;

pub use position::Position;
pub use rules::{WIN_LINES, outcome_of, winning_line};
pub use state::{GameState, MoveError, Outcome};
pub use types::{Board, Cell, Player};
