//! Game state and the move operation.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::position::Position;
use super::rules;
use super::types::{Board, Cell, Player};

/// Derived status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

/// Error returned when a move is rejected.
///
/// A rejected move never modifies the game state; callers that want the
/// click-on-a-filled-cell-does-nothing behavior simply discard the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The index does not address a board cell.
    #[display("Index {} is out of range (0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}

/// Complete game state: board, player to move, and derived outcome.
///
/// Created fresh (empty board, X to move, in progress) and mutated only
/// through [`GameState::place`] and [`GameState::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Player,
    outcome: Outcome,
}

impl GameState {
    /// Creates a new game with an empty board and X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the derived outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Places the current player's mark at the given position.
    ///
    /// Recomputes the outcome and, if the game is still in progress, passes
    /// the turn to the opponent. The turn does not change when the move ends
    /// the game.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] after a terminal outcome and
    /// [`MoveError::CellOccupied`] for a filled cell; the state is left
    /// unchanged in both cases.
    #[instrument(skip(self), fields(position = %pos, player = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.outcome != Outcome::InProgress {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        self.board.set(pos, Cell::Occupied(self.to_move));
        self.outcome = rules::outcome_of(&self.board);

        if self.outcome == Outcome::InProgress {
            self.to_move = self.to_move.opponent();
        } else {
            debug!(outcome = ?self.outcome, "Game finished");
        }

        Ok(())
    }

    /// Places the current player's mark at a raw board index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for indices past the board, plus
    /// everything [`GameState::place`] rejects.
    #[instrument(skip(self))]
    pub fn place_index(&mut self, index: usize) -> Result<(), MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.place(pos)
    }

    /// Restores the fresh initial state. Total, regardless of prior state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
