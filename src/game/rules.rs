//! Win and draw detection for tic-tac-toe.

use tracing::instrument;

use super::position::Position;
use super::state::Outcome;
use super::types::{Board, Cell, Player};

/// The 8 winning lines, in evaluation order: rows, then columns, then
/// diagonals. When an (illegally reached) board carries more than one
/// complete line, the earliest line in this order decides the winner.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line in [`WIN_LINES`] order that
/// holds three equal marks, `None` otherwise.
#[instrument]
pub fn winning_line(board: &Board) -> Option<Player> {
    for [a, b, c] in WIN_LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            return match cell {
                Cell::Occupied(player) => Some(player),
                Cell::Empty => None,
            };
        }
    }

    None
}

/// Derives the outcome of a board.
///
/// A winning line yields `Winner`; a full board without one yields `Draw`;
/// anything else is still `InProgress`.
#[instrument]
pub fn outcome_of(board: &Board) -> Outcome {
    if let Some(player) = winning_line(board) {
        return Outcome::Winner(player);
    }
    if board.is_full() {
        return Outcome::Draw;
    }
    Outcome::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupy(board: &mut Board, positions: &[Position], player: Player) {
        for pos in positions {
            board.set(*pos, Cell::Occupied(player));
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board), None);
        assert_eq!(outcome_of(&board), Outcome::InProgress);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        occupy(
            &mut board,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
            Player::X,
        );
        assert_eq!(winning_line(&board), Some(Player::X));
        assert_eq!(outcome_of(&board), Outcome::Winner(Player::X));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        occupy(
            &mut board,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
            Player::O,
        );
        assert_eq!(winning_line(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut board = Board::new();
        occupy(
            &mut board,
            &[Position::TopLeft, Position::TopCenter],
            Player::X,
        );
        assert_eq!(winning_line(&board), None);
        assert_eq!(outcome_of(&board), Outcome::InProgress);
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O — full, no line.
        let mut board = Board::new();
        occupy(
            &mut board,
            &[
                Position::TopLeft,
                Position::Center,
                Position::MiddleRight,
                Position::BottomCenter,
            ],
            Player::X,
        );
        occupy(
            &mut board,
            &[
                Position::TopCenter,
                Position::MiddleLeft,
                Position::BottomLeft,
                Position::BottomRight,
            ],
            Player::O,
        );
        board.set(Position::TopRight, Cell::Occupied(Player::X));
        assert!(board.is_full());
        assert_eq!(outcome_of(&board), Outcome::Draw);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Top row X and middle row O can only coexist on an illegally
        // reached board; the row listed first decides.
        let mut board = Board::new();
        occupy(
            &mut board,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
            Player::X,
        );
        occupy(
            &mut board,
            &[
                Position::MiddleLeft,
                Position::Center,
                Position::MiddleRight,
            ],
            Player::O,
        );
        assert_eq!(outcome_of(&board), Outcome::Winner(Player::X));
    }
}
