//! Cursor movement for keyboard navigation over the board.

use crossterm::event::KeyCode;

use crate::game::Position;

/// Moves the board cursor based on arrow keys, clamped to the 3x3 grid.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (mut row, mut col) = (cursor.row(), cursor.col());

    match key {
        KeyCode::Up => row = row.saturating_sub(1),
        KeyCode::Down => row = (row + 1).min(2),
        KeyCode::Left => col = col.saturating_sub(1),
        KeyCode::Right => col = (col + 1).min(2),
        _ => {}
    }

    Position::from_row_col(row, col).unwrap_or(cursor)
}
