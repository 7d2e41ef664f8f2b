//! Tests for win, draw, and in-progress detection.

use tictactui::{Board, Cell, Outcome, Player, Position, WIN_LINES, outcome_of, winning_line};

#[test]
fn test_every_line_wins_for_both_players() {
    for line in WIN_LINES {
        for player in [Player::X, Player::O] {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Cell::Occupied(player));
            }
            assert_eq!(
                outcome_of(&board),
                Outcome::Winner(player),
                "line {:?} filled with {} should win",
                line,
                player
            );
        }
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / O X X / O X O
    let mut board = Board::new();
    let marks = [
        (0, Player::X),
        (1, Player::O),
        (2, Player::X),
        (3, Player::O),
        (4, Player::X),
        (5, Player::X),
        (6, Player::O),
        (7, Player::X),
        (8, Player::O),
    ];
    for (index, player) in marks {
        board.set(Position::from_index(index).unwrap(), Cell::Occupied(player));
    }
    assert_eq!(winning_line(&board), None);
    assert_eq!(outcome_of(&board), Outcome::Draw);
}

#[test]
fn test_board_with_empty_cell_and_no_line_is_in_progress() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Cell::Occupied(Player::X));
    board.set(Position::Center, Cell::Occupied(Player::O));
    assert_eq!(outcome_of(&board), Outcome::InProgress);

    // One empty cell left, still no line.
    let mut board = Board::new();
    let marks = [
        (0, Player::X),
        (1, Player::O),
        (2, Player::X),
        (3, Player::O),
        (4, Player::X),
        (5, Player::X),
        (6, Player::O),
        (7, Player::X),
    ];
    for (index, player) in marks {
        board.set(Position::from_index(index).unwrap(), Cell::Occupied(player));
    }
    assert_eq!(outcome_of(&board), Outcome::InProgress);
}

#[test]
fn test_earliest_line_in_fixed_order_decides() {
    // Two complete rows of different players can only coexist on an
    // illegally reached board; the row listed earlier must decide.
    let mut board = Board::new();
    for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
        board.set(pos, Cell::Occupied(Player::X));
    }
    for pos in [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ] {
        board.set(pos, Cell::Occupied(Player::O));
    }
    assert_eq!(outcome_of(&board), Outcome::Winner(Player::X));

    // Two complete columns: the one listed earlier decides.
    let mut board = Board::new();
    for pos in [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ] {
        board.set(pos, Cell::Occupied(Player::O));
    }
    for pos in [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ] {
        board.set(pos, Cell::Occupied(Player::X));
    }
    assert_eq!(outcome_of(&board), Outcome::Winner(Player::O));
}
