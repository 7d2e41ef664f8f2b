//! Board screen — the 3x3 grid, turn banner, and overlays.
//!
//! Owns the [`GameState`] for the duration of one visit; all mutation goes
//! through the engine's `place`/`reset` operations. The settings overlay and
//! the outcome overlay are local UI state, never engine state.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::game::{Cell, GameState, Outcome, Position};
use crate::ui::input::move_cursor;
use crate::ui::screen::{Screen, ScreenTransition};
use crate::ui::theme::Theme;

/// Entries in the settings overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverlayOption {
    MainMenu,
    ResetGame,
}

impl OverlayOption {
    fn label(self) -> &'static str {
        match self {
            Self::MainMenu => "Main Menu",
            Self::ResetGame => "Reset Game",
        }
    }

    fn all() -> &'static [OverlayOption] {
        &[Self::MainMenu, Self::ResetGame]
    }
}

/// State for the board screen.
#[derive(Debug, Getters)]
pub struct GameScreen {
    state: GameState,
    cursor: Position,
    menu_open: bool,
    #[getter(skip)]
    menu_state: ListState,
}

impl GameScreen {
    /// Creates a board screen with a fresh game.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing GameScreen");
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));
        Self {
            state: GameState::new(),
            cursor: Position::Center,
            menu_open: false,
            menu_state,
        }
    }

    fn open_menu(&mut self) {
        debug!("Opening settings overlay");
        self.menu_open = true;
        self.menu_state.select(Some(0));
    }

    fn close_menu(&mut self) {
        debug!("Closing settings overlay");
        self.menu_open = false;
    }

    fn menu_select_previous(&mut self) {
        let count = OverlayOption::all().len();
        let i = match self.menu_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.menu_state.select(Some(i));
    }

    fn menu_select_next(&mut self) {
        let count = OverlayOption::all().len();
        let i = match self.menu_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.menu_state.select(Some(i));
    }

    fn selected_menu_option(&self) -> OverlayOption {
        let options = OverlayOption::all();
        let idx = self.menu_state.selected().unwrap_or(0);
        options[idx.min(options.len() - 1)]
    }

    /// Key handling while the settings overlay is open.
    fn handle_menu_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.menu_select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.menu_select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let option = self.selected_menu_option();
                info!(option = ?option, "Overlay option selected");
                match option {
                    OverlayOption::MainMenu => {
                        self.state.reset();
                        self.close_menu();
                        ScreenTransition::GoToMainMenu
                    }
                    OverlayOption::ResetGame => {
                        self.state.reset();
                        self.close_menu();
                        ScreenTransition::Stay
                    }
                }
            }
            KeyCode::Esc => {
                self.close_menu();
                ScreenTransition::Stay
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }

    /// Key handling after the game has ended.
    fn handle_game_over_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
                info!("Resetting finished game");
                self.state.reset();
                ScreenTransition::Stay
            }
            KeyCode::Esc => {
                self.open_menu();
                ScreenTransition::Stay
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }

    /// Key handling for an in-progress board.
    fn handle_board_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                // Rejected moves do nothing visible; the cell simply stays
                // as it was.
                if let Err(e) = self.state.place(self.cursor) {
                    debug!(error = %e, "Move rejected");
                }
                ScreenTransition::Stay
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                info!("Resetting game");
                self.state.reset();
                ScreenTransition::Stay
            }
            KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('S') => {
                self.open_menu();
                ScreenTransition::Stay
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }

    fn status_text(&self) -> String {
        match self.state.outcome() {
            Outcome::InProgress => format!("Turn: {}", self.state.to_move()),
            Outcome::Winner(player) => format!("{} Wins!", player),
            Outcome::Draw => "It's a Draw!".to_string(),
        }
    }
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for GameScreen {
    #[instrument(skip(self, frame, theme))]
    fn render(&self, frame: &mut Frame, theme: &Theme) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(12),
                Constraint::Length(3),
            ])
            .split(area);

        let status = Paragraph::new(self.status_text())
            .style(
                Style::default()
                    .fg(theme.status)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[0]);

        draw_board(frame, chunks[1], &self.state, self.cursor, theme);

        let help = Paragraph::new(
            "↑↓←→: Move | Enter: Place | r: Reset | Esc: Menu | q: Quit",
        )
        .style(Style::default().fg(theme.help))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);

        if self.menu_open {
            draw_menu_overlay(frame, area, &self.menu_state, theme);
        } else if self.state.outcome() != Outcome::InProgress {
            draw_outcome_overlay(frame, area, &self.state, theme);
        }
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        if self.menu_open {
            return self.handle_menu_key(key);
        }
        match self.state.outcome() {
            Outcome::InProgress => self.handle_board_key(key),
            _ => self.handle_game_over_key(key),
        }
    }
}

fn draw_board(frame: &mut Frame, area: Rect, state: &GameState, cursor: Position, theme: &Theme) {
    let board_area = center_rect(area, 40, 12);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let positions = Position::ALL;
    for row in 0..3 {
        let row_area = rows[row * 2];
        if row > 0 {
            draw_separator(frame, rows[row * 2 - 1], theme);
        }

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(row_area);

        for col in 0..3 {
            if col > 0 {
                draw_separator_vertical(frame, cols[col * 2 - 1], theme);
            }
            draw_cell(frame, cols[col * 2], state, cursor, positions[row * 3 + col], theme);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    cursor: Position,
    pos: Position,
    theme: &Theme,
) {
    let (symbol, base_style) = match state.board().get(pos) {
        Cell::Empty => ("   ", Style::default().fg(theme.grid)),
        Cell::Occupied(player) => (
            match player {
                crate::game::Player::X => " X ",
                crate::game::Player::O => " O ",
            },
            Style::default()
                .fg(theme.mark(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == cursor && state.outcome() == Outcome::InProgress {
        base_style
            .bg(theme.highlight)
            .fg(ratatui::style::Color::Black)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(Style::default().fg(theme.grid));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect, theme: &Theme) {
    let sep = Paragraph::new("│").style(Style::default().fg(theme.grid));
    frame.render_widget(sep, area);
}

fn draw_menu_overlay(frame: &mut Frame, area: Rect, menu_state: &ListState, theme: &Theme) {
    let overlay = center_rect(area, 30, 8);
    frame.render_widget(Clear, overlay);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(overlay);

    let items: Vec<ListItem> = OverlayOption::all()
        .iter()
        .map(|opt| ListItem::new(opt.label()))
        .collect();

    let menu = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.overlay))
                .title("Menu"),
        )
        .highlight_style(
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = menu_state.clone();
    frame.render_stateful_widget(menu, chunks[0], &mut list_state);

    let help = Paragraph::new("Enter: Select | Esc: Close")
        .style(Style::default().fg(theme.help))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[1]);
}

fn draw_outcome_overlay(frame: &mut Frame, area: Rect, state: &GameState, theme: &Theme) {
    let overlay = center_rect(area, 30, 7);
    frame.render_widget(Clear, overlay);

    let color = match state.outcome() {
        Outcome::Winner(player) => theme.mark(player),
        _ => theme.status,
    };

    let message = match state.outcome() {
        Outcome::Winner(player) => format!("{} Wins!", player),
        Outcome::Draw => "It's a Draw!".to_string(),
        Outcome::InProgress => String::new(),
    };

    let text = format!("{}\n\nEnter: Play Again", message);
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.overlay)),
        );
    frame.render_widget(paragraph, overlay);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn place_at(screen: &mut GameScreen, index: usize) {
        screen
            .state
            .place_index(index)
            .expect("test move should be legal");
    }

    #[test]
    fn test_enter_places_mark_at_cursor() {
        let mut screen = GameScreen::new();
        screen.handle_key(key(KeyCode::Enter));
        assert_eq!(
            screen.state().board().get(Position::Center),
            Cell::Occupied(Player::X)
        );
        assert_eq!(screen.state().to_move(), Player::O);
    }

    #[test]
    fn test_enter_on_occupied_cell_is_silent() {
        let mut screen = GameScreen::new();
        screen.handle_key(key(KeyCode::Enter));
        let before = screen.state().clone();
        let transition = screen.handle_key(key(KeyCode::Enter));
        assert_eq!(transition, ScreenTransition::Stay);
        assert_eq!(*screen.state(), before);
    }

    #[test]
    fn test_arrows_move_cursor() {
        let mut screen = GameScreen::new();
        screen.handle_key(key(KeyCode::Up));
        assert_eq!(*screen.cursor(), Position::TopCenter);
        screen.handle_key(key(KeyCode::Left));
        assert_eq!(*screen.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_escape_opens_menu_and_reset_entry_resets() {
        let mut screen = GameScreen::new();
        place_at(&mut screen, 0);
        screen.handle_key(key(KeyCode::Esc));
        assert!(*screen.menu_open());

        // Second entry is Reset Game.
        screen.handle_key(key(KeyCode::Down));
        screen.handle_key(key(KeyCode::Enter));
        assert!(!*screen.menu_open());
        assert_eq!(*screen.state(), GameState::new());
    }

    #[test]
    fn test_menu_main_menu_entry_transitions_out() {
        let mut screen = GameScreen::new();
        place_at(&mut screen, 0);
        screen.handle_key(key(KeyCode::Esc));
        let transition = screen.handle_key(key(KeyCode::Enter));
        assert_eq!(transition, ScreenTransition::GoToMainMenu);
        assert_eq!(*screen.state(), GameState::new());
    }

    #[test]
    fn test_reset_after_win() {
        let mut screen = GameScreen::new();
        for index in [0, 3, 1, 4, 2] {
            place_at(&mut screen, index);
        }
        assert_eq!(screen.state().outcome(), Outcome::Winner(Player::X));

        // Board keys are ignored once the game is over.
        let before = screen.state().clone();
        screen.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(*screen.state(), before);

        screen.handle_key(key(KeyCode::Enter));
        assert_eq!(*screen.state(), GameState::new());
    }

    #[test]
    fn test_q_quits_from_board_and_menu() {
        let mut screen = GameScreen::new();
        assert_eq!(screen.handle_key(key(KeyCode::Char('q'))), ScreenTransition::Quit);

        let mut screen = GameScreen::new();
        screen.handle_key(key(KeyCode::Esc));
        assert_eq!(screen.handle_key(key(KeyCode::Char('q'))), ScreenTransition::Quit);
    }
}
