//! Main menu screen — the entry point of the application.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::ui::screen::{Screen, ScreenTransition};
use crate::ui::theme::Theme;

/// Menu options available on the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    PlayGame,
    Quit,
}

impl MenuOption {
    fn label(self) -> &'static str {
        match self {
            Self::PlayGame => "Play Game",
            Self::Quit => "Quit",
        }
    }

    fn all() -> &'static [MenuOption] {
        &[Self::PlayGame, Self::Quit]
    }
}

/// State for the main menu screen.
#[derive(Debug)]
pub struct MainMenuScreen {
    list_state: ListState,
}

impl MainMenuScreen {
    /// Creates a new main menu screen with the first option selected.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing MainMenuScreen");
        let mut state = ListState::default();
        state.select(Some(0));
        Self { list_state: state }
    }

    /// Moves selection up.
    fn select_previous(&mut self) {
        let count = MenuOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Moves selection down.
    fn select_next(&mut self) {
        let count = MenuOption::all().len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Returns the currently selected menu option.
    fn selected_option(&self) -> MenuOption {
        let options = MenuOption::all();
        let idx = self.list_state.selected().unwrap_or(0);
        options[idx.min(options.len() - 1)]
    }
}

impl Default for MainMenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for MainMenuScreen {
    #[instrument(skip(self, frame, theme))]
    fn render(&self, frame: &mut Frame, theme: &Theme) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(4),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("TIC\nTAC\nTOE")
            .style(
                Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = MenuOption::all()
            .iter()
            .map(|opt| ListItem::new(opt.label()))
            .collect();

        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(menu, chunks[1], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Select | q: Quit")
            .style(Style::default().fg(theme.help))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let option = self.selected_option();
                info!(option = ?option, "Menu option selected");
                match option {
                    MenuOption::PlayGame => ScreenTransition::GoToGame,
                    MenuOption::Quit => ScreenTransition::Quit,
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
