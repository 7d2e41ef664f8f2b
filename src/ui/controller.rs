//! Application controller — the state machine driving the multi-screen TUI.

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument};

use crate::ui::screen::{Screen, ScreenTransition};
use crate::ui::screens::{GameScreen, MainMenuScreen};
use crate::ui::theme::Theme;

/// Active screen in the UI state machine.
#[derive(Debug)]
enum ActiveScreen {
    MainMenu(MainMenuScreen),
    Game(GameScreen),
}

/// Controller that drives the screen state machine.
///
/// Call [`AppController::run`] to start the event loop.
#[derive(Debug)]
pub struct AppController {
    theme: Theme,
}

impl AppController {
    /// Creates a new controller rendering with the given theme.
    #[instrument(skip(theme))]
    pub fn new(theme: Theme) -> Self {
        info!("Creating AppController");
        Self { theme }
    }

    /// Runs the UI event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting UI event loop");

        let mut screen = ActiveScreen::MainMenu(MainMenuScreen::new());

        loop {
            // Render current screen.
            terminal.draw(|f| match &screen {
                ActiveScreen::MainMenu(s) => s.render(f, &self.theme),
                ActiveScreen::Game(s) => s.render(f, &self.theme),
            })?;

            // Poll for input with short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let transition = match &mut screen {
                    ActiveScreen::MainMenu(s) => s.handle_key(key),
                    ActiveScreen::Game(s) => s.handle_key(key),
                };

                screen = match Self::apply_transition(transition, screen) {
                    Some(next) => next,
                    None => {
                        info!("UI quitting");
                        return Ok(());
                    }
                };
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    fn apply_transition(
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        debug!(transition = ?transition, "Applying screen transition");
        match transition {
            ScreenTransition::Stay => Some(current),

            ScreenTransition::GoToMainMenu => {
                info!("Navigating to MainMenu");
                Some(ActiveScreen::MainMenu(MainMenuScreen::new()))
            }

            ScreenTransition::GoToGame => {
                info!("Starting a fresh game");
                Some(ActiveScreen::Game(GameScreen::new()))
            }

            ScreenTransition::Quit => None,
        }
    }
}
