//! Terminal UI for tic-tac-toe.

mod controller;
mod input;
mod screen;
mod screens;
mod theme;

pub use theme::{Theme, ThemeKind};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info};

use controller::AppController;

/// Runs the TUI until the user quits, restoring the terminal on the way out.
pub async fn run_app(theme: Theme) -> Result<()> {
    info!("Starting tictactui");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = AppController::new(theme);
    let res = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "UI loop error");
    }
    res
}
