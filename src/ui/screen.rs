//! Screen trait and transition type for the UI state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::ui::theme::Theme;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`AppController`](crate::ui::controller::AppController) state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen — no state change.
    Stay,
    /// Navigate to the main menu, discarding any game in progress.
    GoToMainMenu,
    /// Start a fresh game on the board screen.
    GoToGame,
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the UI state machine.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, theme: &Theme);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;
}
