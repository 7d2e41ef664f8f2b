//! Screens of the UI state machine.

mod game;
mod main_menu;

pub use game::GameScreen;
pub use main_menu::MainMenuScreen;
