//! Two-player tic-tac-toe for the terminal.
//!
//! # Architecture
//!
//! - **Engine** (`game`): board, player to move, derived outcome; all
//!   mutation goes through `place`/`place_index`/`reset`.
//! - **UI** (`ui`): screen state machine (main menu, board screen), settings
//!   and outcome overlays, themes. Renders what the engine says and
//!   dispatches move/reset intents back to it.
//! - **Shell** (`cli`, `config`): CLI flags, optional TOML config file.
//!
//! # Example
//!
//! ```
//! use tictactui::{GameState, Outcome, Player, Position};
//!
//! let mut game = GameState::new();
//! game.place(Position::Center)?;
//! assert_eq!(game.to_move(), Player::O);
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! # Ok::<(), tictactui::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod game;
mod ui;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Game engine
pub use game::{
    Board, Cell, GameState, MoveError, Outcome, Player, Position, WIN_LINES, outcome_of,
    winning_line,
};

// Crate-level exports - UI
pub use ui::{Theme, ThemeKind, run_app};
