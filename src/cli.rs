//! Command-line interface for tictactui.

use clap::Parser;
use std::path::PathBuf;

use crate::ui::ThemeKind;

/// Two-player tic-tac-toe for the terminal.
#[derive(Parser, Debug)]
#[command(name = "tictactui")]
#[command(about = "Two-player tic-tac-toe for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color theme (overrides the config file)
    #[arg(long, value_enum)]
    pub theme: Option<ThemeKind>,

    /// Path to an optional TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file path (the TUI owns the terminal, so logs go to a file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
