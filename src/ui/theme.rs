//! Color themes for the board and overlays.
//!
//! All screens render through a single [`Theme`], so a preset swaps the whole
//! look without touching any screen code.

use clap::ValueEnum;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Named theme preset, selectable from the CLI or the config file.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    /// Terminal-native palette.
    #[default]
    Classic,
    /// Deep-blue palette with salmon X and sea-green O marks.
    Ocean,
}

impl ThemeKind {
    /// Resolves the preset into a concrete [`Theme`].
    pub fn theme(self) -> Theme {
        match self {
            Self::Classic => Theme::classic(),
            Self::Ocean => Theme::ocean(),
        }
    }
}

/// Colors used by every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Title text.
    pub title: Color,
    /// X marks on the board.
    pub mark_x: Color,
    /// O marks on the board.
    pub mark_o: Color,
    /// Grid separators and empty cells.
    pub grid: Color,
    /// Status banner (turn / outcome).
    pub status: Color,
    /// Help bar text.
    pub help: Color,
    /// Menu highlight.
    pub highlight: Color,
    /// Overlay borders.
    pub overlay: Color,
}

impl Theme {
    /// Terminal-native palette.
    pub fn classic() -> Self {
        Self {
            title: Color::Cyan,
            mark_x: Color::Blue,
            mark_o: Color::Red,
            grid: Color::DarkGray,
            status: Color::Yellow,
            help: Color::DarkGray,
            highlight: Color::Yellow,
            overlay: Color::White,
        }
    }

    /// Deep-blue palette with a brown board frame.
    pub fn ocean() -> Self {
        Self {
            title: Color::White,
            mark_x: Color::Rgb(242, 144, 137),
            mark_o: Color::Rgb(63, 122, 99),
            grid: Color::Rgb(150, 75, 0),
            status: Color::Rgb(240, 244, 248),
            help: Color::Rgb(16, 81, 112),
            highlight: Color::Rgb(242, 144, 137),
            overlay: Color::Rgb(150, 75, 0),
        }
    }

    /// Color for a mark belonging to the given player.
    pub fn mark(&self, player: crate::game::Player) -> Color {
        match player {
            crate::game::Player::X => self.mark_x,
            crate::game::Player::O => self.mark_o,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
