//! Theme constants and colors for the checkers UI.

use gpui::{Rgba, rgb};

use crate::domain::Team;

// Layout constants
pub const BOARD_PADDING: f32 = 20.0;
pub const CROWN_SCALE: f32 = 0.45; // crown glyph size relative to cell

// Initial panel sizes
pub const INITIAL_LEFT_PANEL: f32 = 540.0;
pub const INITIAL_RIGHT_PANEL: f32 = 280.0;

// Board colors
pub const LIGHT_SQUARE: u32 = 0xEFD9B5;
pub const DARK_SQUARE: u32 = 0xB48764;

// Piece colors
pub const LIGHT_TEAM: u32 = 0xF4EFE6;
pub const DARK_TEAM: u32 = 0x8E2B22;
pub const SELECTED_OUTLINE: u32 = 0x4A9EFF;
pub const CROWN: u32 = 0xE2B13C;

// Panel colors
pub const PANEL_BG: u32 = 0x2a2a2a;
pub const INFO_BG: u32 = 0x1e1e1e;
pub const BORDER_COLOR: u32 = 0x4a4a4a;
pub const TEXT_PRIMARY: u32 = 0xffffff;
pub const TEXT_SECONDARY: u32 = 0x888888;

/// Colors the piece renderer asks for
pub trait PiecePalette {
    fn team_color(&self, team: Team) -> Rgba;
    fn selected_outline(&self) -> Rgba;
}

/// Resolved colors for one board
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub light_team: Rgba,
    pub dark_team: Rgba,
    pub selected_outline: Rgba,
    pub crown: Rgba,
    pub light_square: Rgba,
    pub dark_square: Rgba,
}

impl Theme {
    /// Get the color for a board square based on its position
    pub fn square_color(&self, row: u8, col: u8) -> Rgba {
        if (row + col) % 2 == 0 {
            self.light_square
        } else {
            self.dark_square
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            light_team: rgb(LIGHT_TEAM),
            dark_team: rgb(DARK_TEAM),
            selected_outline: rgb(SELECTED_OUTLINE),
            crown: rgb(CROWN),
            light_square: rgb(LIGHT_SQUARE),
            dark_square: rgb(DARK_SQUARE),
        }
    }
}

impl PiecePalette for Theme {
    fn team_color(&self, team: Team) -> Rgba {
        match team {
            Team::Light => self.light_team,
            Team::Dark => self.dark_team,
        }
    }

    fn selected_outline(&self) -> Rgba {
        self.selected_outline
    }
}
