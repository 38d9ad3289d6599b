//! Board layout calculations - handles sizing and coordinate transformations.

use crate::domain::BoardCoordinate;
use crate::domain::checkers::BOARD_SIZE;
use crate::ui::theme::BOARD_PADDING;
use gpui::{Pixels, Size, px};

/// Smallest square size the board shrinks to
const MIN_SQUARE_SIZE: f32 = 30.0;

/// Cell dimensions the piece renderer positions against
pub trait CellLayout {
    fn cell_width(&self) -> f32;
    fn cell_height(&self) -> f32;
}

/// Handles all layout calculations for the checkers board
#[derive(Clone, Copy, Debug)]
pub struct BoardLayout {
    pub panel_size: Size<Pixels>,
}

impl BoardLayout {
    pub fn new(panel_size: Size<Pixels>) -> Self {
        Self { panel_size }
    }

    /// Calculate square size from measured panel dimensions
    pub fn square_size(&self) -> f32 {
        let panel_width: f32 = self.panel_size.width.into();
        let panel_height: f32 = self.panel_size.height.into();
        let available_width = panel_width - BOARD_PADDING * 2.0;
        let available_height = panel_height - BOARD_PADDING * 2.0;
        (available_width.min(available_height) / BOARD_SIZE as f32).max(MIN_SQUARE_SIZE)
    }

    /// Convert position relative to board panel to a board cell (if within board)
    pub fn pos_to_cell(&self, x: f32, y: f32) -> Option<BoardCoordinate> {
        let board_x = x - BOARD_PADDING;
        let board_y = y - BOARD_PADDING;

        if board_x < 0.0 || board_y < 0.0 {
            return None;
        }

        let square_size = self.square_size();
        let col = (board_x / square_size) as u32;
        let row = (board_y / square_size) as u32;

        BoardCoordinate::new(u8::try_from(row).ok()?, u8::try_from(col).ok()?)
    }

    /// Get the total size of the board (8 squares)
    pub fn board_total_size(&self) -> f32 {
        self.square_size() * BOARD_SIZE as f32
    }
}

impl CellLayout for BoardLayout {
    fn cell_width(&self) -> f32 {
        self.square_size()
    }

    fn cell_height(&self) -> f32 {
        self.square_size()
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(Size {
            width: px(450.0),
            height: px(600.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(width: f32, height: f32) -> BoardLayout {
        BoardLayout::new(Size {
            width: px(width),
            height: px(height),
        })
    }

    #[test]
    fn test_square_size_uses_smaller_side() {
        // 450 - 40 = 410 wide, 600 - 40 = 560 tall
        let l = BoardLayout::default();
        assert_eq!(l.square_size(), 410.0 / 8.0);
        assert_eq!(l.cell_width(), l.cell_height());
        assert_eq!(l.board_total_size(), 410.0);
    }

    #[test]
    fn test_square_size_minimum() {
        assert_eq!(layout(100.0, 100.0).square_size(), MIN_SQUARE_SIZE);
    }

    #[test]
    fn test_pos_to_cell() {
        let l = layout(840.0, 840.0); // 100px squares
        assert_eq!(l.pos_to_cell(25.0, 25.0), BoardCoordinate::new(0, 0));
        assert_eq!(l.pos_to_cell(170.0, 320.0), BoardCoordinate::new(3, 1));
        assert_eq!(l.pos_to_cell(10.0, 50.0), None);
        assert_eq!(l.pos_to_cell(830.0, 50.0), None);
    }
}
