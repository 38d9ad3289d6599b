//! Board state model - the application layer for what the board shows.
//!
//! Holds piece placement and selection only. Moves, captures and turns are
//! not modelled here.

use gpui::{Pixels, Size, px};

use crate::domain::{Piece, SlotIndex, Table};
use crate::ui::BoardLayout;
use crate::ui::theme::INITIAL_LEFT_PANEL;

/// The board model observed by the board view
pub struct BoardModel {
    table: Table,
    /// Currently selected slot, always an occupied one
    selected: Option<SlotIndex>,
    /// Mirror crown glyphs on kings
    pub flip_crowns: bool,
    /// Measured panel size from canvas
    pub panel_size: Size<Pixels>,
}

impl BoardModel {
    pub fn new(table: Table, flip_crowns: bool) -> Self {
        Self {
            table,
            selected: None,
            flip_crowns,
            panel_size: Size {
                width: px(INITIAL_LEFT_PANEL),
                height: px(600.0),
            },
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn piece_at(&self, slot: SlotIndex) -> Option<Piece> {
        self.table.get(slot)
    }

    pub fn selected(&self) -> Option<SlotIndex> {
        self.selected
    }

    /// Select the piece on `slot`, or deselect it if it already is selected.
    /// Empty slots are ignored.
    pub fn toggle_selection(&mut self, slot: SlotIndex) {
        if self.table.get(slot).is_none() {
            return;
        }
        if self.selected == Some(slot) {
            log::debug!("Deselected slot {}", slot);
            self.selected = None;
        } else {
            log::debug!("Selected slot {} at {}", slot, slot.coordinate());
            self.selected = Some(slot);
        }
    }

    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            log::debug!("Selection cleared");
        }
    }

    pub fn toggle_flip_crowns(&mut self) {
        self.flip_crowns = !self.flip_crowns;
        log::debug!("Crown mirroring {}", if self.flip_crowns { "on" } else { "off" });
    }

    /// Take the selected piece off the board
    pub fn remove_selected(&mut self) -> Option<Piece> {
        let slot = self.selected.take()?;
        let piece = self.table.take(slot);
        if let Some(piece) = piece {
            log::info!("Removed {} from slot {}", piece, slot);
        }
        piece
    }

    /// Replace the placement and drop any selection
    pub fn reset(&mut self, table: Table) {
        log::info!("Board reset to {}", table);
        self.table = table;
        self.selected = None;
    }

    pub fn layout(&self) -> BoardLayout {
        BoardLayout::new(self.panel_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Team;

    fn slot(i: u8) -> SlotIndex {
        SlotIndex::new(i).unwrap()
    }

    #[test]
    fn test_toggle_selection() {
        let mut board = BoardModel::new(Table::standard(), false);
        assert_eq!(board.selected(), None);

        board.toggle_selection(slot(9));
        assert_eq!(board.selected(), Some(slot(9)));

        board.toggle_selection(slot(22));
        assert_eq!(board.selected(), Some(slot(22)));

        board.toggle_selection(slot(22));
        assert_eq!(board.selected(), None);
    }

    #[test]
    fn test_empty_slot_not_selectable() {
        let mut board = BoardModel::new(Table::standard(), false);
        board.toggle_selection(slot(3));
        board.toggle_selection(slot(15));
        assert_eq!(board.selected(), Some(slot(3)));
    }

    #[test]
    fn test_reset_clears_selection() {
        let mut board = BoardModel::new(Table::standard(), true);
        board.toggle_selection(slot(0));
        board.reset(Table::empty());
        assert_eq!(board.selected(), None);
        assert_eq!(board.table().count(Team::Dark), 0);
        assert!(board.flip_crowns);
    }

    #[test]
    fn test_toggle_flip_crowns() {
        let mut board = BoardModel::new(Table::standard(), false);
        board.toggle_flip_crowns();
        assert!(board.flip_crowns);
        board.clear_selection();
        assert_eq!(board.piece_at(slot(31)), Some(Piece::man(Team::Light)));
    }

    #[test]
    fn test_remove_selected() {
        let mut board = BoardModel::new(Table::standard(), false);
        assert_eq!(board.remove_selected(), None);

        board.toggle_selection(slot(20));
        assert_eq!(board.remove_selected(), Some(Piece::man(Team::Light)));
        assert_eq!(board.selected(), None);
        assert_eq!(board.piece_at(slot(20)), None);
        assert_eq!(board.table().count(Team::Light), 11);

        // the emptied slot can no longer be selected
        board.toggle_selection(slot(20));
        assert_eq!(board.selected(), None);
    }
}
