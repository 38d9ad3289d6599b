mod board_view;
mod info_panel;

pub use board_view::{
    CheckersBoardView, ClearSelection, KEY_CONTEXT, RemoveSelected, ResetBoard, ToggleCrownFlip,
};
pub use info_panel::render_info_panel;
