//! Application setup and window creation.

use anyhow::Result;
use gpui::{App, Bounds, Focusable, KeyBinding, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;

use crate::config::AppConfig;
use crate::models::BoardModel;
use crate::ui::views::{
    CheckersBoardView, ClearSelection, KEY_CONTEXT, RemoveSelected, ResetBoard, ToggleCrownFlip,
};

/// Initialize and open the checkers window
pub fn run(cx: &mut App, config: AppConfig) -> Result<()> {
    gpui_component::init(cx);

    cx.bind_keys([
        KeyBinding::new("escape", ClearSelection, Some(KEY_CONTEXT)),
        KeyBinding::new("f", ToggleCrownFlip, Some(KEY_CONTEXT)),
        KeyBinding::new("r", ResetBoard, Some(KEY_CONTEXT)),
        KeyBinding::new("delete", RemoveSelected, Some(KEY_CONTEXT)),
        KeyBinding::new("backspace", RemoveSelected, Some(KEY_CONTEXT)),
    ]);

    let table = config.table()?;
    let theme = config.theme();

    // Create the board model
    let model = cx.new(|_| BoardModel::new(table, config.flip_crowns));

    let bounds = Bounds::centered(
        None,
        size(px(config.window_width), px(config.window_height)),
        cx,
    );
    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| CheckersBoardView::new(model, table, theme, cx));
            let focus_handle = view.read(cx).focus_handle(cx);
            window.focus(&focus_handle);
            cx.new(|cx| Root::new(view, window, cx))
        },
    )?;

    log::info!("Board window opened with {} pieces", table.occupied().count());
    Ok(())
}
