//! Side panel - selection details and board controls.

use gpui::{App, Div, Entity, div, prelude::*, px, rgb};
use gpui_component::Disableable;
use gpui_component::button::{Button, ButtonVariants};

use crate::domain::Team;
use crate::models::BoardModel;
use crate::ui::theme::{
    BOARD_PADDING, BORDER_COLOR, INFO_BG, PANEL_BG, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::views::{ClearSelection, RemoveSelected, ResetBoard, ToggleCrownFlip};

/// Render the info panel for a given board model.
pub fn render_info_panel(model: &Entity<BoardModel>, cx: &App) -> Div {
    let board = model.read(cx);
    let table = board.table();

    let selection_text = match board.selected() {
        Some(slot) => match board.piece_at(slot) {
            Some(piece) => format!("{} on slot {} ({})", piece, slot, slot.coordinate()),
            None => format!("Slot {}", slot),
        },
        None => "Nothing selected".to_string(),
    };

    let counts = format!(
        "Light {}  ·  Dark {}",
        table.count(Team::Light),
        table.count(Team::Dark)
    );

    let crown_label = if board.flip_crowns {
        "Unmirror crowns"
    } else {
        "Mirror crowns"
    };

    let controls = div()
        .flex()
        .flex_col()
        .gap_2()
        .p_3()
        .border_t_1()
        .border_color(rgb(BORDER_COLOR))
        .child(
            Button::new("clear-selection")
                .label("Clear selection")
                .compact()
                .disabled(board.selected().is_none())
                .on_click(|_, window, cx| {
                    window.dispatch_action(Box::new(ClearSelection), cx);
                }),
        )
        .child(
            Button::new("remove-selected")
                .label("Remove piece")
                .compact()
                .disabled(board.selected().is_none())
                .on_click(|_, window, cx| {
                    window.dispatch_action(Box::new(RemoveSelected), cx);
                }),
        )
        .child(
            Button::new("toggle-crown-flip")
                .label(crown_label)
                .compact()
                .on_click(|_, window, cx| {
                    window.dispatch_action(Box::new(ToggleCrownFlip), cx);
                }),
        )
        .child(
            Button::new("reset-board")
                .label("Reset board")
                .primary()
                .compact()
                .on_click(|_, window, cx| {
                    window.dispatch_action(Box::new(ResetBoard), cx);
                }),
        );

    let info = div()
        .flex_1()
        .flex()
        .flex_col()
        .bg(rgb(INFO_BG))
        .border_1()
        .border_color(rgb(BORDER_COLOR))
        .rounded_md()
        .overflow_hidden()
        .child(
            div()
                .p_4()
                .pb_2()
                .text_color(rgb(TEXT_PRIMARY))
                .border_b_1()
                .border_color(rgb(BORDER_COLOR))
                .child("Board"),
        )
        .child(
            div()
                .flex_1()
                .flex()
                .flex_col()
                .gap_2()
                .p_4()
                .pt_2()
                .child(div().text_color(rgb(TEXT_PRIMARY)).child(selection_text))
                .child(div().text_color(rgb(TEXT_SECONDARY)).child(counts)),
        )
        .child(controls);

    div()
        .size_full()
        .flex()
        .flex_col()
        .bg(rgb(PANEL_BG))
        .p(px(BOARD_PADDING))
        .child(info)
}
