//! Checkers board view - squares, pieces and click-to-select.

use std::rc::Rc;

use gpui::{
    AnyElement, App, Context, Entity, FocusHandle, Focusable, MouseButton, MouseDownEvent,
    Pixels, Subscription, Window, actions, canvas, div, prelude::*, px, rgb,
};
use gpui_component::resizable::{h_resizable, resizable_panel};

use crate::domain::Table;
use crate::domain::checkers::BOARD_SIZE;
use crate::models::BoardModel;
use crate::ui::components::{ClickHandler, PieceProps, render_piece, render_square};
use crate::ui::surface::ElementSurface;
use crate::ui::theme::{BOARD_PADDING, INITIAL_LEFT_PANEL, INITIAL_RIGHT_PANEL, PANEL_BG, Theme};
use crate::ui::views::render_info_panel;

actions!(
    checkers,
    [ClearSelection, ToggleCrownFlip, ResetBoard, RemoveSelected]
);

/// Key context the board's bindings are scoped to
pub const KEY_CONTEXT: &str = "CheckersBoard";

/// The main checkers board view that observes a BoardModel
pub struct CheckersBoardView {
    model: Entity<BoardModel>,
    /// Placement restored by ResetBoard
    starting_table: Table,
    theme: Theme,
    focus_handle: FocusHandle,
    _subscription: Subscription,
}

impl CheckersBoardView {
    pub fn new(
        model: Entity<BoardModel>,
        starting_table: Table,
        theme: Theme,
        cx: &mut Context<Self>,
    ) -> Self {
        let _subscription = cx.observe(&model, |_, _, cx| cx.notify());
        Self {
            model,
            starting_table,
            theme,
            focus_handle: cx.focus_handle(),
            _subscription,
        }
    }

    fn clear_selection(&mut self, _: &ClearSelection, _: &mut Window, cx: &mut Context<Self>) {
        self.model.update(cx, |board, cx| {
            board.clear_selection();
            cx.notify();
        });
    }

    fn toggle_crown_flip(&mut self, _: &ToggleCrownFlip, _: &mut Window, cx: &mut Context<Self>) {
        self.model.update(cx, |board, cx| {
            board.toggle_flip_crowns();
            cx.notify();
        });
    }

    fn remove_selected(&mut self, _: &RemoveSelected, _: &mut Window, cx: &mut Context<Self>) {
        self.model.update(cx, |board, cx| {
            if board.remove_selected().is_some() {
                cx.notify();
            }
        });
    }

    fn reset_board(&mut self, _: &ResetBoard, _: &mut Window, cx: &mut Context<Self>) {
        let table = self.starting_table;
        self.model.update(cx, |board, cx| {
            board.reset(table);
            cx.notify();
        });
    }
}

/// Every piece on the board as absolutely positioned elements, each wired to
/// toggle its own selection
pub fn render_pieces(
    model: &Entity<BoardModel>,
    board: &BoardModel,
    theme: Theme,
) -> Vec<AnyElement> {
    let layout = board.layout();
    let mut surface = ElementSurface::new(layout.square_size(), theme.crown);

    for (slot, piece) in board.table().occupied() {
        let props = PieceProps::new(piece, slot)
            .selected(board.selected() == Some(slot))
            .flip_crown(board.flip_crowns);
        let model = model.clone();
        let on_click: ClickHandler = Rc::new(move |cx: &mut App| {
            model.update(cx, |board, cx| {
                board.toggle_selection(slot);
                cx.notify();
            });
        });
        render_piece(&props, &layout, &theme, &on_click, &mut surface);
    }

    surface.into_elements()
}

impl Focusable for CheckersBoardView {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for CheckersBoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let model_down = self.model.clone();
        let model_measure = self.model.clone();
        let theme = self.theme;

        let board = self.model.read(cx);
        let layout = board.layout();
        let pieces = render_pieces(&self.model, board, theme);

        // Sizing based on measured panel dimensions
        let square_size = layout.square_size();
        let board_total_size = layout.board_total_size();

        // Squares laid out as rows; pieces are absolute on top
        let board_element = div()
            .relative()
            .flex_shrink_0()
            .flex()
            .flex_col()
            .w(px(board_total_size))
            .h(px(board_total_size))
            .overflow_hidden()
            .rounded_md()
            .children((0..BOARD_SIZE).map(|row| {
                div().flex().flex_shrink_0().children(
                    (0..BOARD_SIZE).map(move |col| render_square(row, col, square_size, theme)),
                )
            }))
            .children(pieces);

        let board_panel_content = div()
            .id("board-panel")
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(rgb(PANEL_BG))
            .p(px(BOARD_PADDING))
            .child(board_element)
            // Clicking an empty square drops the selection
            .on_mouse_down(
                MouseButton::Left,
                move |ev: &MouseDownEvent, _window, cx| {
                    model_down.update(cx, |board, cx| {
                        let pos = ev.position;
                        let on_empty_square = board
                            .layout()
                            .pos_to_cell(pos.x.into(), pos.y.into())
                            .is_some_and(|cell| {
                                cell.slot().and_then(|slot| board.piece_at(slot)).is_none()
                            });
                        if on_empty_square {
                            board.clear_selection();
                            cx.notify();
                        }
                    });
                },
            );

        // Canvas to measure actual panel size
        let measure_canvas = canvas(
            move |bounds, _window, cx| {
                model_measure.update(cx, |board, cx| {
                    if board.panel_size != bounds.size {
                        board.panel_size = bounds.size;
                        cx.notify();
                    }
                });
            },
            |_, _, _, _| {},
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full();

        let board_panel_with_measure = div()
            .relative()
            .size_full()
            .child(measure_canvas)
            .child(board_panel_content);

        let info_panel = render_info_panel(&self.model, cx);

        div()
            .size_full()
            .key_context(KEY_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::clear_selection))
            .on_action(cx.listener(Self::toggle_crown_flip))
            .on_action(cx.listener(Self::remove_selected))
            .on_action(cx.listener(Self::reset_board))
            .child(
                h_resizable("checkers-layout")
                    .child(
                        resizable_panel()
                            .size(px(INITIAL_LEFT_PANEL))
                            .size_range(px(320.)..px(1200.))
                            .child(board_panel_with_measure),
                    )
                    .child(
                        resizable_panel()
                            .size(px(INITIAL_RIGHT_PANEL))
                            .size_range(px(150.)..Pixels::MAX)
                            .child(info_panel),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Piece, SlotIndex, Team};
    use gpui::{Modifiers, TestAppContext, VisualTestContext, point, size};

    /// The bare board, 100px squares at the window origin
    struct PieceStage {
        model: Entity<BoardModel>,
    }

    impl Render for PieceStage {
        fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
            let theme = Theme::default();
            let board = self.model.read(cx);
            let square_size = board.layout().square_size();
            let pieces = render_pieces(&self.model, board, theme);
            div()
                .relative()
                .flex()
                .flex_col()
                .children((0..BOARD_SIZE).map(|row| {
                    div().flex().children(
                        (0..BOARD_SIZE).map(move |col| render_square(row, col, square_size, theme)),
                    )
                }))
                .children(pieces)
        }
    }

    fn board_with_king(cx: &mut TestAppContext) -> Entity<BoardModel> {
        let mut table = Table::standard();
        table.set(SlotIndex::new(0).unwrap(), Some(Piece::king(Team::Dark)));
        cx.new(|_| {
            let mut board = BoardModel::new(table, false);
            // 840 - 2 * 20 padding = 800, so 100px squares
            board.panel_size = size(px(840.0), px(840.0));
            board
        })
    }

    fn selected(model: &Entity<BoardModel>, cx: &VisualTestContext) -> Option<SlotIndex> {
        model.read_with(cx, |board, _| board.selected())
    }

    #[gpui::test]
    fn test_crown_click_selects_once(cx: &mut TestAppContext) {
        let model = board_with_king(cx);
        let stage_model = model.clone();
        let (_stage, cx) = cx.add_window_view(|_, _| PieceStage { model: stage_model });
        cx.run_until_parked();

        // slot 0 is row 0, column 1; its centre is covered by the crown
        cx.simulate_click(point(px(150.0), px(50.0)), Modifiers::none());
        assert_eq!(selected(&model, cx), Some(SlotIndex::new(0).unwrap()));

        cx.simulate_click(point(px(150.0), px(50.0)), Modifiers::none());
        assert_eq!(selected(&model, cx), None);
    }

    #[gpui::test]
    fn test_piece_edge_click_selects(cx: &mut TestAppContext) {
        let model = board_with_king(cx);
        let stage_model = model.clone();
        let (_stage, cx) = cx.add_window_view(|_, _| PieceStage { model: stage_model });
        cx.run_until_parked();

        // slot 4 is row 1, column 0: a man, clicked inside the disc but off centre
        cx.simulate_click(point(px(25.0), px(150.0)), Modifiers::none());
        assert_eq!(selected(&model, cx), Some(SlotIndex::new(4).unwrap()));
    }
}
