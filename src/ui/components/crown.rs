//! Crown marker rendering for kings.

use gpui::{
    AnyElement, MouseButton, MouseDownEvent, Rgba, Transformation, div, prelude::*, px, size, svg,
};

use crate::ui::components::{ClickHandler, CrownMarker};
use crate::ui::theme::CROWN_SCALE;

pub const CROWN_SVG: &str = "assets/crown.svg";

/// Render a crown centered in its cell, mirrored when `marker.flip` is set
pub fn render_crown(
    marker: CrownMarker,
    cell_size: f32,
    color: Rgba,
    on_click: ClickHandler,
) -> AnyElement {
    let crown_size = cell_size * CROWN_SCALE;
    let inset = (cell_size - crown_size) / 2.0;
    let left = marker.coordinate.column as f32 * cell_size + inset;
    let top = marker.coordinate.row as f32 * cell_size + inset;

    let glyph = svg().path(CROWN_SVG).size(px(crown_size)).text_color(color);
    let glyph = if marker.flip {
        glyph.with_transformation(Transformation::scale(size(-1.0, 1.0)))
    } else {
        glyph
    };

    div()
        .absolute()
        .left(px(left))
        .top(px(top))
        .size(px(crown_size))
        .cursor_pointer()
        // The crown sits on top of the piece disc; one click, one handler call
        .on_mouse_down(MouseButton::Left, move |_: &MouseDownEvent, _, cx| {
            cx.stop_propagation();
            on_click(cx)
        })
        .child(glyph)
        .into_any_element()
}
