//! Square rendering component.

use gpui::{div, prelude::*, px};

use crate::ui::theme::Theme;

/// Render a single empty board square
pub fn render_square(row: u8, col: u8, square_size: f32, theme: Theme) -> impl IntoElement {
    div()
        .flex_shrink_0() // never shrink - maintain aspect ratio
        .size(px(square_size))
        .bg(theme.square_color(row, col))
}
