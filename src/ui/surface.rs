//! gpui-backed piece surface.
//!
//! Collects piece primitives as absolutely positioned elements, meant to be
//! children of a relatively positioned board of `cell_size * 8` pixels.

use gpui::{AnyElement, MouseButton, MouseDownEvent, Rgba, div, prelude::*, px, rgba};

use crate::ui::components::{ClickHandler, CrownMarker, PieceCircle, PieceSurface, render_crown};

pub struct ElementSurface {
    cell_size: f32,
    crown_color: Rgba,
    elements: Vec<AnyElement>,
}

impl ElementSurface {
    pub fn new(cell_size: f32, crown_color: Rgba) -> Self {
        Self {
            cell_size,
            crown_color,
            elements: Vec::new(),
        }
    }

    pub fn into_elements(self) -> Vec<AnyElement> {
        self.elements
    }
}

/// Outer ring radius and visible fill radius of a piece circle.
///
/// The outline straddles the circle edge, so the ring reaches half a stroke
/// past the radius and covers half a stroke of the fill. Without an outline
/// the fill keeps the full radius.
pub fn ring_radii(circle: &PieceCircle) -> (f32, f32) {
    let half_stroke = circle.stroke_width / 2.0;
    let outer = circle.radius + half_stroke;
    let fill = match circle.stroke {
        Some(_) => (circle.radius - half_stroke).max(0.0),
        None => circle.radius,
    };
    (outer, fill)
}

impl PieceSurface for ElementSurface {
    fn draw_circle(&mut self, circle: PieceCircle, on_click: ClickHandler) {
        let (outer, fill_radius) = ring_radii(&circle);
        let ring = circle.stroke.unwrap_or(rgba(0x00000000));

        let element = div()
            .absolute()
            .left(px(circle.center.x - outer))
            .top(px(circle.center.y - outer))
            .size(px(outer * 2.0))
            .rounded_full()
            .bg(ring)
            .flex()
            .items_center()
            .justify_center()
            .cursor_pointer()
            .on_mouse_down(MouseButton::Left, move |_: &MouseDownEvent, _, cx| {
                cx.stop_propagation();
                on_click(cx)
            })
            .child(
                div()
                    .size(px(fill_radius * 2.0))
                    .rounded_full()
                    .bg(circle.fill),
            );

        self.elements.push(element.into_any_element());
    }

    fn draw_crown(&mut self, crown: CrownMarker, on_click: ClickHandler) {
        self.elements
            .push(render_crown(crown, self.cell_size, self.crown_color, on_click));
    }
}
