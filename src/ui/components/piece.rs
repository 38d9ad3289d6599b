//! Piece rendering component.
//!
//! Turns a piece, its slot and its selection state into draw primitives.
//! Nothing here touches gpui elements directly: the primitives go to a
//! [`PieceSurface`], which decides how they end up on screen.

use std::rc::Rc;

use gpui::{App, Point, Rgba, point};

use crate::domain::{BoardCoordinate, Piece, SlotIndex};
use crate::ui::board_layout::CellLayout;
use crate::ui::theme::PiecePalette;

/// Outline width, drawn even when the outline is invisible
pub const STROKE_WIDTH: f32 = 5.0;

/// Invoked when the player clicks a piece or its crown.
/// Owned by the caller; every primitive gets a clone of the same handle.
pub type ClickHandler = Rc<dyn Fn(&mut App)>;

/// Everything that varies between two pieces on the board
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieceProps {
    pub piece: Piece,
    pub slot: SlotIndex,
    pub selected: bool,
    /// Mirror the crown glyph horizontally
    pub flip_crown: bool,
}

impl PieceProps {
    pub fn new(piece: Piece, slot: SlotIndex) -> Self {
        Self {
            piece,
            slot,
            selected: false,
            flip_crown: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn flip_crown(mut self, flip_crown: bool) -> Self {
        self.flip_crown = flip_crown;
        self
    }
}

/// The piece body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieceCircle {
    pub center: Point<f32>,
    pub radius: f32,
    pub fill: Rgba,
    /// `None` draws no visible outline
    pub stroke: Option<Rgba>,
    pub stroke_width: f32,
}

/// King indicator drawn on top of the piece body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrownMarker {
    pub coordinate: BoardCoordinate,
    pub flip: bool,
}

/// Where piece primitives get drawn
pub trait PieceSurface {
    fn draw_circle(&mut self, circle: PieceCircle, on_click: ClickHandler);
    fn draw_crown(&mut self, crown: CrownMarker, on_click: ClickHandler);
}

impl PieceCircle {
    pub fn for_piece(
        props: &PieceProps,
        layout: &impl CellLayout,
        palette: &impl PiecePalette,
    ) -> Self {
        let coordinate = props.slot.coordinate();
        let cell_width = layout.cell_width();
        let cell_height = layout.cell_height();

        let center = point(
            coordinate.column as f32 * cell_width + cell_width / 2.0,
            coordinate.row as f32 * cell_height + cell_height / 2.0,
        );

        Self {
            center,
            radius: cell_width / 3.0,
            fill: palette.team_color(props.piece.team),
            stroke: props.selected.then(|| palette.selected_outline()),
            stroke_width: STROKE_WIDTH,
        }
    }
}

/// Draw one piece, plus its crown when it is a king
pub fn render_piece(
    props: &PieceProps,
    layout: &impl CellLayout,
    palette: &impl PiecePalette,
    on_click: &ClickHandler,
    surface: &mut impl PieceSurface,
) {
    let circle = PieceCircle::for_piece(props, layout, palette);
    surface.draw_circle(circle, on_click.clone());

    if props.piece.is_king() {
        let crown = CrownMarker {
            coordinate: props.slot.coordinate(),
            flip: props.flip_crown,
        };
        surface.draw_crown(crown, on_click.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Team;
    use crate::ui::theme::Theme;
    use gpui::rgb;

    struct FixedCells {
        width: f32,
        height: f32,
    }

    impl CellLayout for FixedCells {
        fn cell_width(&self) -> f32 {
            self.width
        }

        fn cell_height(&self) -> f32 {
            self.height
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        circles: Vec<(PieceCircle, ClickHandler)>,
        crowns: Vec<(CrownMarker, ClickHandler)>,
    }

    impl PieceSurface for RecordingSurface {
        fn draw_circle(&mut self, circle: PieceCircle, on_click: ClickHandler) {
            self.circles.push((circle, on_click));
        }

        fn draw_crown(&mut self, crown: CrownMarker, on_click: ClickHandler) {
            self.crowns.push((crown, on_click));
        }
    }

    const CELLS: FixedCells = FixedCells {
        width: 60.0,
        height: 50.0,
    };

    fn slot(i: u8) -> SlotIndex {
        SlotIndex::new(i).unwrap()
    }

    fn noop() -> ClickHandler {
        Rc::new(|_: &mut App| {})
    }

    fn draw(props: PieceProps, on_click: &ClickHandler) -> RecordingSurface {
        let mut surface = RecordingSurface::default();
        render_piece(&props, &CELLS, &Theme::default(), on_click, &mut surface);
        surface
    }

    #[test]
    fn test_circle_geometry() {
        // slot 9: row 2, column 3
        let props = PieceProps::new(Piece::man(Team::Dark), slot(9));
        let circle = PieceCircle::for_piece(&props, &CELLS, &Theme::default());
        assert_eq!(circle.center, point(3.0 * 60.0 + 30.0, 2.0 * 50.0 + 25.0));
        assert_eq!(circle.radius, 20.0);
        assert_eq!(circle.stroke_width, STROKE_WIDTH);
    }

    #[test]
    fn test_radius_independent_of_flags() {
        let theme = Theme::default();
        for piece in [Piece::man(Team::Light), Piece::king(Team::Dark)] {
            for selected in [false, true] {
                let props = PieceProps::new(piece, slot(0)).selected(selected);
                let circle = PieceCircle::for_piece(&props, &CELLS, &theme);
                assert_eq!(circle.radius, CELLS.width / 3.0);
            }
        }
    }

    #[test]
    fn test_fill_follows_team() {
        let theme = Theme::default();
        let light = PieceCircle::for_piece(
            &PieceProps::new(Piece::king(Team::Light), slot(0)),
            &CELLS,
            &theme,
        );
        let dark = PieceCircle::for_piece(
            &PieceProps::new(Piece::man(Team::Dark), slot(0)),
            &CELLS,
            &theme,
        );
        assert_eq!(light.fill, theme.light_team);
        assert_eq!(dark.fill, theme.dark_team);
    }

    #[test]
    fn test_stroke_follows_selection() {
        let mut theme = Theme::default();
        theme.selected_outline = rgb(0x00ff00);
        for piece in [
            Piece::man(Team::Light),
            Piece::king(Team::Light),
            Piece::man(Team::Dark),
            Piece::king(Team::Dark),
        ] {
            let props = PieceProps::new(piece, slot(14));
            let plain = PieceCircle::for_piece(&props, &CELLS, &theme);
            let picked = PieceCircle::for_piece(&props.selected(true), &CELLS, &theme);
            assert_eq!(plain.stroke, None);
            assert_eq!(picked.stroke, Some(rgb(0x00ff00)));
        }
    }

    #[test]
    fn test_crown_only_for_kings() {
        let on_click = noop();
        let man = draw(PieceProps::new(Piece::man(Team::Light), slot(4)), &on_click);
        assert_eq!(man.circles.len(), 1);
        assert!(man.crowns.is_empty());

        let king = draw(PieceProps::new(Piece::king(Team::Light), slot(4)), &on_click);
        assert_eq!(king.circles.len(), 1);
        assert_eq!(king.crowns.len(), 1);
    }

    #[test]
    fn test_crown_shares_cell_and_handler() {
        let on_click = noop();
        let props = PieceProps::new(Piece::king(Team::Dark), slot(31)).flip_crown(true);
        let surface = draw(props, &on_click);

        let (crown, crown_click) = &surface.crowns[0];
        let (_, circle_click) = &surface.circles[0];
        assert_eq!(crown.coordinate, BoardCoordinate::new(7, 6).unwrap());
        assert!(crown.flip);
        assert!(Rc::ptr_eq(crown_click, &on_click));
        assert!(Rc::ptr_eq(circle_click, &on_click));
    }

    #[test]
    fn test_flip_crown_defaults_off() {
        let props = PieceProps::new(Piece::king(Team::Dark), slot(2));
        assert!(!props.flip_crown);
        assert!(!props.selected);
        let surface = draw(props, &noop());
        assert!(!surface.crowns[0].0.flip);
    }

    #[test]
    fn test_render_is_idempotent() {
        let on_click = noop();
        let props = PieceProps::new(Piece::king(Team::Light), slot(17)).selected(true);
        let first = draw(props, &on_click);
        let second = draw(props, &on_click);
        assert_eq!(first.circles[0].0, second.circles[0].0);
        assert_eq!(first.crowns[0].0, second.crowns[0].0);
    }
}
