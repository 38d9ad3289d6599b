mod crown;
mod piece;
mod square;

pub use crown::render_crown;
pub use piece::{
    ClickHandler, CrownMarker, PieceCircle, PieceProps, PieceSurface, render_piece,
};
pub use square::render_square;
