pub mod checkers;
pub mod table;

pub use checkers::{BoardCoordinate, Piece, SlotIndex, Team};
pub use table::Table;
