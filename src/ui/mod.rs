pub mod assets;
pub mod board_layout;
pub mod components;
pub mod surface;
pub mod theme;
pub mod views;

pub use assets::FileAssets;
pub use board_layout::BoardLayout;
