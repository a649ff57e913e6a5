//! The explored grid.

#[allow(clippy::module_inception)]
pub mod board;
pub mod tile;

pub use board::{Board, Bounds};
pub use tile::Tile;
