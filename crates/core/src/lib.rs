//! tetrabot core crate - board grid, piece catalog and move types.

mod board;
mod board_heights;
mod error;
mod moves;
mod piece;

pub use board::{Board, Cell};
pub use board_heights::ColumnHeights;
pub use error::BoardError;
pub use moves::Move;
pub use piece::{Piece, Rotation};
