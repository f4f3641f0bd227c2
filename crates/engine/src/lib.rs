//! tetrabot-engine - placement legality, piece application and move generation.

pub mod apply;
pub mod collision;
pub mod move_list;
pub mod movegen;

pub use apply::{apply_move, apply_move_into, apply_move_mut, place_piece, place_piece_mut};
pub use collision::{can_place, drop_row, occupied};
pub use move_list::MoveList;
pub use movegen::{count_moves, generate_moves, generate_moves_into, SPAWN_ROW};
