//! Legal placement enumeration for one piece on one board.

use crate::collision::{drop_row, occupied};
use crate::move_list::MoveList;
use tetrabot_core::{Board, Move, Piece, Rotation};

/// Row every piece spawns on before it falls.
pub const SPAWN_ROW: i32 = 0;

/// Every (rotation, anchor) that can exist at the spawn row, hard-dropped to
/// its resting row. Ordered rotation-major, then anchor ascending; callers
/// rely on that order for first-seen tie-breaks.
pub fn generate_moves(board: &Board, piece: Piece) -> MoveList {
    let mut moves = MoveList::new();
    generate_moves_into(board, piece, &mut moves);
    moves
}

/// Same as [`generate_moves`] but appends into a caller-owned list.
pub fn generate_moves_into(board: &Board, piece: Piece, moves: &mut MoveList) {
    let width = board.width() as i32;
    for rotation in Rotation::ALL {
        for x in (1 - piece.size())..width {
            if occupied(board, piece, rotation, x, SPAWN_ROW) {
                continue;
            }
            let y = drop_row(board, piece, rotation, x, SPAWN_ROW);
            if !occupied(board, piece, rotation, x, y) {
                moves.push(Move::new(piece, rotation, x, y));
            }
        }
    }
}

pub fn count_moves(board: &Board, piece: Piece) -> usize {
    generate_moves(board, piece).len()
}
