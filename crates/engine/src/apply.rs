use tetrabot_core::{Board, Move};

/// Write the move's minos into `board`. Cells outside the grid are dropped
/// silently; nothing out of range is ever stored.
#[inline]
pub fn place_piece_mut(board: &mut Board, mv: &Move) {
    let id = mv.piece.id();
    for (x, y) in mv.cells() {
        if board.contains(x, y) {
            board.set(x as usize, y as usize, id);
        }
    }
}

/// Copy of `board` with the move's minos written in. No line clear.
pub fn place_piece(board: &Board, mv: &Move) -> Board {
    let mut next = board.clone();
    place_piece_mut(&mut next, mv);
    next
}

/// Apply a move to a board and return the resulting board and lines cleared.
pub fn apply_move(board: &Board, mv: &Move) -> (Board, u32) {
    let mut next = board.clone();
    let lines = apply_move_mut(&mut next, mv);
    (next, lines)
}

/// Place and clear in place. The same path serves real commits and search.
#[inline]
pub fn apply_move_mut(board: &mut Board, mv: &Move) -> u32 {
    place_piece_mut(board, mv);
    board.clear_lines()
}

/// Overwrite `scratch` with `board` plus the move, reusing its buffer.
#[inline]
pub fn apply_move_into(scratch: &mut Board, board: &Board, mv: &Move) -> u32 {
    scratch.copy_from(board);
    apply_move_mut(scratch, mv)
}
