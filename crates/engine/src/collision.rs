//! collision detection - walls, floor, other blocks

use tetrabot_core::{Board, Piece, Rotation};

/// Would the piece overlap a wall, the floor, the ceiling, or a filled cell?
/// The one legality test every other module goes through.
#[inline]
pub fn occupied(board: &Board, piece: Piece, rotation: Rotation, x: i32, y: i32) -> bool {
    piece.cells(rotation).iter().any(|&(dx, dy)| {
        let cx = x + dx as i32;
        let cy = y + dy as i32;
        !board.contains(cx, cy) || board.is_filled(cx as usize, cy as usize)
    })
}

/// can we place here? (just !occupied)
#[inline]
pub fn can_place(board: &Board, piece: Piece, rotation: Rotation, x: i32, y: i32) -> bool {
    !occupied(board, piece, rotation, x, y)
}

/// Lowest row reachable by falling straight down from `start_y`.
#[inline]
pub fn drop_row(board: &Board, piece: Piece, rotation: Rotation, x: i32, start_y: i32) -> i32 {
    let height = board.height() as i32;
    let mut y = start_y;
    while y < height && !occupied(board, piece, rotation, x, y + 1) {
        y += 1;
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_collision_empty_board() {
        let board = Board::standard();
        assert!(!occupied(&board, Piece::T, Rotation::North, 4, 0));
    }

    #[test]
    fn test_collision_with_walls() {
        let board = Board::standard();
        // O cells sit at dx 0..=1
        assert!(!occupied(&board, Piece::O, Rotation::North, 0, 0));
        assert!(occupied(&board, Piece::O, Rotation::North, -1, 0));
        assert!(!occupied(&board, Piece::O, Rotation::North, 8, 0));
        assert!(occupied(&board, Piece::O, Rotation::North, 9, 0));
    }

    #[test]
    fn test_empty_box_columns_may_hang_off_the_wall() {
        let board = Board::standard();
        // I East (0x2222) only uses column 2 of its box
        assert!(!occupied(&board, Piece::I, Rotation::East, -2, 0));
        assert!(occupied(&board, Piece::I, Rotation::East, -3, 0));
    }

    #[test]
    fn test_collision_with_floor() {
        let board = Board::standard();
        assert!(!occupied(&board, Piece::O, Rotation::North, 4, 18));
        assert!(occupied(&board, Piece::O, Rotation::North, 4, 19));
    }

    #[test]
    fn test_collision_with_filled_cell() {
        let mut board = Board::standard();
        board.set(5, 10, Piece::Z.id());
        assert!(occupied(&board, Piece::O, Rotation::North, 4, 9));
        assert!(!occupied(&board, Piece::O, Rotation::North, 6, 9));
    }

    #[test]
    fn test_drop_row_empty_board() {
        let board = Board::standard();
        assert_eq!(drop_row(&board, Piece::O, Rotation::North, 4, 0), 18);
        // I North occupies row 1 of its box
        assert_eq!(drop_row(&board, Piece::I, Rotation::North, 3, 0), 18);
    }

    #[test]
    fn test_drop_row_with_obstacle() {
        let mut board = Board::standard();
        for x in 0..board.width() {
            board.set(x, 15, Piece::L.id());
        }
        assert_eq!(drop_row(&board, Piece::O, Rotation::North, 4, 0), 13);
    }
}
