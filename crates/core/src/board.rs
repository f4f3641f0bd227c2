//! board representation - row-major cell grid, row 0 at the top
//! cells hold 0 (empty) or the id of the piece that filled them

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{BoardError, ColumnHeights, Piece};

/// Raw cell value: `Board::EMPTY` or a `Piece::id`.
pub type Cell = u8;

/// Fixed-size playfield snapshot.
/// Dimensions never change after construction; selectors take `&Board`
/// and only ever write into their own clones.
#[derive(PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr", into = "BoardRepr")]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Clone for Board {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: self.cells.clone(),
        }
    }

    /// Reuses the existing cell buffer - search loops lean on this to avoid
    /// one allocation per simulated placement.
    fn clone_from(&mut self, source: &Self) {
        self.width = source.width;
        self.height = source.height;
        self.cells.clone_from(&source.cells);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub const EMPTY: Cell = 0;
    pub const STANDARD_WIDTH: usize = 10;
    pub const STANDARD_HEIGHT: usize = 20;
    /// Upper bound on either dimension; keeps signed anchor math in range.
    pub const MAX_DIMENSION: usize = 1 << 12;

    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Self::EMPTY; width * height],
        })
    }

    /// Empty 10x20 board.
    pub fn standard() -> Self {
        Self {
            width: Self::STANDARD_WIDTH,
            height: Self::STANDARD_HEIGHT,
            cells: vec![Self::EMPTY; Self::STANDARD_WIDTH * Self::STANDARD_HEIGHT],
        }
    }

    /// Build from row-major cell values, validating every entry.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, BoardError> {
        check_dimensions(width, height)?;
        if cells.len() != width * height {
            return Err(BoardError::CellCount {
                expected: width * height,
                actual: cells.len(),
            });
        }
        for (index, &value) in cells.iter().enumerate() {
            if value != Self::EMPTY && Piece::from_id(value).is_none() {
                return Err(BoardError::UnknownCell {
                    value,
                    x: index % width,
                    y: index / width,
                });
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse a top-to-bottom picture: `.` is empty, a piece letter is filled.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        check_dimensions(width, height)?;

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let actual = row.chars().count();
            if actual != width {
                return Err(BoardError::RaggedRow {
                    row: y,
                    expected: width,
                    actual,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '.' => Self::EMPTY,
                    other => Piece::from_letter(other)
                        .map(Piece::id)
                        .ok_or(BoardError::UnknownChar { ch: other, x, y })?,
                };
                cells.push(cell);
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Is the signed coordinate inside the grid?
    #[inline(always)]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.width + x]
    }

    #[inline(always)]
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        self.get(x, y) != Self::EMPTY
    }

    /// `cell` must be `EMPTY` or a `Piece::id`.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        debug_assert!(
            cell == Self::EMPTY || Piece::from_id(cell).is_some(),
            "unknown cell value {cell}"
        );
        self.cells[y * self.width + x] = cell;
    }

    /// Copy `source` into this board, reusing the allocation.
    pub fn copy_from(&mut self, source: &Board) {
        self.clone_from(source);
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).iter().all(|&cell| cell != Self::EMPTY)
    }

    pub fn is_row_empty(&self, y: usize) -> bool {
        self.row(y).iter().all(|&cell| cell == Self::EMPTY)
    }

    /// Number of complete rows, without removing them.
    pub fn full_rows(&self) -> u32 {
        (0..self.height).filter(|&y| self.is_row_full(y)).count() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Self::EMPTY)
    }

    /// Remove complete rows bottom-up. Everything above a removed row shifts
    /// down by one and an empty row enters at the top; the same index is then
    /// examined again. Returns the number of rows removed.
    pub fn clear_lines(&mut self) -> u32 {
        let width = self.width;
        let mut cleared = 0;
        let mut y = self.height;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.cells.copy_within(0..row * width, width);
                self.cells[..width].fill(Self::EMPTY);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    pub fn column_heights(&self) -> ColumnHeights {
        ColumnHeights::new(self)
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), BoardError> {
    if width == 0 || height == 0 {
        return Err(BoardError::EmptyDimensions { width, height });
    }
    if width > Board::MAX_DIMENSION || height > Board::MAX_DIMENSION {
        return Err(BoardError::TooLarge { width, height });
    }
    Ok(())
}

fn cell_char(cell: Cell) -> char {
    Piece::from_id(cell).map_or('.', Piece::letter)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for &cell in self.row(y) {
                write!(f, "{}", cell_char(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct BoardRepr {
    width: usize,
    height: usize,
    rows: Vec<String>,
}

impl From<Board> for BoardRepr {
    fn from(board: Board) -> Self {
        let rows = (0..board.height)
            .map(|y| board.row(y).iter().map(|&cell| cell_char(cell)).collect())
            .collect();
        Self {
            width: board.width,
            height: board.height,
            rows,
        }
    }
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let board = Board::from_rows(&repr.rows)?;
        if board.width != repr.width || board.height != repr.height {
            return Err(BoardError::CellCount {
                expected: repr.width * repr.height,
                actual: board.width * board.height,
            });
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: usize) {
        for x in 0..board.width() {
            board.set(x, y, Piece::I.id());
        }
    }

    #[test]
    fn test_set_get() {
        let mut b = Board::standard();
        b.set(5, 10, Piece::T.id());
        assert!(b.is_filled(5, 10));
        assert_eq!(b.get(5, 10), Piece::T.id());
        assert!(!b.is_filled(4, 10));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unknown cell value 9")]
    fn test_set_rejects_unknown_value() {
        let mut b = Board::standard();
        b.set(0, 0, 9);
    }

    #[test]
    fn test_set_round_trips_through_serde() {
        let mut b = Board::new(3, 2).expect("valid board");
        for (x, piece) in [Piece::S, Piece::O, Piece::Z].into_iter().enumerate() {
            b.set(x, 1, piece.id());
        }
        b.set(1, 1, Board::EMPTY);
        let json = serde_json::to_string(&b).expect("serialize");
        let back: Board = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, b);
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            Board::new(0, 20),
            Err(BoardError::EmptyDimensions {
                width: 0,
                height: 20
            })
        );
    }

    #[test]
    fn test_from_cells_rejects_unknown_value() {
        let mut cells = vec![0; 4 * 2];
        cells[5] = 9;
        assert_eq!(
            Board::from_cells(4, 2, cells),
            Err(BoardError::UnknownCell { value: 9, x: 1, y: 1 })
        );
    }

    #[test]
    fn test_from_rows() {
        let b = Board::from_rows(&["....", "T..I"]).expect("valid board");
        assert_eq!(b.width(), 4);
        assert_eq!(b.height(), 2);
        assert_eq!(b.get(0, 1), Piece::T.id());
        assert_eq!(b.get(3, 1), Piece::I.id());
        assert!(b.is_row_empty(0));

        assert!(matches!(
            Board::from_rows(&["...", ".."]),
            Err(BoardError::RaggedRow { row: 1, .. })
        ));
        assert!(matches!(
            Board::from_rows(&["..#"]),
            Err(BoardError::UnknownChar { ch: '#', .. })
        ));
    }

    #[test]
    fn test_clear_single_line() {
        let mut b = Board::standard();
        fill_row(&mut b, 19);
        b.set(5, 18, Piece::T.id());
        assert_eq!(b.clear_lines(), 1);
        assert!(b.is_filled(5, 19)); // row 18 shifted down into 19
        assert!(b.is_row_empty(0));
    }

    #[test]
    fn test_clear_stacked_lines_rechecks_same_row() {
        let mut b = Board::standard();
        fill_row(&mut b, 19);
        fill_row(&mut b, 18);
        b.set(3, 17, Piece::L.id());
        assert_eq!(b.clear_lines(), 2);
        assert!(b.is_filled(3, 19));
        assert_eq!((0..20).filter(|&y| !b.is_row_empty(y)).count(), 1);
    }

    #[test]
    fn test_clear_split_lines() {
        let mut b = Board::standard();
        fill_row(&mut b, 19);
        b.set(0, 18, Piece::S.id());
        fill_row(&mut b, 17);
        assert_eq!(b.clear_lines(), 2);
        assert!(b.is_filled(0, 19));
        assert_eq!(b.full_rows(), 0);
    }

    #[test]
    fn test_clear_top_row() {
        let mut b = Board::new(3, 2).expect("valid board");
        fill_row(&mut b, 0);
        assert_eq!(b.clear_lines(), 1);
        assert!(b.is_empty());
    }

    #[test]
    fn test_full_rows_counts_without_mutating() {
        let mut b = Board::standard();
        fill_row(&mut b, 19);
        fill_row(&mut b, 10);
        let before = b.clone();
        assert_eq!(b.full_rows(), 2);
        assert_eq!(b, before);
    }

    #[test]
    fn test_copy_from_is_independent() {
        let mut source = Board::standard();
        source.set(1, 1, Piece::Z.id());
        let mut scratch = Board::standard();
        scratch.copy_from(&source);
        scratch.set(2, 2, Piece::Z.id());
        assert_eq!(scratch.get(1, 1), Piece::Z.id());
        assert!(!source.is_filled(2, 2));
    }

    #[test]
    fn test_display() {
        let b = Board::from_rows(&["..", "OO"]).expect("valid board");
        assert_eq!(b.to_string(), "..\nOO\n");
    }

    #[test]
    fn test_serde_validates_rows() {
        let b = Board::from_rows(&["..", "TT"]).expect("valid board");
        let json = serde_json::to_string(&b).expect("serialize");
        let back: Board = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, b);

        let bad = r#"{"width":2,"height":2,"rows":["..","X."]}"#;
        assert!(serde_json::from_str::<Board>(bad).is_err());
    }
}
