use thiserror::Error;

/// Rejected board construction. Raised at the boundary so malformed grids
/// never reach the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },

    #[error("board dimensions {width}x{height} exceed the supported maximum")]
    TooLarge { width: usize, height: usize },

    #[error("expected {expected} cells for the board, got {actual}")]
    CellCount { expected: usize, actual: usize },

    #[error("row {row} has width {actual}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("unknown cell value {value} at ({x}, {y})")]
    UnknownCell { value: u8, x: usize, y: usize },

    #[error("unknown cell character {ch:?} at ({x}, {y})")]
    UnknownChar { ch: char, x: usize, y: usize },
}
