//! Per-column stack heights derived from a board snapshot

use crate::Board;

/// Column heights for one board snapshot. Cheap to rebuild, never cached
/// across placements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnHeights {
    heights: Vec<usize>,
    board_height: usize,
}

impl ColumnHeights {
    pub fn new(board: &Board) -> Self {
        let heights = (0..board.width())
            .map(|x| Self::compute_height(board, x))
            .collect();
        Self {
            heights,
            board_height: board.height(),
        }
    }

    /// Scan top-down and stop at the first filled cell.
    fn compute_height(board: &Board, x: usize) -> usize {
        (0..board.height())
            .find(|&y| board.is_filled(x, y))
            .map_or(0, |y| board.height() - y)
    }

    #[inline(always)]
    pub fn height(&self, x: usize) -> usize {
        self.heights[x]
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[usize] {
        &self.heights
    }

    pub fn aggregate(&self) -> usize {
        self.heights.iter().sum()
    }

    pub fn max(&self) -> usize {
        self.heights.iter().copied().max().unwrap_or(0)
    }

    /// Sum of absolute differences between neighbouring columns.
    pub fn bumpiness(&self) -> usize {
        self.heights
            .windows(2)
            .map(|pair| pair[0].abs_diff(pair[1]))
            .sum()
    }

    /// Depth summed over columns strictly lower than both neighbours.
    /// The walls count as full-height neighbours.
    pub fn wells(&self) -> usize {
        let last = self.heights.len().saturating_sub(1);
        let mut wells = 0;
        for (x, &height) in self.heights.iter().enumerate() {
            let left = if x == 0 {
                self.board_height
            } else {
                self.heights[x - 1]
            };
            let right = if x == last {
                self.board_height
            } else {
                self.heights[x + 1]
            };
            if height < left && height < right {
                wells += left.min(right) - height;
            }
        }
        wells
    }
}
