//! tetrabot eval crate - linear heuristics for board evaluation.
//!
//! Two fixed weight sets are kept side by side: `EvalWeights::immediate` for
//! single-placement scoring and `EvalWeights::lookahead` for search. Callers
//! depend on the exact numbers, so neither is tuned in place.

use serde::{Deserialize, Serialize};
use tetrabot_core::Board;

/// Linear weights per feature. Missing fields in a weights file fall back to
/// the lookahead preset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub aggregate_height: f64,
    pub complete_lines: f64,
    pub holes: f64,
    pub bumpiness: f64,
    pub wells: f64,
    pub max_height: f64,
    pub blockades: f64,
    pub lines_cleared: f64,
}

impl EvalWeights {
    /// Weights for scoring a board that still holds its completed rows.
    pub const fn immediate() -> Self {
        Self {
            aggregate_height: -0.510066,
            complete_lines: 0.760666,
            holes: -0.35663,
            bumpiness: -0.184483,
            wells: -0.75,
            max_height: -0.45,
            blockades: -0.25,
            lines_cleared: 1.5,
        }
    }

    /// Weights for scoring a board after its rows were cleared; the clear
    /// count comes from the caller.
    pub const fn lookahead() -> Self {
        Self {
            aggregate_height: -0.51,
            complete_lines: 0.0,
            holes: -0.36,
            bumpiness: -0.18,
            wells: -0.75,
            max_height: -0.45,
            blockades: -0.3,
            lines_cleared: 2.0,
        }
    }
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self::lookahead()
    }
}

/// Every structural term the evaluator looks at, for one board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoardFeatures {
    pub aggregate_height: usize,
    pub max_height: usize,
    pub holes: usize,
    pub blockades: usize,
    pub bumpiness: usize,
    pub wells: usize,
    pub complete_lines: usize,
}

impl BoardFeatures {
    pub fn compute(board: &Board) -> Self {
        let heights = board.column_heights();
        let (holes, blockades) = count_holes_and_blockades(board);

        Self {
            aggregate_height: heights.aggregate(),
            max_height: heights.max(),
            holes,
            blockades,
            bumpiness: heights.bumpiness(),
            wells: heights.wells(),
            complete_lines: board.full_rows() as usize,
        }
    }

    pub fn score(&self, lines_cleared: u32, weights: &EvalWeights) -> f64 {
        weights.aggregate_height * self.aggregate_height as f64
            + weights.complete_lines * self.complete_lines as f64
            + weights.holes * self.holes as f64
            + weights.bumpiness * self.bumpiness as f64
            + weights.wells * self.wells as f64
            + weights.max_height * self.max_height as f64
            + weights.blockades * self.blockades as f64
            + weights.lines_cleared * lines_cleared as f64
    }
}

pub fn evaluate_with_clear(board: &Board, lines_cleared: u32, weights: &EvalWeights) -> f64 {
    BoardFeatures::compute(board).score(lines_cleared, weights)
}

/// Score a board that has the piece placed but nothing cleared yet. Its
/// complete rows count both as `complete_lines` and as `lines_cleared`.
pub fn evaluate_immediate(board: &Board) -> f64 {
    let features = BoardFeatures::compute(board);
    features.score(features.complete_lines as u32, &EvalWeights::immediate())
}

/// Score a post-clear board with the caller's clear count.
pub fn evaluate_lookahead(board: &Board, lines_cleared: u32) -> f64 {
    evaluate_with_clear(board, lines_cleared, &EvalWeights::lookahead())
}

/// Count total holes in the board (empty cells below filled cells)
pub fn count_holes(board: &Board) -> u32 {
    count_holes_and_blockades(board).0 as u32
}

// A blockade is a hole with a filled cell somewhere above it. Every hole
// already has one, so the two counts agree; both terms stay in the score.
fn count_holes_and_blockades(board: &Board) -> (usize, usize) {
    let mut holes = 0;
    let mut blockades = 0;
    for x in 0..board.width() {
        let mut found_block = false;
        for y in 0..board.height() {
            if board.is_filled(x, y) {
                found_block = true;
            } else if found_block {
                holes += 1;
                if (0..y).rev().any(|above| board.is_filled(x, above)) {
                    blockades += 1;
                }
            }
        }
    }
    (holes, blockades)
}
