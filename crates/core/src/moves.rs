//! Committed placements.

use crate::{Piece, Rotation};
use serde::{Deserialize, Serialize};

/// A resolved placement: piece, rotation, anchor column and resting row.
/// `x` may be negative when the bounding box hangs off the left wall.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Move {
    pub piece: Piece,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

impl Move {
    pub fn new(piece: Piece, rotation: Rotation, x: i32, y: i32) -> Self {
        Self {
            piece,
            rotation,
            x,
            y,
        }
    }

    /// Absolute (column, row) of every mino, unclamped.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let (x, y) = (self.x, self.y);
        self.piece
            .cells(self.rotation)
            .into_iter()
            .map(move |(dx, dy)| (x + dx as i32, y + dy as i32))
    }
}
