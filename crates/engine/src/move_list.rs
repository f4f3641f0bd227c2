//! Inline move list for allocation-free move generation

use smallvec::SmallVec;
use tetrabot_core::Move;

/// Inline capacity. A 10-wide board tops out at 4 rotations x 13 anchors.
pub const INLINE_MOVES: usize = 64;

/// Spills to the heap only on boards wider than the inline capacity covers.
pub type MoveList = SmallVec<[Move; INLINE_MOVES]>;
