use tetrabot_core::{Board, Move, Piece};
use tetrabot_engine::{generate_moves, place_piece_mut};
use tetrabot_eval::evaluate_immediate;

use crate::MoveSelector;

/// One-ply arg-max under the immediate evaluator.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedySearch;

impl GreedySearch {
    pub fn new() -> Self {
        Self
    }

    /// Best placement and its score. Boards are scored with the piece locked
    /// in but before any row is cleared. Ties keep the earliest move.
    pub fn find_best_move(&self, board: &Board, piece: Piece) -> Option<(Move, f64)> {
        let mut scratch = board.clone();
        let mut best: Option<(Move, f64)> = None;

        for mv in generate_moves(board, piece) {
            scratch.copy_from(board);
            place_piece_mut(&mut scratch, &mv);
            let score = evaluate_immediate(&scratch);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        best
    }
}

impl MoveSelector for GreedySearch {
    fn select_move(&mut self, board: &Board, current: Piece, _next: Option<Piece>) -> Option<Move> {
        self.find_best_move(board, current).map(|(mv, _)| mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetrabot_core::Rotation;
    use tetrabot_engine::place_piece;

    #[test]
    fn test_o_rests_on_floor() {
        let board = Board::standard();
        let (mv, _) = GreedySearch::new()
            .find_best_move(&board, Piece::O)
            .expect("expected a move");
        assert_eq!(mv.y, board.height() as i32 - 2);
        assert!((0..=8).contains(&mv.x));
    }

    #[test]
    fn test_best_move_matches_max_score() {
        let board = Board::from_rows(&[
            "..........",
            "..........",
            "..........",
            "......Z...",
            ".....ZZ...",
            "J....Z....",
            "JJJ.IIII..",
        ])
        .expect("valid board");

        let mut best_score = f64::NEG_INFINITY;
        for mv in generate_moves(&board, Piece::T) {
            best_score = best_score.max(evaluate_immediate(&place_piece(&board, &mv)));
        }

        let (_, score) = GreedySearch::new()
            .find_best_move(&board, Piece::T)
            .expect("expected a move");
        assert_eq!(score, best_score);
    }

    #[test]
    fn test_prefers_completing_a_row() {
        let board = Board::from_rows(&["..........", "..........", "LLLLLL...."])
            .expect("valid board");
        let (mv, _) = GreedySearch::new()
            .find_best_move(&board, Piece::I)
            .expect("expected a move");
        assert_eq!((mv.rotation, mv.x, mv.y), (Rotation::North, 6, 1));
    }

    #[test]
    fn test_first_seen_wins_ties() {
        // on a 4x4 board x = 0 and x = 2 score the same in every rotation
        let board = Board::new(4, 4).expect("valid board");
        let (mv, _) = GreedySearch::new()
            .find_best_move(&board, Piece::O)
            .expect("expected a move");
        assert_eq!(mv.rotation, Rotation::North);
        assert_eq!(mv.x, 0);
    }

    #[test]
    fn test_no_move_returns_none() {
        let board = Board::from_rows(&["..", "SS"]).expect("valid board");
        assert!(GreedySearch::new().find_best_move(&board, Piece::O).is_none());
        assert!(GreedySearch::new()
            .select_move(&board, Piece::T, None)
            .is_none());
    }
}
