//! tetrabot search crate - greedy, beam and Monte-Carlo move selection.

mod beam;
mod config;
mod greedy;
mod mcts;

pub use beam::{BeamSearch, BeamState};
pub use config::{BeamConfig, ConfigError, MctsConfig, Strategy};
pub use greedy::GreedySearch;
pub use mcts::{MonteCarloSearch, NodeId, SearchNode, SearchTree, REWARD_SCALE};

use tetrabot_core::{Board, Move, Piece};

/// Shared contract of every selector: read the board, never write it, and
/// answer `None` when the current piece has nowhere to go.
pub trait MoveSelector {
    fn select_move(&mut self, board: &Board, current: Piece, next: Option<Piece>) -> Option<Move>;
}

impl<S: MoveSelector + ?Sized> MoveSelector for Box<S> {
    fn select_move(&mut self, board: &Board, current: Piece, next: Option<Piece>) -> Option<Move> {
        (**self).select_move(board, current, next)
    }
}

/// Selector for `strategy`. Only the matching config is validated; `seed`
/// only matters for Monte-Carlo playouts.
pub fn build_selector(
    strategy: Strategy,
    beam: BeamConfig,
    mcts: MctsConfig,
    seed: u64,
) -> Result<Box<dyn MoveSelector>, ConfigError> {
    let selector: Box<dyn MoveSelector> = match strategy {
        Strategy::Greedy => Box::new(GreedySearch::new()),
        Strategy::Beam => Box::new(BeamSearch::new(beam)?),
        Strategy::Mcts => Box::new(MonteCarloSearch::with_seed(mcts, seed)?),
    };
    Ok(selector)
}
