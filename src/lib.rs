//! tetrabot - move selection for a falling-block puzzle.
//!
//! Re-exports the workspace crates behind one path: the board model
//! (`tetrabot-core`), placement and move generation (`tetrabot-engine`),
//! the heuristics (`tetrabot-eval`) and the three selectors
//! (`tetrabot-search`).

pub use tetrabot_core::{Board, BoardError, Cell, ColumnHeights, Move, Piece, Rotation};
pub use tetrabot_engine::{
    apply_move, apply_move_mut, drop_row, generate_moves, occupied, place_piece, MoveList,
};
pub use tetrabot_eval::{
    evaluate_immediate, evaluate_lookahead, evaluate_with_clear, BoardFeatures, EvalWeights,
};
pub use tetrabot_search::{
    build_selector, BeamConfig, BeamSearch, ConfigError, GreedySearch, MctsConfig,
    MonteCarloSearch, MoveSelector, SearchTree, Strategy,
};
