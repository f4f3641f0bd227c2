//! Monte-Carlo tree search over placements of the current piece.
//!
//! Each iteration runs the four classic phases:
//!
//! 1. **Selection** - descend by UCB1 until a node without children.
//! 2. **Expansion** - a visited leaf (or the root) gets one child per legal
//!    move; the search steps into the first of them.
//! 3. **Simulation** - a short playout of uniformly random pieces and
//!    uniformly random placements, scored with the lookahead evaluator.
//! 4. **Backpropagation** - the playout reward is added to every node on the
//!    path back to the root.
//!
//! The answer is the root child with the most visits.
//!
//! Nodes live in an arena owned by [`SearchTree`]. Children are stored as ids
//! on their parent; the parent id on a child is only used to walk back up.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tetrabot_core::{Board, Move, Piece};
use tetrabot_engine::{apply_move, apply_move_mut, generate_moves, generate_moves_into, MoveList};
use tetrabot_eval::{evaluate_with_clear, EvalWeights};

use crate::config::{ConfigError, MctsConfig};
use crate::MoveSelector;

/// Playout rewards are divided by `simulation_depth * REWARD_SCALE`.
pub const REWARD_SCALE: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
pub struct SearchNode {
    board: Board,
    mv: Option<Move>,
    visits: u32,
    wins: f64,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl SearchNode {
    fn new(board: Board, mv: Option<Move>, parent: Option<NodeId>) -> Self {
        Self {
            board,
            mv,
            visits: 0,
            wins: 0.0,
            children: Vec::new(),
            parent,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// `None` only on the root.
    pub fn mv(&self) -> Option<Move> {
        self.mv
    }

    pub fn visits(&self) -> u32 {
        self.visits
    }

    pub fn wins(&self) -> f64 {
        self.wins
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// `wins/visits + c * sqrt(ln(parent_visits) / visits)`.
    /// Unvisited nodes return +inf without touching the formula.
    pub fn ucb1(&self, parent_visits: u32, exploration: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let visits = self.visits as f64;
        let exploitation = self.wins / visits;
        let exploration = exploration * ((parent_visits as f64).ln() / visits).sqrt();
        exploitation + exploration
    }
}

/// Search tree for a single decision. Dropped as a whole once a move is
/// picked.
#[derive(Clone, Debug)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub const ROOT: NodeId = NodeId(0);

    fn new(board: Board) -> Self {
        Self {
            nodes: vec![SearchNode::new(board, None, None)],
        }
    }

    pub fn root(&self) -> &SearchNode {
        &self.nodes[Self::ROOT.0]
    }

    pub fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &SearchNode> + '_ {
        self.node(id).children.iter().map(move |&child| self.node(child))
    }

    /// Total nodes, root included; never zero.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Move of the most visited root child; the earliest child keeps ties.
    pub fn best_move(&self) -> Option<Move> {
        let mut best: Option<&SearchNode> = None;
        for child in self.children(Self::ROOT) {
            if best.map_or(true, |current| child.visits > current.visits) {
                best = Some(child);
            }
        }
        best.and_then(SearchNode::mv)
    }

    fn add_child(&mut self, parent: NodeId, mv: Move, board: Board) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode::new(board, Some(mv), Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Highest-UCB1 child; the earliest child keeps ties.
    fn select_child(&self, id: NodeId, exploration: f64) -> Option<NodeId> {
        let node = self.node(id);
        let mut best: Option<(NodeId, f64)> = None;
        for &child in &node.children {
            let value = self.node(child).ucb1(node.visits, exploration);
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((child, value));
            }
        }
        best.map(|(child, _)| child)
    }

    fn select_leaf(&self, exploration: f64) -> NodeId {
        let mut id = Self::ROOT;
        while let Some(child) = self.select_child(id, exploration) {
            id = child;
        }
        id
    }

    /// Add one child per legal move and return the first, if any.
    fn expand(&mut self, id: NodeId, piece: Piece) -> Option<NodeId> {
        let moves = generate_moves(&self.node(id).board, piece);
        let mut first = None;
        for mv in moves {
            let (board, _) = apply_move(&self.node(id).board, &mv);
            let child = self.add_child(id, mv, board);
            first.get_or_insert(child);
        }
        first
    }

    fn backpropagate(&mut self, from: NodeId, reward: f64) {
        let mut current = Some(from);
        while let Some(id) = current {
            let node = &mut self.nodes[id.0];
            node.visits += 1;
            node.wins += reward;
            current = node.parent;
        }
    }
}

pub struct MonteCarloSearch<R = StdRng> {
    config: MctsConfig,
    pub weights: EvalWeights,
    rng: R,
    playout: Board,
    playout_moves: MoveList,
}

impl MonteCarloSearch<StdRng> {
    /// Reproducible search: same seed, same board, same answer.
    pub fn with_seed(config: MctsConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MonteCarloSearch<R> {
    pub fn new(config: MctsConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            weights: EvalWeights::lookahead(),
            rng,
            playout: Board::default(),
            playout_moves: MoveList::new(),
        })
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Run the full iteration budget and hand back the tree.
    /// Every expansion places `piece`, at any depth.
    pub fn build_tree(&mut self, board: &Board, piece: Piece) -> SearchTree {
        let mut tree = SearchTree::new(board.clone());

        for _ in 0..self.config.iterations {
            let mut node = tree.select_leaf(self.config.exploration);

            if node == SearchTree::ROOT || tree.node(node).visits > 0 {
                if let Some(child) = tree.expand(node, piece) {
                    node = child;
                }
            }

            let reward = self.simulate(&tree.node(node).board);
            tree.backpropagate(node, reward);
        }

        tree
    }

    pub fn find_best_move(&mut self, board: &Board, piece: Piece) -> Option<Move> {
        self.build_tree(board, piece).best_move()
    }

    /// Random playout from `start`. Stops early once a drawn piece has no
    /// legal placement; the divisor stays fixed either way.
    fn simulate(&mut self, start: &Board) -> f64 {
        let depth = self.config.simulation_depth;
        self.playout.copy_from(start);
        let mut total = 0.0;

        for _ in 0..depth {
            let piece = Piece::ALL[self.rng.gen_range(0..Piece::ALL.len())];
            self.playout_moves.clear();
            generate_moves_into(&self.playout, piece, &mut self.playout_moves);
            if self.playout_moves.is_empty() {
                break;
            }

            let mv = self.playout_moves[self.rng.gen_range(0..self.playout_moves.len())];
            apply_move_mut(&mut self.playout, &mv);
            // clears are not credited during playouts
            total += evaluate_with_clear(&self.playout, 0, &self.weights);
        }

        total / (depth as f64 * REWARD_SCALE)
    }
}

impl<R: Rng> MoveSelector for MonteCarloSearch<R> {
    fn select_move(&mut self, board: &Board, current: Piece, _next: Option<Piece>) -> Option<Move> {
        self.find_best_move(board, current)
    }
}
