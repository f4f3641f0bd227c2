use std::cmp::Ordering;

use rustc_hash::FxHashMap;
use tetrabot_core::{Board, Move, Piece, Rotation};
use tetrabot_engine::{apply_move, apply_move_into, generate_moves};
use tetrabot_eval::{evaluate_with_clear, EvalWeights};

use crate::config::{BeamConfig, ConfigError};
use crate::MoveSelector;

/// A first-ply candidate: the move, the board after it (rows cleared) and
/// its lookahead score.
#[derive(Clone, Debug)]
pub struct BeamState {
    pub mv: Move,
    pub board: Board,
    pub lines: u32,
    pub score: f64,
}

/// Grouping key for continuations, compared structurally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct MoveKey {
    x: i32,
    rotation: Rotation,
}

impl MoveKey {
    fn of(mv: &Move) -> Self {
        Self {
            x: mv.x,
            rotation: mv.rotation,
        }
    }
}

struct Continuation {
    origin: usize,
    score: f64,
}

struct Group {
    mv: Move,
    total: f64,
    count: usize,
}

impl Group {
    fn mean(&self) -> f64 {
        self.total / self.count as f64
    }
}

pub struct BeamSearch {
    config: BeamConfig,
    pub weights: EvalWeights,
}

impl BeamSearch {
    pub fn new(config: BeamConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            weights: EvalWeights::lookahead(),
        })
    }

    pub fn config(&self) -> &BeamConfig {
        &self.config
    }

    /// The beam: every legal move for `piece`, applied and cleared, sorted by
    /// score (stable, best first) and cut to the beam width.
    pub fn rank_first_ply(&self, board: &Board, piece: Piece) -> Vec<BeamState> {
        let mut scored: Vec<BeamState> = generate_moves(board, piece)
            .into_iter()
            .map(|mv| {
                let (next_board, lines) = apply_move(board, &mv);
                let score = evaluate_with_clear(&next_board, lines, &self.weights);
                BeamState {
                    mv,
                    board: next_board,
                    lines,
                    score,
                }
            })
            .collect();

        scored.sort_by(|a, b| score_cmp(a.score, b.score));
        scored.truncate(self.config.beam_width);
        scored
    }

    /// Pick the first move whose continuations with `next` average best.
    /// Falls back to the top of the beam when there is nothing to expand.
    pub fn find_best_move(&self, board: &Board, current: Piece, next: Option<Piece>) -> Option<Move> {
        let beam = self.rank_first_ply(board, current);
        let first = beam.first()?.mv;

        let next = match next {
            Some(piece) if self.config.depth > 1 => piece,
            _ => return Some(first),
        };

        let mut continuations = self.expand(&beam, next);
        if continuations.is_empty() {
            return Some(first);
        }
        continuations.sort_by(|a, b| score_cmp(a.score, b.score));

        best_mean(&beam, &continuations).or(Some(first))
    }

    fn expand(&self, beam: &[BeamState], next: Piece) -> Vec<Continuation> {
        let mut continuations = Vec::new();
        let mut scratch = Board::default();

        for (origin, state) in beam.iter().enumerate() {
            for mv in generate_moves(&state.board, next) {
                let lines = apply_move_into(&mut scratch, &state.board, &mv);
                continuations.push(Continuation {
                    origin,
                    score: evaluate_with_clear(&scratch, lines, &self.weights),
                });
            }
        }

        continuations
    }
}

impl Default for BeamSearch {
    fn default() -> Self {
        Self {
            config: BeamConfig::default(),
            weights: EvalWeights::lookahead(),
        }
    }
}

impl MoveSelector for BeamSearch {
    fn select_move(&mut self, board: &Board, current: Piece, next: Option<Piece>) -> Option<Move> {
        self.find_best_move(board, current, next)
    }
}

/// Average continuations per originating move; groups keep the order in
/// which they first appear in the sorted list, and ties keep the earlier one.
fn best_mean(beam: &[BeamState], continuations: &[Continuation]) -> Option<Move> {
    let mut index: FxHashMap<MoveKey, usize> = FxHashMap::default();
    let mut groups: Vec<Group> = Vec::new();

    for continuation in continuations {
        let mv = beam[continuation.origin].mv;
        let slot = *index.entry(MoveKey::of(&mv)).or_insert_with(|| {
            groups.push(Group {
                mv,
                total: 0.0,
                count: 0,
            });
            groups.len() - 1
        });
        groups[slot].total += continuation.score;
        groups[slot].count += 1;
    }

    let mut best: Option<(Move, f64)> = None;
    for group in &groups {
        let mean = group.mean();
        if best.map_or(true, |(_, best_mean)| mean > best_mean) {
            best = Some((group.mv, mean));
        }
    }
    best.map(|(mv, _)| mv)
}

fn score_cmp(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
