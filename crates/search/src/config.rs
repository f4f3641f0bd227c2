use std::f64::consts::SQRT_2;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Selector parameters that can never produce a meaningful search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("beam width must be at least 1")]
    ZeroBeamWidth,

    #[error("lookahead depth {0} is not supported (expected 1 or 2)")]
    UnsupportedDepth(usize),

    #[error("iteration budget must be at least 1")]
    ZeroIterations,

    #[error("simulation depth must be at least 1")]
    ZeroSimulationDepth,

    #[error("exploration constant must be finite and non-negative, got {0}")]
    InvalidExploration(f64),

    #[error("unknown strategy {0:?} (expected greedy, beam or mcts)")]
    UnknownStrategy(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamConfig {
    /// First-ply states kept for expansion.
    pub beam_width: usize,
    /// 1 = current piece only, 2 = current then next piece.
    pub depth: usize,
}

impl BeamConfig {
    pub const MAX_DEPTH: usize = 2;

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.beam_width == 0 {
            return Err(ConfigError::ZeroBeamWidth);
        }
        if self.depth == 0 || self.depth > Self::MAX_DEPTH {
            return Err(ConfigError::UnsupportedDepth(self.depth));
        }
        Ok(())
    }
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            beam_width: 4,
            depth: 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    pub iterations: usize,
    /// UCB1 exploration constant `C`.
    pub exploration: f64,
    /// Random placements per playout.
    pub simulation_depth: usize,
}

impl MctsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if self.simulation_depth == 0 {
            return Err(ConfigError::ZeroSimulationDepth);
        }
        if !self.exploration.is_finite() || self.exploration < 0.0 {
            return Err(ConfigError::InvalidExploration(self.exploration));
        }
        Ok(())
    }
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            exploration: SQRT_2,
            simulation_depth: 3,
        }
    }
}

/// Which selector a caller wants; all three share one contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Greedy,
    Beam,
    Mcts,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Greedy, Strategy::Beam, Strategy::Mcts];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Greedy => "greedy",
            Strategy::Beam => "beam",
            Strategy::Mcts => "mcts",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownStrategy(s.to_string()))
    }
}
