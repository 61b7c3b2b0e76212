//! Board evaluation - weighted penalty score, lower is better

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{GeneratorError, Result};
use crate::tiles::Terrain;

/// Minimum pip weight that counts toward the pip adjacency penalty
const HIGH_PIP_THRESHOLD: u32 = 4;

/// Neighbors of the same terrain tolerated before clustering is penalized
const CLUSTER_TOLERANCE: usize = 1;

/// Relative weight of each penalty term
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Same-terrain clustering (worst)
    pub cluster: f64,
    /// Spread of per-resource production
    pub balance: f64,
    /// Neighboring high-probability numbers
    pub pip_adjacency: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            cluster: 10.0,
            balance: 5.0,
            pip_adjacency: 3.0,
        }
    }
}

impl ScoreWeights {
    /// Weights checked to be finite and non-negative, which keeps scores non-negative
    pub fn new(cluster: f64, balance: f64, pip_adjacency: f64) -> Result<Self> {
        for (name, weight) in [("cluster", cluster), ("balance", balance), ("pip adjacency", pip_adjacency)] {
            if !(weight.is_finite() && weight >= 0.0) {
                return Err(GeneratorError::InvalidConfiguration(format!(
                    "{} weight must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }
        Ok(Self { cluster, balance, pip_adjacency })
    }
}

/// Raw penalty terms and their weighted total
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub cluster: f64,
    pub balance: f64,
    pub pip_adjacency: f64,
    pub total: f64,
}

/// Score a board with the default weights
pub fn score(board: &Board) -> f64 {
    score_breakdown(board, &ScoreWeights::default()).total
}

/// Score a board, keeping each term
pub fn score_breakdown(board: &Board, weights: &ScoreWeights) -> ScoreBreakdown {
    let cluster = cluster_penalty(board) as f64;
    let balance = balance_penalty(board);
    let pip_adjacency = pip_adjacency_penalty(board);

    ScoreBreakdown {
        cluster,
        balance,
        pip_adjacency,
        total: weights.cluster * cluster
            + weights.balance * balance
            + weights.pip_adjacency * pip_adjacency,
    }
}

/// Sum of same-terrain neighbor counts over every non-desert hex with at
/// least two such neighbors
pub fn cluster_penalty(board: &Board) -> u32 {
    board
        .iter()
        .filter(|hex| !hex.terrain().is_desert())
        .map(|hex| {
            board
                .neighbors(hex.position())
                .filter(|n| n.terrain() == hex.terrain())
                .count()
        })
        .filter(|&same| same > CLUSTER_TOLERANCE)
        .map(|same| same as u32)
        .sum()
}

/// Pip totals per producing terrain
pub fn terrain_pips(board: &Board) -> FxHashMap<Terrain, u32> {
    let mut totals = FxHashMap::default();
    for hex in board.iter().filter(|hex| !hex.terrain().is_desert()) {
        *totals.entry(hex.terrain()).or_insert(0) += hex.pips();
    }
    totals
}

/// Population standard deviation of the per-terrain pip totals
pub fn balance_penalty(board: &Board) -> f64 {
    let totals = terrain_pips(board);
    if totals.is_empty() {
        return 0.0;
    }

    let n = totals.len() as f64;
    let mean = totals.values().map(|&v| v as f64).sum::<f64>() / n;
    let variance = totals
        .values()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / n;

    variance.sqrt()
}

/// Number of unordered neighboring pairs where both hexes weigh 4+ pips
pub fn pip_adjacency_penalty(board: &Board) -> f64 {
    let ordered_pairs: u32 = board
        .iter()
        .filter(|hex| hex.pips() >= HIGH_PIP_THRESHOLD)
        .map(|hex| {
            board
                .neighbors(hex.position())
                .filter(|n| n.pips() >= HIGH_PIP_THRESHOLD)
                .count() as u32
        })
        .sum();

    // Each pair was seen from both ends
    ordered_pairs as f64 / 2.0
}
