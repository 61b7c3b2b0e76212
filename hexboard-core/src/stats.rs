//! Board statistics for display

use std::collections::BTreeMap;

use serde::Serialize;

use crate::board::{Board, Hex, Position};
use crate::eval::terrain_pips;
use crate::rules::{violations, Violation};
use crate::tiles::Terrain;

/// Summary of a generated board
#[derive(Clone, Debug, Serialize)]
pub struct BoardStats {
    /// Hex count per terrain
    pub terrain_counts: BTreeMap<Terrain, usize>,
    /// Total pip weight per producing terrain
    pub resource_pips: BTreeMap<Terrain, u32>,
    /// Hexes holding a 6 or 8
    pub high_value: Vec<Hex>,
    /// Neighboring 6/8 pairs
    pub adjacent_high: Vec<(Position, Position)>,
    /// Deserts on edge positions
    pub deserts_on_edge: Vec<Position>,
}

impl BoardStats {
    pub fn from_board(board: &Board) -> Self {
        let mut terrain_counts = BTreeMap::new();
        for hex in board {
            *terrain_counts.entry(hex.terrain()).or_insert(0) += 1;
        }

        let mut adjacent_high = Vec::new();
        let mut deserts_on_edge = Vec::new();
        for violation in violations(board) {
            match violation {
                Violation::AdjacentHighNumbers(a, b) => adjacent_high.push((a, b)),
                Violation::DesertOnEdge(p) => deserts_on_edge.push(p),
            }
        }

        Self {
            terrain_counts,
            resource_pips: terrain_pips(board).into_iter().collect(),
            high_value: board.iter().filter(|h| h.is_high()).copied().collect(),
            adjacent_high,
            deserts_on_edge,
        }
    }

    /// Both hard constraints hold
    pub fn is_clean(&self) -> bool {
        self.adjacent_high.is_empty() && self.deserts_on_edge.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;
    use crate::rules::is_valid;
    use crate::sampler::sample;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_stats_match_distribution() {
        let dist = Profile::Base.distribution();
        let board = sample(&dist, &mut ChaCha8Rng::seed_from_u64(8));
        let stats = BoardStats::from_board(&board);

        assert_eq!(stats.terrain_counts[&Terrain::Forest], 4);
        assert_eq!(stats.terrain_counts[&Terrain::Desert], 1);
        assert_eq!(stats.terrain_counts.values().sum::<usize>(), 19);
        assert!(!stats.resource_pips.contains_key(&Terrain::Desert));
        // 2+3+3+...+12 tokens of the base game sum to 58 pips
        assert_eq!(stats.resource_pips.values().sum::<u32>(), 58);
        assert_eq!(stats.high_value.len(), 4);
    }

    #[test]
    fn test_clean_agrees_with_rules() {
        let dist = Profile::Base.distribution();
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        for _ in 0..100 {
            let board = sample(&dist, &mut rng);
            assert_eq!(BoardStats::from_board(&board).is_clean(), is_valid(&board));
        }
    }
}
