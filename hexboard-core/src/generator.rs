//! Best-of-N board search
//!
//! Sample a candidate, drop it if it breaks a hard constraint, score the
//! survivors and keep the lowest. Stops early once a candidate scores below
//! the good-enough threshold, or when the attempt budget runs out.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;

use crate::board::Board;
use crate::error::{GeneratorError, Result};
use crate::eval::{score_breakdown, ScoreBreakdown, ScoreWeights};
use crate::profile::{Distribution, Profile};
use crate::rules;
use crate::sampler::sample;

/// Default attempt budget
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Default score below which the search stops early
pub const DEFAULT_GOOD_ENOUGH: f64 = 50.0;

/// Search configuration
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Candidates sampled at most
    pub max_attempts: usize,
    /// Stop as soon as the best score drops below this
    pub good_enough: f64,
    /// Penalty weights
    pub weights: ScoreWeights,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            good_enough: DEFAULT_GOOD_ENOUGH,
            weights: ScoreWeights::default(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_good_enough(mut self, good_enough: f64) -> Self {
        self.good_enough = good_enough;
        self
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fresh RNG from the seed, or from entropy when unseeded
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

/// Outcome of one search
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Generation {
    /// Best candidate that passed both hard constraints
    Validated {
        board: Board,
        score: ScoreBreakdown,
        attempts: usize,
    },
    /// Nothing passed; an unchecked, unscored sample
    Fallback { board: Board, attempts: usize },
}

impl Generation {
    pub fn board(&self) -> &Board {
        match self {
            Generation::Validated { board, .. } | Generation::Fallback { board, .. } => board,
        }
    }

    pub fn into_board(self) -> Board {
        match self {
            Generation::Validated { board, .. } | Generation::Fallback { board, .. } => board,
        }
    }

    pub fn is_validated(&self) -> bool {
        matches!(self, Generation::Validated { .. })
    }

    pub fn score(&self) -> Option<&ScoreBreakdown> {
        match self {
            Generation::Validated { score, .. } => Some(score),
            Generation::Fallback { .. } => None,
        }
    }

    /// Candidates sampled during the search
    pub fn attempts(&self) -> usize {
        match self {
            Generation::Validated { attempts, .. } | Generation::Fallback { attempts, .. } => *attempts,
        }
    }

    /// The validated board, or `ExhaustedSearch` for a fallback
    pub fn into_validated(self) -> Result<Board> {
        match self {
            Generation::Validated { board, .. } => Ok(board),
            Generation::Fallback { attempts, .. } => Err(GeneratorError::ExhaustedSearch { attempts }),
        }
    }
}

/// Board generator for one distribution
#[derive(Clone, Debug)]
pub struct BoardGenerator {
    distribution: Distribution,
    config: GeneratorConfig,
}

impl BoardGenerator {
    pub fn new(distribution: Distribution, config: GeneratorConfig) -> Self {
        Self { distribution, config }
    }

    /// Generator for a named profile
    pub fn for_profile(name: &str, config: GeneratorConfig) -> Result<Self> {
        let profile: Profile = name.parse()?;
        Ok(Self::new(profile.distribution(), config))
    }

    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Search using the configured seed (or entropy)
    pub fn generate(&self) -> Generation {
        self.generate_with(&mut self.config.rng())
    }

    /// Search with a caller-provided random source
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Generation {
        let mut best: Option<(Board, ScoreBreakdown)> = None;
        let mut attempts = 0;

        while attempts < self.config.max_attempts {
            attempts += 1;
            let candidate = sample(&self.distribution, rng);

            if !rules::is_valid(&candidate) {
                continue;
            }

            let breakdown = score_breakdown(&candidate, &self.config.weights);
            // Strictly lower: on ties the earlier candidate stays
            if best.as_ref().map_or(true, |(_, b)| breakdown.total < b.total) {
                tracing::debug!("Attempt {}: new best score {:.3}", attempts, breakdown.total);
                best = Some((candidate, breakdown));
            }

            if best.as_ref().is_some_and(|(_, b)| b.total < self.config.good_enough) {
                break;
            }
        }

        match best {
            Some((board, score)) => {
                tracing::info!(
                    "Generated board: score={:.3} after {} attempts",
                    score.total,
                    attempts
                );
                Generation::Validated { board, score, attempts }
            }
            None => {
                tracing::warn!(
                    "No valid board within {} attempts, returning unchecked sample",
                    attempts
                );
                Generation::Fallback {
                    board: sample(&self.distribution, rng),
                    attempts,
                }
            }
        }
    }

    /// Run `count` independent searches in parallel.
    ///
    /// Search `i` uses its own RNG seeded with `seed + i` when a seed is
    /// configured, so results are reproducible regardless of thread count.
    pub fn generate_many(&self, count: usize) -> Vec<Generation> {
        let base_seed = self.config.seed;
        (0..count)
            .into_par_iter()
            .map(|i| {
                let mut rng = match base_seed {
                    Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(i as u64)),
                    None => ChaCha8Rng::from_entropy(),
                };
                self.generate_with(&mut rng)
            })
            .collect()
    }
}

/// Generate a board for a named profile ("base", "five-six-player", "custom")
pub fn generate(profile_name: &str, max_attempts: usize) -> Result<Generation> {
    let config = GeneratorConfig::default().with_max_attempts(max_attempts);
    Ok(BoardGenerator::for_profile(profile_name, config)?.generate())
}
