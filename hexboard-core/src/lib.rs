//! HEXBOARD Core - Balanced board generation for hex-tile resource games
//!
//! This crate provides the board generator:
//! - Board geometry (fixed hex layouts with explicit adjacency tables)
//! - Terrains, number tokens and pip weights
//! - Distribution profiles per game variant
//! - Candidate sampling, hard-constraint checks and penalty scoring
//! - Best-of-N search with early exit

pub mod board;
pub mod error;
pub mod eval;
pub mod generator;
pub mod profile;
pub mod rules;
pub mod sampler;
pub mod stats;
pub mod tiles;

// Re-exports for convenient access
pub use board::{Board, Hex, Layout, Position};
pub use error::GeneratorError;
pub use eval::{score, score_breakdown, ScoreBreakdown, ScoreWeights};
pub use generator::{generate, BoardGenerator, Generation, GeneratorConfig};
pub use profile::{Distribution, Profile};
pub use sampler::sample;
pub use stats::BoardStats;
pub use tiles::{pip_weight, NumberToken, Terrain};
