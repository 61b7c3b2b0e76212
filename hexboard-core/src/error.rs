//! Error types for board generation

use crate::board::Position;

/// Errors raised by the board generator and its inputs
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid number token: {0} (expected 2-6 or 8-12)")]
    InvalidNumber(u8),

    #[error("Invalid hex at position {position}: {reason}")]
    InvalidHex { position: Position, reason: String },

    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    #[error("Distribution mismatch: {0}")]
    DistributionMismatch(String),

    #[error("No board satisfied the hard constraints within {attempts} attempts")]
    ExhaustedSearch { attempts: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
