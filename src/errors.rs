//! Error types shared across the crate.
//!
//! Rules operations never fail (rejected moves are reported through
//! `MoveResult`); these errors cover text parsing and engine configuration.

use thiserror::Error;

/// Failures while parsing coordinates or positions from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A square name outside `a1..h8`.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    /// A malformed FEN record, with the offending field described.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}

/// Failures raised by engine implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unknown engine option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for engine option '{name}'")]
    InvalidOptionValue { name: String, value: String },
}
