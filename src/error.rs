//! Error types for checkers board logic
//!
//! Provides custom error types for notation conversion, move indexing and
//! short-notation parsing.

use thiserror::Error;

use crate::constants::SQUARE_COUNT;

/// Errors that can occur in the checkers core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckersError {
    /// Indexed access into a move beyond its current length
    #[error("move index {index} is out of range (move has {len} positions)")]
    OutOfRange { index: usize, len: usize },

    /// Notation number outside the playable range 1..=SQUARE_COUNT
    #[error("invalid square notation: {notation} (must be 1-{SQUARE_COUNT})")]
    InvalidSquare { notation: u8 },

    /// Location that is off the board or a light square, where a piece can
    /// never stand
    #[error("square ({row}, {col}) is not a playable square")]
    NotPlayable { row: i8, col: i8 },

    /// Short-notation text that is not `...`, `a-b` or `axb`
    #[error("cannot parse move notation: {input:?}")]
    ParseMove { input: String },
}

/// Result type alias for checkers core operations
pub type CheckersResult<T> = Result<T, CheckersError>;
