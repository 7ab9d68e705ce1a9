//! Error types for slot construction.

use thiserror::Error;

/// Errors raised while constructing slot specifications.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// The lower bound exceeds the upper bound.
    #[error("minimum fillings {min} exceed maximum fillings {max}")]
    InvertedCardinality { min: usize, max: usize },

    /// A slot that can never be filled is not a slot.
    #[error("maximum fillings must be at least one")]
    ClosedCardinality,
}

/// Result type for slot construction
pub type SlotResult<T> = Result<T, SlotError>;
