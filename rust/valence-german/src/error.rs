//! Error types for the valence model.
//!
//! Errors only arise while configuration is assembled. Once a complement type
//! or pattern exists, every operation on it is total; a derivation that does
//! not apply is an `Option`, not an error.

use thiserror::Error;
use valence_constraint::SlotError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValenceError {
    /// A complement was configured with an impossible filling range.
    #[error("invalid cardinality for slot \"{slot}\": {source}")]
    InvalidCardinality {
        slot: String,
        #[source]
        source: SlotError,
    },

    /// Two patterns were registered under the same name.
    #[error("valence pattern \"{name}\" is already registered")]
    DuplicatePattern { name: String },

    /// A pattern listed an adjunct, which patterns never store.
    #[error("adjunct \"{slot}\" cannot be part of a valence pattern")]
    AdjunctInPattern { slot: String },
}

/// Result type for valence configuration
pub type ValenceResult<T> = Result<T, ValenceError>;
