//! Errors raised by spawn tables.
//!
//! Every failure is reported at the call that broke the contract and is never
//! retried here; the caller decides whether to skip the roll for this frame.

use thiserror::Error;

/// Broad category of a [`SpawnError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input to a mutating call.
    InvalidArgument,
    /// Lookup of an identifier the table doesn't hold.
    NotFound,
    /// The table can't satisfy the request in its current state.
    InvalidState,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpawnError {
    #[error("At least one weight must be defined")]
    EmptyWeights,

    #[error("Weight for {id} must be a finite value >= 0, got {weight}")]
    InvalidWeight { id: String, weight: f32 },

    #[error("Table has no entry for id {id}")]
    NotFound { id: String },

    #[error("Table has no entries with a chance to be rolled")]
    NothingToRoll,

    #[error("Rolled {roll} which is higher than any weight (total {total})")]
    RolledPastTotal { roll: f32, total: f32 },
}

impl SpawnError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SpawnError::EmptyWeights | SpawnError::InvalidWeight { .. } => ErrorKind::InvalidArgument,
            SpawnError::NotFound { .. } => ErrorKind::NotFound,
            SpawnError::NothingToRoll | SpawnError::RolledPastTotal { .. } => ErrorKind::InvalidState,
        }
    }
}

/// Result type alias for spawn table operations
pub type SpawnResult<T> = Result<T, SpawnError>;
