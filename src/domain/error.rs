//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::room::Side;

/// Domain errors guard mansion construction.
/// Navigation itself never fails: a rejected move is a regular outcome.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown room: {0}")]
    UnknownRoom(String),

    #[error("mansion already has an entrance: {0}")]
    RootAlreadySet(String),

    #[error("{side} door of {parent} already leads somewhere")]
    SlotOccupied { parent: String, side: Side },

    #[error("mansion has no rooms")]
    EmptyMansion,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
