//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain project values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project title is empty after trimming.
    #[error("project title must not be empty")]
    EmptyTitle,

    /// The project description is empty after trimming.
    #[error("project description must not be empty")]
    EmptyDescription,

    /// The people count is not a positive integer.
    #[error("invalid people count {0}, expected at least one person")]
    InvalidPeopleCount(u32),
}

/// Error returned while parsing project statuses from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);
