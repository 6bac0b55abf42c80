//! Error types for audit domain validation.

use thiserror::Error;

/// Errors returned while constructing audit values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuditDomainError {
    /// The actor is empty after trimming.
    #[error("actor must not be empty")]
    EmptyActor,
}
