//! Identifier and validated scalar types for the audit domain.

use super::AuditDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an audit log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditLogEntryId(Uuid);

impl AuditLogEntryId {
    /// Creates a new random entry identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

}

impl Default for AuditLogEntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AuditLogEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-text identifier of whoever requested a transition.
///
/// Actors are recorded verbatim (minus surrounding whitespace) and are never
/// authenticated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Actor(String);

impl Actor {
    /// Creates a validated actor.
    ///
    /// # Errors
    ///
    /// Returns [`AuditDomainError::EmptyActor`] when the value is empty or
    /// whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, AuditDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AuditDomainError::EmptyActor);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the actor as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Actor {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
