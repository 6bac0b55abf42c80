//! Repository port for the append-only audit log.

use crate::audit::domain::{AuditLogEntry, AuditLogEntryId};
use crate::task::domain::TaskId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for audit log repository operations.
pub type AuditLogRepositoryResult<T> = Result<T, AuditLogRepositoryError>;

/// Append-only audit log contract.
///
/// The port offers no update or delete operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Appends an entry to the end of the log.
    ///
    /// # Errors
    ///
    /// Returns [`AuditLogRepositoryError::DuplicateEntry`] when an entry with
    /// the same identifier was already appended.
    async fn append(&self, entry: &AuditLogEntry) -> AuditLogRepositoryResult<()>;

    /// Returns all entries for a task in append order.
    ///
    /// Unknown task identifiers yield an empty list.
    async fn find_by_task_id(&self, task_id: TaskId)
    -> AuditLogRepositoryResult<Vec<AuditLogEntry>>;
}

/// Errors returned by audit log repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AuditLogRepositoryError {
    /// An entry with the same identifier already exists.
    #[error("duplicate audit log entry: {0}")]
    DuplicateEntry(AuditLogEntryId),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuditLogRepositoryError {
    /// Wraps a storage error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
