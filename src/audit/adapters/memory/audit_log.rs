//! In-memory append-only audit log.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::audit::{
    domain::{AuditLogEntry, AuditLogEntryId},
    ports::{AuditLogRepository, AuditLogRepositoryError, AuditLogRepositoryResult},
};
use crate::task::domain::TaskId;

/// Thread-safe in-memory audit log.
///
/// Entries are kept in a single vector in append order, which is also
/// chronological order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditLogRepository {
    state: Arc<RwLock<InMemoryAuditLogState>>,
}

#[derive(Debug, Default)]
struct InMemoryAuditLogState {
    entries: Vec<AuditLogEntry>,
    ids: HashSet<AuditLogEntryId>,
}

impl InMemoryAuditLogRepository {
    /// Creates an empty in-memory audit log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryAuditLogRepository {
    async fn append(&self, entry: &AuditLogEntry) -> AuditLogRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AuditLogRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.ids.insert(entry.id()) {
            return Err(AuditLogRepositoryError::DuplicateEntry(entry.id()));
        }
        state.entries.push(entry.clone());
        Ok(())
    }

    async fn find_by_task_id(
        &self,
        task_id: TaskId,
    ) -> AuditLogRepositoryResult<Vec<AuditLogEntry>> {
        let state = self.state.read().map_err(|err| {
            AuditLogRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .entries
            .iter()
            .filter(|entry| entry.task_id() == task_id)
            .cloned()
            .collect())
    }
}
