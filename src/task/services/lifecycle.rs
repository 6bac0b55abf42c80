//! Service layer for task creation, status transitions, and audit queries.

use crate::audit::{
    domain::{Actor, AuditDomainError, AuditLogEntry, StatusTransition},
    ports::{AuditLogRepository, AuditLogRepositoryError},
};
use crate::task::{
    domain::{
        ParseTaskStatusError, StatusChange, Task, TaskDomainError, TaskId, TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
}

impl CreateTaskRequest {
    /// Creates a request for a task with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Request payload for moving a task to another status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatusRequest {
    task_id: TaskId,
    status: String,
    actor: String,
}

impl UpdateStatusRequest {
    /// Creates a status update request.
    ///
    /// `status` is the wire token (`to_do`, `pending`, `in_progress`,
    /// `done`) and is validated when the request is executed.
    #[must_use]
    pub fn new(task_id: TaskId, status: impl Into<String>, actor: impl Into<String>) -> Self {
        Self {
            task_id,
            status: status.into(),
            actor: actor.into(),
        }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation or transition check failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Audit value validation failed.
    #[error(transparent)]
    Audit(#[from] AuditDomainError),
    /// The requested status token is not a known status.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// No task exists with the given identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Audit log repository operation failed.
    #[error(transparent)]
    AuditRepository(#[from] AuditLogRepositoryError),
}

/// Caller-facing classification of [`TaskLifecycleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskLifecycleErrorKind {
    /// Malformed or missing input.
    Validation,
    /// The referenced task does not exist.
    TaskNotFound,
    /// The lifecycle forbids the requested status change.
    InvalidStatusTransition,
    /// Unexpected internal fault.
    Internal,
}

impl TaskLifecycleError {
    /// Classifies the error for boundary translation.
    #[must_use]
    pub const fn kind(&self) -> TaskLifecycleErrorKind {
        match self {
            Self::Domain(TaskDomainError::EmptyTitle)
            | Self::Audit(AuditDomainError::EmptyActor)
            | Self::InvalidStatus(_) => TaskLifecycleErrorKind::Validation,
            Self::Domain(TaskDomainError::InvalidStatusTransition { .. }) => {
                TaskLifecycleErrorKind::InvalidStatusTransition
            }
            Self::NotFound(_) | Self::Repository(TaskRepositoryError::NotFound(_)) => {
                TaskLifecycleErrorKind::TaskNotFound
            }
            Self::Repository(_) | Self::AuditRepository(_) => TaskLifecycleErrorKind::Internal,
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// The only writer of both the task store and the audit log. Mutating
/// operations hold the write side of an internal guard for their whole
/// check-then-mutate sequence; reads hold the read side, so a status change
/// and its audit entry always become visible together.
pub struct TaskLifecycleService<R, A, C>
where
    R: TaskRepository,
    A: AuditLogRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    audit_log: Arc<A>,
    clock: Arc<C>,
    guard: Arc<RwLock<()>>,
}

impl<R, A, C> Clone for TaskLifecycleService<R, A, C>
where
    R: TaskRepository,
    A: AuditLogRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            audit_log: Arc::clone(&self.audit_log),
            clock: Arc::clone(&self.clock),
            guard: Arc::clone(&self.guard),
        }
    }
}

impl<R, A, C> TaskLifecycleService<R, A, C>
where
    R: TaskRepository,
    A: AuditLogRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service over the given stores.
    #[must_use]
    pub fn new(tasks: Arc<R>, audit_log: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            audit_log,
            clock,
            guard: Arc::new(RwLock::new(())),
        }
    }

    /// Creates a task in the initial status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the title is empty, or
    /// [`TaskLifecycleError::Repository`] when storage fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let _write = self.guard.write().await;

        let task = Task::new(title, &*self.clock);
        self.tasks.store(&task).await?;
        tracing::info!(task_id = %task.id(), title = %task.title(), "task created");
        Ok(task)
    }

    /// Returns a snapshot of all tasks in store order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when storage fails.
    pub async fn get_all_tasks(&self) -> TaskLifecycleResult<Vec<Task>> {
        let _read = self.guard.read().await;
        Ok(self.tasks.find_all().await?)
    }

    /// Looks up a task, returning `Ok(None)` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when storage fails.
    pub async fn find_task(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        let _read = self.guard.read().await;
        Ok(self.tasks.find_by_id(id).await?)
    }

    /// Returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no such task exists.
    pub async fn get_task_by_id(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.find_task(id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))
    }

    /// Deletes a task. Its audit history is retained.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no such task exists.
    pub async fn delete_task(&self, id: TaskId) -> TaskLifecycleResult<()> {
        let _write = self.guard.write().await;

        if self.tasks.find_by_id(id).await?.is_none() {
            return Err(TaskLifecycleError::NotFound(id));
        }
        self.tasks.delete(id).await?;
        tracing::info!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Moves a task to the requested status and records the change.
    ///
    /// The task is looked up first, so an unknown task is reported as not
    /// found whatever the rest of the request holds. Requesting the current
    /// status returns the task unchanged and writes no audit entry. Otherwise the target must be the next status in the
    /// lifecycle; the task is updated and exactly one audit entry appended.
    /// If the append fails, the task update is reverted before the error is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// [`TaskLifecycleError::InvalidStatus`] or [`TaskLifecycleError::Audit`]
    /// for malformed input, and
    /// [`TaskLifecycleError::Domain`] with
    /// [`TaskDomainError::InvalidStatusTransition`] when the lifecycle
    /// forbids the change.
    pub async fn update_status(&self, request: UpdateStatusRequest) -> TaskLifecycleResult<Task> {
        let UpdateStatusRequest {
            task_id,
            status,
            actor,
        } = request;

        let _write = self.guard.write().await;

        let mut task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))?;
        let target = TaskStatus::try_from(status.as_str())?;
        let actor = Actor::new(actor)?;
        let previous = task.clone();

        let (from, to) = match task.transition_to(target)? {
            StatusChange::Unchanged => {
                tracing::debug!(%task_id, status = %target, "status unchanged, nothing recorded");
                return Ok(task);
            }
            StatusChange::Advanced { from, to } => (from, to),
        };

        self.tasks.update(&task).await?;
        let entry = AuditLogEntry::record(
            task_id,
            actor,
            StatusTransition { from, to },
            &*self.clock,
        );
        if let Err(err) = self.audit_log.append(&entry).await {
            if let Err(rollback_err) = self.tasks.update(&previous).await {
                tracing::error!(
                    %task_id,
                    error = %rollback_err,
                    "failed to revert status after audit append failure"
                );
            }
            return Err(err.into());
        }

        tracing::info!(
            %task_id,
            %from,
            %to,
            actor = %entry.actor(),
            "task status advanced"
        );
        Ok(task)
    }

    /// Returns the audit history of a task in append order.
    ///
    /// Unknown or deleted tasks are not an error: the former yield an empty
    /// list, the latter their retained history.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::AuditRepository`] when storage fails.
    pub async fn audit_history(&self, task_id: TaskId) -> TaskLifecycleResult<Vec<AuditLogEntry>> {
        let _read = self.guard.read().await;
        Ok(self.audit_log.find_by_task_id(task_id).await?)
    }
}
