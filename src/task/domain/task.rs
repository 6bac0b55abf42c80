//! Task aggregate root.

use super::{TaskDomainError, TaskId, TaskStatus, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

/// Outcome of applying a requested status to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// The task was already in the requested status; nothing changed.
    Unchanged,
    /// The task advanced one step along the lifecycle.
    Advanced {
        /// Status before the transition.
        from: TaskStatus,
        /// Status after the transition.
        to: TaskStatus,
    },
}

impl Task {
    /// Creates a new task in the initial status.
    #[must_use]
    pub fn new(title: TaskTitle, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            title,
            status: TaskStatus::INITIAL,
            created_at: clock.utc(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Applies a requested status to this task.
    ///
    /// Requesting the current status is a silent no-op reported as
    /// [`StatusChange::Unchanged`]. Any other target must be the single next
    /// status in the lifecycle.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] when the target
    /// skips a step, moves backwards, or the task is already terminal. The
    /// task is left untouched on error.
    pub fn transition_to(&mut self, target: TaskStatus) -> Result<StatusChange, TaskDomainError> {
        if self.status == target {
            return Ok(StatusChange::Unchanged);
        }
        if !self.status.can_transition_to(target) {
            return Err(TaskDomainError::InvalidStatusTransition {
                task_id: self.id,
                from: self.status,
                to: target,
            });
        }
        let from = self.status;
        self.status = target;
        Ok(StatusChange::Advanced { from, to: target })
    }
}
