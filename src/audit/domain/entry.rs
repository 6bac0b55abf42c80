//! Audit log entry recording one accepted status transition.

use super::{Actor, AuditLogEntryId};
use crate::task::domain::{TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// The two endpoints of an accepted status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusTransition {
    /// Status before the transition.
    pub from: TaskStatus,
    /// Status after the transition.
    pub to: TaskStatus,
}

/// Immutable record of a single status change.
///
/// Fields are private and there are no mutators; once built, an entry can
/// only be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogEntry {
    id: AuditLogEntryId,
    task_id: TaskId,
    actor: Actor,
    from_status: TaskStatus,
    to_status: TaskStatus,
    timestamp: DateTime<Utc>,
}

impl AuditLogEntry {
    /// Records a transition for `task_id` at the current clock time.
    #[must_use]
    pub fn record(
        task_id: TaskId,
        actor: Actor,
        transition: StatusTransition,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: AuditLogEntryId::new(),
            task_id,
            actor,
            from_status: transition.from,
            to_status: transition.to,
            timestamp: clock.utc(),
        }
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> AuditLogEntryId {
        self.id
    }

    /// Returns the task the entry refers to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns who requested the transition.
    #[must_use]
    pub const fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Returns the status before the transition.
    #[must_use]
    pub const fn from_status(&self) -> TaskStatus {
        self.from_status
    }

    /// Returns the status after the transition.
    #[must_use]
    pub const fn to_status(&self) -> TaskStatus {
        self.to_status
    }

    /// Returns both transition endpoints.
    #[must_use]
    pub const fn transition(&self) -> StatusTransition {
        StatusTransition {
            from: self.from_status,
            to: self.to_status,
        }
    }

    /// Returns when the transition was recorded.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
