//! Request and response bodies for the HTTP API.
//!
//! Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::audit::domain::{AuditLogEntry, AuditLogEntryId};
use crate::task::domain::{Task, TaskId, TaskStatus};

/// Body of `POST /tasks`.
///
/// Fields are optional so that a missing title is reported as a validation
/// error rather than a deserialisation failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTaskBody {
    /// Title of the new task.
    pub title: Option<String>,
}

/// Body of `PUT /tasks/:id/status`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStatusBody {
    /// Requested status token.
    pub status: Option<String>,
    /// Who requested the change.
    pub actor: Option<String>,
}

/// Task representation returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Current status.
    pub status: TaskStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().as_str().to_owned(),
            status: task.status(),
            created_at: task.created_at(),
        }
    }
}

/// Audit log entry representation returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntryResponse {
    /// Entry identifier.
    pub id: AuditLogEntryId,
    /// Task the entry belongs to.
    pub task_id: TaskId,
    /// Who requested the transition.
    pub actor: String,
    /// Status before the transition.
    pub from_status: TaskStatus,
    /// Status after the transition.
    pub to_status: TaskStatus,
    /// When the transition was recorded.
    pub timestamp: DateTime<Utc>,
}

impl From<&AuditLogEntry> for AuditLogEntryResponse {
    fn from(entry: &AuditLogEntry) -> Self {
        Self {
            id: entry.id(),
            task_id: entry.task_id(),
            actor: entry.actor().as_str().to_owned(),
            from_status: entry.from_status(),
            to_status: entry.to_status(),
            timestamp: entry.timestamp(),
        }
    }
}
