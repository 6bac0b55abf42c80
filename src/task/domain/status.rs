//! Task status lifecycle and its transition table.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task lifecycle status.
///
/// Statuses advance strictly in declaration order, one step at a time:
/// `to_do → pending → in_progress → done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been created but nobody has picked it up.
    ToDo,
    /// Task is queued for work.
    Pending,
    /// Task is being worked on.
    InProgress,
    /// Task has been completed.
    Done,
}

impl TaskStatus {
    /// Every status in lifecycle order.
    pub const ALL: [Self; 4] = [Self::ToDo, Self::Pending, Self::InProgress, Self::Done];

    /// Status assigned to newly created tasks.
    pub const INITIAL: Self = Self::ToDo;

    /// Returns the only status this one may advance to, or `None` when the
    /// status is terminal.
    ///
    /// This table is the single source of truth for lifecycle validation.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::ToDo => Some(Self::Pending),
            Self::Pending => Some(Self::InProgress),
            Self::InProgress => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// Returns `true` when the lifecycle permits moving to `target`.
    ///
    /// Staying in the same status is not a transition and returns `false`.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        self.next() == Some(target)
    }

    /// Returns `true` when no further transition is possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "to_do",
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    /// Accepts only the exact wire tokens; case and whitespace are significant.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "to_do" => Ok(Self::ToDo),
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}
