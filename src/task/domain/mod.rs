//! Domain model for task lifecycle management.
//!
//! The task domain owns the status state machine and the task aggregate while
//! keeping storage and transport concerns outside of the domain boundary.

mod error;
mod ids;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use status::TaskStatus;
pub use task::{StatusChange, Task};
