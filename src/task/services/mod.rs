//! Application services for task lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    CreateTaskRequest, TaskLifecycleError, TaskLifecycleErrorKind, TaskLifecycleResult,
    TaskLifecycleService, UpdateStatusRequest,
};
