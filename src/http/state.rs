//! Shared handler state.

use crate::audit::ports::AuditLogRepository;
use crate::task::{ports::TaskRepository, services::TaskLifecycleService};
use mockable::Clock;

/// State shared by every HTTP handler.
pub struct AppState<R, A, C>
where
    R: TaskRepository,
    A: AuditLogRepository,
    C: Clock + Send + Sync,
{
    service: TaskLifecycleService<R, A, C>,
}

impl<R, A, C> AppState<R, A, C>
where
    R: TaskRepository,
    A: AuditLogRepository,
    C: Clock + Send + Sync,
{
    /// Wraps a lifecycle service for use by the router.
    #[must_use]
    pub const fn new(service: TaskLifecycleService<R, A, C>) -> Self {
        Self { service }
    }

    /// Returns the lifecycle service.
    #[must_use]
    pub const fn service(&self) -> &TaskLifecycleService<R, A, C> {
        &self.service
    }
}

impl<R, A, C> Clone for AppState<R, A, C>
where
    R: TaskRepository,
    A: AuditLogRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}
