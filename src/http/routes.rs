//! Route table and middleware stack.

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, put},
};
use mockable::Clock;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use super::{
    handlers::{
        create_task, delete_task, get_task, health, list_audit_logs, list_tasks, update_status,
    },
    server::ServerError,
    state::AppState,
};
use crate::audit::ports::AuditLogRepository;
use crate::task::ports::TaskRepository;

/// Builds the application router with request tracing and the given CORS
/// policy applied.
pub fn router<R, A, C>(state: AppState<R, A, C>, cors: CorsLayer) -> Router
where
    R: TaskRepository + 'static,
    A: AuditLogRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route(
            "/tasks",
            get(list_tasks::<R, A, C>).post(create_task::<R, A, C>),
        )
        .route(
            "/tasks/:id",
            get(get_task::<R, A, C>).delete(delete_task::<R, A, C>),
        )
        .route("/tasks/:id/status", put(update_status::<R, A, C>))
        .route("/tasks/:id/audit-logs", get(list_audit_logs::<R, A, C>))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Builds a CORS policy admitting only the listed origins.
///
/// # Errors
///
/// Returns [`ServerError::InvalidOrigin`] when an origin is not a valid
/// header value.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, ServerError> {
    let allowed = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin.trim())
                .map_err(|_| ServerError::InvalidOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}
