//! Request handlers for task and audit endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use mockable::Clock;

use super::{
    error::{ApiError, ApiResult},
    models::{AuditLogEntryResponse, CreateTaskBody, TaskResponse, UpdateStatusBody},
    state::AppState,
};
use crate::audit::ports::AuditLogRepository;
use crate::task::{
    domain::TaskId,
    ports::TaskRepository,
    services::{CreateTaskRequest, UpdateStatusRequest},
};

/// Liveness probe; always answers `OK`.
pub async fn health() -> &'static str {
    "OK"
}

/// `GET /tasks`
///
/// # Errors
///
/// Returns [`ApiError::Internal`] when the task store fails.
pub async fn list_tasks<R, A, C>(
    State(state): State<AppState<R, A, C>>,
) -> ApiResult<Json<Vec<TaskResponse>>>
where
    R: TaskRepository + 'static,
    A: AuditLogRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = state.service().get_all_tasks().await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

/// `GET /tasks/:id`
///
/// Identifiers that are not valid UUIDs cannot name a task and are reported
/// as not found.
///
/// # Errors
///
/// Returns [`ApiError::TaskNotFound`] when the task does not exist.
pub async fn get_task<R, A, C>(
    State(state): State<AppState<R, A, C>>,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskResponse>>
where
    R: TaskRepository + 'static,
    A: AuditLogRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = parse_task_id(&id)?;
    let task = state.service().get_task_by_id(task_id).await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// `POST /tasks`
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when the body is malformed or the title
/// is missing or empty.
pub async fn create_task<R, A, C>(
    State(state): State<AppState<R, A, C>>,
    payload: Result<Json<CreateTaskBody>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)>
where
    R: TaskRepository + 'static,
    A: AuditLogRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let title = body
        .title
        .ok_or_else(|| ApiError::Validation("title is required".to_owned()))?;

    let task = state
        .service()
        .create_task(CreateTaskRequest::new(title))
        .await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(&task))))
}

/// `DELETE /tasks/:id`
///
/// # Errors
///
/// Returns [`ApiError::TaskNotFound`] when the task does not exist.
pub async fn delete_task<R, A, C>(
    State(state): State<AppState<R, A, C>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode>
where
    R: TaskRepository + 'static,
    A: AuditLogRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = parse_task_id(&id)?;
    state.service().delete_task(task_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `PUT /tasks/:id/status`
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for missing fields or unknown status
/// tokens, [`ApiError::TaskNotFound`] when the task does not exist, and
/// [`ApiError::InvalidStatusTransition`] when the lifecycle forbids the
/// change.
pub async fn update_status<R, A, C>(
    State(state): State<AppState<R, A, C>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusBody>, JsonRejection>,
) -> ApiResult<Json<TaskResponse>>
where
    R: TaskRepository + 'static,
    A: AuditLogRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let (Some(status), Some(actor)) = (body.status, body.actor) else {
        return Err(ApiError::Validation(
            "status and actor are required".to_owned(),
        ));
    };
    let task_id = parse_task_id(&id)?;

    let task = state
        .service()
        .update_status(UpdateStatusRequest::new(task_id, status, actor))
        .await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// `GET /tasks/:id/audit-logs`
///
/// Unknown and malformed identifiers yield an empty list.
///
/// # Errors
///
/// Returns [`ApiError::Internal`] when the audit store fails.
pub async fn list_audit_logs<R, A, C>(
    State(state): State<AppState<R, A, C>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<AuditLogEntryResponse>>>
where
    R: TaskRepository + 'static,
    A: AuditLogRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Ok(task_id) = id.parse::<TaskId>() else {
        return Ok(Json(Vec::new()));
    };
    let entries = state.service().audit_history(task_id).await?;
    Ok(Json(entries.iter().map(AuditLogEntryResponse::from).collect()))
}

fn parse_task_id(raw: &str) -> ApiResult<TaskId> {
    raw.parse().map_err(|_| ApiError::task_not_found())
}
