//! API error types and their HTTP mapping.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::task::services::{TaskLifecycleError, TaskLifecycleErrorKind};

/// Message returned for every unexpected failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Errors surfaced at the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input.
    #[error("{0}")]
    Validation(String),

    /// The referenced task does not exist.
    #[error("{0}")]
    TaskNotFound(String),

    /// The lifecycle forbids the requested status change.
    #[error("{0}")]
    InvalidStatusTransition(String),

    /// Unexpected internal fault; details are logged, never returned.
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// Builds the not-found error used for every missing task.
    #[must_use]
    pub fn task_not_found() -> Self {
        Self::TaskNotFound("Task not found".to_owned())
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidStatusTransition(_) => StatusCode::BAD_REQUEST,
            Self::TaskNotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TaskLifecycleError> for ApiError {
    fn from(err: TaskLifecycleError) -> Self {
        match err.kind() {
            TaskLifecycleErrorKind::Validation => Self::Validation(err.to_string()),
            TaskLifecycleErrorKind::TaskNotFound => Self::task_not_found(),
            TaskLifecycleErrorKind::InvalidStatusTransition => {
                Self::InvalidStatusTransition(err.to_string())
            }
            TaskLifecycleErrorKind::Internal => {
                tracing::error!(error = %err, "unexpected task lifecycle failure");
                Self::Internal
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "message": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}

/// Result type alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;
