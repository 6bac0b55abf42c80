//! HTTP façade over the task lifecycle service.
//!
//! Translates JSON requests into [`crate::task::services`] calls and maps
//! lifecycle errors onto status codes. Nothing in this module touches the
//! stores directly.
//!
//! | Route | Handler |
//! |---|---|
//! | `GET /health` | [`handlers::health`] |
//! | `GET /tasks` | [`handlers::list_tasks`] |
//! | `POST /tasks` | [`handlers::create_task`] |
//! | `GET /tasks/:id` | [`handlers::get_task`] |
//! | `DELETE /tasks/:id` | [`handlers::delete_task`] |
//! | `PUT /tasks/:id/status` | [`handlers::update_status`] |
//! | `GET /tasks/:id/audit-logs` | [`handlers::list_audit_logs`] |

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::{cors_layer, router};
pub use server::{DefaultTaskService, ServerError, in_memory_service, serve};
pub use state::AppState;
