//! Server bootstrap: wiring, binding, and graceful shutdown.

use mockable::DefaultClock;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;

use super::{
    routes::{cors_layer, router},
    state::AppState,
};
use crate::audit::adapters::memory::InMemoryAuditLogRepository;
use crate::config::ServerConfig;
use crate::task::{adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService};

/// Lifecycle service backed by the process-lifetime in-memory stores.
pub type DefaultTaskService =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryAuditLogRepository, DefaultClock>;

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// A configured CORS origin is not a valid header value.
    #[error("invalid allowed origin: {0}")]
    InvalidOrigin(String),

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested.
        addr: SocketAddr,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

/// Creates a lifecycle service over fresh, empty in-memory stores.
#[must_use]
pub fn in_memory_service() -> DefaultTaskService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(InMemoryAuditLogRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Runs the HTTP server until a shutdown signal arrives.
///
/// # Errors
///
/// Returns [`ServerError`] when the configuration is invalid, the listener
/// cannot be bound, or serving fails.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let cors = cors_layer(&config.allowed_origins)?;
    let app = router(AppState::new(in_memory_service()), cors);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!(%addr, origins = ?config.allowed_origins, "server running on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
