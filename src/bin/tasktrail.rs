//! Runs the tasktrail HTTP service.
//!
//! Usage:
//!
//! ```text
//! tasktrail [--host <ip>] [--port <port>] [--allowed-origin <origin>[,<origin>...]]
//! ```
//!
//! Every flag may also be supplied through its `TASKTRAIL_*` environment
//! variable. Log verbosity follows `RUST_LOG` and defaults to `info`. All
//! state is held in memory and lost on exit.

use clap::Parser;
use tasktrail::{config::ServerConfig, http::serve};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

const DEFAULT_LOG_FILTER: &str = "info";

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = ServerConfig::parse();
    serve(config).await?;
    Ok(())
}
