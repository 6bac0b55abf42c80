//! Server configuration sourced from command-line flags and environment.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default port the service listens on.
pub const DEFAULT_PORT: u16 = 3001;

/// Origin allowed by CORS when none is configured.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Runtime configuration for the HTTP server.
///
/// Every flag falls back to a `TASKTRAIL_*` environment variable before its
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "tasktrail",
    version,
    about = "Task tracking service with an append-only status audit trail"
)]
pub struct ServerConfig {
    /// Address to bind the listener to.
    #[arg(long, env = "TASKTRAIL_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to bind the listener to.
    #[arg(long, env = "TASKTRAIL_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Origins permitted to make cross-origin requests.
    #[arg(
        long = "allowed-origin",
        env = "TASKTRAIL_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = DEFAULT_ALLOWED_ORIGIN
    )]
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Returns the socket address the server binds to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_owned()],
        }
    }
}
