//! Tasktrail: task tracking with an append-only status audit trail.
//!
//! Clients create tasks, advance them through the fixed lifecycle
//! `to_do → pending → in_progress → done`, and query the history of accepted
//! status changes.
//!
//! # Architecture
//!
//! Tasktrail follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//!
//! # Modules
//!
//! - [`task`]: Task aggregate, status state machine, and lifecycle service
//! - [`audit`]: Append-only record of accepted status transitions
//! - [`http`]: JSON-over-HTTP façade
//! - [`config`]: Server configuration

pub mod audit;
pub mod config;
pub mod http;
pub mod task;
