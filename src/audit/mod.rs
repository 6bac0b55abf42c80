//! Append-only audit trail of task status changes.
//!
//! Every accepted status transition is recorded exactly once as an
//! [`domain::AuditLogEntry`]. Entries reference tasks by identifier only and
//! outlive task deletion. The module mirrors the task module layout:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//!
//! Entries are written exclusively by
//! [`crate::task::services::TaskLifecycleService`].

pub mod adapters;
pub mod domain;
pub mod ports;
