//! Domain model for the status-change audit trail.

mod entry;
mod error;
mod ids;

pub use entry::{AuditLogEntry, StatusTransition};
pub use error::AuditDomainError;
pub use ids::{Actor, AuditLogEntryId};
