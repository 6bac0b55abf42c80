//! In-memory adapters for the audit trail.

mod audit_log;

pub use audit_log::InMemoryAuditLogRepository;
