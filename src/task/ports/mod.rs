//! Port contracts for task lifecycle management.
//!
//! Ports define storage-agnostic interfaces used by task services.

pub mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
