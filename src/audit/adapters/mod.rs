//! Adapter implementations for audit trail ports.

pub mod memory;
