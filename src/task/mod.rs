//! Task lifecycle management.
//!
//! Tasks are created in the `to_do` status and advance one step at a time
//! through `to_do → pending → in_progress → done`. Every accepted transition
//! is recorded in the [`crate::audit`] trail by the lifecycle service, which
//! is the only component allowed to mutate either store. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
