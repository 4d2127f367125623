//! Application layer - the registry and the locking it relies on.
//!
//! This layer orchestrates domain operations and coordinates between ports.

mod keyed_locks;
mod registry;

pub use keyed_locks::{KeyGuard, KeyedLocks};
pub use registry::{Registry, RegistryOptions};
