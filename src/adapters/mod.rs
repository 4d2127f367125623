//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the registry to the outside world:
//! - `storage` - In-memory display and group stores
//! - `events` - Change bus and the audit logger
//! - `http` - REST and live event feed (axum)

pub mod events;
pub mod http;
pub mod storage;

use std::sync::Arc;

use crate::application::{Registry, RegistryOptions};

pub use events::{ChangeLogger, InMemoryChangeBus};
pub use storage::{InMemoryDisplayStore, InMemoryGroupStore};

/// Builds a registry wired to the in-memory stores and bus.
pub fn in_memory_registry(options: RegistryOptions) -> Registry {
    Registry::new(
        Arc::new(InMemoryDisplayStore::new()),
        Arc::new(InMemoryGroupStore::new()),
        Arc::new(InMemoryChangeBus::new()),
        options,
    )
}
