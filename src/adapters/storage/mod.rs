//! Storage Adapters
//!
//! Implementations of the `DisplayStore` and `GroupStore` ports.
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryDisplayStore, InMemoryGroupStore};
//!
//! let displays = Arc::new(InMemoryDisplayStore::new());
//! let groups = Arc::new(InMemoryGroupStore::new());
//! ```

mod in_memory_display_store;
mod in_memory_group_store;

pub use in_memory_display_store::InMemoryDisplayStore;
pub use in_memory_group_store::InMemoryGroupStore;
