//! Registry vocabulary shared by the façade, the stores and the bus.
//!
//! - `NameAllocator` - process-unique identifier minting
//! - `ChangeEvent` / `EventKind` - typed change notifications and filters
//! - `RegistryError` - not-found and storage failures

mod allocator;
mod change;
mod errors;

pub use allocator::NameAllocator;
pub use change::{ChangeEvent, EventKind, UnknownEventKind};
pub use errors::RegistryError;
