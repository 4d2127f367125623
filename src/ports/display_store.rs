//! Display store port.
//!
//! Defines the persistence contract for display records. Implementations
//! only store and retrieve whole records; identity allocation, the attribute
//! whitelist, group validation and per-name serialization all live in the
//! registry façade.

use async_trait::async_trait;

use crate::domain::display::Display;
use crate::domain::foundation::{DisplayName, DomainError, GroupId};

/// Persistence port for display records.
///
/// Implementations must ensure:
/// - every call is atomic: readers never observe a partially written record
/// - `list` returns whole records, though not necessarily a linearizable set
#[async_trait]
pub trait DisplayStore: Send + Sync {
    /// Insert or overwrite a record keyed by its name.
    async fn save(&self, display: &Display) -> Result<(), DomainError>;

    /// Find a record by name.
    ///
    /// Returns `None` if not found.
    async fn get(&self, name: &DisplayName) -> Result<Option<Display>, DomainError>;

    /// Remove a record, returning it if it existed.
    async fn remove(&self, name: &DisplayName) -> Result<Option<Display>, DomainError>;

    /// Snapshot every record.
    async fn list(&self) -> Result<Vec<Display>, DomainError>;

    /// Names of displays currently referencing `group`.
    async fn find_by_group(&self, group: &GroupId) -> Result<Vec<DisplayName>, DomainError>;
}
