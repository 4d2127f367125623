//! Group store port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, GroupId};
use crate::domain::group::Group;

/// Persistence port for group records.
///
/// Removing a group here does not touch displays; detaching members is
/// the registry's job and happens before `remove` is called.
#[async_trait]
pub trait GroupStore: Send + Sync {
    /// Insert or overwrite a record keyed by its ID.
    async fn save(&self, group: &Group) -> Result<(), DomainError>;

    /// Find a group by ID.
    async fn get(&self, id: &GroupId) -> Result<Option<Group>, DomainError>;

    /// Remove a group, returning it if it existed.
    async fn remove(&self, id: &GroupId) -> Result<Option<Group>, DomainError>;

    /// Snapshot every group.
    async fn list(&self) -> Result<Vec<Group>, DomainError>;
}
