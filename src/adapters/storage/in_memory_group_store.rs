//! In-Memory Group Store Adapter

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, GroupId};
use crate::domain::group::Group;
use crate::ports::GroupStore;

/// In-memory storage for group records
#[derive(Debug, Clone, Default)]
pub struct InMemoryGroupStore {
    groups: Arc<RwLock<HashMap<GroupId, Group>>>,
}

impl InMemoryGroupStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored groups
    pub async fn len(&self) -> usize {
        self.groups.read().await.len()
    }
}

#[async_trait]
impl GroupStore for InMemoryGroupStore {
    async fn save(&self, group: &Group) -> Result<(), DomainError> {
        self.groups
            .write()
            .await
            .insert(group.id().clone(), group.clone());
        Ok(())
    }

    async fn get(&self, id: &GroupId) -> Result<Option<Group>, DomainError> {
        Ok(self.groups.read().await.get(id).cloned())
    }

    async fn remove(&self, id: &GroupId) -> Result<Option<Group>, DomainError> {
        Ok(self.groups.write().await.remove(id))
    }

    async fn list(&self) -> Result<Vec<Group>, DomainError> {
        Ok(self.groups.read().await.values().cloned().collect())
    }
}
