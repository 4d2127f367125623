//! In-Memory Display Store Adapter
//!
//! Keeps display records in a map behind an async `RwLock`. Records are
//! stored and returned whole, so a reader can never see a half-applied
//! change.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::display::Display;
use crate::domain::foundation::{DisplayName, DomainError, GroupId};
use crate::ports::DisplayStore;

/// In-memory storage for display records
#[derive(Debug, Clone, Default)]
pub struct InMemoryDisplayStore {
    displays: Arc<RwLock<HashMap<DisplayName, Display>>>,
}

impl InMemoryDisplayStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored displays
    pub async fn len(&self) -> usize {
        self.displays.read().await.len()
    }

    /// Check whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.displays.read().await.is_empty()
    }
}

#[async_trait]
impl DisplayStore for InMemoryDisplayStore {
    async fn save(&self, display: &Display) -> Result<(), DomainError> {
        self.displays
            .write()
            .await
            .insert(display.name().clone(), display.clone());
        Ok(())
    }

    async fn get(&self, name: &DisplayName) -> Result<Option<Display>, DomainError> {
        Ok(self.displays.read().await.get(name).cloned())
    }

    async fn remove(&self, name: &DisplayName) -> Result<Option<Display>, DomainError> {
        Ok(self.displays.write().await.remove(name))
    }

    async fn list(&self) -> Result<Vec<Display>, DomainError> {
        Ok(self.displays.read().await.values().cloned().collect())
    }

    async fn find_by_group(&self, group: &GroupId) -> Result<Vec<DisplayName>, DomainError> {
        Ok(self
            .displays
            .read()
            .await
            .values()
            .filter(|display| display.is_member_of(group))
            .map(|display| display.name().clone())
            .collect())
    }
}
