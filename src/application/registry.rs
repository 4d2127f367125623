//! Registry - the single entry point for display and group operations.
//!
//! Coordinates the two stores and the change bus:
//!
//! - every successful mutation publishes exactly one event before returning
//!   (group deletion publishes one per detached display, then its own)
//! - assigning a group checks that the group exists first
//! - deleting a group detaches its members before the group record goes
//!
//! # Locking
//!
//! Mutations on one display serialize on that display's lock. Group
//! assignment holds the target group's read lock while it checks and
//! mutates, and group deletion holds the group's write lock for the whole
//! cascade, so an assignment either lands before the cascade (and is
//! detached by it) or observes the group as gone. Locks are always taken
//! group first, display second.

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::domain::display::{
    Display, DisplayDeleted, DisplayGroupChanged, DisplayPatch, DisplayRegistered, DisplayUpdated,
};
use crate::domain::foundation::{DisplayName, GroupId};
use crate::domain::group::{Group, GroupCreated, GroupDeleted, GroupRenamed};
use crate::domain::registry::{ChangeEvent, EventKind, NameAllocator, RegistryError};
use crate::ports::{ChangeBus, ChangeHandler, DisplayStore, GroupStore, SubscriptionId};

use super::keyed_locks::KeyedLocks;

/// Identifier prefixes used when allocating names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryOptions {
    pub display_prefix: String,
    pub group_prefix: String,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            display_prefix: "d".to_string(),
            group_prefix: "g".to_string(),
        }
    }
}

/// Display and group registry.
pub struct Registry {
    displays: Arc<dyn DisplayStore>,
    groups: Arc<dyn GroupStore>,
    bus: Arc<dyn ChangeBus>,
    display_names: NameAllocator,
    group_ids: NameAllocator,
    display_locks: KeyedLocks<DisplayName>,
    group_locks: KeyedLocks<GroupId>,
}

impl Registry {
    pub fn new(
        displays: Arc<dyn DisplayStore>,
        groups: Arc<dyn GroupStore>,
        bus: Arc<dyn ChangeBus>,
        options: RegistryOptions,
    ) -> Self {
        Self {
            displays,
            groups,
            bus,
            display_names: NameAllocator::new(options.display_prefix),
            group_ids: NameAllocator::new(options.group_prefix),
            display_locks: KeyedLocks::new(),
            group_locks: KeyedLocks::new(),
        }
    }

    // ════════════════════════════════════════════════════════════════════
    // Displays
    // ════════════════════════════════════════════════════════════════════

    /// Registers a new display under a freshly allocated name.
    pub async fn register_display(&self, initial: DisplayPatch) -> Result<Display, RegistryError> {
        let name = DisplayName::new(self.display_names.allocate());
        let _guard = self.display_locks.write(&name).await;

        let registered = Display::register(name.clone(), initial);
        self.displays.save(&registered).await?;

        tracing::info!(display = %name, "Display registered");
        self.publish(DisplayRegistered::new(registered.clone()));
        Ok(registered)
    }

    pub async fn get_display(&self, name: &DisplayName) -> Result<Display, RegistryError> {
        let _guard = self.display_locks.read(name).await;
        self.load_display(name).await
    }

    /// Snapshot of every display, keyed by name.
    pub async fn list_displays(&self) -> Result<BTreeMap<DisplayName, Display>, RegistryError> {
        Ok(self
            .displays
            .list()
            .await?
            .into_iter()
            .map(|display| (display.name().clone(), display))
            .collect())
    }

    /// Merges whitelisted attributes into a display.
    pub async fn update_display(
        &self,
        name: &DisplayName,
        patch: DisplayPatch,
    ) -> Result<Display, RegistryError> {
        let _guard = self.display_locks.write(name).await;

        let mut display = self.load_display(name).await?;
        let changed = display.apply(patch);
        self.displays.save(&display).await?;

        tracing::info!(display = %name, changed, "Display updated");
        self.publish(DisplayUpdated::new(display.clone()));
        Ok(display)
    }

    /// Removes a display, returning its last snapshot.
    pub async fn delete_display(&self, name: &DisplayName) -> Result<Display, RegistryError> {
        let _guard = self.display_locks.write(name).await;

        let removed = self
            .displays
            .remove(name)
            .await?
            .ok_or_else(|| RegistryError::DisplayNotFound(name.clone()))?;

        tracing::info!(display = %name, "Display deleted");
        self.publish(DisplayDeleted::new(removed.clone()));
        Ok(removed)
    }

    /// Points a display at an existing group.
    ///
    /// A missing display is reported before a missing group.
    pub async fn set_display_group(
        &self,
        name: &DisplayName,
        group: &GroupId,
    ) -> Result<Display, RegistryError> {
        let _group_guard = self.group_locks.read(group).await;
        let _display_guard = self.display_locks.write(name).await;

        let mut display = self.load_display(name).await?;
        if self.groups.get(group).await?.is_none() {
            return Err(RegistryError::GroupNotFound(group.clone()));
        }

        let previous = display.assign_group(group.clone());
        self.displays.save(&display).await?;

        tracing::info!(display = %name, group = %group, "Display group set");
        self.publish(DisplayGroupChanged::new(display.clone(), previous));
        Ok(display)
    }

    /// Removes a display's group reference. The group need not exist.
    pub async fn clear_display_group(&self, name: &DisplayName) -> Result<Display, RegistryError> {
        let _guard = self.display_locks.write(name).await;

        let mut display = self.load_display(name).await?;
        let previous = display.clear_group();
        self.displays.save(&display).await?;

        tracing::info!(display = %name, "Display group cleared");
        self.publish(DisplayGroupChanged::new(display.clone(), previous));
        Ok(display)
    }

    // ════════════════════════════════════════════════════════════════════
    // Groups
    // ════════════════════════════════════════════════════════════════════

    pub async fn create_group(&self, name: impl Into<String>) -> Result<Group, RegistryError> {
        let id = GroupId::new(self.group_ids.allocate());
        let _guard = self.group_locks.write(&id).await;

        let group = Group::new(id, name);
        self.groups.save(&group).await?;

        tracing::info!(group = %group.id(), name = group.name(), "Group created");
        self.publish(GroupCreated::new(group.clone()));
        Ok(group)
    }

    pub async fn get_group(&self, id: &GroupId) -> Result<Group, RegistryError> {
        let _guard = self.group_locks.read(id).await;
        self.load_group(id).await
    }

    /// Snapshot of every group, keyed by id.
    pub async fn list_groups(&self) -> Result<BTreeMap<GroupId, Group>, RegistryError> {
        Ok(self
            .groups
            .list()
            .await?
            .into_iter()
            .map(|group| (group.id().clone(), group))
            .collect())
    }

    pub async fn rename_group(
        &self,
        id: &GroupId,
        name: impl Into<String>,
    ) -> Result<Group, RegistryError> {
        let _guard = self.group_locks.write(id).await;

        let mut group = self.load_group(id).await?;
        let previous_name = group.rename(name);
        self.groups.save(&group).await?;

        tracing::info!(group = %id, name = group.name(), "Group renamed");
        self.publish(GroupRenamed::new(group.clone(), previous_name));
        Ok(group)
    }

    /// Deletes a group after detaching every member display.
    pub async fn delete_group(&self, id: &GroupId) -> Result<Group, RegistryError> {
        let _group_guard = self.group_locks.write(id).await;

        // 1. Existence check
        let group = self.load_group(id).await?;

        // 2. No new members can join while the write guard is held
        let mut members = self.displays.find_by_group(id).await?;
        members.sort();

        // 3. Detach each member under its own guard
        let mut detached = Vec::with_capacity(members.len());
        for name in members {
            let _display_guard = self.display_locks.write(&name).await;
            let Some(mut display) = self.displays.get(&name).await? else {
                continue;
            };
            if !display.is_member_of(id) {
                continue;
            }

            let previous = display.clear_group();
            self.displays.save(&display).await?;
            self.publish(DisplayGroupChanged::new(display, previous));
            detached.push(name);
        }

        // 4. Remove the group record
        self.groups.remove(id).await?;

        tracing::info!(group = %id, detached = detached.len(), "Group deleted");
        self.publish(GroupDeleted::new(group.clone(), detached));
        Ok(group)
    }

    // ════════════════════════════════════════════════════════════════════
    // Subscriptions
    // ════════════════════════════════════════════════════════════════════

    /// Registers a handler for future events of the given kinds.
    /// An empty list subscribes to every kind.
    pub fn subscribe(&self, kinds: &[EventKind], handler: Arc<dyn ChangeHandler>) -> SubscriptionId {
        self.bus.subscribe(kinds, handler)
    }

    /// Subscribes with a raw receiver instead of a handler.
    pub fn subscribe_channel(&self, kinds: &[EventKind]) -> mpsc::UnboundedReceiver<ChangeEvent> {
        self.bus.subscribe_channel(kinds)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    // ════════════════════════════════════════════════════════════════════
    // Helpers
    // ════════════════════════════════════════════════════════════════════

    async fn load_display(&self, name: &DisplayName) -> Result<Display, RegistryError> {
        self.displays
            .get(name)
            .await?
            .ok_or_else(|| RegistryError::DisplayNotFound(name.clone()))
    }

    async fn load_group(&self, id: &GroupId) -> Result<Group, RegistryError> {
        self.groups
            .get(id)
            .await?
            .ok_or_else(|| RegistryError::GroupNotFound(id.clone()))
    }

    fn publish(&self, event: impl Into<ChangeEvent>) {
        self.bus.publish(event.into());
    }
}
