//! Group domain events.
//!
//! - `GroupCreated` - New group created
//! - `GroupRenamed` - Group label changed
//! - `GroupDeleted` - Group removed after its members were detached

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, DisplayName, EventId, GroupId, Timestamp};

use super::Group;

// ════════════════════════════════════════════════════════════════════════════
// GroupCreated
// ════════════════════════════════════════════════════════════════════════════

/// Published when a group is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCreated {
    pub event_id: EventId,
    pub group_id: GroupId,
    pub group: Group,
    pub created_at: Timestamp,
}

domain_event!(
    GroupCreated,
    event_type = "group.created",
    aggregate_id = group_id,
    aggregate_type = "Group",
    occurred_at = created_at,
    event_id = event_id
);

impl GroupCreated {
    pub fn new(group: Group) -> Self {
        Self {
            event_id: EventId::new(),
            group_id: group.id().clone(),
            created_at: *group.created_at(),
            group,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// GroupRenamed
// ════════════════════════════════════════════════════════════════════════════

/// Published when a group's label changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRenamed {
    pub event_id: EventId,
    pub group_id: GroupId,
    pub previous_name: String,
    pub group: Group,
    pub renamed_at: Timestamp,
}

domain_event!(
    GroupRenamed,
    event_type = "group.renamed",
    aggregate_id = group_id,
    aggregate_type = "Group",
    occurred_at = renamed_at,
    event_id = event_id
);

impl GroupRenamed {
    pub fn new(group: Group, previous_name: String) -> Self {
        Self {
            event_id: EventId::new(),
            group_id: group.id().clone(),
            previous_name,
            group,
            renamed_at: Timestamp::now(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// GroupDeleted
// ════════════════════════════════════════════════════════════════════════════

/// Published once a group is gone. Carries the pre-deletion snapshot and
/// the displays that were detached from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDeleted {
    pub event_id: EventId,
    pub group_id: GroupId,
    pub group: Group,
    pub detached: Vec<DisplayName>,
    pub deleted_at: Timestamp,
}

domain_event!(
    GroupDeleted,
    event_type = "group.deleted",
    aggregate_id = group_id,
    aggregate_type = "Group",
    occurred_at = deleted_at,
    event_id = event_id
);

impl GroupDeleted {
    pub fn new(group: Group, detached: Vec<DisplayName>) -> Self {
        Self {
            event_id: EventId::new(),
            group_id: group.id().clone(),
            group,
            detached,
            deleted_at: Timestamp::now(),
        }
    }
}
