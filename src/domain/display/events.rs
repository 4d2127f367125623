//! Display domain events.
//!
//! Events published when display lifecycle changes occur:
//! - `DisplayRegistered` - New display registered
//! - `DisplayUpdated` - Whitelisted attributes merged
//! - `DisplayGroupChanged` - Group reference set or cleared
//! - `DisplayDeleted` - Display removed
//!
//! Every event carries the post-mutation snapshot, except `DisplayDeleted`
//! which carries the record as it was just before removal.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, DisplayName, EventId, GroupId, Timestamp};

use super::Display;

// ════════════════════════════════════════════════════════════════════════════
// DisplayRegistered
// ════════════════════════════════════════════════════════════════════════════

/// Published when a new display registers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRegistered {
    pub event_id: EventId,
    pub name: DisplayName,
    pub display: Display,
    pub registered_at: Timestamp,
}

domain_event!(
    DisplayRegistered,
    event_type = "display.registered",
    aggregate_id = name,
    aggregate_type = "Display",
    occurred_at = registered_at,
    event_id = event_id
);

impl DisplayRegistered {
    pub fn new(display: Display) -> Self {
        Self {
            event_id: EventId::new(),
            name: display.name().clone(),
            registered_at: *display.registered_at(),
            display,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// DisplayUpdated
// ════════════════════════════════════════════════════════════════════════════

/// Published when a display's attributes are updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayUpdated {
    pub event_id: EventId,
    pub name: DisplayName,
    pub display: Display,
    pub updated_at: Timestamp,
}

domain_event!(
    DisplayUpdated,
    event_type = "display.updated",
    aggregate_id = name,
    aggregate_type = "Display",
    occurred_at = updated_at,
    event_id = event_id
);

impl DisplayUpdated {
    pub fn new(display: Display) -> Self {
        Self {
            event_id: EventId::new(),
            name: display.name().clone(),
            display,
            updated_at: Timestamp::now(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// DisplayGroupChanged
// ════════════════════════════════════════════════════════════════════════════

/// Published when a display joins, moves between, or leaves a group.
///
/// `display.group()` is the new membership; `previous_group` the old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayGroupChanged {
    pub event_id: EventId,
    pub name: DisplayName,
    pub previous_group: Option<GroupId>,
    pub display: Display,
    pub changed_at: Timestamp,
}

domain_event!(
    DisplayGroupChanged,
    event_type = "display.group_changed",
    aggregate_id = name,
    aggregate_type = "Display",
    occurred_at = changed_at,
    event_id = event_id
);

impl DisplayGroupChanged {
    pub fn new(display: Display, previous_group: Option<GroupId>) -> Self {
        Self {
            event_id: EventId::new(),
            name: display.name().clone(),
            previous_group,
            display,
            changed_at: Timestamp::now(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// DisplayDeleted
// ════════════════════════════════════════════════════════════════════════════

/// Published when a display is deleted. Carries the pre-deletion snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayDeleted {
    pub event_id: EventId,
    pub name: DisplayName,
    pub display: Display,
    pub deleted_at: Timestamp,
}

domain_event!(
    DisplayDeleted,
    event_type = "display.deleted",
    aggregate_id = name,
    aggregate_type = "Display",
    occurred_at = deleted_at,
    event_id = event_id
);

impl DisplayDeleted {
    pub fn new(display: Display) -> Self {
        Self {
            event_id: EventId::new(),
            name: display.name().clone(),
            display,
            deleted_at: Timestamp::now(),
        }
    }
}
