//! Typed change notifications published by the registry.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::display::{
    DisplayDeleted, DisplayGroupChanged, DisplayRegistered, DisplayUpdated,
};
use crate::domain::foundation::{EventEnvelope, SerializableDomainEvent};
use crate::domain::group::{GroupCreated, GroupDeleted, GroupRenamed};

/// Discriminant of a [`ChangeEvent`], used for subscription filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DisplayRegistered,
    DisplayUpdated,
    DisplayGroupChanged,
    DisplayDeleted,
    GroupCreated,
    GroupRenamed,
    GroupDeleted,
}

impl EventKind {
    /// Every kind, in declaration order.
    pub const ALL: &'static [EventKind] = &[
        EventKind::DisplayRegistered,
        EventKind::DisplayUpdated,
        EventKind::DisplayGroupChanged,
        EventKind::DisplayDeleted,
        EventKind::GroupCreated,
        EventKind::GroupRenamed,
        EventKind::GroupDeleted,
    ];

    /// Returns the routing string, identical to the envelope's `event_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::DisplayRegistered => "display.registered",
            EventKind::DisplayUpdated => "display.updated",
            EventKind::DisplayGroupChanged => "display.group_changed",
            EventKind::DisplayDeleted => "display.deleted",
            EventKind::GroupCreated => "group.created",
            EventKind::GroupRenamed => "group.renamed",
            EventKind::GroupDeleted => "group.deleted",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an event kind that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown event kind: {0}")]
pub struct UnknownEventKind(pub String);

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEventKind(s.to_string()))
    }
}

/// A state change, carrying the affected entity's snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    DisplayRegistered(DisplayRegistered),
    DisplayUpdated(DisplayUpdated),
    DisplayGroupChanged(DisplayGroupChanged),
    DisplayDeleted(DisplayDeleted),
    GroupCreated(GroupCreated),
    GroupRenamed(GroupRenamed),
    GroupDeleted(GroupDeleted),
}

impl ChangeEvent {
    /// Returns the kind used to match subscription filters.
    pub fn kind(&self) -> EventKind {
        match self {
            ChangeEvent::DisplayRegistered(_) => EventKind::DisplayRegistered,
            ChangeEvent::DisplayUpdated(_) => EventKind::DisplayUpdated,
            ChangeEvent::DisplayGroupChanged(_) => EventKind::DisplayGroupChanged,
            ChangeEvent::DisplayDeleted(_) => EventKind::DisplayDeleted,
            ChangeEvent::GroupCreated(_) => EventKind::GroupCreated,
            ChangeEvent::GroupRenamed(_) => EventKind::GroupRenamed,
            ChangeEvent::GroupDeleted(_) => EventKind::GroupDeleted,
        }
    }

    /// Returns the identifier of the display or group this event is about.
    pub fn entity_id(&self) -> &str {
        match self {
            ChangeEvent::DisplayRegistered(e) => e.name.as_str(),
            ChangeEvent::DisplayUpdated(e) => e.name.as_str(),
            ChangeEvent::DisplayGroupChanged(e) => e.name.as_str(),
            ChangeEvent::DisplayDeleted(e) => e.name.as_str(),
            ChangeEvent::GroupCreated(e) => e.group_id.as_str(),
            ChangeEvent::GroupRenamed(e) => e.group_id.as_str(),
            ChangeEvent::GroupDeleted(e) => e.group_id.as_str(),
        }
    }

    /// Wraps the event for serialization.
    pub fn to_envelope(&self) -> EventEnvelope {
        match self {
            ChangeEvent::DisplayRegistered(e) => e.to_envelope(),
            ChangeEvent::DisplayUpdated(e) => e.to_envelope(),
            ChangeEvent::DisplayGroupChanged(e) => e.to_envelope(),
            ChangeEvent::DisplayDeleted(e) => e.to_envelope(),
            ChangeEvent::GroupCreated(e) => e.to_envelope(),
            ChangeEvent::GroupRenamed(e) => e.to_envelope(),
            ChangeEvent::GroupDeleted(e) => e.to_envelope(),
        }
    }
}

macro_rules! impl_from_event {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for ChangeEvent {
                fn from(event: $variant) -> Self {
                    ChangeEvent::$variant(event)
                }
            }
        )*
    };
}

impl_from_event!(
    DisplayRegistered,
    DisplayUpdated,
    DisplayGroupChanged,
    DisplayDeleted,
    GroupCreated,
    GroupRenamed,
    GroupDeleted,
);
