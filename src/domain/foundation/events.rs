//! Event infrastructure for change notification and transport.
//!
//! This module provides the core types and traits for event-driven architecture:
//! - `EventId` - Unique identifier for events (deduplication)
//! - `EventEnvelope` - Transport wrapper for domain events
//! - `DomainEvent` - Trait that all domain events implement
//! - `domain_event!` - Macro to simplify DomainEvent implementations

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

use super::Timestamp;

// ============================================
// DomainEvent Trait
// ============================================

/// Trait that all domain events must implement.
///
/// Provides the contract for event identification, routing and ordering.
/// Use the `domain_event!` macro to implement this trait with minimal boilerplate.
pub trait DomainEvent: Send + Sync {
    /// Returns the event type string (e.g., "display.registered").
    /// Used for routing and filtering.
    fn event_type(&self) -> &'static str;

    /// Returns the ID of the entity that emitted this event.
    fn aggregate_id(&self) -> String;

    /// Returns the type of entity (e.g., "Display", "Group").
    fn aggregate_type(&self) -> &'static str;

    /// Returns when the event occurred.
    fn occurred_at(&self) -> Timestamp;

    /// Returns the unique ID for this event instance.
    fn event_id(&self) -> EventId;
}

/// Extension trait that provides `to_envelope()` for serializable domain events.
///
/// Automatically implemented for any type that implements both
/// `DomainEvent` and `Serialize`.
pub trait SerializableDomainEvent: DomainEvent + Serialize {
    /// Converts this domain event into an `EventEnvelope` for transport.
    fn to_envelope(&self) -> EventEnvelope {
        EventEnvelope::from_event(self)
    }
}

impl<T: DomainEvent + Serialize> SerializableDomainEvent for T {}

/// Macro to implement DomainEvent trait with minimal boilerplate.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct DisplayDeleted {
///     pub event_id: EventId,
///     pub name: DisplayName,
///     pub deleted_at: Timestamp,
/// }
///
/// domain_event!(
///     DisplayDeleted,
///     event_type = "display.deleted",
///     aggregate_id = name,
///     aggregate_type = "Display",
///     occurred_at = deleted_at,
///     event_id = event_id
/// );
/// ```
macro_rules! domain_event {
    (
        $event_name:ident,
        event_type = $event_type:expr,
        aggregate_id = $agg_id_field:ident,
        aggregate_type = $agg_type:expr,
        occurred_at = $occurred_field:ident,
        event_id = $event_id_field:ident
    ) => {
        impl $crate::domain::foundation::DomainEvent for $event_name {
            fn event_type(&self) -> &'static str {
                $event_type
            }

            fn aggregate_id(&self) -> String {
                self.$agg_id_field.to_string()
            }

            fn aggregate_type(&self) -> &'static str {
                $agg_type
            }

            fn occurred_at(&self) -> $crate::domain::foundation::Timestamp {
                self.$occurred_field
            }

            fn event_id(&self) -> $crate::domain::foundation::EventId {
                self.$event_id_field.clone()
            }
        }
    };
}

pub(crate) use domain_event;

/// Unique identifier for events (used for deduplication).
///
/// Uses a String internally to allow for various ID formats while
/// maintaining serializability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates a new random EventId using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transport envelope for domain events.
///
/// Wraps event-specific data with the fields needed for:
/// - Routing (event_type)
/// - Deduplication (event_id)
/// - Correlation (aggregate_id)
/// - Ordering (occurred_at)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique ID for this event instance.
    pub event_id: EventId,

    /// Event type for routing (e.g., "display.registered").
    pub event_type: String,

    /// ID of the entity that emitted this event.
    pub aggregate_id: String,

    /// Type of entity (e.g., "Display", "Group").
    pub aggregate_type: String,

    /// When the event occurred.
    pub occurred_at: Timestamp,

    /// Event-specific payload as JSON.
    pub payload: JsonValue,
}

impl EventEnvelope {
    /// Creates an envelope from a domain event with automatic serialization.
    pub fn from_event<T>(event: &T) -> Self
    where
        T: DomainEvent + Serialize + ?Sized,
    {
        Self {
            event_id: event.event_id(),
            event_type: event.event_type().to_string(),
            aggregate_id: event.aggregate_id(),
            aggregate_type: event.aggregate_type().to_string(),
            occurred_at: event.occurred_at(),
            // Derived Serialize on plain structs with string keys cannot fail.
            payload: serde_json::to_value(event).unwrap_or_default(),
        }
    }

    /// Deserialize payload to a specific event type.
    pub fn payload_as<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}
