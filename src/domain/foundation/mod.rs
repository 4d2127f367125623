//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, event infrastructure and error types
//! that form the vocabulary of the signage registry.

mod errors;
mod events;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub(crate) use events::domain_event;
pub use events::{DomainEvent, EventEnvelope, EventId, SerializableDomainEvent};
pub use ids::{DisplayName, GroupId};
pub use timestamp::Timestamp;
