//! ChangePublisher port - Interface for publishing registry changes.
//!
//! This port defines how the registry announces changes without knowing
//! how, or by whom, they are consumed.

use crate::domain::registry::ChangeEvent;

/// Port for publishing change events.
///
/// Implementations must ensure:
/// - `publish` never blocks on subscriber processing
/// - `publish` never fails the triggering operation
/// - events reach each matching subscriber at least once, in publish order
pub trait ChangePublisher: Send + Sync {
    /// Hand an event to every matching subscriber.
    fn publish(&self, event: ChangeEvent);
}
