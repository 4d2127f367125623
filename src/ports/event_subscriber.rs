//! ChangeSubscriber port - Interface for subscribing to registry changes.
//!
//! Subscribers register interest in a set of [`EventKind`]s and receive
//! matching events asynchronously, decoupled from the mutating call.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::domain::foundation::DomainError;
use crate::domain::registry::{ChangeEvent, EventKind};

/// Handler for processing change events.
///
/// Implementations should be:
/// - **Idempotent** - delivery is at-least-once
/// - **Isolated** - an error is logged by the bus and never reaches the publisher
///
/// # Example
///
/// ```ignore
/// struct DashboardNotifier { /* ... */ }
///
/// #[async_trait]
/// impl ChangeHandler for DashboardNotifier {
///     async fn handle(&self, event: ChangeEvent) -> Result<(), DomainError> {
///         self.push(event.to_envelope()).await
///     }
///
///     fn name(&self) -> &'static str {
///         "DashboardNotifier"
///     }
/// }
/// ```
#[async_trait]
pub trait ChangeHandler: Send + Sync {
    /// Process one event.
    async fn handle(&self, event: ChangeEvent) -> Result<(), DomainError>;

    /// Handler name for logging.
    fn name(&self) -> &'static str;
}

/// Identifies one subscription so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Port for subscribing to change events.
///
/// An empty `kinds` filter matches every kind.
pub trait ChangeSubscriber: Send + Sync {
    /// Subscribe a handler. Matching events are queued for it and processed
    /// sequentially on a dedicated task.
    ///
    /// # Panics
    ///
    /// Must be called from within a Tokio runtime.
    fn subscribe(&self, kinds: &[EventKind], handler: Arc<dyn ChangeHandler>) -> SubscriptionId;

    /// Subscribe with a raw receiver. The subscription ends when the
    /// receiver is dropped.
    fn subscribe_channel(&self, kinds: &[EventKind]) -> mpsc::UnboundedReceiver<ChangeEvent>;

    /// Cancel a subscription. Already-queued events are still delivered.
    ///
    /// Returns whether the subscription existed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

/// Combined trait for change bus implementations.
pub trait ChangeBus: super::ChangePublisher + ChangeSubscriber {}

impl<T: super::ChangePublisher + ChangeSubscriber> ChangeBus for T {}
