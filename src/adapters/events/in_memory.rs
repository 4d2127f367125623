//! In-memory change bus.
//!
//! Every subscription owns an unbounded queue. Publishing pushes the event
//! into each matching queue and returns immediately; handlers drain their
//! own queue on a dedicated task, one event at a time. A slow handler only
//! grows its own backlog, and a failing or panicking one is logged and
//! skipped past.
//!
//! # Ordering
//!
//! A subscriber sees events in publish order. The registry publishes while
//! still holding the entity's lock, so per-entity publish order equals
//! mutation order.

use futures::FutureExt;
use std::collections::HashSet;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::mpsc;

use crate::domain::registry::{ChangeEvent, EventKind};
use crate::ports::{ChangeHandler, ChangePublisher, ChangeSubscriber, SubscriptionId};

struct Subscription {
    id: SubscriptionId,
    /// `None` matches every kind.
    kinds: Option<HashSet<EventKind>>,
    sender: mpsc::UnboundedSender<ChangeEvent>,
}

impl Subscription {
    fn matches(&self, kind: EventKind) -> bool {
        self.kinds.as_ref().map_or(true, |kinds| kinds.contains(&kind))
    }
}

/// In-process change bus with one queue per subscriber.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryChangeBus::new());
/// bus.subscribe(&[EventKind::DisplayDeleted], Arc::new(ScreenRefresher::new()));
///
/// let mut feed = bus.subscribe_channel(&[]);
/// bus.publish(DisplayDeleted::new(display).into());
/// let event = feed.recv().await;
/// ```
pub struct InMemoryChangeBus {
    subscriptions: RwLock<Vec<Subscription>>,
    next_id: AtomicU64,
}

impl InMemoryChangeBus {
    /// Creates a new bus with no subscribers.
    pub fn new() -> Self {
        Self {
            subscriptions: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Returns the number of live subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn add(&self, kinds: &[EventKind]) -> (SubscriptionId, mpsc::UnboundedReceiver<ChangeEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let kinds = (!kinds.is_empty()).then(|| kinds.iter().copied().collect());

        self.subscriptions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Subscription { id, kinds, sender });

        (id, receiver)
    }

    fn prune_closed(&self) {
        let mut subscriptions = self
            .subscriptions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        subscriptions.retain(|subscription| {
            let open = !subscription.sender.is_closed();
            if !open {
                tracing::warn!(subscription = %subscription.id, "Dropping closed subscription");
            }
            open
        });
    }
}

impl Default for InMemoryChangeBus {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangePublisher for InMemoryChangeBus {
    fn publish(&self, event: ChangeEvent) {
        let kind = event.kind();
        let mut delivered = 0usize;
        let mut saw_closed = false;

        {
            let subscriptions = self
                .subscriptions
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            for subscription in subscriptions.iter().filter(|s| s.matches(kind)) {
                if subscription.sender.send(event.clone()).is_ok() {
                    delivered += 1;
                } else {
                    saw_closed = true;
                }
            }
        }

        tracing::debug!(
            kind = %kind,
            entity = event.entity_id(),
            subscribers = delivered,
            "Change published"
        );

        if saw_closed {
            self.prune_closed();
        }
    }
}

impl ChangeSubscriber for InMemoryChangeBus {
    fn subscribe(&self, kinds: &[EventKind], handler: Arc<dyn ChangeHandler>) -> SubscriptionId {
        let (id, receiver) = self.add(kinds);
        tracing::info!(subscription = %id, handler = handler.name(), "Handler subscribed");
        tokio::spawn(drain(id, handler, receiver));
        id
    }

    fn subscribe_channel(&self, kinds: &[EventKind]) -> mpsc::UnboundedReceiver<ChangeEvent> {
        let (id, receiver) = self.add(kinds);
        tracing::debug!(subscription = %id, "Channel subscribed");
        receiver
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscriptions = self
            .subscriptions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = subscriptions.len();
        subscriptions.retain(|subscription| subscription.id != id);
        before != subscriptions.len()
    }
}

/// Delivers queued events to one handler until the queue closes.
async fn drain(
    id: SubscriptionId,
    handler: Arc<dyn ChangeHandler>,
    mut receiver: mpsc::UnboundedReceiver<ChangeEvent>,
) {
    while let Some(event) = receiver.recv().await {
        let kind = event.kind();
        let entity = event.entity_id().to_string();

        match AssertUnwindSafe(handler.handle(event)).catch_unwind().await {
            Ok(Ok(())) => {}
            Ok(Err(error)) => tracing::warn!(
                subscription = %id,
                handler = handler.name(),
                kind = %kind,
                entity = %entity,
                error = %error,
                "Change handler failed"
            ),
            Err(_) => tracing::warn!(
                subscription = %id,
                handler = handler.name(),
                kind = %kind,
                entity = %entity,
                "Change handler panicked"
            ),
        }
    }
    tracing::debug!(subscription = %id, handler = handler.name(), "Subscription closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::domain::display::{Display, DisplayDeleted, DisplayPatch, DisplayUpdated};
    use crate::domain::foundation::{DisplayName, DomainError, ErrorCode, GroupId};
    use crate::domain::group::{Group, GroupCreated};
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::time::timeout;

    fn display(name: &str) -> Display {
        Display::register(DisplayName::new(name), DisplayPatch::default())
    }

    fn updated(name: &str, description: &str) -> ChangeEvent {
        let mut display = display(name);
        display.apply(DisplayPatch::default().with_description(description));
        DisplayUpdated::new(display).into()
    }

    /// Forwards every handled event to a channel so tests can await delivery.
    struct ForwardingHandler {
        sender: mpsc::UnboundedSender<ChangeEvent>,
    }

    #[async_trait]
    impl ChangeHandler for ForwardingHandler {
        async fn handle(&self, event: ChangeEvent) -> Result<(), DomainError> {
            let _ = self.sender.send(event);
            Ok(())
        }
        fn name(&self) -> &'static str {
            "ForwardingHandler"
        }
    }

    async fn next(receiver: &mut mpsc::UnboundedReceiver<ChangeEvent>) -> ChangeEvent {
        timeout(Duration::from_secs(2), receiver.recv())
            .await
            .expect("timed out waiting for event")
            .expect("channel closed")
    }

    #[tokio::test]
    async fn channel_subscriber_receives_matching_events_only() {
        let bus = InMemoryChangeBus::new();
        let mut feed = bus.subscribe_channel(&[EventKind::DisplayDeleted]);

        bus.publish(updated("d1", "x"));
        bus.publish(DisplayDeleted::new(display("d1")).into());

        assert_eq!(next(&mut feed).await.kind(), EventKind::DisplayDeleted);
        assert!(feed.try_recv().is_err());
    }

    #[tokio::test]
    async fn empty_filter_matches_every_kind() {
        let bus = InMemoryChangeBus::new();
        let mut feed = bus.subscribe_channel(&[]);

        bus.publish(updated("d1", "x"));
        bus.publish(GroupCreated::new(Group::new(GroupId::new("g1"), "A")).into());

        assert_eq!(next(&mut feed).await.kind(), EventKind::DisplayUpdated);
        assert_eq!(next(&mut feed).await.kind(), EventKind::GroupCreated);
    }

    #[tokio::test]
    async fn handler_receives_events_in_publish_order() {
        let bus = InMemoryChangeBus::new();
        let (sender, mut received) = mpsc::unbounded_channel();
        bus.subscribe(&[], Arc::new(ForwardingHandler { sender }));

        for i in 0..20 {
            bus.publish(updated("d1", &i.to_string()));
        }

        for i in 0..20 {
            match next(&mut received).await {
                ChangeEvent::DisplayUpdated(e) => {
                    assert_eq!(e.display.description(), Some(i.to_string().as_str()))
                }
                other => panic!("unexpected event {:?}", other.kind()),
            }
        }
    }

    #[tokio::test]
    async fn failing_handler_does_not_affect_publisher_or_later_events() {
        struct FlakyHandler {
            calls: Mutex<u32>,
            sender: mpsc::UnboundedSender<ChangeEvent>,
        }

        #[async_trait]
        impl ChangeHandler for FlakyHandler {
            async fn handle(&self, event: ChangeEvent) -> Result<(), DomainError> {
                let call = {
                    let mut calls = self.calls.lock().unwrap();
                    *calls += 1;
                    *calls
                };
                if call == 1 {
                    return Err(DomainError::new(ErrorCode::InternalError, "boom"));
                }
                if call == 2 {
                    panic!("handler bug");
                }
                let _ = self.sender.send(event);
                Ok(())
            }
            fn name(&self) -> &'static str {
                "FlakyHandler"
            }
        }

        let bus = InMemoryChangeBus::new();
        let (sender, mut received) = mpsc::unbounded_channel();
        bus.subscribe(
            &[],
            Arc::new(FlakyHandler {
                calls: Mutex::new(0),
                sender,
            }),
        );

        bus.publish(updated("d1", "first"));
        bus.publish(updated("d1", "second"));
        bus.publish(updated("d1", "third"));

        match next(&mut received).await {
            ChangeEvent::DisplayUpdated(e) => assert_eq!(e.display.description(), Some("third")),
            other => panic!("unexpected event {:?}", other.kind()),
        }
    }

    #[tokio::test]
    async fn slow_handler_does_not_block_publish() {
        struct StuckHandler;

        #[async_trait]
        impl ChangeHandler for StuckHandler {
            async fn handle(&self, _: ChangeEvent) -> Result<(), DomainError> {
                futures::future::pending::<()>().await;
                Ok(())
            }
            fn name(&self) -> &'static str {
                "StuckHandler"
            }
        }

        let bus = InMemoryChangeBus::new();
        bus.subscribe(&[], Arc::new(StuckHandler));
        let mut feed = bus.subscribe_channel(&[]);

        for i in 0..100 {
            bus.publish(updated("d1", &i.to_string()));
        }

        for _ in 0..100 {
            next(&mut feed).await;
        }
    }

    #[tokio::test]
    async fn dropped_receiver_is_pruned_on_next_publish() {
        let bus = InMemoryChangeBus::new();
        let feed = bus.subscribe_channel(&[]);
        let _kept = bus.subscribe_channel(&[]);
        assert_eq!(bus.subscription_count(), 2);

        drop(feed);
        bus.publish(updated("d1", "x"));

        assert_eq!(bus.subscription_count(), 1);
    }

    #[tokio::test]
    async fn unsubscribe_stops_delivery() {
        let bus = InMemoryChangeBus::new();
        let (sender, mut received) = mpsc::unbounded_channel();
        let id = bus.subscribe(&[], Arc::new(ForwardingHandler { sender }));

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish(updated("d1", "x"));

        // The drain task ends once its sender is gone.
        assert!(timeout(Duration::from_secs(2), received.recv())
            .await
            .unwrap()
            .is_none());
    }
}
