//! Change logger - writes every registry change to the structured log.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::registry::ChangeEvent;
use crate::ports::ChangeHandler;

/// Handler that records each change as an `info` log line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeLogger;

impl ChangeLogger {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChangeHandler for ChangeLogger {
    async fn handle(&self, event: ChangeEvent) -> Result<(), DomainError> {
        let envelope = event.to_envelope();
        tracing::info!(
            event_id = %envelope.event_id,
            kind = %event.kind(),
            entity = event.entity_id(),
            occurred_at = %envelope.occurred_at.to_rfc3339(),
            "Registry change"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ChangeLogger"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::GroupId;
    use crate::domain::group::{Group, GroupCreated};

    #[tokio::test]
    async fn logging_never_fails() {
        let event = GroupCreated::new(Group::new(GroupId::new("g1"), "Lobby")).into();

        assert!(ChangeLogger::new().handle(event).await.is_ok());
    }
}
