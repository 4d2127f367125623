//! Live change feed over server-sent events.
//!
//! `GET /api/events?kinds=display.updated,group.deleted` streams matching
//! changes as they happen. Each SSE message is named after the event kind,
//! carries the event id, and has the JSON envelope as its data. Omitting
//! `kinds` streams everything. The subscription ends when the client
//! disconnects.

use std::convert::Infallible;

use axum::{
    extract::{Query, State},
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    routing::get,
    Router,
};
use futures::stream::{self, Stream};
use serde::Deserialize;
use tokio::sync::mpsc;

use crate::adapters::http::error::bad_request;
use crate::adapters::http::AppState;
use crate::domain::registry::{ChangeEvent, EventKind, UnknownEventKind};

/// Query parameters for the change feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventsQuery {
    /// Comma-separated event kinds.
    #[serde(default)]
    pub kinds: Option<String>,
}

impl EventsQuery {
    /// Parses the filter. Empty segments are ignored.
    pub fn kinds(&self) -> Result<Vec<EventKind>, UnknownEventKind> {
        self.kinds
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::parse)
            .collect()
    }
}

/// Creates the change feed router.
pub fn events_router() -> Router<AppState> {
    Router::new().route("/api/events", get(stream_events))
}

/// GET /api/events - Server-sent change feed
pub async fn stream_events(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> Response {
    let kinds = match query.kinds() {
        Ok(kinds) => kinds,
        Err(e) => return bad_request(e.to_string()),
    };

    tracing::debug!(kinds = ?kinds, "Change feed opened");
    let receiver = state.registry.subscribe_channel(&kinds);

    Sse::new(change_stream(receiver))
        .keep_alive(KeepAlive::default())
        .into_response()
}

fn change_stream(
    receiver: mpsc::UnboundedReceiver<ChangeEvent>,
) -> impl Stream<Item = Result<Event, Infallible>> {
    stream::unfold(receiver, |mut receiver| async move {
        let change = receiver.recv().await?;
        Some((Ok(to_sse(&change)), receiver))
    })
}

fn to_sse(change: &ChangeEvent) -> Event {
    let envelope = change.to_envelope();
    let event = Event::default()
        .event(change.kind().as_str())
        .id(envelope.event_id.as_str());

    match event.clone().json_data(&envelope) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(error = %e, kind = %change.kind(), "Failed to encode change");
            event.comment("encoding failed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_kinds_means_all() {
        assert!(EventsQuery::default().kinds().unwrap().is_empty());
    }

    #[test]
    fn parses_comma_separated_kinds() {
        let query = EventsQuery {
            kinds: Some("display.updated, group.deleted,".to_string()),
        };

        assert_eq!(
            query.kinds().unwrap(),
            vec![EventKind::DisplayUpdated, EventKind::GroupDeleted]
        );
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let query = EventsQuery {
            kinds: Some("display.exploded".to_string()),
        };

        assert_eq!(
            query.kinds().unwrap_err(),
            UnknownEventKind("display.exploded".to_string())
        );
    }
}
