//! HTTP adapter - REST API and live change feed.
//!
//! Each resource has its own module with DTOs, handlers and routes. All of
//! them share [`AppState`], which holds the one [`Registry`] instance.

pub mod display;
pub mod error;
pub mod events;
pub mod group;

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::application::Registry;

pub use display::display_router;
pub use error::ErrorResponse;
pub use events::events_router;
pub use group::group_router;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
}

impl AppState {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }
}

/// Builds the full application router.
///
/// Routes:
/// - `/api/display/...` - display registry
/// - `/api/group/...` - groups
/// - `GET /api/events` - server-sent change feed
/// - `GET /health` - liveness
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .merge(display_router())
        .merge(group_router())
        .merge(events_router())
        .route("/health", get(health))
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::in_memory_registry;
    use crate::application::RegistryOptions;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_returns_ok() {
        let state = AppState::new(Arc::new(in_memory_registry(RegistryOptions::default())));
        let app = router(state, Duration::from_secs(5));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }
}
