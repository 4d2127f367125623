//! Integration tests for the REST API.
//!
//! Drives the full router in-process with `tower::ServiceExt::oneshot`,
//! seeding state directly through the registry where a test needs it.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

use signage_registry::adapters::http::{router, AppState};
use signage_registry::adapters::in_memory_registry;
use signage_registry::application::{Registry, RegistryOptions};
use signage_registry::domain::display::DisplayPatch;
use signage_registry::domain::foundation::DisplayName;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    registry: Arc<Registry>,
    router: Router,
}

impl TestApp {
    fn new() -> Self {
        let registry = Arc::new(in_memory_registry(RegistryOptions::default()));
        let router = router(AppState::new(registry.clone()), Duration::from_secs(5));
        Self { registry, router }
    }

    async fn call(&self, method: &str, uri: &str, body: Option<JsonValue>) -> (StatusCode, JsonValue) {
        let body = match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        };
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("accept", "application/json")
                    .header("content-type", "application/json")
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            JsonValue::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn register(&self) -> String {
        self.registry
            .register_display(DisplayPatch::default())
            .await
            .unwrap()
            .name()
            .to_string()
    }
}

// =============================================================================
// GET /api/display
// =============================================================================

#[tokio::test]
async fn list_on_empty_registry_is_empty_object() {
    let app = TestApp::new();

    let (status, body) = app.call("GET", "/api/display", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn list_contains_newly_registered_display() {
    let app = TestApp::new();
    let name = app.register().await;

    let (status, body) = app.call("GET", "/api/display", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[&name]["name"], name.as_str());
    assert!(body[&name].as_object().unwrap().contains_key("group"));
}

// =============================================================================
// POST /api/display
// =============================================================================

#[tokio::test]
async fn register_returns_created_snapshot() {
    let app = TestApp::new();

    let (status, body) = app
        .call(
            "POST",
            "/api/display",
            Some(json!({"description": "Menu board", "firmware": "1.2"})),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "d1");
    assert_eq!(body["description"], "Menu board");
    assert!(body.get("firmware").is_none());
}

// =============================================================================
// PUT /api/display/:name
// =============================================================================

#[tokio::test]
async fn update_applies_known_and_drops_unknown_keys() {
    let app = TestApp::new();
    let name = app.register().await;

    let (status, body) = app
        .call(
            "PUT",
            &format!("/api/display/{name}"),
            Some(json!({"description": "Shiny", "invalid": "Something"})),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], name.as_str());
    assert_eq!(body["description"], "Shiny");
    assert!(body.get("invalid").is_none());
}

#[tokio::test]
async fn update_unknown_display_is_404() {
    let app = TestApp::new();

    let (status, body) = app
        .call("PUT", "/api/display/1234", Some(json!({"description": "x"})))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "DISPLAY_NOT_FOUND");
}

// =============================================================================
// PUT /api/display/:name/group/:id
// =============================================================================

#[tokio::test]
async fn set_group_changes_display_group() {
    let app = TestApp::new();
    let group = app.registry.create_group("Oops").await.unwrap();
    let name = app.register().await;

    let (status, body) = app
        .call(
            "PUT",
            &format!("/api/display/{name}/group/{}", group.id()),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["group"], group.id().as_str());
    let stored = app
        .registry
        .get_display(&DisplayName::new(name))
        .await
        .unwrap();
    assert_eq!(stored.group(), Some(group.id()));
}

#[tokio::test]
async fn set_group_on_unknown_display_is_404() {
    let app = TestApp::new();
    let group = app.registry.create_group("Oops").await.unwrap();

    let (status, body) = app
        .call("PUT", &format!("/api/display/1234/group/{}", group.id()), None)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "DISPLAY_NOT_FOUND");
}

#[tokio::test]
async fn set_unknown_group_is_404() {
    let app = TestApp::new();
    let name = app.register().await;

    let (status, body) = app
        .call("PUT", &format!("/api/display/{name}/group/42"), None)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "GROUP_NOT_FOUND");
}

// =============================================================================
// DELETE /api/display/:name
// =============================================================================

#[tokio::test]
async fn delete_is_204_then_404() {
    let app = TestApp::new();
    let name = app.register().await;
    let uri = format!("/api/display/{name}");

    let (first, _) = app.call("DELETE", &uri, None).await;
    let (second, _) = app.call("DELETE", &uri, None).await;
    let (fetch, _) = app.call("GET", &uri, None).await;

    assert_eq!(first, StatusCode::NO_CONTENT);
    assert_eq!(second, StatusCode::NOT_FOUND);
    assert_eq!(fetch, StatusCode::NOT_FOUND);
}

// =============================================================================
// Groups
// =============================================================================

#[tokio::test]
async fn deleting_group_over_http_detaches_members() {
    let app = TestApp::new();
    let (status, group) = app
        .call("POST", "/api/group", Some(json!({"name": "Lobby"})))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let group_id = group["id"].as_str().unwrap().to_string();
    let name = app.register().await;
    app.call("PUT", &format!("/api/display/{name}/group/{group_id}"), None)
        .await;

    let (status, _) = app
        .call("DELETE", &format!("/api/group/{group_id}"), None)
        .await;
    let (_, display) = app.call("GET", &format!("/api/display/{name}"), None).await;
    let (_, groups) = app.call("GET", "/api/group", None).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(display["group"].is_null());
    assert_eq!(groups, json!({}));
}

#[tokio::test]
async fn unknown_group_is_404() {
    let app = TestApp::new();

    let (status, body) = app.call("GET", "/api/group/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "GROUP_NOT_FOUND");
}

// =============================================================================
// Live feed
// =============================================================================

#[tokio::test]
async fn event_feed_rejects_unknown_kind() {
    let app = TestApp::new();

    let (status, _) = app
        .call("GET", "/api/events?kinds=display.exploded", None)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn event_feed_opens_as_event_stream() {
    let app = TestApp::new();

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/events?kinds=display.registered")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/event-stream"));
}
