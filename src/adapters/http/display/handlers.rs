//! HTTP handlers for display endpoints.

use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::handle_registry_error;
use crate::adapters::http::AppState;
use crate::domain::foundation::{DisplayName, GroupId};

use super::dto::{parse_patch, DisplayResponse};

/// GET /api/display - All displays keyed by name
pub async fn list_displays(State(state): State<AppState>) -> Response {
    match state.registry.list_displays().await {
        Ok(displays) => {
            let response: BTreeMap<String, DisplayResponse> = displays
                .into_iter()
                .map(|(name, display)| (name.to_string(), display.into()))
                .collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_registry_error(e),
    }
}

/// POST /api/display - Register a new display
pub async fn register_display(State(state): State<AppState>, body: Bytes) -> Response {
    let patch = match parse_patch(&body) {
        Ok(patch) => patch,
        Err(response) => return response,
    };

    match state.registry.register_display(patch).await {
        Ok(display) => {
            (StatusCode::CREATED, Json(DisplayResponse::from(display))).into_response()
        }
        Err(e) => handle_registry_error(e),
    }
}

/// GET /api/display/:name - One display
pub async fn get_display(State(state): State<AppState>, Path(name): Path<DisplayName>) -> Response {
    match state.registry.get_display(&name).await {
        Ok(display) => (StatusCode::OK, Json(DisplayResponse::from(display))).into_response(),
        Err(e) => handle_registry_error(e),
    }
}

/// PUT /api/display/:name - Merge whitelisted attributes
pub async fn update_display(
    State(state): State<AppState>,
    Path(name): Path<DisplayName>,
    body: Bytes,
) -> Response {
    let patch = match parse_patch(&body) {
        Ok(patch) => patch,
        Err(response) => return response,
    };

    match state.registry.update_display(&name, patch).await {
        Ok(display) => (StatusCode::OK, Json(DisplayResponse::from(display))).into_response(),
        Err(e) => handle_registry_error(e),
    }
}

/// DELETE /api/display/:name - Remove a display
pub async fn delete_display(
    State(state): State<AppState>,
    Path(name): Path<DisplayName>,
) -> Response {
    match state.registry.delete_display(&name).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_registry_error(e),
    }
}

/// PUT /api/display/:name/group/:id - Assign a display to a group
pub async fn set_display_group(
    State(state): State<AppState>,
    Path((name, group)): Path<(DisplayName, GroupId)>,
) -> Response {
    match state.registry.set_display_group(&name, &group).await {
        Ok(display) => (StatusCode::OK, Json(DisplayResponse::from(display))).into_response(),
        Err(e) => handle_registry_error(e),
    }
}

/// DELETE /api/display/:name/group - Remove a display from its group
pub async fn clear_display_group(
    State(state): State<AppState>,
    Path(name): Path<DisplayName>,
) -> Response {
    match state.registry.clear_display_group(&name).await {
        Ok(display) => (StatusCode::OK, Json(DisplayResponse::from(display))).into_response(),
        Err(e) => handle_registry_error(e),
    }
}
