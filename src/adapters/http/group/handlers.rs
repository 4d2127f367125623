//! HTTP handlers for group endpoints.

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
use crate::domain::foundation::GroupId;

use super::dto::{GroupNameRequest, GroupResponse};

/// GET /api/group - All groups keyed by id
pub async fn list_groups(State(state): State<AppState>) -> Response {
    match state.registry.list_groups().await {
        Ok(groups) => {
            let response: BTreeMap<String, GroupResponse> = groups
                .into_iter()
                .map(|(id, group)| (id.to_string(), group.into()))
                .collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_registry_error(e),
    }
}

/// POST /api/group - Create a group
pub async fn create_group(State(state): State<AppState>, body: Bytes) -> Response {
    let request = match GroupNameRequest::parse(&body) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.registry.create_group(request.name).await {
        Ok(group) => (StatusCode::CREATED, Json(GroupResponse::from(group))).into_response(),
        Err(e) => handle_registry_error(e),
    }
}

/// GET /api/group/:id - One group
pub async fn get_group(State(state): State<AppState>, Path(id): Path<GroupId>) -> Response {
    match state.registry.get_group(&id).await {
        Ok(group) => (StatusCode::OK, Json(GroupResponse::from(group))).into_response(),
        Err(e) => handle_registry_error(e),
    }
}

/// PUT /api/group/:id - Rename a group
pub async fn rename_group(
    State(state): State<AppState>,
    Path(id): Path<GroupId>,
    body: Bytes,
) -> Response {
    let request = match GroupNameRequest::parse(&body) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.registry.rename_group(&id, request.name).await {
        Ok(group) => (StatusCode::OK, Json(GroupResponse::from(group))).into_response(),
        Err(e) => handle_registry_error(e),
    }
}

/// DELETE /api/group/:id - Delete a group, detaching its displays
pub async fn delete_group(State(state): State<AppState>, Path(id): Path<GroupId>) -> Response {
    match state.registry.delete_group(&id).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_registry_error(e),
    }
}
