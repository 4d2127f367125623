//! Route configuration for group endpoints.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers::{create_group, delete_group, get_group, list_groups, rename_group};

/// Creates the group router.
///
/// Routes:
/// - `GET /api/group` - All groups keyed by id
/// - `POST /api/group` - Create a group
/// - `GET /api/group/:id` - One group
/// - `PUT /api/group/:id` - Rename
/// - `DELETE /api/group/:id` - Delete and detach members
pub fn group_router() -> Router<AppState> {
    Router::new()
        .route("/api/group", get(list_groups).post(create_group))
        .route(
            "/api/group/:id",
            get(get_group).put(rename_group).delete(delete_group),
        )
}
