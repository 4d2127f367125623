//! Route configuration for display endpoints.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::adapters::http::AppState;

use super::handlers::{
    clear_display_group, delete_display, get_display, list_displays, register_display,
    set_display_group, update_display,
};

/// Creates the display router.
///
/// Routes:
/// - `GET /api/display` - All displays keyed by name
/// - `POST /api/display` - Register a display
/// - `GET /api/display/:name` - One display
/// - `PUT /api/display/:name` - Merge whitelisted attributes
/// - `DELETE /api/display/:name` - Remove a display
/// - `PUT /api/display/:name/group/:id` - Assign to a group
/// - `DELETE /api/display/:name/group` - Leave the current group
pub fn display_router() -> Router<AppState> {
    Router::new()
        .route("/api/display", get(list_displays).post(register_display))
        .route(
            "/api/display/:name",
            get(get_display).put(update_display).delete(delete_display),
        )
        .route("/api/display/:name/group", delete(clear_display_group))
        .route("/api/display/:name/group/:id", put(set_display_group))
}
