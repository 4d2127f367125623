//! HTTP DTOs for display endpoints.
//!
//! Request bodies are not typed: any JSON object is accepted and passed
//! through the attribute whitelist, so unknown keys never cause a 4xx.

use axum::body::Bytes;
use axum::response::Response;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::adapters::http::error::bad_request;
use crate::domain::display::{Display, DisplayPatch};

/// Display snapshot as returned by the API.
///
/// `group` is always present and `null` when the display is ungrouped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayResponse {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub group: Option<String>,
    pub registered_at: String,
}

impl From<Display> for DisplayResponse {
    fn from(display: Display) -> Self {
        Self {
            name: display.name().to_string(),
            description: display.description().map(str::to_string),
            location: display.location().map(str::to_string),
            group: display.group().map(ToString::to_string),
            registered_at: display.registered_at().to_rfc3339(),
        }
    }
}

/// Turns a raw request body into a sanitized patch.
///
/// An empty body is an empty patch. Anything that is not valid JSON is
/// rejected with 400.
pub fn parse_patch(body: &Bytes) -> Result<DisplayPatch, Response> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(DisplayPatch::default());
    }
    let payload: JsonValue = serde_json::from_slice(body)
        .map_err(|e| bad_request(format!("Malformed JSON body: {}", e)))?;
    Ok(DisplayPatch::sanitize(&payload))
}
