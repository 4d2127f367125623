//! HTTP DTOs for group endpoints.

use axum::body::Bytes;
use axum::response::Response;
use serde::{Deserialize, Serialize};

use crate::adapters::http::error::bad_request;
use crate::domain::group::Group;

/// Body of create and rename requests.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupNameRequest {
    pub name: String,
}

impl GroupNameRequest {
    /// Parses the body, answering 400 when it is not `{"name": "..."}`.
    pub fn parse(body: &Bytes) -> Result<Self, Response> {
        serde_json::from_slice(body)
            .map_err(|e| bad_request(format!("Expected {{\"name\": string}}: {}", e)))
    }
}

/// Group snapshot as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupResponse {
    pub id: String,
    pub name: String,
    pub created_at: String,
}

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        Self {
            id: group.id().to_string(),
            name: group.name().to_string(),
            created_at: group.created_at().to_rfc3339(),
        }
    }
}
