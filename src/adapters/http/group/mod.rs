//! HTTP adapter for group endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{GroupNameRequest, GroupResponse};
pub use routes::group_router;
