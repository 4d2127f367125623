//! HTTP adapter for display endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{parse_patch, DisplayResponse};
pub use routes::display_router;
