//! Display domain module.
//!
//! Handles the display record, the attribute whitelist applied to every
//! caller-supplied payload, and the events published when a display changes.
//!
//! # Events
//!
//! - `DisplayRegistered` - Published when a new display registers
//! - `DisplayUpdated` - Published when attributes are merged
//! - `DisplayGroupChanged` - Published when group membership changes
//! - `DisplayDeleted` - Published when a display is removed

mod events;
mod patch;
mod record;

pub use events::{DisplayDeleted, DisplayGroupChanged, DisplayRegistered, DisplayUpdated};
pub use patch::{DisplayPatch, RECOGNIZED_ATTRIBUTES};
pub use record::Display;
