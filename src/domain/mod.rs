//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, events, errors)
//! - `display` - Display record, attribute whitelist and display events
//! - `group` - Group record and group events
//! - `registry` - Identity allocation, change notifications, registry errors

pub mod display;
pub mod foundation;
pub mod group;
pub mod registry;
