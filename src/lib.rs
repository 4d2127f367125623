//! Signage Registry - display identity and group membership for networked signage.
//!
//! Displays register, receive a generated name, carry a small set of
//! descriptive attributes and may belong to one group. Every change is
//! published on an in-process bus so other parts of the system (the live
//! feed, audit logging) can react.
//!
//! Layout:
//! - `domain` - records, patches, events and errors
//! - `ports` - store and change bus contracts
//! - `application` - the [`application::Registry`] that enforces consistency
//! - `adapters` - in-memory stores and bus, HTTP transport
//! - `config` - environment-driven settings

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
