//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the registry and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `DisplayStore` - Persistence of display records
//! - `GroupStore` - Persistence of group records
//!
//! ## Change Ports
//!
//! - `ChangePublisher` - Port for publishing change events
//! - `ChangeSubscriber` - Port for subscribing to change events
//! - `ChangeHandler` - Handler that processes delivered events
//! - `ChangeBus` - Publisher and subscriber combined

mod display_store;
mod event_publisher;
mod event_subscriber;
mod group_store;

pub use display_store::DisplayStore;
pub use event_publisher::ChangePublisher;
pub use event_subscriber::{ChangeBus, ChangeHandler, ChangeSubscriber, SubscriptionId};
pub use group_store::GroupStore;
