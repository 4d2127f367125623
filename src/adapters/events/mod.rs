//! Change bus adapters.
//!
//! - `InMemoryChangeBus` - In-process bus with a queue per subscriber
//! - `ChangeLogger` - Handler that logs every change

mod change_logger;
mod in_memory;

pub use change_logger::ChangeLogger;
pub use in_memory::InMemoryChangeBus;
