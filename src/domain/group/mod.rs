//! Group domain module.
//!
//! Groups cluster displays for shared configuration. They are created and
//! deleted explicitly; deleting one detaches its member displays.

mod events;
mod record;

pub use events::{GroupCreated, GroupDeleted, GroupRenamed};
pub use record::Group;
