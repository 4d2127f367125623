//! Group record entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GroupId, Timestamp};

/// A named cluster of displays sharing configuration.
///
/// Groups never own displays: deleting a group detaches its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    id: GroupId,
    name: String,
    created_at: Timestamp,
}

impl Group {
    /// Creates a new group.
    pub fn new(id: GroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: Timestamp::now(),
        }
    }

    /// Returns the group ID.
    pub fn id(&self) -> &GroupId {
        &self.id
    }

    /// Returns the descriptive label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns when the group was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Replaces the label, returning the old one.
    pub fn rename(&mut self, name: impl Into<String>) -> String {
        std::mem::replace(&mut self.name, name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_group_keeps_id_and_name() {
        let group = Group::new(GroupId::new("g1"), "Oops");

        assert_eq!(group.id().as_str(), "g1");
        assert_eq!(group.name(), "Oops");
    }

    #[test]
    fn rename_returns_previous_label() {
        let mut group = Group::new(GroupId::new("g1"), "Lobby");

        let previous = group.rename("Atrium");

        assert_eq!(previous, "Lobby");
        assert_eq!(group.name(), "Atrium");
        assert_eq!(group.id().as_str(), "g1");
    }
}
