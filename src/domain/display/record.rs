//! Display record entity.
//!
//! A display is a registered signage device. Its name is assigned once at
//! registration and never changes; the free-form attributes and the group
//! reference are mutable.
//!
//! # Ownership
//!
//! Displays reference groups by ID but do NOT own them. Whether a
//! referenced group exists is enforced by the registry, not here.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DisplayName, GroupId, Timestamp};

use super::DisplayPatch;

/// Display record - one registered signage device.
///
/// # Invariants
///
/// - `name` and `registered_at` never change after registration
/// - only whitelisted attributes are ever stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Display {
    /// Unique name assigned at registration.
    name: DisplayName,

    /// Free-text description.
    description: Option<String>,

    /// Free-text physical location.
    location: Option<String>,

    /// Group this display belongs to, if any.
    group: Option<GroupId>,

    /// When the display registered.
    registered_at: Timestamp,
}

impl Display {
    /// Registers a new, ungrouped display with the given initial attributes.
    pub fn register(name: DisplayName, initial: DisplayPatch) -> Self {
        let mut display = Self {
            name,
            description: None,
            location: None,
            group: None,
            registered_at: Timestamp::now(),
        };
        display.apply(initial);
        display
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the display name.
    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    /// Returns the description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the location.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns the group reference.
    pub fn group(&self) -> Option<&GroupId> {
        self.group.as_ref()
    }

    /// Returns when the display registered.
    pub fn registered_at(&self) -> &Timestamp {
        &self.registered_at
    }

    /// Returns true if this display belongs to `group`.
    pub fn is_member_of(&self, group: &GroupId) -> bool {
        self.group.as_ref() == Some(group)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Merges a sanitized patch. Omitted attributes are left unchanged.
    ///
    /// Returns true if any attribute changed.
    pub fn apply(&mut self, patch: DisplayPatch) -> bool {
        let mut changed = false;
        if let Some(description) = patch.description {
            changed |= self.description != description;
            self.description = description;
        }
        if let Some(location) = patch.location {
            changed |= self.location != location;
            self.location = location;
        }
        changed
    }

    /// Points this display at `group`, returning the previous reference.
    pub fn assign_group(&mut self, group: GroupId) -> Option<GroupId> {
        self.group.replace(group)
    }

    /// Removes the group reference, returning the previous one.
    pub fn clear_group(&mut self) -> Option<GroupId> {
        self.group.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> Display {
        Display::register(DisplayName::new("d1"), DisplayPatch::default())
    }

    #[test]
    fn register_starts_ungrouped() {
        let display = display();

        assert_eq!(display.name().as_str(), "d1");
        assert!(display.group().is_none());
        assert!(display.description().is_none());
    }

    #[test]
    fn register_applies_initial_attributes() {
        let display = Display::register(
            DisplayName::new("d2"),
            DisplayPatch::default().with_location("Hall B"),
        );

        assert_eq!(display.location(), Some("Hall B"));
        assert!(display.description().is_none());
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let mut display = display();
        display.apply(DisplayPatch::default().with_description("Shiny").with_location("Lobby"));

        let changed = display.apply(DisplayPatch::default().with_description("Dull"));

        assert!(changed);
        assert_eq!(display.description(), Some("Dull"));
        assert_eq!(display.location(), Some("Lobby"));
    }

    #[test]
    fn apply_null_clears_attribute() {
        let mut display = display();
        display.apply(DisplayPatch::default().with_location("Lobby"));

        display.apply(DisplayPatch {
            location: Some(None),
            ..Default::default()
        });

        assert!(display.location().is_none());
    }

    #[test]
    fn apply_reports_no_change_for_identical_values() {
        let mut display = display();
        display.apply(DisplayPatch::default().with_description("Same"));

        assert!(!display.apply(DisplayPatch::default().with_description("Same")));
        assert!(!display.apply(DisplayPatch::default()));
    }

    #[test]
    fn assign_and_clear_group_return_previous() {
        let mut display = display();

        assert_eq!(display.assign_group(GroupId::new("g1")), None);
        assert_eq!(display.assign_group(GroupId::new("g2")), Some(GroupId::new("g1")));
        assert!(display.is_member_of(&GroupId::new("g2")));
        assert_eq!(display.clear_group(), Some(GroupId::new("g2")));
        assert!(display.group().is_none());
    }

    #[test]
    fn mutations_never_touch_identity() {
        let mut display = display();
        let registered_at = *display.registered_at();

        display.apply(DisplayPatch::default().with_description("x"));
        display.assign_group(GroupId::new("g1"));

        assert_eq!(display.name().as_str(), "d1");
        assert_eq!(*display.registered_at(), registered_at);
    }
}
