//! Whitelisted attribute patches for displays.
//!
//! Callers send arbitrary JSON objects when registering or updating a
//! display. Only the keys in [`RECOGNIZED_ATTRIBUTES`] survive; everything
//! else is dropped without error. A recognized key with a value of the wrong
//! type is dropped the same way.

use serde_json::{Map, Value as JsonValue};

/// Attribute keys a caller may set on a display.
pub const RECOGNIZED_ATTRIBUTES: &[&str] = &["description", "location"];

/// A sanitized, partial change to a display's free-form attributes.
///
/// Each field is tri-state:
/// - `None` - key omitted, leave the attribute unchanged
/// - `Some(None)` - key sent as `null`, clear the attribute
/// - `Some(Some(v))` - set the attribute to `v`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayPatch {
    pub description: Option<Option<String>>,
    pub location: Option<Option<String>>,
}

impl DisplayPatch {
    /// Builds a patch from an untrusted JSON payload.
    ///
    /// Non-object payloads yield an empty patch.
    pub fn sanitize(payload: &JsonValue) -> Self {
        match payload.as_object() {
            Some(fields) => Self::from_fields(fields),
            None => Self::default(),
        }
    }

    fn from_fields(fields: &Map<String, JsonValue>) -> Self {
        Self {
            description: text_field(fields, "description"),
            location: text_field(fields, "location"),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(Some(location.into()));
        self
    }

    /// Returns true if the patch would leave every attribute untouched.
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.location.is_none()
    }
}

fn text_field(fields: &Map<String, JsonValue>, key: &str) -> Option<Option<String>> {
    match fields.get(key)? {
        JsonValue::Null => Some(None),
        JsonValue::String(value) => Some(Some(value.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn sanitize_keeps_recognized_keys() {
        let patch = DisplayPatch::sanitize(&json!({
            "description": "Shiny",
            "location": "Lobby"
        }));

        assert_eq!(patch.description, Some(Some("Shiny".to_string())));
        assert_eq!(patch.location, Some(Some("Lobby".to_string())));
    }

    #[test]
    fn sanitize_drops_unknown_keys_silently() {
        let patch = DisplayPatch::sanitize(&json!({
            "description": "Shiny",
            "invalid": "Something"
        }));

        assert_eq!(patch, DisplayPatch::default().with_description("Shiny"));
    }

    #[test]
    fn sanitize_ignores_protected_fields() {
        let patch = DisplayPatch::sanitize(&json!({
            "name": "d999",
            "group": "g1",
            "registered_at": "2020-01-01T00:00:00Z"
        }));

        assert!(patch.is_empty());
    }

    #[test]
    fn sanitize_drops_wrongly_typed_values() {
        let patch = DisplayPatch::sanitize(&json!({
            "description": 42,
            "location": ["a", "b"]
        }));

        assert!(patch.is_empty());
    }

    #[test]
    fn sanitize_treats_null_as_clear() {
        let patch = DisplayPatch::sanitize(&json!({ "location": null }));

        assert_eq!(patch.location, Some(None));
        assert_eq!(patch.description, None);
    }

    #[test]
    fn sanitize_non_object_is_empty() {
        assert!(DisplayPatch::sanitize(&json!("description")).is_empty());
        assert!(DisplayPatch::sanitize(&json!([1, 2, 3])).is_empty());
        assert!(DisplayPatch::sanitize(&JsonValue::Null).is_empty());
    }

    proptest! {
        #[test]
        fn unknown_keys_never_change_the_patch(
            key in "[a-z_]{1,12}",
            value in ".*",
        ) {
            prop_assume!(!RECOGNIZED_ATTRIBUTES.contains(&key.as_str()));

            let patch = DisplayPatch::sanitize(&json!({ key: value }));
            prop_assert!(patch.is_empty());
        }
    }
}
