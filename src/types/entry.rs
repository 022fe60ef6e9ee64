// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ordered key/value pair used for config vars and attributes.

/// A single `key`/`value` member of a discovery or attributes payload.
///
/// # Examples
///
/// ```
/// use ha_mqtt_device::types::Entry;
///
/// let dev = Entry::new("dev", r#"{"ids":"abc"}"#);
/// assert!(dev.is_raw_object());
///
/// let name = Entry::new("name", "Kitchen Light");
/// assert!(!name.is_raw_object());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    /// Member name.
    pub key: String,
    /// Member value, as text.
    pub value: String,
}

impl Entry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns whether the value is a pre-serialized JSON object.
    ///
    /// Only the first character is inspected.
    #[must_use]
    pub fn is_raw_object(&self) -> bool {
        self.value.starts_with('{')
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Entry {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_object_detection_uses_first_char() {
        assert!(Entry::new("k", "{}").is_raw_object());
        assert!(!Entry::new("k", " {}").is_raw_object());
        assert!(!Entry::new("k", "").is_raw_object());
        assert!(!Entry::new("k", "[1,2]").is_raw_object());
    }

    #[test]
    fn from_tuple() {
        let entry: Entry = ("name", "Desk Fan").into();
        assert_eq!(entry, Entry::new("name", "Desk Fan"));
    }
}
