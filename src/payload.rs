// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON object text for discovery and attributes payloads.
//!
//! Entries are written as members of a flat JSON object, in insertion order.
//! Duplicate keys are written as-is; Home Assistant keeps the last one.

use std::fmt::Write as _;

use crate::types::Entry;

/// How entry values are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueMode {
    /// Values starting with `{` are spliced in unquoted as nested objects.
    DetectRawObjects,
    /// Every value is written as a JSON string.
    AlwaysQuote,
}

/// Writes `entries` as a JSON object.
///
/// An empty slice yields `{}`.
///
/// # Examples
///
/// ```
/// use ha_mqtt_device::payload::{write_object, ValueMode};
/// use ha_mqtt_device::types::Entry;
///
/// let entries = [
///     Entry::new("name", "Desk"),
///     Entry::new("dev", r#"{"ids":"abc"}"#),
/// ];
///
/// assert_eq!(
///     write_object(&entries, ValueMode::DetectRawObjects),
///     r#"{"name":"Desk","dev":{"ids":"abc"}}"#
/// );
/// assert_eq!(
///     write_object(&entries, ValueMode::AlwaysQuote),
///     r#"{"name":"Desk","dev":"{\"ids\":\"abc\"}"}"#
/// );
/// ```
#[must_use]
pub fn write_object(entries: &[Entry], mode: ValueMode) -> String {
    let mut out = String::from("{");

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_json_string(&mut out, &entry.key);
        out.push(':');

        if mode == ValueMode::DetectRawObjects && entry.is_raw_object() {
            out.push_str(&entry.value);
        } else {
            push_json_string(&mut out, &entry.value);
        }
    }

    out.push('}');
    out
}

/// Appends `s` as a quoted, escaped JSON string literal.
fn push_json_string(out: &mut String, s: &str) {
    match serde_json::to_string(s) {
        Ok(quoted) => out.push_str(&quoted),
        // Serializing a str cannot fail; keep the plain quoted form regardless.
        Err(_) => {
            let _ = write!(out, "\"{s}\"");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, &str)]) -> Vec<Entry> {
        pairs.iter().map(|&(k, v)| Entry::new(k, v)).collect()
    }

    #[test]
    fn empty_is_empty_object() {
        assert_eq!(write_object(&[], ValueMode::DetectRawObjects), "{}");
        assert_eq!(write_object(&[], ValueMode::AlwaysQuote), "{}");
    }

    #[test]
    fn single_member_has_no_comma() {
        let e = entries(&[("a", "1")]);
        assert_eq!(write_object(&e, ValueMode::AlwaysQuote), r#"{"a":"1"}"#);
    }

    #[test]
    fn keeps_insertion_order_and_duplicates() {
        let e = entries(&[("z", "1"), ("a", "2"), ("z", "3")]);
        assert_eq!(
            write_object(&e, ValueMode::AlwaysQuote),
            r#"{"z":"1","a":"2","z":"3"}"#
        );
    }

    #[test]
    fn raw_objects_only_in_detect_mode() {
        let e = entries(&[("dev", r#"{"ids":"abc"}"#)]);
        assert_eq!(
            write_object(&e, ValueMode::DetectRawObjects),
            r#"{"dev":{"ids":"abc"}}"#
        );
        assert_eq!(
            write_object(&e, ValueMode::AlwaysQuote),
            r#"{"dev":"{\"ids\":\"abc\"}"}"#
        );
    }

    #[test]
    fn escapes_quotes_and_backslashes() {
        let e = entries(&[("label", r#"6" pipe \ drain"#)]);
        let text = write_object(&e, ValueMode::DetectRawObjects);
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["label"], r#"6" pipe \ drain"#);
    }

    #[test]
    fn empty_value_is_quoted() {
        let e = entries(&[("unit", "")]);
        assert_eq!(write_object(&e, ValueMode::DetectRawObjects), r#"{"unit":""}"#);
    }
}
