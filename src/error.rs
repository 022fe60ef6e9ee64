// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `ha_mqtt_device` library.
//!
//! Building a device and serializing its payloads never fails. Errors only
//! come from the opt-in validating constructors, from parsing device type
//! names, and from loading a [`DiscoveryConfig`](crate::DiscoveryConfig).

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while parsing input.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The device display name is empty.
    #[error("device name must not be empty")]
    EmptyName,

    /// The discovery topic prefix is empty.
    #[error("discovery prefix must not be empty")]
    EmptyPrefix,

    /// A string did not name any known device type.
    #[error("unknown device type: {0}")]
    UnknownDeviceType(String),
}

/// Errors related to parsing configuration input.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        assert_eq!(
            ValueError::EmptyPrefix.to_string(),
            "discovery prefix must not be empty"
        );
        assert_eq!(
            ValueError::UnknownDeviceType("toaster".to_string()).to_string(),
            "unknown device type: toaster"
        );
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::EmptyName.into();
        assert!(matches!(err, Error::Value(ValueError::EmptyName)));
        assert_eq!(err.to_string(), "value error: device name must not be empty");
    }

    #[test]
    fn error_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = ParseError::from(json_err).into();
        assert!(matches!(err, Error::Parse(ParseError::Json(_))));
        assert!(err.to_string().starts_with("parse error: JSON parse error:"));
    }
}
