// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Discovery configuration shared by all devices of an application.

use serde::Deserialize;

use crate::error::{ParseError, Result, ValueError};

/// Discovery prefix Home Assistant listens on out of the box.
pub const DEFAULT_PREFIX: &str = "homeassistant";

/// Settings applied when building devices with
/// [`HaMqttDevice::from_config`](crate::HaMqttDevice::from_config).
///
/// # Examples
///
/// ```
/// use ha_mqtt_device::DiscoveryConfig;
///
/// let config = DiscoveryConfig::new()
///     .with_prefix("home")
///     .with_availability();
///
/// assert_eq!(config.prefix(), "home");
/// assert!(config.availability());
///
/// let loaded = DiscoveryConfig::from_json(r#"{"attributes": true}"#).unwrap();
/// assert_eq!(loaded.prefix(), "homeassistant");
/// assert!(loaded.attributes());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// Topic prefix (default: `homeassistant`).
    prefix: Option<String>,
    /// Register an availability topic on every device.
    availability: bool,
    /// Register a JSON attributes topic on every device.
    attributes: bool,
}

impl DiscoveryConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from JSON text.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] for malformed JSON or unknown fields, and
    /// [`ValueError::EmptyPrefix`] if `prefix` is present but empty.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).map_err(ParseError::Json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the discovery topic prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Enables the availability topic on built devices.
    #[must_use]
    pub fn with_availability(mut self) -> Self {
        self.availability = true;
        self
    }

    /// Enables the JSON attributes topic on built devices.
    #[must_use]
    pub fn with_attributes(mut self) -> Self {
        self.attributes = true;
        self
    }

    /// Returns the discovery topic prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or(DEFAULT_PREFIX)
    }

    /// Returns whether devices get an availability topic.
    #[must_use]
    pub fn availability(&self) -> bool {
        self.availability
    }

    /// Returns whether devices get a JSON attributes topic.
    #[must_use]
    pub fn attributes(&self) -> bool {
        self.attributes
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::EmptyPrefix`] if the prefix was set to an empty
    /// string.
    pub fn validate(&self) -> Result<()> {
        if self.prefix().is_empty() {
            return Err(ValueError::EmptyPrefix.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn defaults() {
        let config = DiscoveryConfig::default();
        assert_eq!(config.prefix(), "homeassistant");
        assert!(!config.availability());
        assert!(!config.attributes());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_chained() {
        let config = DiscoveryConfig::new()
            .with_prefix("ha")
            .with_availability()
            .with_attributes();
        assert_eq!(config.prefix(), "ha");
        assert!(config.availability());
        assert!(config.attributes());
    }

    #[test]
    fn empty_prefix_is_rejected() {
        let config = DiscoveryConfig::new().with_prefix("");
        assert!(matches!(
            config.validate(),
            Err(Error::Value(ValueError::EmptyPrefix))
        ));
    }

    #[test]
    fn from_json_full() {
        let config = DiscoveryConfig::from_json(
            r#"{"prefix": "smarthome", "availability": true, "attributes": false}"#,
        )
        .unwrap();
        assert_eq!(config.prefix(), "smarthome");
        assert!(config.availability());
        assert!(!config.attributes());
    }

    #[test]
    fn from_json_empty_object_uses_defaults() {
        let config = DiscoveryConfig::from_json("{}").unwrap();
        assert_eq!(config, DiscoveryConfig::default());
    }

    #[test]
    fn from_json_rejects_unknown_fields() {
        let err = DiscoveryConfig::from_json(r#"{"prefx": "typo"}"#).unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::Json(_))));
    }

    #[test]
    fn from_json_rejects_empty_prefix() {
        let err = DiscoveryConfig::from_json(r#"{"prefix": ""}"#).unwrap_err();
        assert!(matches!(err, Error::Value(ValueError::EmptyPrefix)));
    }
}
