// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Home Assistant device descriptor.
//!
//! A [`HaMqttDevice`] holds everything Home Assistant needs to auto-configure
//! one entity: the base topic, the discovery config vars, and the current
//! attributes.
//!
//! # Lifecycle
//!
//! 1. Construct once per device with a name, a [`DeviceType`] and a prefix.
//! 2. Refine the config with the `enable_*` and [`add_config_var`] calls.
//! 3. Publish [`config_payload`] to [`config_topic`] once.
//! 4. Whenever attributes change, [`clear_attributes`], add the new ones and
//!    publish [`attributes_payload`].
//!
//! [`add_config_var`]: HaMqttDevice::add_config_var
//! [`config_payload`]: HaMqttDevice::config_payload
//! [`config_topic`]: HaMqttDevice::config_topic
//! [`clear_attributes`]: HaMqttDevice::clear_attributes
//! [`attributes_payload`]: HaMqttDevice::attributes_payload

use crate::config::DiscoveryConfig;
use crate::error::{Result, ValueError};
use crate::message::DiscoveryMessage;
use crate::payload::{ValueMode, write_object};
use crate::topic::{
    self, ATTRIBUTES_TOPIC_KEY, AVAILABILITY_TOPIC_KEY, BASE_TOPIC_KEY, COMMAND_TOPIC_KEY,
    CONFIG_SUFFIX, DEFAULT_ATTRIBUTES_TOPIC, DEFAULT_AVAILABILITY_TOPIC, DEFAULT_COMMAND_TOPIC,
    DEFAULT_STATE_TOPIC, NAME_KEY, STATE_TOPIC_KEY,
};
use crate::types::{DeviceType, Entry};

/// Discovery description of a single Home Assistant device.
///
/// Mutating methods return `&mut Self` so configuration calls can be chained.
/// Topic-enabling methods register their key at most once per device; later
/// calls for the same key leave the first value in place.
///
/// # Examples
///
/// ```
/// use ha_mqtt_device::{DeviceType, HaMqttDevice};
///
/// let mut light = HaMqttDevice::new("Kitchen Light", DeviceType::Light, "homeassistant");
/// light
///     .enable_attributes_topic()
///     .add_config_var("dev", r#"{"ids":"kitchen-01"}"#);
///
/// assert_eq!(light.identifier(), "kitchen_light");
/// assert_eq!(light.base_topic(), "homeassistant/light/kitchen_light");
/// assert_eq!(
///     light.config_payload(),
///     concat!(
///         r#"{"~":"homeassistant/light/kitchen_light","name":"Kitchen Light","#,
///         r#""cmd_t":"~/cmd","stat_t":"~/state","json_attr_t":"~/attr","#,
///         r#""dev":{"ids":"kitchen-01"}}"#,
///     )
/// );
///
/// light.add_attribute("rssi", "-61");
/// assert_eq!(light.attributes_payload(), r#"{"rssi":"-61"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HaMqttDevice {
    name: String,
    device_type: DeviceType,
    identifier: String,
    base_topic: String,
    config_vars: Vec<Entry>,
    attributes: Vec<Entry>,
}

impl HaMqttDevice {
    /// Creates a device under `prefix`.
    ///
    /// The command and state topics are registered automatically for device
    /// types that require them. An empty `name` or `prefix` is accepted and
    /// produces a degenerate topic; use [`try_new`](Self::try_new) to reject
    /// them instead.
    #[must_use]
    pub fn new(name: impl Into<String>, device_type: DeviceType, prefix: &str) -> Self {
        let name = name.into();

        if name.is_empty() {
            tracing::warn!(device_type = %device_type, "Creating device with an empty name");
        }
        if prefix.is_empty() {
            tracing::warn!(name = %name, "Creating device with an empty discovery prefix");
        }

        let identifier = topic::identifier_from_name(&name);
        let base_topic = topic::base_topic(prefix, device_type, &identifier);

        let mut device = Self {
            config_vars: vec![
                Entry::new(BASE_TOPIC_KEY, base_topic.clone()),
                Entry::new(NAME_KEY, name.clone()),
            ],
            attributes: Vec::new(),
            name,
            device_type,
            identifier,
            base_topic,
        };

        if device_type.requires_command_topic() {
            device.enable_command_topic();
        }
        if device_type.requires_state_topic() {
            device.enable_state_topic();
        }

        tracing::debug!(
            topic = %device.base_topic,
            device_type = %device_type,
            "Created device"
        );

        device
    }

    /// Creates a device, rejecting an empty name or prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::EmptyName`] or [`ValueError::EmptyPrefix`].
    pub fn try_new(name: impl Into<String>, device_type: DeviceType, prefix: &str) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValueError::EmptyName.into());
        }
        if prefix.is_empty() {
            return Err(ValueError::EmptyPrefix.into());
        }
        Ok(Self::new(name, device_type, prefix))
    }

    /// Creates a device using the prefix and optional topics of `config`.
    #[must_use]
    pub fn from_config(
        config: &DiscoveryConfig,
        name: impl Into<String>,
        device_type: DeviceType,
    ) -> Self {
        let mut device = Self::new(name, device_type, config.prefix());
        if config.availability() {
            device.enable_availability_topic();
        }
        if config.attributes() {
            device.enable_attributes_topic();
        }
        device
    }

    /// Registers the command topic `~/cmd`.
    pub fn enable_command_topic(&mut self) -> &mut Self {
        self.enable_topic(COMMAND_TOPIC_KEY, DEFAULT_COMMAND_TOPIC)
    }

    /// Registers the state topic `~/state`.
    pub fn enable_state_topic(&mut self) -> &mut Self {
        self.enable_topic(STATE_TOPIC_KEY, DEFAULT_STATE_TOPIC)
    }

    /// Registers the state topic with a custom topic expression.
    pub fn enable_state_topic_with(&mut self, topic: impl Into<String>) -> &mut Self {
        self.enable_topic(STATE_TOPIC_KEY, topic)
    }

    /// Registers the JSON attributes topic `~/attr`.
    pub fn enable_attributes_topic(&mut self) -> &mut Self {
        self.enable_topic(ATTRIBUTES_TOPIC_KEY, DEFAULT_ATTRIBUTES_TOPIC)
    }

    /// Registers the JSON attributes topic with a custom topic expression.
    pub fn enable_attributes_topic_with(&mut self, topic: impl Into<String>) -> &mut Self {
        self.enable_topic(ATTRIBUTES_TOPIC_KEY, topic)
    }

    /// Registers the availability topic `~/availability`.
    pub fn enable_availability_topic(&mut self) -> &mut Self {
        self.enable_topic(AVAILABILITY_TOPIC_KEY, DEFAULT_AVAILABILITY_TOPIC)
    }

    /// Registers the availability topic with a custom topic expression.
    pub fn enable_availability_topic_with(&mut self, topic: impl Into<String>) -> &mut Self {
        self.enable_topic(AVAILABILITY_TOPIC_KEY, topic)
    }

    fn enable_topic(&mut self, key: &str, topic: impl Into<String>) -> &mut Self {
        if self.has_config_key(key) {
            tracing::trace!(device = %self.identifier, key, "Topic already enabled");
            return self;
        }
        self.add_config_var(key, topic)
    }

    /// Appends a config var without any duplicate check.
    ///
    /// A value starting with `{` is embedded in the config payload as a
    /// nested JSON object.
    pub fn add_config_var(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.config_vars.push(Entry::new(key, value));
        self
    }

    /// Appends an attribute.
    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.push(Entry::new(key, value));
        self
    }

    /// Removes all attributes.
    pub fn clear_attributes(&mut self) -> &mut Self {
        tracing::trace!(
            device = %self.identifier,
            count = self.attributes.len(),
            "Clearing attributes"
        );
        self.attributes.clear();
        self
    }

    /// Returns whether a config var with `key` is registered.
    #[must_use]
    pub fn has_config_key(&self, key: &str) -> bool {
        self.config_vars.iter().any(|entry| entry.key == key)
    }

    /// Returns the discovery payload.
    ///
    /// Config vars whose value starts with `{` are embedded unquoted.
    #[must_use]
    pub fn config_payload(&self) -> String {
        write_object(&self.config_vars, ValueMode::DetectRawObjects)
    }

    /// Returns the attributes payload. Every value is quoted.
    #[must_use]
    pub fn attributes_payload(&self) -> String {
        write_object(&self.attributes, ValueMode::AlwaysQuote)
    }

    /// Returns the discovery message for [`config_topic`](Self::config_topic).
    ///
    /// Discovery messages are retained so Home Assistant picks the device up
    /// after a restart.
    #[must_use]
    pub fn config_message(&self) -> DiscoveryMessage {
        DiscoveryMessage::new(self.config_topic(), self.config_payload(), true)
    }

    /// Returns the attributes message, or `None` if no attributes topic is
    /// registered.
    #[must_use]
    pub fn attributes_message(&self) -> Option<DiscoveryMessage> {
        self.attributes_topic()
            .map(|topic| DiscoveryMessage::new(topic, self.attributes_payload(), false))
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the device type.
    #[must_use]
    pub const fn device_type(&self) -> DeviceType {
        self.device_type
    }

    /// Returns the identifier derived from the name.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the base topic `<prefix>/<component>/<identifier>`.
    #[must_use]
    pub fn base_topic(&self) -> &str {
        &self.base_topic
    }

    /// Returns the config vars in insertion order.
    #[must_use]
    pub fn config_vars(&self) -> &[Entry] {
        &self.config_vars
    }

    /// Returns the attributes in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[Entry] {
        &self.attributes
    }

    /// Returns the topic the discovery payload is published to.
    #[must_use]
    pub fn config_topic(&self) -> String {
        format!("{}/{CONFIG_SUFFIX}", self.base_topic)
    }

    /// Returns the expanded command topic, if registered.
    #[must_use]
    pub fn command_topic(&self) -> Option<String> {
        self.registered_topic(COMMAND_TOPIC_KEY)
    }

    /// Returns the expanded state topic, if registered.
    #[must_use]
    pub fn state_topic(&self) -> Option<String> {
        self.registered_topic(STATE_TOPIC_KEY)
    }

    /// Returns the expanded JSON attributes topic, if registered.
    #[must_use]
    pub fn attributes_topic(&self) -> Option<String> {
        self.registered_topic(ATTRIBUTES_TOPIC_KEY)
    }

    /// Returns the expanded availability topic, if registered.
    #[must_use]
    pub fn availability_topic(&self) -> Option<String> {
        self.registered_topic(AVAILABILITY_TOPIC_KEY)
    }

    // First registration wins, matching what enable_topic keeps.
    fn registered_topic(&self, key: &str) -> Option<String> {
        self.config_vars
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| topic::expand(&entry.value, &self.base_topic))
    }
}
