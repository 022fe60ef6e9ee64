// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Discovery topic construction.
//!
//! Every device lives under a base topic:
//!
//! ```text
//! <prefix>/<component>/<identifier>
//! homeassistant/light/kitchen_light
//! ```
//!
//! Sub-topics registered in the discovery payload are written relative to the
//! base topic with the `~` abbreviation (`~/state`, `~/cmd`, ...). Home
//! Assistant expands `~` itself; [`expand`] does the same for callers that
//! need the concrete topic to publish or subscribe on.

use crate::types::DeviceType;

/// Abbreviation Home Assistant expands to the base topic.
pub const BASE_TOPIC_KEY: &str = "~";

/// Config key holding the display name.
pub const NAME_KEY: &str = "name";

/// Config key of the command topic.
pub const COMMAND_TOPIC_KEY: &str = "cmd_t";

/// Config key of the state topic.
pub const STATE_TOPIC_KEY: &str = "stat_t";

/// Config key of the JSON attributes topic.
pub const ATTRIBUTES_TOPIC_KEY: &str = "json_attr_t";

/// Config key of the availability topic.
pub const AVAILABILITY_TOPIC_KEY: &str = "avty_t";

/// Default command topic expression.
pub const DEFAULT_COMMAND_TOPIC: &str = "~/cmd";

/// Default state topic expression.
pub const DEFAULT_STATE_TOPIC: &str = "~/state";

/// Default attributes topic expression.
pub const DEFAULT_ATTRIBUTES_TOPIC: &str = "~/attr";

/// Default availability topic expression.
pub const DEFAULT_AVAILABILITY_TOPIC: &str = "~/availability";

/// Suffix of the topic the discovery payload is published to.
pub const CONFIG_SUFFIX: &str = "config";

/// Derives a device identifier from its display name.
///
/// Spaces become underscores and the result is lower-cased.
///
/// # Examples
///
/// ```
/// use ha_mqtt_device::topic::identifier_from_name;
///
/// assert_eq!(identifier_from_name("Kitchen Light"), "kitchen_light");
/// ```
#[must_use]
pub fn identifier_from_name(name: &str) -> String {
    name.replace(' ', "_").to_lowercase()
}

/// Builds the base topic `<prefix>/<component>/<identifier>`.
///
/// # Examples
///
/// ```
/// use ha_mqtt_device::DeviceType;
/// use ha_mqtt_device::topic::base_topic;
///
/// assert_eq!(
///     base_topic("homeassistant", DeviceType::Sensor, "outdoor_temp"),
///     "homeassistant/sensor/outdoor_temp"
/// );
/// ```
#[must_use]
pub fn base_topic(prefix: &str, device_type: DeviceType, identifier: &str) -> String {
    format!("{prefix}/{}/{identifier}", device_type.as_str())
}

/// Expands a leading `~` in `topic` to `base_topic`.
///
/// Topics without the abbreviation are returned unchanged.
///
/// # Examples
///
/// ```
/// use ha_mqtt_device::topic::expand;
///
/// assert_eq!(expand("~/state", "home/light/desk"), "home/light/desk/state");
/// assert_eq!(expand("other/topic", "home/light/desk"), "other/topic");
/// ```
#[must_use]
pub fn expand(topic: &str, base_topic: &str) -> String {
    match topic.strip_prefix(BASE_TOPIC_KEY) {
        Some(rest) => format!("{base_topic}{rest}"),
        None => topic.to_string(),
    }
}
