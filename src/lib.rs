// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ha_mqtt_device` - Home Assistant MQTT discovery descriptors.
//!
//! This library builds the topics and JSON payloads a device needs to be
//! picked up by Home Assistant's MQTT auto-discovery. It does not talk to a
//! broker: hand the produced [`DiscoveryMessage`]s to the MQTT client of your
//! choice.
//!
//! # Supported Features
//!
//! - **Topic layout**: `<prefix>/<component>/<identifier>` derived from the
//!   display name
//! - **Discovery payload**: abbreviated keys (`~`, `cmd_t`, `stat_t`,
//!   `json_attr_t`, `avty_t`) plus arbitrary custom config vars, including
//!   nested JSON objects
//! - **Attributes payload**: free-form key/value telemetry, replaceable at any
//!   time
//!
//! # Quick Start
//!
//! ```
//! use ha_mqtt_device::{DeviceType, HaMqttDevice};
//!
//! let mut sensor = HaMqttDevice::new("Outdoor Temp", DeviceType::Sensor, "homeassistant");
//! sensor
//!     .enable_attributes_topic()
//!     .add_config_var("unit_of_meas", "°C");
//!
//! let discovery = sensor.config_message();
//! assert_eq!(discovery.topic, "homeassistant/sensor/outdoor_temp/config");
//!
//! sensor.clear_attributes().add_attribute("battery", "93");
//! let attributes = sensor.attributes_message().unwrap();
//! assert_eq!(attributes.topic, "homeassistant/sensor/outdoor_temp/attr");
//! assert_eq!(attributes.payload, r#"{"battery":"93"}"#);
//! ```
//!
//! ## Shared Configuration
//!
//! ```
//! use ha_mqtt_device::{DeviceType, DiscoveryConfig, HaMqttDevice};
//!
//! let config = DiscoveryConfig::from_json(r#"{"prefix": "home", "availability": true}"#)?;
//! let plug = HaMqttDevice::from_config(&config, "Desk Plug", DeviceType::Switch);
//!
//! assert_eq!(plug.availability_topic().as_deref(), Some("home/switch/desk_plug/availability"));
//! # Ok::<(), ha_mqtt_device::Error>(())
//! ```

mod config;
mod device;
pub mod error;
mod message;
pub mod payload;
pub mod topic;
pub mod types;

pub use config::{DEFAULT_PREFIX, DiscoveryConfig};
pub use device::HaMqttDevice;
pub use error::{Error, ParseError, Result, ValueError};
pub use message::DiscoveryMessage;
pub use types::{DeviceType, Entry};
