// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Home Assistant component categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// The Home Assistant component a device is advertised as.
///
/// The string form is the component segment of the discovery topic
/// (`<prefix>/<component>/<identifier>`).
///
/// # Examples
///
/// ```
/// use ha_mqtt_device::DeviceType;
///
/// assert_eq!(DeviceType::AlarmControlPanel.as_str(), "alarm_control_panel");
/// assert_eq!(DeviceType::Light.to_string(), "light");
///
/// let parsed: DeviceType = "binary_sensor".parse().unwrap();
/// assert_eq!(parsed, DeviceType::BinarySensor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    /// Alarm control panel.
    AlarmControlPanel,
    /// Binary (on/off) sensor.
    BinarySensor,
    /// Camera.
    Camera,
    /// Cover (blinds, garage door, ...).
    Cover,
    /// Fan.
    Fan,
    /// Light.
    Light,
    /// Lock.
    Lock,
    /// Generic sensor.
    Sensor,
    /// Switch.
    Switch,
    /// Climate / HVAC.
    Climate,
    /// Vacuum cleaner.
    Vacuum,
}

impl DeviceType {
    /// Every device type, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::AlarmControlPanel,
        Self::BinarySensor,
        Self::Camera,
        Self::Cover,
        Self::Fan,
        Self::Light,
        Self::Lock,
        Self::Sensor,
        Self::Switch,
        Self::Climate,
        Self::Vacuum,
    ];

    /// Returns the component name used in discovery topics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AlarmControlPanel => "alarm_control_panel",
            Self::BinarySensor => "binary_sensor",
            Self::Camera => "camera",
            Self::Cover => "cover",
            Self::Fan => "fan",
            Self::Light => "light",
            Self::Lock => "lock",
            Self::Sensor => "sensor",
            Self::Switch => "switch",
            Self::Climate => "climate",
            Self::Vacuum => "vacuum",
        }
    }

    /// Returns whether Home Assistant needs a command topic for this component.
    #[must_use]
    pub const fn requires_command_topic(&self) -> bool {
        matches!(
            self,
            Self::AlarmControlPanel | Self::Fan | Self::Light | Self::Lock | Self::Switch
        )
    }

    /// Returns whether Home Assistant needs a state topic for this component.
    #[must_use]
    pub const fn requires_state_topic(&self) -> bool {
        matches!(
            self,
            Self::AlarmControlPanel
                | Self::BinarySensor
                | Self::Fan
                | Self::Light
                | Self::Lock
                | Self::Sensor
                | Self::Switch
        )
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == lower)
            .ok_or_else(|| ValueError::UnknownDeviceType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_table() {
        let names: Vec<&str> = DeviceType::ALL.iter().map(DeviceType::as_str).collect();
        assert_eq!(
            names,
            [
                "alarm_control_panel",
                "binary_sensor",
                "camera",
                "cover",
                "fan",
                "light",
                "lock",
                "sensor",
                "switch",
                "climate",
                "vacuum",
            ]
        );
    }

    #[test]
    fn display_matches_as_str() {
        for ty in DeviceType::ALL {
            assert_eq!(ty.to_string(), ty.as_str());
        }
    }

    #[test]
    fn parse_every_type() {
        for ty in DeviceType::ALL {
            assert_eq!(ty.as_str().parse::<DeviceType>(), Ok(ty));
        }
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("LIGHT".parse::<DeviceType>(), Ok(DeviceType::Light));
        assert_eq!(" Binary_Sensor ".parse::<DeviceType>(), Ok(DeviceType::BinarySensor));
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "toaster".parse::<DeviceType>(),
            Err(ValueError::UnknownDeviceType("toaster".to_string()))
        );
    }

    #[test]
    fn command_topic_requirements() {
        let with_cmd: Vec<DeviceType> = DeviceType::ALL
            .into_iter()
            .filter(DeviceType::requires_command_topic)
            .collect();
        assert_eq!(
            with_cmd,
            [
                DeviceType::AlarmControlPanel,
                DeviceType::Fan,
                DeviceType::Light,
                DeviceType::Lock,
                DeviceType::Switch,
            ]
        );
    }

    #[test]
    fn state_topic_requirements() {
        let without_state: Vec<DeviceType> = DeviceType::ALL
            .into_iter()
            .filter(|ty| !ty.requires_state_topic())
            .collect();
        assert_eq!(
            without_state,
            [
                DeviceType::Camera,
                DeviceType::Cover,
                DeviceType::Climate,
                DeviceType::Vacuum,
            ]
        );
    }

    #[test]
    fn serde_uses_component_names() {
        let json = serde_json::to_string(&DeviceType::AlarmControlPanel).unwrap();
        assert_eq!(json, "\"alarm_control_panel\"");
        let ty: DeviceType = serde_json::from_str("\"vacuum\"").unwrap();
        assert_eq!(ty, DeviceType::Vacuum);
    }
}
