// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ready-to-publish topic/payload pairs.

/// A message for an external MQTT client to publish.
///
/// The library never publishes anything itself; hand these to whatever client
/// the application uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryMessage {
    /// Fully expanded topic.
    pub topic: String,
    /// JSON payload text.
    pub payload: String,
    /// Whether the broker should retain the message.
    pub retain: bool,
}

impl DiscoveryMessage {
    /// Creates a new message.
    #[must_use]
    pub fn new(topic: impl Into<String>, payload: impl Into<String>, retain: bool) -> Self {
        Self {
            topic: topic.into(),
            payload: payload.into(),
            retain,
        }
    }

    /// Returns the payload as bytes.
    #[must_use]
    pub fn payload_bytes(&self) -> &[u8] {
        self.payload.as_bytes()
    }
}
