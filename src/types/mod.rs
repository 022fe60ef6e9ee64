// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Home Assistant discovery.
//!
//! # Types
//!
//! - [`DeviceType`] - Home Assistant component category (light, sensor, ...)
//! - [`Entry`] - Ordered key/value member of a payload

mod device_type;
mod entry;

pub use device_type::DeviceType;
pub use entry::Entry;
