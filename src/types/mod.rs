// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed bridge schemas.
//!
//! Every operation accepts any serializable body and returns the raw JSON
//! reply. The types here cover the common cases so callers do not have to
//! assemble bodies by hand, and can decode replies with
//! [`decode`](crate::protocol::decode).
//!
//! # Types
//!
//! - [`LightState`] - Body of light state and group action changes
//! - [`Brightness`] - Brightness level (1-254)
//! - [`ColorHue`] - Hue on the color wheel (0-65535)
//! - [`Saturation`] - Saturation (0-254)
//! - [`ColorTemperature`] - Color temperature in mireds (153-500)
//! - [`ScheduleTime`] - When a schedule fires
//! - [`ApiResponse`] - One success or error element of a bridge reply
//! - [`BridgeAddress`] - A bridge found by discovery

mod discovery;
mod light_state;
mod response;
mod schedule_time;

pub use discovery::BridgeAddress;
pub use light_state::{
    Alert, Brightness, ColorHue, ColorTemperature, Effect, LightState, Saturation, TransitionTime,
    XyColor,
};
pub use response::{ApiError, ApiResponse, Created, NewUser, Whitelisted};
pub use schedule_time::{ScheduleTime, Weekdays};
