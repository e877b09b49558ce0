// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `hue_lib` - An async client for the Philips Hue bridge REST API.
//!
//! The library mirrors the bridge API as a chain of facades:
//!
//! - [`Hue`]: the root, holding the injected transport and codec. Discovers
//!   bridges on the local network.
//! - [`Bridge`]: one bridge, addressed by IP or host name. Registers users.
//! - [`User`]: one authenticated user. Exposes every resource operation
//!   (lights, groups, schedules, scenes, sensors, rules, resource links,
//!   configuration).
//!
//! Operations take any `serde::Serialize` body and return the bridge reply
//! as a `serde_json::Value`, unmodified. Typed bodies and reply schemas live
//! in [`types`].
//!
//! # Supported Features
//!
//! - **Discovery**: Cloud lookup of the bridges on the caller's network
//! - **Pairing**: User creation and removal
//! - **Resources**: Full CRUD on every bridge collection
//! - **Commands**: Schedule commands and rule actions built with the same
//!   operations used for requests
//!
//! # Quick Start
//!
//! ```no_run
//! use hue_lib::Hue;
//! use hue_lib::types::{ColorTemperature, LightState};
//!
//! #[tokio::main]
//! async fn main() -> hue_lib::Result<()> {
//!     let hue = Hue::http()?;
//!     let user = hue.bridge("192.168.1.100").user("83b7780291a6ceffbe0bd049104df");
//!
//!     let lights = user.get_lights().await?;
//!     println!("{lights:#}");
//!
//!     let state = LightState::new().on().color_temperature(ColorTemperature::WARM);
//!     user.set_group_state(0, &state).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Scheduling a command
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use hue_lib::Hue;
//! use hue_lib::types::{LightState, ScheduleTime};
//!
//! # async fn example() -> hue_lib::Result<()> {
//! let user = Hue::http()?.bridge("192.168.1.100").user("83b7780291a6ceffbe0bd049104df");
//!
//! let command = user
//!     .schedule_command_generator()
//!     .set_light_state(1, &LightState::new().off())
//!     .await?;
//!
//! user.create_schedule(&serde_json::json!({
//!     "name": "Lights out",
//!     "command": command,
//!     "localtime": ScheduleTime::timer(Duration::from_secs(15 * 60)),
//! }))
//! .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom transport
//!
//! Any [`protocol::Transport`] can replace the default `reqwest` one, which
//! is how the library is tested without a bridge. Disable the default `http`
//! feature to drop the `reqwest` dependency.

mod bridge;
pub mod endpoint;
pub mod error;
mod hue;
pub mod path;
pub mod protocol;
pub mod types;
mod user;

pub use bridge::Bridge;
pub use error::{CodecError, Error, ErrorKind, Result, TransportError, ValueError};
pub use hue::{BRIDGE_URL_TEMPLATE, DISCOVERY_URL, Hue};
#[cfg(feature = "http")]
pub use protocol::HttpConfig;
pub use protocol::{Command, decode};
pub use user::User;
