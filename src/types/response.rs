// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bridge reply schemas.
//!
//! Mutating operations answer with a list of elements, one per changed
//! field, each either `{"success": ...}` or `{"error": ...}`. The bridge
//! sends both with HTTP 200, so they reach the caller as successful
//! results. These types let callers inspect them.
//!
//! # Examples
//!
//! ```
//! use hue_lib::protocol::decode;
//! use hue_lib::types::{ApiResponse, Whitelisted};
//!
//! let reply = serde_json::json!([{"success": {"username": "83b7780291a6ceffbe0bd049104df"}}]);
//! let reply: Vec<ApiResponse<Whitelisted>> = decode(reply).unwrap();
//! assert_eq!(
//!     reply[0].success().map(|w| w.username.as_str()),
//!     Some("83b7780291a6ceffbe0bd049104df")
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// One element of a bridge reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiResponse<T> {
    /// The change was applied.
    Success(T),
    /// The change was rejected.
    Error(ApiError),
}

impl<T> ApiResponse<T> {
    /// Returns the success payload, if any.
    #[must_use]
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Returns the error payload, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Success(_) => None,
            Self::Error(err) => Some(err),
        }
    }

    /// Returns whether this element reports success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// An error element reported by the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Bridge error code, e.g. 101 when the link button was not pressed.
    #[serde(rename = "type")]
    pub kind: u16,
    /// Address of the resource the error refers to.
    pub address: String,
    /// Human readable description.
    pub description: String,
}

impl ApiError {
    /// Unauthorized user.
    pub const UNAUTHORIZED_USER: u16 = 1;
    /// Resource not available.
    pub const RESOURCE_NOT_AVAILABLE: u16 = 3;
    /// Link button not pressed.
    pub const LINK_BUTTON_NOT_PRESSED: u16 = 101;
    /// Device is set to off.
    pub const DEVICE_OFF: u16 = 201;
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bridge error {} at {}: {}", self.kind, self.address, self.description)
    }
}

/// Body sent to the bridge to create a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewUser<'a> {
    /// `<application name>#<device name>`
    pub devicetype: &'a str,
}

/// Success payload of a user creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Whitelisted {
    /// The credential issued by the bridge.
    pub username: String,
}

/// Success payload of a resource creation, e.g. a new group or schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Created {
    /// Identifier of the new resource.
    pub id: String,
}
