// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unauthenticated access to one bridge.

use std::collections::HashMap;

use crate::endpoint::{Endpoint, fixed};
use crate::error::Result;
use crate::hue::BRIDGE_URL_TEMPLATE;
use crate::path::{join, substitute};
use crate::protocol::{Codec, Dispatcher, Method, Transport};
use crate::types::NewUser;
use crate::user::User;

/// A bridge, addressed by IP address or host name.
///
/// Created with [`Hue::bridge`](crate::Hue::bridge).
#[derive(Debug)]
pub struct Bridge<T, C> {
    dispatcher: Dispatcher<T, C>,
    address: String,
    url: String,
}

impl<T, C> Bridge<T, C> {
    pub(crate) fn new(dispatcher: Dispatcher<T, C>, address: String) -> Self {
        let url = substitute(
            BRIDGE_URL_TEMPLATE,
            &HashMap::from([("ip", address.as_str())]),
        );
        Self {
            dispatcher,
            address,
            url,
        }
    }

    /// Returns the address this bridge was created with.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the API root, e.g. `http://192.168.1.100/api`.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the facade of the user identified by `username`.
    ///
    /// The credential is not checked until a request is issued.
    #[must_use]
    pub fn user(&self, username: impl Into<String>) -> User<Dispatcher<T, C>> {
        let username = username.into();
        let url = join(&[&self.url, &username]);
        User::new(self.dispatcher.clone(), username, url)
    }
}

impl<T: Transport, C: Codec> Bridge<T, C> {
    /// Registers a new user on the bridge.
    ///
    /// The bridge only accepts the request within 30 seconds after its link
    /// button was pressed. Otherwise it replies with error 101, which is
    /// returned as a successful result like any bridge-level error.
    ///
    /// `device_type` is conventionally `<application name>#<device name>`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if the request fails, or
    /// `Error::Deserialization` if the reply is not valid JSON.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hue_lib::Hue;
    /// use hue_lib::protocol::decode;
    /// use hue_lib::types::{ApiResponse, Whitelisted};
    ///
    /// # async fn example() -> hue_lib::Result<()> {
    /// let bridge = Hue::http()?.bridge("192.168.1.100");
    /// let reply: Vec<ApiResponse<Whitelisted>> =
    ///     decode(bridge.create_user("my_hue_app#kitchen").await?)?;
    ///
    /// match reply.first().and_then(ApiResponse::success) {
    ///     Some(whitelisted) => println!("username: {}", whitelisted.username),
    ///     None => println!("press the link button and retry"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_user(&self, device_type: &str) -> Result<serde_json::Value> {
        let body = NewUser {
            devicetype: device_type,
        };
        Endpoint::new(&self.dispatcher, Method::Post, fixed(self.url.clone()))
            .invoke((), Some(&body))
            .await
    }
}

impl<T, C> Clone for Bridge<T, C> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: self.dispatcher.clone(),
            address: self.address.clone(),
            url: self.url.clone(),
        }
    }
}
