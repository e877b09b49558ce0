// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bridge-internal action descriptors.
//!
//! Schedules and rules do not call the bridge from the outside: they store
//! a command (`address`, `method`, `body`) the bridge executes itself later.
//! [`CommandGenerator`] produces those commands through the same endpoint
//! declarations used for real requests, so a schedule's command is built
//! with exactly the call a client would make directly.
//!
//! # Examples
//!
//! ```
//! use hue_lib::protocol::{Command, CommandGenerator, Dispatch, Method};
//!
//! # async fn example() -> hue_lib::Result<()> {
//! let command = CommandGenerator
//!     .dispatch(Method::Put, "/lights/1/state", Some(&serde_json::json!({"on": true})))
//!     .await?;
//! assert_eq!(command.address, "/lights/1/state");
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::protocol::{Dispatch, Method};

/// A command stored in a schedule or used as a rule action.
///
/// The body is kept as a JSON value, since the bridge embeds it verbatim in
/// the schedule or rule object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Bridge-relative address of the target resource.
    pub address: String,
    /// Method the bridge uses when executing the command.
    pub method: Method,
    /// Body the bridge sends, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub body: Option<serde_json::Value>,
}

/// A [`Dispatch`] implementation that builds [`Command`] values.
///
/// No request is ever issued. Operations still resolve through the same
/// `Result` as request-issuing ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandGenerator;

impl Dispatch for CommandGenerator {
    type Output = Command;

    async fn dispatch<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<Command> {
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| Error::Serialization(e.to_string()))?;

        tracing::trace!(%method, address = %url, "Generated bridge command");

        Ok(Command {
            address: url.to_string(),
            method,
            body,
        })
    }
}
