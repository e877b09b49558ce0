// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The request dispatcher: the single point of contact with the transport.

use std::sync::Arc;

use serde::Serialize;

use crate::error::{Error, Result, TransportError};
use crate::protocol::{Codec, Dispatch, JsonCodec, Method, Request, Transport};

/// Issues bridge requests through an injected [`Transport`] and [`Codec`].
///
/// The dispatcher holds no mutable state. Cloning it only clones the shared
/// handles, so every facade derived from one root shares the same transport.
///
/// # Examples
///
/// ```no_run
/// use hue_lib::protocol::{Dispatch, Dispatcher, HttpTransport, Method, NO_BODY};
///
/// # async fn example() -> hue_lib::Result<()> {
/// let dispatcher = Dispatcher::new(HttpTransport::new()?);
/// let config = dispatcher
///     .dispatch(Method::Get, "http://192.168.1.100/api/config", NO_BODY)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Dispatcher<T, C = JsonCodec> {
    transport: Arc<T>,
    codec: Arc<C>,
}

impl<T> Dispatcher<T, JsonCodec> {
    /// Creates a dispatcher using the default JSON codec.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::with_codec(transport, JsonCodec)
    }
}

impl<T, C> Dispatcher<T, C> {
    /// Creates a dispatcher with an explicit codec.
    #[must_use]
    pub fn with_codec(transport: T, codec: C) -> Self {
        Self {
            transport: Arc::new(transport),
            codec: Arc::new(codec),
        }
    }

    /// Returns the transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the codec.
    #[must_use]
    pub fn codec(&self) -> &C {
        &self.codec
    }
}

impl<T, C> Clone for Dispatcher<T, C> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            codec: Arc::clone(&self.codec),
        }
    }
}

impl<T: Transport, C: Codec> Dispatch for Dispatcher<T, C> {
    type Output = serde_json::Value;

    async fn dispatch<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<serde_json::Value> {
        let body = body
            .map(|value| self.codec.encode(value))
            .transpose()
            .map_err(|e| Error::Serialization(e.to_string()))?;

        tracing::debug!(%method, url = %url, has_body = body.is_some(), "Sending bridge request");

        let response = self.transport.fetch(url, Request { method, body }).await?;

        if !response.is_success() {
            tracing::debug!(status = response.status(), url = %url, "Bridge request failed");
            return Err(TransportError::Status {
                status: response.status(),
                body: response.body().to_string(),
            }
            .into());
        }

        tracing::debug!(status = response.status(), body = %response.body(), "Received bridge response");

        self.codec
            .decode(response.body())
            .map_err(|e| Error::Deserialization(e.to_string()))
    }
}
