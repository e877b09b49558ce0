// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The root of the facade hierarchy.
//!
//! A [`Hue`] owns the dispatcher (and through it the transport and codec)
//! shared by every [`Bridge`] and [`User`](crate::User) derived from it.
//!
//! # Examples
//!
//! ```no_run
//! use hue_lib::Hue;
//!
//! # async fn example() -> hue_lib::Result<()> {
//! let hue = Hue::http()?;
//!
//! for bridge in hue.discover_bridges().await? {
//!     println!("{} at {}", bridge.id, bridge.internal_ip_address);
//! }
//!
//! let user = hue.bridge("192.168.1.100").user("83b7780291a6ceffbe0bd049104df");
//! let lights = user.get_lights().await?;
//! # Ok(())
//! # }
//! ```

use crate::bridge::Bridge;
use crate::endpoint::{Endpoint, fixed};
use crate::error::Result;
use crate::protocol::{Codec, Dispatcher, JsonCodec, Method, NO_BODY, Transport, decode};
use crate::types::BridgeAddress;

#[cfg(feature = "http")]
use crate::protocol::{HttpConfig, HttpTransport};

/// Cloud endpoint listing the bridges registered from the caller's network.
pub const DISCOVERY_URL: &str = "https://www.meethue.com/api/nupnp";

/// Template of a bridge's API root. `{ip}` is replaced by the bridge address.
pub const BRIDGE_URL_TEMPLATE: &str = "http://{ip}/api";

/// Entry point of the client.
///
/// Holds no bridge state. Cloning is cheap and clones share the transport.
#[derive(Debug)]
pub struct Hue<T, C = JsonCodec> {
    dispatcher: Dispatcher<T, C>,
    discovery_url: String,
}

impl<T> Hue<T, JsonCodec> {
    /// Creates a client over `transport` with the default JSON codec.
    #[must_use]
    pub fn with_transport(transport: T) -> Self {
        Self::new(transport, JsonCodec)
    }
}

#[cfg(feature = "http")]
impl Hue<HttpTransport, JsonCodec> {
    /// Creates a client over a default `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if the HTTP client cannot be built.
    pub fn http() -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new()?))
    }

    /// Creates a client over a `reqwest` transport built from `config`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if the HTTP client cannot be built, for
    /// example when a configured header is invalid.
    pub fn from_config(config: HttpConfig) -> Result<Self> {
        Ok(Self::with_transport(config.into_transport()?))
    }
}

impl<T, C> Hue<T, C> {
    /// Creates a client over `transport`, encoding and decoding with `codec`.
    #[must_use]
    pub fn new(transport: T, codec: C) -> Self {
        Self {
            dispatcher: Dispatcher::with_codec(transport, codec),
            discovery_url: DISCOVERY_URL.to_string(),
        }
    }

    /// Overrides the discovery endpoint.
    #[must_use]
    pub fn with_discovery_url(mut self, url: impl Into<String>) -> Self {
        self.discovery_url = url.into();
        self
    }

    /// Returns the discovery endpoint.
    #[must_use]
    pub fn discovery_url(&self) -> &str {
        &self.discovery_url
    }

    /// Returns the dispatcher shared by every derived facade.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher<T, C> {
        &self.dispatcher
    }

    /// Returns the facade of the bridge reachable at `address`.
    ///
    /// `address` is an IP address or host name, optionally with a port.
    /// It is not validated.
    #[must_use]
    pub fn bridge(&self, address: impl Into<String>) -> Bridge<T, C> {
        Bridge::new(self.dispatcher.clone(), address.into())
    }
}

impl<T: Transport, C: Codec> Hue<T, C> {
    /// Lists the bridges registered from the caller's network.
    ///
    /// Returns the discovery reply as decoded, without interpretation.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if the lookup fails, or
    /// `Error::Deserialization` if the reply is not valid JSON.
    pub async fn discover(&self) -> Result<serde_json::Value> {
        Endpoint::new(&self.dispatcher, Method::Get, fixed(self.discovery_url.clone()))
            .invoke((), NO_BODY)
            .await
    }

    /// Same as [`discover`](Self::discover), decoded into [`BridgeAddress`] records.
    ///
    /// # Errors
    ///
    /// As [`discover`](Self::discover). Also returns `Error::Deserialization`
    /// if the reply is not a list of bridge records.
    pub async fn discover_bridges(&self) -> Result<Vec<BridgeAddress>> {
        let bridges: Vec<BridgeAddress> = decode(self.discover().await?)?;
        tracing::debug!(count = bridges.len(), "Discovered bridges");
        Ok(bridges)
    }
}

impl<T, C> Clone for Hue<T, C> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: self.dispatcher.clone(),
            discovery_url: self.discovery_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::protocol::{Request, TransportResponse};

    struct Canned(&'static str);

    impl Transport for Canned {
        async fn fetch(
            &self,
            _url: &str,
            _request: Request,
        ) -> std::result::Result<TransportResponse, TransportError> {
            Ok(TransportResponse::ok(self.0))
        }
    }

    #[test]
    fn default_discovery_url() {
        let hue = Hue::with_transport(Canned("[]"));
        assert_eq!(hue.discovery_url(), DISCOVERY_URL);

        let hue = hue.with_discovery_url("http://localhost/nupnp");
        assert_eq!(hue.discovery_url(), "http://localhost/nupnp");
    }

    #[test]
    fn bridge_url_from_template() {
        let hue = Hue::new(Canned("{}"), JsonCodec);
        assert_eq!(hue.bridge("10.0.0.2").url(), "http://10.0.0.2/api");
        assert_eq!(hue.bridge("10.0.0.2").address(), "10.0.0.2");
    }

    #[test]
    fn clones_share_transport() {
        let hue = Hue::with_transport(Canned("{}"));
        let clone = hue.clone();
        assert!(std::ptr::eq(
            hue.dispatcher().transport(),
            clone.dispatcher().transport()
        ));
    }

    #[tokio::test]
    async fn discover_bridges_decodes_records() {
        let hue = Hue::with_transport(Canned(
            r#"[{"id":"001788fffe100491","internalipaddress":"192.168.2.23"}]"#,
        ));
        let bridges = hue.discover_bridges().await.unwrap();
        assert_eq!(bridges.len(), 1);
        assert_eq!(bridges[0].internal_ip_address, "192.168.2.23");
    }

    #[tokio::test]
    async fn discover_bridges_rejects_unexpected_shape() {
        let hue = Hue::with_transport(Canned(r#"{"id":"x"}"#));
        let err = hue.discover_bridges().await.unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Deserialization);
    }
}
