// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request dispatch for the Hue bridge REST API.
//!
//! The bridge speaks plain JSON over HTTP. This module separates the three
//! concerns involved in one call:
//!
//! - [`Transport`]: performs the HTTP round-trip (injected by the caller,
//!   [`HttpTransport`] is the `reqwest` implementation)
//! - [`Codec`]: encodes request bodies and decodes response bodies
//!   ([`JsonCodec`] by default)
//! - [`Dispatch`]: the uniform request operation every endpoint funnels
//!   through. [`Dispatcher`] issues real requests, [`CommandGenerator`]
//!   builds bridge-internal [`Command`] descriptors instead.

mod command;
mod dispatcher;
#[cfg(feature = "http")]
mod http;

pub use command::{Command, CommandGenerator};
pub use dispatcher::Dispatcher;
#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpTransport};

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Error, Result, TransportError};

/// HTTP method of a bridge request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// Reads a resource.
    Get,
    /// Modifies a resource.
    Put,
    /// Creates a resource or starts a search.
    Post,
    /// Deletes a resource.
    Delete,
}

impl Method {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request descriptor handed to a [`Transport`].
///
/// The target URL travels separately. `body` is the already encoded JSON
/// text and is `None` for requests without a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method.
    pub method: Method,
    /// The encoded request body, if any.
    pub body: Option<String>,
}

/// A response returned by a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    status: u16,
    body: String,
}

impl TransportResponse {
    /// Creates a new response with the given status and raw body.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Creates a `200 OK` response.
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The HTTP capability used to reach the bridge.
///
/// Implementations perform exactly one round-trip per call. Timeouts and
/// cancellation are the implementation's business. Any failure must be
/// reported as a [`TransportError`], never as a panic.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends `request` to `url` and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the request could not be completed.
    async fn fetch(&self, url: &str, request: Request)
    -> std::result::Result<TransportResponse, TransportError>;
}

impl<T: Transport> Transport for &T {
    async fn fetch(
        &self,
        url: &str,
        request: Request,
    ) -> std::result::Result<TransportResponse, TransportError> {
        (**self).fetch(url, request).await
    }
}

/// The JSON encode/decode capability.
pub trait Codec {
    /// Encodes a request body to JSON text.
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the value cannot be encoded.
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> std::result::Result<String, CodecError>;

    /// Decodes a response body.
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the text is not valid JSON.
    fn decode(&self, text: &str) -> std::result::Result<serde_json::Value, CodecError>;
}

/// The default [`Codec`], backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> std::result::Result<String, CodecError> {
        serde_json::to_string(value).map_err(Into::into)
    }

    fn decode(&self, text: &str) -> std::result::Result<serde_json::Value, CodecError> {
        serde_json::from_str(text).map_err(Into::into)
    }
}

/// The uniform request operation behind every endpoint.
///
/// `Output` is what a settled operation yields: the decoded JSON response for
/// [`Dispatcher`], a [`Command`] descriptor for [`CommandGenerator`].
#[allow(async_fn_in_trait)]
pub trait Dispatch {
    /// The value an operation resolves to.
    type Output;

    /// Performs one operation against `url`.
    ///
    /// `body` is `None` for operations without a payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the body cannot be encoded,
    /// [`Error::Transport`] if the call fails and
    /// [`Error::Deserialization`] if the response cannot be decoded.
    async fn dispatch<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<Self::Output>;
}

/// The "no body" value for operations without a payload.
pub const NO_BODY: Option<&()> = None;

/// Decodes an opaque response value into a typed schema.
///
/// # Errors
///
/// Returns [`Error::Deserialization`] if the value does not match `T`.
///
/// # Examples
///
/// ```
/// use hue_lib::protocol::decode;
/// use hue_lib::types::BridgeAddress;
///
/// let value = serde_json::json!([{"id": "001788fffe100491", "internalipaddress": "192.168.1.100"}]);
/// let bridges: Vec<BridgeAddress> = decode(value).unwrap();
/// assert_eq!(bridges[0].internal_ip_address, "192.168.1.100");
/// ```
pub fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| Error::Deserialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_wire_names() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Put.as_str(), "PUT");
        assert_eq!(
            serde_json::to_value(Method::Delete).unwrap(),
            serde_json::json!("DELETE")
        );
    }

    #[test]
    fn transport_response_success_range() {
        assert!(TransportResponse::ok("{}").is_success());
        assert!(TransportResponse::new(204, "").is_success());
        assert!(!TransportResponse::new(302, "").is_success());
        assert!(!TransportResponse::new(500, "").is_success());
    }

    #[test]
    fn json_codec_encode() {
        let text = JsonCodec.encode(&serde_json::json!({"on": true})).unwrap();
        assert_eq!(text, r#"{"on":true}"#);
    }

    #[test]
    fn json_codec_decode_malformed() {
        assert!(JsonCodec.decode("{").is_err());
    }

    #[test]
    fn decode_mismatch_is_deserialization_error() {
        let err = decode::<Vec<String>>(serde_json::json!({"a": 1})).unwrap_err();
        assert!(matches!(err, Error::Deserialization(_)));
    }
}
