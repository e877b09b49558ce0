// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `reqwest`-backed transport.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::error::TransportError;
use crate::protocol::{Method, Request, Transport, TransportResponse};

// ============================================================================
// HttpConfig - Configuration for the HTTP transport
// ============================================================================

/// Configuration for the HTTP transport.
///
/// The bridge API is stateless: each operation is an independent request.
///
/// # Examples
///
/// ```
/// use hue_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new()
///     .with_timeout(Duration::from_secs(5))
///     .with_user_agent("my-hue-app/1.0");
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    timeout: Duration,
    user_agent: Option<String>,
    headers: Vec<(String, String)>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout: Self::DEFAULT_TIMEOUT,
            user_agent: None,
            headers: Vec::new(),
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Adds a header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent if set.
    #[must_use]
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Returns the extra headers.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Creates an `HttpTransport` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if a header is invalid or the HTTP client cannot be
    /// created.
    pub fn into_transport(self) -> Result<HttpTransport, TransportError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| TransportError::Failed(format!("invalid header name {name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| TransportError::Failed(format!("invalid header value: {e}")))?;
            headers.insert(name, value);
        }

        let mut builder = Client::builder()
            .timeout(self.timeout)
            .default_headers(headers);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder.build().map_err(TransportError::Http)?;
        Ok(HttpTransport { client })
    }
}

// ============================================================================
// HttpTransport
// ============================================================================

/// HTTP transport for reaching the bridge and the discovery endpoint.
///
/// Status codes are reported as-is: classifying non-2xx responses is left to
/// the [`Dispatcher`](crate::protocol::Dispatcher).
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, TransportError> {
        HttpConfig::new().into_transport()
    }

    /// Wraps an existing `reqwest` client.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Put => Self::PUT,
            Method::Post => Self::POST,
            Method::Delete => Self::DELETE,
        }
    }
}

impl Transport for HttpTransport {
    async fn fetch(&self, url: &str, request: Request) -> Result<TransportResponse, TransportError> {
        tracing::debug!(method = %request.method, url = %url, "Sending HTTP request");

        let mut builder = self.client.request(request.method.into(), url);
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder.send().await.map_err(TransportError::Http)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(TransportError::Http)?;

        tracing::debug!(status, body = %body, "Received HTTP response");

        Ok(TransportResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_config_default_values() {
        let config = HttpConfig::new();
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.user_agent().is_none());
        assert!(config.headers().is_empty());
    }

    #[test]
    fn http_config_builder_chain() {
        let config = HttpConfig::new()
            .with_timeout(Duration::from_secs(3))
            .with_user_agent("hue-test")
            .with_header("x-trace", "1");

        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(config.user_agent(), Some("hue-test"));
        assert_eq!(config.headers(), &[("x-trace".to_string(), "1".to_string())]);
    }

    #[test]
    fn http_config_into_transport() {
        assert!(HttpConfig::new().with_user_agent("hue-test").into_transport().is_ok());
    }

    #[test]
    fn http_config_rejects_invalid_header() {
        let result = HttpConfig::new().with_header("bad header", "v").into_transport();
        assert!(matches!(result, Err(TransportError::Failed(_))));
    }

    #[test]
    fn method_into_reqwest() {
        assert_eq!(reqwest::Method::from(Method::Put), reqwest::Method::PUT);
        assert_eq!(reqwest::Method::from(Method::Delete), reqwest::Method::DELETE);
    }
}
