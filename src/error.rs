// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `hue_lib` library.
//!
//! Every operation that reaches the bridge reports failures through a single
//! [`Error`] type with three kinds: the request body could not be encoded,
//! the transport failed, or the response could not be decoded.
//!
//! Typed value constructors in [`crate::types`] report range violations
//! through [`ValueError`] instead, since they fail before any request exists.

use thiserror::Error;

/// The main error type for this library.
///
/// None of these errors are retried internally.
#[derive(Debug, Error)]
pub enum Error {
    /// The request body could not be encoded. The request was never sent.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The network call failed or the bridge answered with a non-success status.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body could not be decoded after a successful transport call.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl Error {
    /// Returns the classification of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_lib::{Error, ErrorKind};
    ///
    /// let err = Error::Deserialization("EOF while parsing an object".to_string());
    /// assert_eq!(err.kind(), ErrorKind::Deserialization);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Serialization(_) => ErrorKind::Serialization,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Deserialization(_) => ErrorKind::Deserialization,
        }
    }
}

/// Classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::Serialization`].
    Serialization,
    /// See [`Error::Transport`].
    Transport,
    /// See [`Error::Deserialization`].
    Deserialization,
}

/// Errors raised by a [`Transport`](crate::protocol::Transport) implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The bridge answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The raw response body, possibly empty.
        body: String,
    },

    /// The transport failed for another reason.
    #[error("{0}")]
    Failed(String),
}

impl TransportError {
    /// Returns the HTTP status code, when the failure carries one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            #[cfg(feature = "http")]
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            Self::Status { status, .. } => Some(*status),
            Self::Failed(_) => None,
        }
    }
}

/// Error raised by a [`Codec`](crate::protocol::Codec).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct CodecError(pub String);

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        Self(err.to_string())
    }
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u32,
        /// Maximum allowed value.
        max: u32,
        /// The actual value that was provided.
        actual: u32,
    },

    /// A CIE xy coordinate is outside [0.0, 1.0].
    #[error("color coordinate {0} is out of range [0, 1]")]
    InvalidCoordinate(f64),

    /// A recurring schedule names no weekday.
    #[error("recurring schedule has no weekday")]
    NoWeekday,
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
