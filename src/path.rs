// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! REST path composition.
//!
//! Bridge URLs are plain `/`-joined segments. Path segments are never
//! percent-encoded: callers are responsible for passing safe identifiers.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use hue_lib::path::{join, substitute};
//!
//! let base = substitute("http://{ip}/api", &HashMap::from([("ip", "192.168.1.100")]));
//! assert_eq!(base, "http://192.168.1.100/api");
//!
//! assert_eq!(join(&[&base, &"lights", &1, &"state"]), "http://192.168.1.100/api/lights/1/state");
//! ```

use std::collections::HashMap;
use std::fmt::{self, Display, Write as _};

/// Replaces every `{key}` in `template` with `values[key]`.
///
/// A key with no entry, or with an empty entry, leaves the literal `{key}`
/// placeholder in place. An unterminated `{` is copied verbatim.
#[must_use]
pub fn substitute(template: &str, values: &HashMap<&str, &str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };

        let key = &tail[1..close];
        match values.get(key) {
            Some(value) if !value.is_empty() => out.push_str(value),
            _ => out.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }

    out.push_str(rest);
    out
}

/// Joins path segments with `/`.
///
/// Segments may be strings or numbers. No segments yield an empty string.
#[must_use]
pub fn join(segments: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push('/');
        }
        // Writing to a String cannot fail
        let _ = write!(out, "{segment}");
    }
    out
}

/// Identifier of a bridge resource.
///
/// Lights, groups, schedules and sensors are numbered by the bridge, while
/// scenes use opaque strings. Both convert into a `ResourceId`.
///
/// # Examples
///
/// ```
/// use hue_lib::path::ResourceId;
///
/// assert_eq!(ResourceId::from(7_u32).as_str(), "7");
/// assert_eq!(ResourceId::from("3T2SvsxvwteNNys").as_str(), "3T2SvsxvwteNNys");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! resource_id_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ResourceId {
                fn from(id: $ty) -> Self {
                    Self(id.to_string())
                }
            }
        )*
    };
}

resource_id_from_integer!(u8, u16, u32, u64, usize, i32, i64);

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&String> for ResourceId {
    fn from(id: &String) -> Self {
        Self(id.clone())
    }
}

impl From<&ResourceId> for ResourceId {
    fn from(id: &ResourceId) -> Self {
        id.clone()
    }
}
