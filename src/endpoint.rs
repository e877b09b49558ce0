// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Endpoint construction.
//!
//! An [`Endpoint`] binds an HTTP method and a URL generator to a
//! [`Dispatch`] implementation. The generator maps one parameter to a URL:
//!
//! - [`fixed`] ignores its `()` parameter (collection-level operations)
//! - [`item`] appends a [`ResourceId`] to a collection URL
//! - [`nested`] appends a suffix to the output of another generator
//!
//! [`Family`] bundles the endpoints shared by every bridge resource
//! collection, so that each facade operation is a single declaration.
//!
//! # Examples
//!
//! ```
//! use hue_lib::endpoint::{Endpoint, item, nested};
//! use hue_lib::path::ResourceId;
//! use hue_lib::protocol::{CommandGenerator, Method};
//!
//! # async fn example() -> hue_lib::Result<()> {
//! let state = nested(item("/lights".to_string()), "state");
//! let set_state = Endpoint::new(&CommandGenerator, Method::Put, state);
//!
//! let command = set_state
//!     .invoke(ResourceId::from(1), Some(&serde_json::json!({"on": true})))
//!     .await?;
//! assert_eq!(command.address, "/lights/1/state");
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::error::Result;
use crate::path::{ResourceId, join};
use crate::protocol::{Dispatch, Method, NO_BODY};

/// An operation bound to a method and a URL generator.
#[derive(Debug, Clone)]
pub struct Endpoint<'a, D, G> {
    dispatch: &'a D,
    method: Method,
    url: G,
}

impl<'a, D: Dispatch, G> Endpoint<'a, D, G> {
    /// Binds `method` and the URL generator `url` to `dispatch`.
    #[must_use]
    pub fn new(dispatch: &'a D, method: Method, url: G) -> Self {
        Self {
            dispatch,
            method,
            url,
        }
    }

    /// Returns the bound method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the URL this endpoint targets for `param`.
    pub fn url<P>(&self, param: P) -> String
    where
        G: Fn(P) -> String,
    {
        (self.url)(param)
    }

    /// Invokes the endpoint.
    ///
    /// `param` feeds the URL generator. `body` is forwarded untouched.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying [`Dispatch`] reports.
    pub async fn invoke<P, B>(&self, param: P, body: Option<&B>) -> Result<D::Output>
    where
        G: Fn(P) -> String,
        B: Serialize + ?Sized,
    {
        let url = (self.url)(param);
        self.dispatch.dispatch(self.method, &url, body).await
    }
}

/// A generator that always yields `url`.
pub fn fixed(url: String) -> impl Fn(()) -> String + Clone {
    move |()| url.clone()
}

/// A generator yielding `collection/{id}`.
pub fn item(collection: String) -> impl Fn(ResourceId) -> String + Clone {
    move |id| join(&[&collection, &id])
}

/// A generator yielding the output of `parent` followed by `/suffix`.
pub fn nested<P, G>(parent: G, suffix: &'static str) -> impl Fn(P) -> String + Clone
where
    G: Fn(P) -> String + Clone,
{
    move |param| join(&[&parent(param), &suffix])
}

/// The endpoints of one bridge resource collection.
///
/// Every resource family (lights, groups, schedules, scenes, sensors, rules,
/// resource links) follows the same layout under its collection URL.
#[derive(Debug, Clone)]
pub struct Family<'a, D> {
    dispatch: &'a D,
    url: String,
}

impl<'a, D: Dispatch> Family<'a, D> {
    /// Creates the family rooted at the collection `url`.
    #[must_use]
    pub fn new(dispatch: &'a D, url: String) -> Self {
        Self { dispatch, url }
    }

    /// Returns the collection URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    fn collection(&self, method: Method) -> Endpoint<'a, D, impl Fn(()) -> String + Clone> {
        Endpoint::new(self.dispatch, method, fixed(self.url.clone()))
    }

    fn item(&self, method: Method) -> Endpoint<'a, D, impl Fn(ResourceId) -> String + Clone> {
        Endpoint::new(self.dispatch, method, item(self.url.clone()))
    }

    /// `GET collection`
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying [`Dispatch`] reports.
    pub async fn list(&self) -> Result<D::Output> {
        self.collection(Method::Get).invoke((), NO_BODY).await
    }

    /// `POST collection` with a body.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying [`Dispatch`] reports.
    pub async fn create<B: Serialize + ?Sized>(&self, body: &B) -> Result<D::Output> {
        self.collection(Method::Post).invoke((), Some(body)).await
    }

    /// `POST collection`, with or without a body.
    ///
    /// The bridge starts a device search when lights or sensors are posted to.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying [`Dispatch`] reports.
    pub async fn search<B: Serialize + ?Sized>(&self, body: Option<&B>) -> Result<D::Output> {
        self.collection(Method::Post).invoke((), body).await
    }

    /// `GET collection/new`
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying [`Dispatch`] reports.
    pub async fn new_items(&self) -> Result<D::Output> {
        Endpoint::new(self.dispatch, Method::Get, nested(fixed(self.url.clone()), "new"))
            .invoke((), NO_BODY)
            .await
    }

    /// `GET collection/{id}`
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying [`Dispatch`] reports.
    pub async fn get(&self, id: ResourceId) -> Result<D::Output> {
        self.item(Method::Get).invoke(id, NO_BODY).await
    }

    /// `PUT collection/{id}`
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying [`Dispatch`] reports.
    pub async fn set<B: Serialize + ?Sized>(&self, id: ResourceId, body: &B) -> Result<D::Output> {
        self.item(Method::Put).invoke(id, Some(body)).await
    }

    /// `PUT collection/{id}/{suffix}`
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying [`Dispatch`] reports.
    pub async fn set_child<B: Serialize + ?Sized>(
        &self,
        id: ResourceId,
        suffix: &'static str,
        body: &B,
    ) -> Result<D::Output> {
        Endpoint::new(self.dispatch, Method::Put, nested(item(self.url.clone()), suffix))
            .invoke(id, Some(body))
            .await
    }

    /// `DELETE collection/{id}`
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying [`Dispatch`] reports.
    pub async fn delete(&self, id: ResourceId) -> Result<D::Output> {
        self.item(Method::Delete).invoke(id, NO_BODY).await
    }
}
