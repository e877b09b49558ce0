// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Authenticated access to one bridge.
//!
//! A [`User`] exposes every resource operation of the bridge API. Each
//! operation is declared once, on top of the [`Family`] endpoints of its
//! collection, and funnels through the user's [`Dispatch`] implementation.
//!
//! # Issuing requests
//!
//! Users created with [`Bridge::user`](crate::Bridge::user) dispatch through
//! the HTTP [`Dispatcher`](crate::protocol::Dispatcher). Every operation
//! returns the decoded JSON reply unchanged.
//!
//! ```no_run
//! use hue_lib::Hue;
//! use hue_lib::types::{Brightness, LightState};
//!
//! # async fn example() -> hue_lib::Result<()> {
//! let user = Hue::http()?.bridge("192.168.1.100").user("83b7780291a6ceffbe0bd049104df");
//!
//! let state = LightState::new().on().brightness(Brightness::MAX);
//! user.set_light_state(1, &state).await?;
//! user.delete_group("3").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Generating commands
//!
//! Schedules and rules embed commands that the bridge executes itself.
//! [`User::schedule_command_generator`] and [`User::rule_action_generator`]
//! return a `User` whose operations build those commands instead of issuing
//! requests.
//!
//! ```
//! use hue_lib::Hue;
//! use hue_lib::protocol::Method;
//!
//! # async fn example() -> hue_lib::Result<()> {
//! let user = Hue::with_transport(()).bridge("192.168.1.100").user("abc");
//!
//! let command = user
//!     .rule_action_generator()
//!     .set_light_state(1, &serde_json::json!({"on": true}))
//!     .await?;
//! assert_eq!(command.address, "/lights/1/state");
//! assert_eq!(command.method, Method::Put);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::endpoint::{Endpoint, Family, fixed};
use crate::error::Result;
use crate::path::{ResourceId, join};
use crate::protocol::{CommandGenerator, Dispatch, Method, NO_BODY};

/// A bridge user, identified by the credential the bridge issued.
///
/// Created with [`Bridge::user`](crate::Bridge::user). `D` decides what an
/// operation does: issue an HTTP request, or generate a
/// [`Command`](crate::protocol::Command).
#[derive(Debug, Clone)]
pub struct User<D> {
    dispatch: D,
    username: String,
    url: String,
}

impl<D> User<D> {
    pub(crate) fn new(dispatch: D, username: String, url: String) -> Self {
        Self {
            dispatch,
            username,
            url,
        }
    }

    /// Returns the credential of this user.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the root of every path of this user, e.g.
    /// `http://192.168.1.100/api/83b7780291a6ceffbe0bd049104df`.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the dispatch implementation.
    #[must_use]
    pub fn dispatch(&self) -> &D {
        &self.dispatch
    }

    /// Returns a user whose operations generate schedule commands.
    ///
    /// Schedule command addresses include the API prefix and credential,
    /// e.g. `/api/<username>/lights/1/state`.
    #[must_use]
    pub fn schedule_command_generator(&self) -> User<CommandGenerator> {
        User::new(
            CommandGenerator,
            self.username.clone(),
            join(&[&"/api", &self.username]),
        )
    }

    /// Returns a user whose operations generate rule actions.
    ///
    /// Rule action addresses are relative to the user, e.g.
    /// `/lights/1/state`.
    #[must_use]
    pub fn rule_action_generator(&self) -> User<CommandGenerator> {
        User::new(CommandGenerator, self.username.clone(), String::new())
    }
}

impl<D: Dispatch> User<D> {
    fn family(&self, collection: &str) -> Family<'_, D> {
        Family::new(&self.dispatch, join(&[&self.url, &collection]))
    }

    fn resource(
        &self,
        method: Method,
        path: &'static str,
    ) -> Endpoint<'_, D, impl Fn(()) -> String + Clone> {
        Endpoint::new(&self.dispatch, method, fixed(join(&[&self.url, &path])))
    }

    // ========== Configuration ==========

    /// Reads the whole bridge datastore: lights, groups, configuration,
    /// schedules, scenes, sensors, rules and resource links.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_full_state(&self) -> Result<D::Output> {
        Endpoint::new(&self.dispatch, Method::Get, fixed(self.url.clone()))
            .invoke((), NO_BODY)
            .await
    }

    /// Reads the bridge configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_config(&self) -> Result<D::Output> {
        self.resource(Method::Get, "config").invoke((), NO_BODY).await
    }

    /// Changes bridge configuration attributes.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the request fails.
    pub async fn set_config<B: Serialize + ?Sized>(&self, body: &B) -> Result<D::Output> {
        self.resource(Method::Put, "config").invoke((), Some(body)).await
    }

    /// Removes `username` from the bridge whitelist.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn delete_user(&self, username: &str) -> Result<D::Output> {
        Family::new(&self.dispatch, join(&[&self.url, &"config", &"whitelist"]))
            .delete(username.into())
            .await
    }

    /// Lists the time zones the bridge supports.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_timezones(&self) -> Result<D::Output> {
        self.resource(Method::Get, "info/timezones")
            .invoke((), NO_BODY)
            .await
    }

    /// Reads how many resources of each kind the bridge can still hold.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_capabilities(&self) -> Result<D::Output> {
        self.resource(Method::Get, "capabilities")
            .invoke((), NO_BODY)
            .await
    }

    // ========== Lights ==========

    /// The `lights` collection.
    #[must_use]
    pub fn lights(&self) -> Family<'_, D> {
        self.family("lights")
    }

    /// Lists all lights.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_lights(&self) -> Result<D::Output> {
        self.lights().list().await
    }

    /// Lists the lights found by the last search.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_new_lights(&self) -> Result<D::Output> {
        self.lights().new_items().await
    }

    /// Starts a search for new lights. The request has no body.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn search_for_new_lights(&self) -> Result<D::Output> {
        self.lights().search(NO_BODY).await
    }

    /// Starts a search for new lights with a body, e.g. a list of serial
    /// numbers under `deviceid`.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the request fails.
    pub async fn search_for_new_lights_with<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<D::Output> {
        self.lights().search(Some(body)).await
    }

    /// Reads one light.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_light(&self, id: impl Into<ResourceId>) -> Result<D::Output> {
        self.lights().get(id.into()).await
    }

    /// Changes light attributes, such as its name.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the request fails.
    pub async fn set_light<B: Serialize + ?Sized>(
        &self,
        id: impl Into<ResourceId>,
        body: &B,
    ) -> Result<D::Output> {
        self.lights().set(id.into(), body).await
    }

    /// Changes the state of a light. See [`LightState`](crate::types::LightState).
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the request fails.
    pub async fn set_light_state<B: Serialize + ?Sized>(
        &self,
        id: impl Into<ResourceId>,
        body: &B,
    ) -> Result<D::Output> {
        self.lights().set_child(id.into(), "state", body).await
    }

    /// Removes a light from the bridge.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn delete_light(&self, id: impl Into<ResourceId>) -> Result<D::Output> {
        self.lights().delete(id.into()).await
    }

    // ========== Groups ==========

    /// The `groups` collection.
    #[must_use]
    pub fn groups(&self) -> Family<'_, D> {
        self.family("groups")
    }

    /// Lists all groups.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_groups(&self) -> Result<D::Output> {
        self.groups().list().await
    }

    /// Creates a group.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the request fails.
    pub async fn create_group<B: Serialize + ?Sized>(&self, body: &B) -> Result<D::Output> {
        self.groups().create(body).await
    }

    /// Reads one group. Group 0 contains every light.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_group(&self, id: impl Into<ResourceId>) -> Result<D::Output> {
        self.groups().get(id.into()).await
    }

    /// Changes group attributes, such as its name or lights.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the request fails.
    pub async fn set_group<B: Serialize + ?Sized>(
        &self,
        id: impl Into<ResourceId>,
        body: &B,
    ) -> Result<D::Output> {
        self.groups().set(id.into(), body).await
    }

    /// Changes the state of every light of a group.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the request fails.
    pub async fn set_group_state<B: Serialize + ?Sized>(
        &self,
        id: impl Into<ResourceId>,
        body: &B,
    ) -> Result<D::Output> {
        self.groups().set_child(id.into(), "action", body).await
    }

    /// Deletes a group.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn delete_group(&self, id: impl Into<ResourceId>) -> Result<D::Output> {
        self.groups().delete(id.into()).await
    }

    // ========== Schedules ==========

    /// The `schedules` collection.
    #[must_use]
    pub fn schedules(&self) -> Family<'_, D> {
        self.family("schedules")
    }

    /// Lists all schedules.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_schedules(&self) -> Result<D::Output> {
        self.schedules().list().await
    }

    /// Creates a schedule. Its `command` is typically built with
    /// [`schedule_command_generator`](Self::schedule_command_generator).
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the request fails.
    pub async fn create_schedule<B: Serialize + ?Sized>(&self, body: &B) -> Result<D::Output> {
        self.schedules().create(body).await
    }

    /// Reads one schedule.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_schedule(&self, id: impl Into<ResourceId>) -> Result<D::Output> {
        self.schedules().get(id.into()).await
    }

    /// Changes schedule attributes.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the request fails.
    pub async fn set_schedule<B: Serialize + ?Sized>(
        &self,
        id: impl Into<ResourceId>,
        body: &B,
    ) -> Result<D::Output> {
        self.schedules().set(id.into(), body).await
    }

    /// Deletes a schedule.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn delete_schedule(&self, id: impl Into<ResourceId>) -> Result<D::Output> {
        self.schedules().delete(id.into()).await
    }

    // ========== Scenes ==========

    /// The `scenes` collection.
    #[must_use]
    pub fn scenes(&self) -> Family<'_, D> {
        self.family("scenes")
    }

    /// Lists all scenes.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_scenes(&self) -> Result<D::Output> {
        self.scenes().list().await
    }

    /// Creates a scene.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the request fails.
    pub async fn create_scene<B: Serialize + ?Sized>(&self, body: &B) -> Result<D::Output> {
        self.scenes().create(body).await
    }

    /// Reads one scene, including its light states.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_scene(&self, id: impl Into<ResourceId>) -> Result<D::Output> {
        self.scenes().get(id.into()).await
    }

    /// Changes scene attributes.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the request fails.
    pub async fn set_scene<B: Serialize + ?Sized>(
        &self,
        id: impl Into<ResourceId>,
        body: &B,
    ) -> Result<D::Output> {
        self.scenes().set(id.into(), body).await
    }

    /// Changes the state a scene stores for one of its lights.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the request fails.
    pub async fn set_scene_light_state<B: Serialize + ?Sized>(
        &self,
        scene: impl Into<ResourceId>,
        light: impl Into<ResourceId>,
        body: &B,
    ) -> Result<D::Output> {
        let scene: ResourceId = scene.into();
        let lights = join(&[&self.scenes().url(), &scene, &"lights"]);
        Family::new(&self.dispatch, lights)
            .set_child(light.into(), "state", body)
            .await
    }

    /// Deletes a scene.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn delete_scene(&self, id: impl Into<ResourceId>) -> Result<D::Output> {
        self.scenes().delete(id.into()).await
    }

    // ========== Sensors ==========

    /// The `sensors` collection.
    #[must_use]
    pub fn sensors(&self) -> Family<'_, D> {
        self.family("sensors")
    }

    /// Lists all sensors.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_sensors(&self) -> Result<D::Output> {
        self.sensors().list().await
    }

    /// Creates a software sensor.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the request fails.
    pub async fn create_sensor<B: Serialize + ?Sized>(&self, body: &B) -> Result<D::Output> {
        self.sensors().create(body).await
    }

    /// Starts a search for new sensors. The request has no body.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn search_for_new_sensors(&self) -> Result<D::Output> {
        self.sensors().search(NO_BODY).await
    }

    /// Lists the sensors found by the last search.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_new_sensors(&self) -> Result<D::Output> {
        self.sensors().new_items().await
    }

    /// Reads one sensor.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_sensor(&self, id: impl Into<ResourceId>) -> Result<D::Output> {
        self.sensors().get(id.into()).await
    }

    /// Changes sensor attributes, such as its name.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the request fails.
    pub async fn set_sensor<B: Serialize + ?Sized>(
        &self,
        id: impl Into<ResourceId>,
        body: &B,
    ) -> Result<D::Output> {
        self.sensors().set(id.into(), body).await
    }

    /// Changes sensor configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the request fails.
    pub async fn set_sensor_config<B: Serialize + ?Sized>(
        &self,
        id: impl Into<ResourceId>,
        body: &B,
    ) -> Result<D::Output> {
        self.sensors().set_child(id.into(), "config", body).await
    }

    /// Changes sensor state. Only software sensors accept this.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the request fails.
    pub async fn set_sensor_state<B: Serialize + ?Sized>(
        &self,
        id: impl Into<ResourceId>,
        body: &B,
    ) -> Result<D::Output> {
        self.sensors().set_child(id.into(), "state", body).await
    }

    /// Deletes a sensor.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn delete_sensor(&self, id: impl Into<ResourceId>) -> Result<D::Output> {
        self.sensors().delete(id.into()).await
    }

    // ========== Rules ==========

    /// The `rules` collection.
    #[must_use]
    pub fn rules(&self) -> Family<'_, D> {
        self.family("rules")
    }

    /// Lists all rules.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_rules(&self) -> Result<D::Output> {
        self.rules().list().await
    }

    /// Creates a rule. Its actions are typically built with
    /// [`rule_action_generator`](Self::rule_action_generator).
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the request fails.
    pub async fn create_rule<B: Serialize + ?Sized>(&self, body: &B) -> Result<D::Output> {
        self.rules().create(body).await
    }

    /// Reads one rule.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_rule(&self, id: impl Into<ResourceId>) -> Result<D::Output> {
        self.rules().get(id.into()).await
    }

    /// Changes rule attributes, conditions or actions.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the request fails.
    pub async fn set_rule<B: Serialize + ?Sized>(
        &self,
        id: impl Into<ResourceId>,
        body: &B,
    ) -> Result<D::Output> {
        self.rules().set(id.into(), body).await
    }

    /// Deletes a rule.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn delete_rule(&self, id: impl Into<ResourceId>) -> Result<D::Output> {
        self.rules().delete(id.into()).await
    }

    // ========== Resource links ==========

    /// The `resourcelinks` collection.
    #[must_use]
    pub fn resource_links(&self) -> Family<'_, D> {
        self.family("resourcelinks")
    }

    /// Lists all resource links.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_resource_links(&self) -> Result<D::Output> {
        self.resource_links().list().await
    }

    /// Creates a resource link.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the request fails.
    pub async fn create_resource_link<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<D::Output> {
        self.resource_links().create(body).await
    }

    /// Reads one resource link.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_resource_link(&self, id: impl Into<ResourceId>) -> Result<D::Output> {
        self.resource_links().get(id.into()).await
    }

    /// Changes resource link attributes.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be encoded or the request fails.
    pub async fn set_resource_link<B: Serialize + ?Sized>(
        &self,
        id: impl Into<ResourceId>,
        body: &B,
    ) -> Result<D::Output> {
        self.resource_links().set(id.into(), body).await
    }

    /// Deletes a resource link.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn delete_resource_link(&self, id: impl Into<ResourceId>) -> Result<D::Output> {
        self.resource_links().delete(id.into()).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::protocol::Command;

    fn user() -> User<CommandGenerator> {
        User::new(
            CommandGenerator,
            "abc".to_string(),
            "http://bridge/api/abc".to_string(),
        )
    }

    #[tokio::test]
    async fn full_state_targets_user_root() {
        let command = user().get_full_state().await.unwrap();
        assert_eq!(command.address, "http://bridge/api/abc");
        assert_eq!(command.method, Method::Get);
    }

    #[tokio::test]
    async fn delete_user_targets_whitelist() {
        let command = user().delete_user("old").await.unwrap();
        assert_eq!(command.address, "http://bridge/api/abc/config/whitelist/old");
        assert_eq!(command.method, Method::Delete);
    }

    #[tokio::test]
    async fn scene_light_state_path() {
        let command = user()
            .set_scene_light_state("s1", 4, &json!({"on": false}))
            .await
            .unwrap();
        assert_eq!(
            command,
            Command {
                address: "http://bridge/api/abc/scenes/s1/lights/4/state".to_string(),
                method: Method::Put,
                body: Some(json!({"on": false})),
            }
        );
    }

    #[tokio::test]
    async fn schedule_generator_keeps_api_prefix() {
        let command = user()
            .schedule_command_generator()
            .set_group_state(0, &json!({"on": true}))
            .await
            .unwrap();
        assert_eq!(command.address, "/api/abc/groups/0/action");
    }

    #[tokio::test]
    async fn rule_generator_is_user_relative() {
        let generator = user().rule_action_generator();
        assert_eq!(generator.username(), "abc");

        let command = generator
            .set_sensor_state("7", &json!({"status": 1}))
            .await
            .unwrap();
        assert_eq!(command.address, "/sensors/7/state");
    }

    #[test]
    fn family_urls() {
        let user = user();
        assert_eq!(user.resource_links().url(), "http://bridge/api/abc/resourcelinks");
        assert_eq!(user.sensors().url(), "http://bridge/api/abc/sensors");
    }
}
