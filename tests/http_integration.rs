// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP transport using wiremock.

use std::time::Duration;

use hue_lib::protocol::{HttpTransport, decode};
use hue_lib::types::{ApiError, ApiResponse, Brightness, LightState, Whitelisted};
use hue_lib::{ErrorKind, HttpConfig, Hue, TransportError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USERNAME: &str = "83b7780291a6ceffbe0bd049104df";

/// Bridge address of a mock server, e.g. `127.0.0.1:41234`.
fn address(server: &MockServer) -> String {
    server.uri().replace("http://", "")
}

fn hue() -> Hue<HttpTransport> {
    Hue::http().unwrap()
}

// ============================================================================
// Discovery
// ============================================================================

mod discovery {
    use super::*;

    #[tokio::test]
    async fn discover_bridges_from_lookup_endpoint() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/nupnp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "001788fffe100491", "internalipaddress": "192.168.2.23"},
                {"id": "001788fffe09a168", "internalipaddress": "192.168.88.252"}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let hue = hue().with_discovery_url(format!("{}/api/nupnp", mock_server.uri()));
        let bridges = hue.discover_bridges().await.unwrap();

        assert_eq!(bridges.len(), 2);
        assert_eq!(bridges[1].id, "001788fffe09a168");
        assert_eq!(bridges[1].internal_ip_address, "192.168.88.252");
    }

    #[tokio::test]
    async fn discover_returns_reply_unchanged() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/nupnp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&mock_server)
            .await;

        let hue = hue().with_discovery_url(format!("{}/nupnp", mock_server.uri()));
        assert_eq!(hue.discover().await.unwrap(), json!([]));
    }
}

// ============================================================================
// Bridge
// ============================================================================

mod bridge {
    use super::*;

    #[tokio::test]
    async fn create_user_posts_device_type() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"devicetype": "my_hue_app#kitchen"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"success": {"username": USERNAME}}])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let bridge = hue().bridge(address(&mock_server));
        let reply = bridge.create_user("my_hue_app#kitchen").await.unwrap();

        let reply: Vec<ApiResponse<Whitelisted>> = decode(reply).unwrap();
        assert_eq!(reply[0].success().unwrap().username, USERNAME);
    }

    #[tokio::test]
    async fn link_button_error_is_a_successful_result() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "error": {"type": 101, "address": "", "description": "link button not pressed"}
            }])))
            .mount(&mock_server)
            .await;

        let reply = hue()
            .bridge(address(&mock_server))
            .create_user("my_hue_app#kitchen")
            .await
            .unwrap();

        let reply: Vec<ApiResponse<Whitelisted>> = decode(reply).unwrap();
        assert_eq!(
            reply[0].error().unwrap().kind,
            ApiError::LINK_BUTTON_NOT_PRESSED
        );
    }
}

// ============================================================================
// User operations
// ============================================================================

mod user {
    use super::*;

    #[tokio::test]
    async fn get_lights_returns_decoded_reply() {
        let mock_server = MockServer::start().await;
        let lights = json!({
            "1": {"name": "Hue color lamp 1", "state": {"on": true, "bri": 144}},
            "2": {"name": "Hue color lamp 2", "state": {"on": false, "bri": 0}}
        });

        Mock::given(method("GET"))
            .and(path(format!("/api/{USERNAME}/lights")))
            .respond_with(ResponseTemplate::new(200).set_body_json(lights.clone()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let user = hue().bridge(address(&mock_server)).user(USERNAME);
        assert_eq!(user.get_lights().await.unwrap(), lights);
    }

    #[tokio::test]
    async fn set_light_state_sends_typed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path(format!("/api/{USERNAME}/lights/1/state")))
            .and(body_json(json!({"on": true, "bri": 254})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"success": {"/lights/1/state/on": true}},
                {"success": {"/lights/1/state/bri": 254}}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let user = hue().bridge(address(&mock_server)).user(USERNAME);
        let state = LightState::new().on().brightness(Brightness::MAX);
        let reply = user.set_light_state(1, &state).await.unwrap();

        assert_eq!(reply.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn set_scene_light_state_path() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path(format!("/api/{USERNAME}/scenes/ab341ef24/lights/3/state")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let user = hue().bridge(address(&mock_server)).user(USERNAME);
        user.set_scene_light_state("ab341ef24", 3, &json!({"on": true}))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_sends_no_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path(format!("/api/{USERNAME}/rules/2")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"success": "/rules/2 deleted"}])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let user = hue().bridge(address(&mock_server)).user(USERNAME);
        user.delete_rule(2).await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn search_for_new_sensors_posts_without_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("/api/{USERNAME}/sensors")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"success": {"/sensors": "Searching for new devices"}}])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let user = hue().bridge(address(&mock_server)).user(USERNAME);
        user.search_for_new_sensors().await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn repeated_calls_are_not_cached() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/api/{USERNAME}/config")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Philips hue"})))
            .expect(2)
            .mount(&mock_server)
            .await;

        let user = hue().bridge(address(&mock_server)).user(USERNAME);
        user.get_config().await.unwrap();
        user.get_config().await.unwrap();
    }
}

// ============================================================================
// Errors
// ============================================================================

mod errors {
    use super::*;

    #[tokio::test]
    async fn non_success_status_is_transport_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/api/{USERNAME}/lights/99")))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&mock_server)
            .await;

        let user = hue().bridge(address(&mock_server)).user(USERNAME);
        let err = user.get_light(99).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        match err {
            hue_lib::Error::Transport(TransportError::Status { status, body }) => {
                assert_eq!(status, 404);
                assert_eq!(body, "not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_reply_is_deserialization_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/api/{USERNAME}/groups")))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&mock_server)
            .await;

        let user = hue().bridge(address(&mock_server)).user(USERNAME);
        let err = user.get_groups().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Deserialization);
    }

    #[tokio::test]
    async fn unreachable_bridge_is_transport_error() {
        let user = Hue::from_config(HttpConfig::new().with_timeout(Duration::from_secs(2)))
            .unwrap()
            .bridge("127.0.0.1:1")
            .user(USERNAME);

        let err = user.get_config().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}

// ============================================================================
// HttpConfig
// ============================================================================

mod http_config {
    use super::*;

    #[tokio::test]
    async fn custom_user_agent_and_headers_are_sent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/api/{USERNAME}/capabilities")))
            .and(header("user-agent", "hue-test/1.0"))
            .and(header("x-trace", "42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let hue = Hue::from_config(
            HttpConfig::new()
                .with_user_agent("hue-test/1.0")
                .with_header("x-trace", "42"),
        )
        .unwrap();

        hue.bridge(address(&mock_server))
            .user(USERNAME)
            .get_capabilities()
            .await
            .unwrap();
    }

    #[test]
    fn invalid_header_is_rejected() {
        let err = Hue::from_config(HttpConfig::new().with_header("bad header", "x")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}
