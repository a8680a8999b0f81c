#![allow(clippy::unwrap_used)]
// Integration tests for `LifxClient` using wiremock.

use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use oculus_api::{Error, LifxClient, LightStatePayload, Power};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, LifxClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = LifxClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

fn token() -> SecretString {
    SecretString::from("test-token".to_string())
}

fn light_json(id: &str, label: &str, power: &str) -> serde_json::Value {
    json!({
        "id": id,
        "uuid": "00000000-0000-0000-0000-000000000000",
        "label": label,
        "connected": true,
        "power": power,
        "color": { "hue": 120.0, "saturation": 0.5, "kelvin": 3500 },
        "brightness": 0.8,
        "group": { "id": "g1", "name": "Living Room" }
    })
}

// ── Lights ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_lights_sends_bearer_token() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/lights/all"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            light_json("d073d5000001", "Kitchen", "on"),
            light_json("d073d5000002", "Desk", "off"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let lights = client.list_lights(&token()).await.unwrap();

    assert_eq!(lights.len(), 2);
    assert_eq!(lights[0].id, "d073d5000001");
    assert_eq!(lights[0].power, Power::On);
    assert_eq!(lights[1].label, "Desk");
    assert_eq!(lights[1].power, Power::Off);
}

#[tokio::test]
async fn test_base_url_with_path_prefix() {
    let server = MockServer::start().await;
    let base_url = Url::parse(&format!("{}/v1", server.uri())).unwrap();
    let client = LifxClient::with_client(reqwest::Client::new(), base_url);

    Mock::given(method("GET"))
        .and(path("/v1/scenes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client.list_scenes(&token()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_set_state_puts_payload() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/lights/id:d073d5000001/state"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({ "power": "on", "brightness": 0.5 })))
        .respond_with(ResponseTemplate::new(207).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = LightStatePayload {
        power: Some(Power::On),
        brightness: Some(0.5),
        ..LightStatePayload::default()
    };
    client
        .set_state(&token(), "id:d073d5000001", &payload)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_toggle_posts_to_selector() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/lights/group:kitchen/toggle"))
        .respond_with(ResponseTemplate::new(207))
        .expect(1)
        .mount(&server)
        .await;

    client.toggle_power(&token(), "group:kitchen").await.unwrap();
}

// ── Scenes ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_scenes() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/scenes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "uuid": "7c5a0b6c-9f8e-4a61-a1b3-6a7f3c0d9e21",
            "name": "Movie Night",
            "account": { "uuid": "5f4d3c2b-1a09-4e8d-b7c6-a5f4e3d2c1b0" },
            "states": [],
            "created_at": 1_700_000_000,
            "updated_at": 1_700_000_000
        }])))
        .mount(&server)
        .await;

    let scenes = client.list_scenes(&token()).await.unwrap();

    assert_eq!(scenes.len(), 1);
    assert_eq!(scenes[0].name, "Movie Night");
    assert_eq!(scenes[0].account.uuid, "5f4d3c2b-1a09-4e8d-b7c6-a5f4e3d2c1b0");
}

#[tokio::test]
async fn test_activate_scene_sends_empty_object() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/scenes/scene_id:7c5a0b6c/activate"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(207))
        .expect(1)
        .mount(&server)
        .await;

    client.activate_scene(&token(), "7c5a0b6c").await.unwrap();
}

#[tokio::test]
async fn test_activate_scene_failure_keeps_body() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(404).set_body_string("scene not found"))
        .mount(&server)
        .await;

    let err = client.activate_scene(&token(), "missing").await.unwrap_err();

    match err {
        Error::Api { status, ref body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "scene not found");
        }
        ref other => panic!("expected Api error, got: {other:?}"),
    }
    assert!(err.is_not_found());
    assert!(err.to_string().contains("scene not found"));
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_unauthorized() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid token" })))
        .mount(&server)
        .await;

    let err = client.list_lights(&token()).await.unwrap_err();
    assert!(matches!(err, Error::Unauthorized { status: 401 }), "got: {err:?}");
    assert!(err.is_auth());
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/lights/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client.list_lights(&token()).await.unwrap_err();
    match err {
        Error::Deserialization { body, .. } => assert_eq!(body, "<html>maintenance</html>"),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_status() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = client
        .set_state(&token(), "all", &LightStatePayload::power(Power::Off))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api { status: 503, .. }), "got: {err:?}");
    assert!(!err.is_not_found());
}
