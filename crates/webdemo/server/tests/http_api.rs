//! End-to-end tests against a served router on an ephemeral port

use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use webdemo_server::api::create_router;
use webdemo_server::config::{AppConfig, ServerConfig};
use webdemo_server::{AppIdentity, AppState, BuildProperties};
use webdemo_types::{DataMessage, RequestInfo, SystemInfo};

async fn spawn_server() -> SocketAddr {
    let identity = AppIdentity::from_config(&AppConfig {
        id: Some("it-app".to_string()),
        ..Default::default()
    });
    let state = AppState::new(identity, Some(BuildProperties::current()));
    let app = create_router(state, &ServerConfig::default());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    addr
}

#[tokio::test]
async fn test_generics_round_trip_over_http() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let input = json!({ "name": "n1", "data": { "kind": "simple", "value": "x" } });
    let response = client
        .post(format!("http://{}/data/generics", addr))
        .json(&input)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let output: Value = response.json().await.unwrap();
    assert_eq!(output, input);

    let unsupported = json!({ "name": "n3", "data": { "kind": "exotic" } });
    let response = client
        .post(format!("http://{}/data/generics", addr))
        .json(&unsupported)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "UNSUPPORTED_VARIANT");
}

#[tokio::test]
async fn test_request_introspection_sees_peer_and_cookies() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/data/test?probe=1", addr))
        .header("cookie", "session=abc")
        .header("content-type", "text/plain; charset=utf-8")
        .body("hello")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let info: RequestInfo = response.json().await.unwrap();
    assert_eq!(info.id, "it-app");
    assert_eq!(info.method, "POST");
    assert_eq!(info.request_url, format!("http://{}/data/test", addr));
    assert_eq!(info.query.as_deref(), Some("probe=1"));
    assert_eq!(info.body, "hello");
    assert_eq!(info.cookies["session"], "session=abc");
    assert!(info.remote_info.starts_with("127.0.0.1:"));
}

#[tokio::test]
async fn test_info_and_echo_endpoints() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let info: SystemInfo = client
        .get(format!("http://{}/data/info", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(info.id, "it-app");

    let echo: DataMessage = client
        .get(format!("http://{}/data/echo/ping", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(echo, DataMessage::new("ping"));

    let message: DataMessage = client
        .post(format!("http://{}/data/message", addr))
        .json(&DataMessage::new("pong"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(message.data, "pong");
}
