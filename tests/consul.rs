//! Consul client tests against a mock agent HTTP API.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Json, Router};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::{json, Value};

use flight_status_service::config::{ConfigResolver, Environment, KvStore};
use flight_status_service::discovery::{ConsulClient, ServiceRegistration, ServiceRegistry};
use flight_status_service::errors::BootstrapError;

/// Shared state of the mock agent.
struct MockAgent {
    kv: HashMap<String, String>,
    fail_register: bool,
    registrations: Mutex<Vec<Value>>,
}

async fn kv_handler(
    State(agent): State<Arc<MockAgent>>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    match agent.kv.get(&key) {
        Some(value) => Json(json!([
            { "Key": key, "Value": BASE64.encode(value) }
        ]))
        .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn register_handler(
    State(agent): State<Arc<MockAgent>>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    agent.registrations.lock().unwrap().push(body);
    if agent.fail_register {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    }
}

/// Spawn the mock agent on an ephemeral port.
async fn spawn_mock_agent(kv: &[(&str, &str)], fail_register: bool) -> (SocketAddr, Arc<MockAgent>) {
    let agent = Arc::new(MockAgent {
        kv: kv
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        fail_register,
        registrations: Mutex::new(Vec::new()),
    });

    let router = Router::new()
        .route("/v1/kv/{*key}", get(kv_handler))
        .route("/v1/agent/service/register", put(register_handler))
        .with_state(agent.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (addr, agent)
}

#[tokio::test]
async fn kv_get_decodes_base64_values() {
    let (addr, _) = spawn_mock_agent(
        &[("config/flight-status-service/prod/port", "8080")],
        false,
    )
    .await;

    let client = ConsulClient::new(&format!("http://{}", addr));
    let value = client
        .get("config/flight-status-service/prod/port")
        .await
        .unwrap();

    assert_eq!(value.as_deref(), Some("8080"));
}

#[tokio::test]
async fn kv_missing_key_is_absent_not_an_error() {
    let (addr, _) = spawn_mock_agent(&[], false).await;

    let client = ConsulClient::new(&format!("http://{}", addr));
    let value = client.get("config/none/prod/port").await.unwrap();

    assert_eq!(value, None);
}

#[tokio::test]
async fn kv_unreachable_agent_is_config_unavailable() {
    // Nothing listens here.
    let client = ConsulClient::new("http://127.0.0.1:1");
    let err = client.get("config/x/prod/port").await.unwrap_err();

    assert!(matches!(err, BootstrapError::ConfigUnavailable { .. }));
}

#[tokio::test]
async fn resolver_reads_through_the_client() {
    let (addr, _) = spawn_mock_agent(
        &[
            ("config/flights/dev/port", "8080"),
            ("config/flights/dev/address", "127.0.0.1"),
        ],
        false,
    )
    .await;

    let client = ConsulClient::new(&format!("http://{}", addr));
    let resolver = ConfigResolver::new(&client, "flights", Environment::Dev);

    assert_eq!(resolver.resolve_port("port").await.unwrap(), 8080);
    assert_eq!(
        resolver.resolve_string("address").await.unwrap(),
        "127.0.0.1"
    );
}

#[tokio::test]
async fn register_sends_the_agent_wire_format() {
    let (addr, agent) = spawn_mock_agent(&[], false).await;

    let client = ConsulClient::new(&format!("http://{}", addr));
    let registration = ServiceRegistration::new("flight-status-service", 8080, "10s");
    client.register(&registration).await.unwrap();

    let bodies = agent.registrations.lock().unwrap().clone();
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0],
        json!({
            "Name": "flight-status-service",
            "Address": "flight-status-service",
            "Port": 8080,
            "Check": {
                "HTTP": "http://flight-status-service:8080/health",
                "Interval": "10s",
            },
        })
    );
}

#[tokio::test]
async fn register_error_status_maps_to_registration_error() {
    let (addr, _) = spawn_mock_agent(&[], true).await;

    let client = ConsulClient::new(&format!("http://{}", addr));
    let registration = ServiceRegistration::new("flight-status-service", 8080, "10s");
    let err = client.register(&registration).await.unwrap_err();

    assert!(matches!(err, BootstrapError::Registration { .. }));
    assert!(!err.is_fatal());
}
