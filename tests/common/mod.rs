// Test helpers are intentionally partially used
#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use axum_envelope::domain::DetailsPolicy;
use axum_envelope::{create_router_with, AppConfig, MetricsType, ResponseConfig, ServerConfig};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::time::sleep;
use tower::ServiceExt;

// ============================================================================
// Test Setup
// ============================================================================

/// Configuration built in code so tests never depend on the environment.
pub fn test_config(details_policy: DetailsPolicy, metrics_type: MetricsType) -> AppConfig {
    // ---
    AppConfig {
        responses: ResponseConfig { details_policy },
        server: ServerConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            metrics_type,
        },
    }
}

/// Router with pass-through details and no-op metrics.
pub fn test_router() -> Router {
    // ---
    create_router_with(test_config(DetailsPolicy::PassThrough, MetricsType::Noop))
        .expect("Should be able to create router")
}

/// Sends one request through the router without a socket.
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    // ---
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is JSON")
    };

    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub struct TestServer {
    pub addr: std::net::SocketAddr,
    pub client: Client,
}

impl TestServer {
    // ---
    pub async fn new(app: Router) -> Self {
        // --
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Spawn the server in the background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start
        sleep(Duration::from_millis(100)).await;

        let client = Client::new();

        Self { addr, client }
    }

    pub fn url(&self, path: &str) -> String {
        // ---
        format!("http://{}{}", self.addr, path)
    }
}
