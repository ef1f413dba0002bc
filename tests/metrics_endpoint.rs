use axum_envelope::domain::DetailsPolicy;
use axum_envelope::{create_router_with, MetricsType};
use serial_test::serial;

mod common;
use common::{test_config, TestServer};

// NOTE: Metrics use a global Prometheus registry.
// Tests are serial to avoid double-registration races.

#[tokio::test]
#[serial]
async fn metrics_endpoint_with_prometheus() {
    // ---
    let app = create_router_with(test_config(DetailsPolicy::PassThrough, MetricsType::Prometheus))
        .expect("Should be able to create router");
    let server = TestServer::new(app).await;

    // First, hit some endpoints to generate metrics
    let _ = server.client.get(server.url("/health")).send().await.unwrap();
    let _ = server.client.get(server.url("/demo/items/none")).send().await.unwrap();
    let _ = server.client.get(server.url("/demo/fail")).send().await.unwrap();

    let res = server
        .client
        .get(server.url("/metrics"))
        .send()
        .await
        .unwrap();

    assert!(
        res.status().is_success(),
        "Metrics endpoint should return success"
    );

    let body = res.text().await.unwrap();

    assert!(body.contains("envelope_responses_total"), "got: {body}");
    assert!(body.contains(r#"intent="not_found""#), "got: {body}");
    assert!(body.contains(r#"status="500""#), "got: {body}");
    assert!(body.contains(r#"family="server""#), "got: {body}");
}

#[tokio::test]
#[serial]
async fn metrics_endpoint_with_noop() {
    // ---
    let app = create_router_with(test_config(DetailsPolicy::PassThrough, MetricsType::Noop))
        .expect("Should be able to create router");
    let server = TestServer::new(app).await;

    let _ = server.client.get(server.url("/health")).send().await.unwrap();

    let res = server
        .client
        .get(server.url("/metrics"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers()["content-type"],
        "text/plain; version=0.0.4; charset=utf-8"
    );
    assert!(res.text().await.unwrap().is_empty());
}
