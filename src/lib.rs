// src/lib.rs
use anyhow::Result;
use app_state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use handlers::*;

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod handlers;
mod infrastructure;
mod responder;

// Hoist up only the public symbol(s)
pub use responder::ResponseHelper;

pub use config::*;

// Publicly expose the Axum binding
pub use infrastructure::http::{attach_meta, AxumSink, RequestMeta, Respond, REQUEST_ID_HEADER};

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_noop_metrics, // ---
    create_prom_metrics,
};

/// Build the HTTP router from environment configuration.
pub fn create_router() -> Result<Router> {
    // ---
    let config = AppConfig::from_env()?;
    create_router_with(config)
}

/// Build the HTTP router from an explicit configuration.
pub fn create_router_with(config: AppConfig) -> Result<Router> {
    // ---
    tracing_subscriber::fmt::try_init().ok(); // Ignores if already initialized

    let metrics = match config.server.metrics_type {
        MetricsType::Prometheus => create_prom_metrics()?,
        MetricsType::Noop => create_noop_metrics()?,
    };

    let builder = domain::EnvelopeBuilder::new(config.responses.details_policy);
    let responder = ResponseHelper::new(builder, metrics.clone());
    let app_state = AppState::new(responder, metrics);

    tracing::info!(
        details_policy = ?config.responses.details_policy,
        metrics = ?config.server.metrics_type,
        "Building router"
    );

    let router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .nest(
            "/demo",
            Router::new()
                .route("/items", get(list_items).post(add_item))
                .route("/items/{id}", get(get_item).delete(delete_item))
                .route("/items/{id}/archive", post(archive_item))
                .route("/private", get(private_resource))
                .route("/fail", get(fail)),
        )
        .layer(middleware::from_fn(attach_meta))
        .with_state(app_state);

    Ok(router)
}
