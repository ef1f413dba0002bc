//! Application state management.
//!
//! Defines the shared state passed to all Axum handlers via the `State`
//! extractor: the response helper, the metrics backend and the demo item
//! store. The state is cheap to clone (`Arc` inside) so Axum can hand a copy
//! to every request.

use crate::domain::MetricsPtr;
use crate::responder::ResponseHelper;
use axum::extract::FromRef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// An entry in the demo catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Item {
    // ---
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub archived: bool,
}

/// In-memory item store, ordered by id so pagination is stable.
pub(crate) type ItemStore = Arc<RwLock<BTreeMap<String, Item>>>;

/// Shared application state passed to all Axum handlers.
///
/// # Lifecycle
///
/// 1. Created once in `create_router_with()` during startup
/// 2. Attached to the router via `.with_state(app_state)`
/// 3. Cloned by Axum for each incoming request
/// 4. Handlers extract `State<AppState>` or, through `FromRef`, `Respond`
#[derive(Clone)]
pub(crate) struct AppState {
    /// Envelope builder + metrics, shared by every handler.
    responder: ResponseHelper,

    /// Metrics backend, also rendered by `/metrics`.
    metrics: MetricsPtr,

    items: ItemStore,
}

impl AppState {
    // ---

    pub fn new(responder: ResponseHelper, metrics: MetricsPtr) -> Self {
        // ---
        AppState {
            responder,
            metrics,
            items: ItemStore::default(),
        }
    }

    /// Get a reference to the metrics implementation.
    pub(crate) fn metrics(&self) -> &MetricsPtr {
        &self.metrics
    }

    /// Get a reference to the item store.
    pub(crate) fn items(&self) -> &ItemStore {
        &self.items
    }
}

impl FromRef<AppState> for ResponseHelper {
    fn from_ref(state: &AppState) -> Self {
        state.responder.clone()
    }
}
