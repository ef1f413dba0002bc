//! Demo catalogue handlers.
//!
//! A small in-memory CRUD surface that answers through every envelope intent,
//! so the contract can be exercised end to end over HTTP.

use crate::app_state::{AppState, Item};
use crate::domain::Pagination;
use crate::infrastructure::http::Respond;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header::AUTHORIZATION, HeaderMap},
    response::Response,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

const DEFAULT_PAGE_SIZE: u32 = 10;

/// Query parameters for `GET /demo/items`.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<u32>,
    size: Option<u32>,
}

/// Body of `POST /demo/items`. The id is generated when omitted.
#[derive(Debug, Deserialize)]
pub struct NewItem {
    id: Option<String>,
    name: String,
}

/// Lists items one page at a time (GET /demo/items?page=&size=).
///
/// - `200 OK` with the page in `data` and a `pagination` block.
/// - `400 Bad Request` if `page` or `size` is zero or not a valid number.
#[tracing::instrument(skip(state, respond, query))]
pub async fn list_items(
    State(state): State<AppState>,
    respond: Respond,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Response {
    // ---
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return respond.bad_request("Invalid pagination", rejection.body_text()),
    };

    let page = query.page.unwrap_or(1);
    let size = query.size.unwrap_or(DEFAULT_PAGE_SIZE);

    if page == 0 || size == 0 {
        return respond.bad_request(
            "Invalid pagination",
            "'page' and 'size' must be greater than zero.",
        );
    }

    let items = state.items().read().await;
    let pagination = Pagination::new(page, size, items.len() as u64);
    let data: Vec<&Item> = items
        .values()
        .skip(pagination.offset())
        .take(size as usize)
        .collect();

    respond.success_with_pagination(data, pagination)
}

/// Fetches one item by id (GET /demo/items/{id}).
///
/// - `200 OK` with the item in `data`.
/// - `404 Not Found` if no item has that id.
#[tracing::instrument(skip(state, respond))]
pub async fn get_item(
    State(state): State<AppState>,
    respond: Respond,
    Path(id): Path<String>,
) -> Response {
    // ---
    match state.items().read().await.get(&id) {
        Some(item) => respond.success(item),
        None => respond.not_found("Item not found"),
    }
}

/// Creates an item (POST /demo/items).
///
/// - `201 Created` with the stored item.
/// - `400 Bad Request` on a malformed body or an empty name.
/// - `409 Conflict` ("Item already exists") if the id is taken.
#[tracing::instrument(skip(state, respond, payload))]
pub async fn add_item(
    State(state): State<AppState>,
    respond: Respond,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> Response {
    // ---
    let new_item = match payload {
        Ok(Json(new_item)) => new_item,
        Err(rejection) => return respond.bad_request("Invalid request body", rejection.body_text()),
    };

    let name = new_item.name.trim();
    if name.is_empty() {
        return respond.bad_request("Invalid input", "The 'name' field is required.");
    }

    let id = new_item
        .id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let mut items = state.items().write().await;
    if items.contains_key(&id) {
        return respond.already_exists("Item", format!("an item with id '{id}' is already stored"));
    }

    let item = Item {
        id: id.clone(),
        name: name.to_string(),
        archived: false,
    };
    items.insert(id, item.clone());
    tracing::info!("{}/{}", &item.id, &item.name);

    respond.created(item)
}

/// Deletes an item (DELETE /demo/items/{id}).
///
/// - `200 OK` with `"item deleted successfully"`.
/// - `404 Not Found` if no item has that id.
#[tracing::instrument(skip(state, respond))]
pub async fn delete_item(
    State(state): State<AppState>,
    respond: Respond,
    Path(id): Path<String>,
) -> Response {
    // ---
    match state.items().write().await.remove(&id) {
        Some(_) => respond.deleted("item"),
        None => respond.not_found("Item not found"),
    }
}

/// Marks an item archived (POST /demo/items/{id}/archive).
///
/// - `204 No Content` on success.
/// - `404 Not Found` if no item has that id.
#[tracing::instrument(skip(state, respond))]
pub async fn archive_item(
    State(state): State<AppState>,
    respond: Respond,
    Path(id): Path<String>,
) -> Response {
    // ---
    match state.items().write().await.get_mut(&id) {
        Some(item) => {
            item.archived = true;
            respond.no_content()
        }
        None => respond.not_found("Item not found"),
    }
}

/// A resource nobody may read (GET /demo/private).
///
/// - `401 Unauthorized` without an `Authorization: Bearer <token>` header.
/// - `403 Forbidden` for any bearer token.
pub async fn private_resource(respond: Respond, headers: HeaderMap) -> Response {
    // ---
    let has_bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .is_some_and(|token| !token.trim().is_empty());

    if has_bearer {
        respond.forbidden("You do not have access to this resource")
    } else {
        respond.unauthorized("Missing or invalid bearer token")
    }
}

/// Always fails (GET /demo/fail). Shows how 500 details follow the
/// configured details policy.
pub async fn fail(respond: Respond) -> Response {
    // ---
    let err = anyhow::anyhow!("demo backend unavailable");
    respond.internal_error("An unexpected error occurred", err)
}
