use crate::infrastructure::http::Respond;
use axum::response::Response;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// Responds with the health status of the server.
///
/// # Responses
/// - `200 OK` with `{ "success": true, "data": { "status": "ok" }, "meta": ... }`
pub async fn health_check(respond: Respond) -> Response {
    respond.success(HealthResponse { status: "ok" })
}
