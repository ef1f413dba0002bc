use axum::response::IntoResponse;

pub async fn root_handler() -> impl IntoResponse {
    let version = env!("CARGO_PKG_VERSION");
    format!(
        r#"Welcome to the Envelope API 👋
Version: {version}

Every JSON endpoint answers with the same envelope:
  {{ "success": bool, "data" | "error": ..., "meta": {{ "requestId", "timestamp" }} }}

Available endpoints:
  - GET    /health                    - Success
  - GET    /metrics                   - Prometheus metrics (empty with noop backend)
  - GET    /demo/items?page=&size=    - Success with pagination (400 on zero page/size)
  - GET    /demo/items/{{id}}           - Success or 404 Not Found
  - POST   /demo/items                - 201 Created, 400 Bad Request, 409 Conflict
  - DELETE /demo/items/{{id}}           - "item deleted successfully" or 404
  - POST   /demo/items/{{id}}/archive   - 204 No Content or 404
  - GET    /demo/private              - 401 without a bearer token, 403 otherwise
  - GET    /demo/fail                 - 500 Internal Server Error
"#
    )
}
