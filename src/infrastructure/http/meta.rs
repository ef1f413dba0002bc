use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

/// Header carrying the correlation id in and out of the service.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request-scoped meta value echoed into every envelope.
///
/// Stored in the request extensions. [`attach_meta`] inserts one per request;
/// any middleware may insert its own instead.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestMeta(pub Value);

impl RequestMeta {
    // ---
    /// Default meta: the request id plus the server timestamp (RFC 3339, UTC).
    pub fn for_request(request_id: &str) -> Self {
        // ---
        RequestMeta(json!({
            "requestId": request_id,
            "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }))
    }

    /// The `requestId` string inside the meta, if any.
    pub fn request_id(&self) -> Option<&str> {
        self.0.get("requestId").and_then(Value::as_str)
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

/// Middleware that attaches [`RequestMeta`] and echoes `x-request-id`.
///
/// An incoming non-empty `x-request-id` is reused; otherwise a UUIDv4 is minted.
/// Meta already present in the extensions is left untouched, and the echoed
/// header is its `requestId` (no header if it has none).
pub async fn attach_meta(mut request: Request, next: Next) -> Response {
    // ---
    let existing = request
        .extensions()
        .get::<RequestMeta>()
        .map(|meta| meta.request_id().map(str::to_owned));

    let request_id = match existing {
        Some(request_id) => request_id,
        None => {
            let request_id = request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .filter(|v| !v.trim().is_empty())
                .map(str::to_owned)
                .unwrap_or_else(|| Uuid::new_v4().to_string());

            request
                .extensions_mut()
                .insert(RequestMeta::for_request(&request_id));
            Some(request_id)
        }
    };

    tracing::debug!(request_id = ?request_id, path = %request.uri().path(), "Attached request meta");

    let mut response = next.run(request).await;

    if let Some(request_id) = request_id {
        match HeaderValue::from_str(&request_id) {
            Ok(value) => {
                response.headers_mut().insert(REQUEST_ID_HEADER, value);
            }
            Err(err) => tracing::warn!("Cannot echo request id header: {:?}", err),
        }
    }

    response
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn default_meta_has_id_and_timestamp() {
        // ---
        let meta = RequestMeta::for_request("abc-123").into_inner();

        assert_eq!(meta["requestId"], "abc-123");
        let ts = meta["timestamp"].as_str().expect("timestamp is a string");
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok(), "bad timestamp {ts}");
        assert!(ts.ends_with('Z'));
    }

    #[test]
    fn request_id_is_read_from_meta() {
        // ---
        assert_eq!(RequestMeta::for_request("r-7").request_id(), Some("r-7"));
        assert_eq!(RequestMeta(json!({ "tenant": "acme" })).request_id(), None);
        assert_eq!(RequestMeta(json!("plain")).request_id(), None);
    }
}
