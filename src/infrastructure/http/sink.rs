use super::meta::RequestMeta;
use crate::domain::{Envelope, Reply, ResponseSink};
use axum::{
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

/// [`ResponseSink`] that turns the single write into an Axum [`Response`].
#[derive(Debug, Default)]
pub struct AxumSink {
    // ---
    meta: Option<Value>,
    response: Option<Response>,
}

impl AxumSink {
    // ---
    pub fn new(meta: Option<Value>) -> Self {
        Self {
            meta,
            response: None,
        }
    }

    /// Reads [`RequestMeta`] from the request extensions.
    pub fn from_parts(parts: &Parts) -> Self {
        // ---
        let meta = parts
            .extensions
            .get::<RequestMeta>()
            .map(|meta| meta.0.clone());
        Self::new(meta)
    }

    pub fn is_written(&self) -> bool {
        self.response.is_some()
    }
}

impl ResponseSink for AxumSink {
    // ---
    fn meta(&self) -> Option<Value> {
        self.meta.clone()
    }

    fn write_json(&mut self, status: StatusCode, envelope: Envelope) {
        // ---
        if self.response.is_some() {
            tracing::warn!(status = status.as_u16(), "Response already written; ignoring second write");
            return;
        }
        self.response = Some((status, Json(envelope)).into_response());
    }
}

impl IntoResponse for AxumSink {
    fn into_response(self) -> Response {
        // ---
        self.response.unwrap_or_else(|| {
            tracing::error!("Handler finished without writing a response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (self.status, Json(self.envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::domain::{DetailsPolicy, EnvelopeBuilder, Intent};
    use axum::body::to_bytes;
    use serde_json::json;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn first_write_wins() {
        // ---
        let builder = EnvelopeBuilder::new(DetailsPolicy::PassThrough);
        let mut sink = AxumSink::new(None);

        let first = builder.build(Intent::not_found("first"), None);
        let second = builder.build(Intent::success(json!(1)), None);
        sink.write_json(first.status, first.envelope);
        sink.write_json(second.status, second.envelope);

        let response = sink.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"]["message"], "first");
    }

    #[tokio::test]
    async fn unwritten_sink_is_a_server_error() {
        // ---
        let sink = AxumSink::new(None);
        assert!(!sink.is_written());
        assert_eq!(sink.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn reply_renders_as_json() {
        // ---
        let reply = EnvelopeBuilder::new(DetailsPolicy::PassThrough)
            .build(Intent::created(json!({ "id": 7 })), Some(json!("m")));
        let response = reply.into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
        assert_eq!(
            body_json(response).await,
            json!({ "success": true, "data": { "id": 7 }, "meta": "m" })
        );
    }
}
