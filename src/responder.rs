//! The response helper handlers call to answer a request.
//!
//! [`ResponseHelper`] exposes one method per intent. Each method reads the
//! request meta from the sink, builds the envelope, records metrics and writes
//! exactly once:
//!
//! ```ignore
//! helper.bad_request(&mut sink, "Invalid input", "The 'name' field is required.");
//! helper.deleted(&mut sink, "qualification");
//! ```

use crate::domain::{
    DetailsPolicy, EnvelopeBuilder, Intent, MetricsPtr, Reply, ResponseSink,
};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

/// Message written when a success payload cannot be converted to JSON.
const SERIALIZE_FAILURE_MESSAGE: &str = "Failed to serialize response payload";

/// Builds and writes envelopes.
///
/// Immutable after construction and cheap to clone; share one instance across
/// all handlers (Axum state, or any other DI container).
#[derive(Clone)]
pub struct ResponseHelper {
    // ---
    builder: EnvelopeBuilder,
    metrics: MetricsPtr,
}

impl ResponseHelper {
    // ---
    pub fn new(builder: EnvelopeBuilder, metrics: MetricsPtr) -> Self {
        Self { builder, metrics }
    }

    /// The pure builder, for callers that want a [`Reply`] without a sink.
    pub fn builder(&self) -> &EnvelopeBuilder {
        &self.builder
    }

    /// Builds a reply for `intent` with an explicit meta value.
    pub fn reply(&self, intent: Intent, meta: Option<Value>) -> Reply {
        self.builder.build(intent, meta)
    }

    /// Writes `intent` to `sink`. All intent methods funnel through here.
    pub fn send<S>(&self, sink: &mut S, intent: Intent)
    where
        S: ResponseSink + ?Sized,
    {
        // ---
        let name = intent.name();

        if let Intent::InternalError { message, details } = &intent {
            // Keep the server-side record even when the client copy is redacted
            let redacted = self.builder.policy() == DetailsPolicy::Redact;
            tracing::error!(
                error_message = %message,
                details = %details,
                redacted,
                "Responding with internal error"
            );
        }

        let Reply { status, envelope } = self.builder.build(intent, sink.meta());

        if status.is_client_error() {
            tracing::debug!(intent = name, status = status.as_u16(), "Responding with client error");
        } else if status.is_success() {
            tracing::debug!(intent = name, status = status.as_u16(), "Responding with success");
        }

        self.metrics.record_response(name, status.as_u16());
        sink.write_json(status, envelope);
    }

    /// 400 with `message` and `details`.
    pub fn bad_request<S: ResponseSink + ?Sized>(
        &self,
        sink: &mut S,
        message: impl Into<String>,
        details: impl Into<String>,
    ) {
        self.send(sink, Intent::bad_request(message, details));
    }

    /// 401 with `message`.
    pub fn unauthorized<S: ResponseSink + ?Sized>(&self, sink: &mut S, message: impl Into<String>) {
        self.send(sink, Intent::unauthorized(message));
    }

    /// 403 with `message`.
    pub fn forbidden<S: ResponseSink + ?Sized>(&self, sink: &mut S, message: impl Into<String>) {
        self.send(sink, Intent::forbidden(message));
    }

    /// 404 with `message`.
    pub fn not_found<S: ResponseSink + ?Sized>(&self, sink: &mut S, message: impl Into<String>) {
        self.send(sink, Intent::not_found(message));
    }

    /// 409 with `message`; `err` becomes `details`.
    pub fn conflict<S: ResponseSink + ?Sized>(
        &self,
        sink: &mut S,
        message: impl Into<String>,
        err: impl Display,
    ) {
        self.send(sink, Intent::conflict(message, err));
    }

    /// 409 with `"<resource> already exists"`.
    pub fn already_exists<S: ResponseSink + ?Sized>(
        &self,
        sink: &mut S,
        resource: &str,
        err: impl Display,
    ) {
        self.send(sink, Intent::already_exists(resource, err));
    }

    /// 500 with `message`; `err` becomes `details` unless the policy redacts it.
    pub fn internal_error<S: ResponseSink + ?Sized>(
        &self,
        sink: &mut S,
        message: impl Into<String>,
        err: impl Display,
    ) {
        self.send(sink, Intent::internal_error(message, err));
    }

    /// 200 with `data`.
    pub fn success<S, T>(&self, sink: &mut S, data: T)
    where
        S: ResponseSink + ?Sized,
        T: Serialize,
    {
        match serde_json::to_value(data) {
            Ok(data) => self.send(sink, Intent::success(data)),
            Err(err) => self.internal_error(sink, SERIALIZE_FAILURE_MESSAGE, err),
        }
    }

    /// 200 with `data` and a `pagination` block.
    pub fn success_with_pagination<S, T, P>(&self, sink: &mut S, data: T, pagination: P)
    where
        S: ResponseSink + ?Sized,
        T: Serialize,
        P: Serialize,
    {
        let payload = serde_json::to_value(data)
            .and_then(|data| Ok((data, serde_json::to_value(pagination)?)));

        match payload {
            Ok((data, pagination)) => {
                self.send(sink, Intent::success_with_pagination(data, pagination))
            }
            Err(err) => self.internal_error(sink, SERIALIZE_FAILURE_MESSAGE, err),
        }
    }

    /// 201 with `data`.
    pub fn created<S, T>(&self, sink: &mut S, data: T)
    where
        S: ResponseSink + ?Sized,
        T: Serialize,
    {
        match serde_json::to_value(data) {
            Ok(data) => self.send(sink, Intent::created(data)),
            Err(err) => self.internal_error(sink, SERIALIZE_FAILURE_MESSAGE, err),
        }
    }

    /// 200 with `"<noun> deleted successfully"`.
    pub fn deleted<S: ResponseSink + ?Sized>(&self, sink: &mut S, noun: impl Into<String>) {
        self.send(sink, Intent::deleted(noun));
    }

    /// 204 with `data: null`.
    pub fn no_content<S: ResponseSink + ?Sized>(&self, sink: &mut S) {
        self.send(sink, Intent::no_content());
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::domain::{Envelope, Metrics};
    use axum::http::StatusCode;
    use serde::ser::Error as _;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    /// Sink that records every write.
    #[derive(Default)]
    struct RecordingSink {
        meta: Option<Value>,
        writes: Vec<(StatusCode, Envelope)>,
    }

    impl ResponseSink for RecordingSink {
        fn meta(&self) -> Option<Value> {
            self.meta.clone()
        }

        fn write_json(&mut self, status: StatusCode, envelope: Envelope) {
            self.writes.push((status, envelope));
        }
    }

    /// Metrics backend that remembers what was recorded.
    #[derive(Default)]
    struct CountingMetrics {
        seen: Mutex<Vec<(&'static str, u16)>>,
    }

    impl Metrics for CountingMetrics {
        fn render(&self) -> String {
            String::new()
        }

        fn record_response(&self, intent: &'static str, status: u16) {
            self.seen.lock().unwrap().push((intent, status));
        }
    }

    /// A payload whose serialization always fails.
    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("cannot encode"))
        }
    }

    fn helper(policy: DetailsPolicy) -> (ResponseHelper, Arc<CountingMetrics>) {
        // ---
        let metrics = Arc::new(CountingMetrics::default());
        let helper = ResponseHelper::new(EnvelopeBuilder::new(policy), metrics.clone());
        (helper, metrics)
    }

    fn body(sink: &RecordingSink) -> Value {
        serde_json::to_value(&sink.writes[0].1).unwrap()
    }

    #[test]
    fn each_call_writes_exactly_once() {
        // ---
        let (helper, _) = helper(DetailsPolicy::PassThrough);
        let calls: Vec<Box<dyn Fn(&mut RecordingSink) + '_>> = vec![
            Box::new(|s: &mut RecordingSink| helper.bad_request(s, "m", "d")),
            Box::new(|s: &mut RecordingSink| helper.unauthorized(s, "m")),
            Box::new(|s: &mut RecordingSink| helper.forbidden(s, "m")),
            Box::new(|s: &mut RecordingSink| helper.not_found(s, "m")),
            Box::new(|s: &mut RecordingSink| helper.conflict(s, "m", "e")),
            Box::new(|s: &mut RecordingSink| helper.already_exists(s, "User", "e")),
            Box::new(|s: &mut RecordingSink| helper.internal_error(s, "m", "e")),
            Box::new(|s: &mut RecordingSink| helper.success(s, json!({ "a": 1 }))),
            Box::new(|s: &mut RecordingSink| helper.success_with_pagination(s, json!([]), json!({}))),
            Box::new(|s: &mut RecordingSink| helper.created(s, json!({ "a": 1 }))),
            Box::new(|s: &mut RecordingSink| helper.deleted(s, "thing")),
            Box::new(|s: &mut RecordingSink| helper.no_content(s)),
        ];

        for call in calls {
            let mut sink = RecordingSink::default();
            call(&mut sink);
            assert_eq!(sink.writes.len(), 1);
        }
    }

    #[test]
    fn meta_is_read_from_the_sink() {
        // ---
        let (helper, _) = helper(DetailsPolicy::PassThrough);
        let meta = json!({ "requestId": "req-42" });

        let mut sink = RecordingSink {
            meta: Some(meta.clone()),
            ..Default::default()
        };
        helper.success(&mut sink, json!([1, 2, 3]));
        assert_eq!(body(&sink)["meta"], meta);

        let mut sink = RecordingSink::default();
        helper.not_found(&mut sink, "missing");
        assert!(body(&sink).get("meta").is_none());
    }

    #[test]
    fn deleted_writes_message_with_suffix() {
        // ---
        let (helper, _) = helper(DetailsPolicy::PassThrough);
        let mut sink = RecordingSink::default();

        helper.deleted(&mut sink, "qualification");

        assert_eq!(sink.writes[0].0, StatusCode::OK);
        assert_eq!(body(&sink)["message"], json!("qualification deleted successfully"));
    }

    #[test]
    fn serialization_failure_becomes_internal_error() {
        // ---
        let (helper, metrics) = helper(DetailsPolicy::PassThrough);
        let mut sink = RecordingSink::default();

        helper.created(&mut sink, Unserializable);

        assert_eq!(sink.writes.len(), 1);
        assert_eq!(sink.writes[0].0, StatusCode::INTERNAL_SERVER_ERROR);
        let body = body(&sink);
        assert_eq!(body["error"]["message"], json!(SERIALIZE_FAILURE_MESSAGE));
        assert_eq!(body["error"]["details"], json!("cannot encode"));
        assert_eq!(
            *metrics.seen.lock().unwrap(),
            vec![("internal_error", 500)]
        );
    }

    #[test]
    fn redact_policy_hides_internal_details() {
        // ---
        let (helper, _) = helper(DetailsPolicy::Redact);
        let mut sink = RecordingSink::default();

        helper.internal_error(&mut sink, "Database unavailable", "dsn=postgres://admin:secret@db");

        let body = body(&sink);
        assert_eq!(body["data"], Value::Null);
        assert!(body["error"].get("details").is_none());
    }

    #[test]
    fn metrics_record_intent_and_status() {
        // ---
        let (helper, metrics) = helper(DetailsPolicy::PassThrough);
        let mut sink = RecordingSink::default();

        helper.already_exists(&mut sink, "User", "dup");
        helper.created(&mut sink, json!({}));

        assert_eq!(
            *metrics.seen.lock().unwrap(),
            vec![("conflict", 409), ("created", 201)]
        );
    }
}
