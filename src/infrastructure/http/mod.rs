//! Axum binding for the response helper.
//!
//! - [`attach_meta`] seeds [`RequestMeta`] for every request.
//! - [`AxumSink`] is the [`ResponseSink`](crate::domain::ResponseSink) backed by an Axum `Response`.
//! - [`Respond`] is the extractor handlers use to answer with an envelope.

mod meta;
mod respond;
mod sink;

pub use meta::{attach_meta, RequestMeta, REQUEST_ID_HEADER};
pub use respond::Respond;
pub use sink::AxumSink;
