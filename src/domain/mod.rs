mod builder;
mod envelope;
mod intent;
mod metrics;
mod pagination;
mod sink;

// Envelope model and the pure builder
pub use builder::{DetailsPolicy, EnvelopeBuilder, Reply};
pub use envelope::{Envelope, ErrorBody, ErrorStatus};
pub use intent::{Intent, ALREADY_EXISTS_SUFFIX, DELETED_SUFFIX};
pub use pagination::Pagination;

// Transport capability
pub use sink::ResponseSink;

// Publicly expose the Metrics abstraction
pub use metrics::{Metrics, MetricsPtr};
